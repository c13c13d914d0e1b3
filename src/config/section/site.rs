//! `[site]` section configuration.
//!
//! Site-wide metadata consumed by the metadata resolver, the layout shell
//! and the feed generators.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Suspend Fun: Tech Learnings for Future Self"
//! description = "Solving problems in the cloud."
//! url = "https://suspendfun.com"
//! fallback_image = "/images/profile.png"
//!
//! [site.header]
//! title = "Suspend Fun"
//! extra = "Tech Learnings for Future Self"
//!
//! [site.author]
//! name = "Raj Saxena"
//! summary = "who lives and works in Berlin building useful things."
//!
//! [site.social]
//! twitter = "therajsaxena"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title, used as the suffix of every page title.
    pub title: String,

    /// Default description for pages without one.
    pub description: String,

    /// Absolute base URL (e.g., "https://example.com").
    pub url: Option<String>,

    /// Language code for `<html lang>` (e.g., "en").
    pub language: String,

    /// Site-root image used for `twitter:image` on pages without a hero image.
    /// Either a path starting with `/` or an absolute URL.
    pub fallback_image: Option<String>,

    /// Short title shown in the header and navigation.
    pub header: HeaderTitleConfig,

    pub author: AuthorConfig,

    pub social: SocialConfig,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            url: None,
            language: "en".into(),
            fallback_image: None,
            header: HeaderTitleConfig::default(),
            author: AuthorConfig::default(),
            social: SocialConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderTitleConfig {
    /// Header title; falls back to `site.title` when empty.
    pub title: String,
    /// Tagline shown under the bio on the index page.
    pub extra: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    pub name: String,
    /// Bio sentence following "Hi, I am <name> and".
    pub summary: String,
    /// Used in feed author fields.
    pub email: String,
}

/// Social handles rendered as links in the bio.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub twitter: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

impl SiteSectionConfig {
    const TITLE: FieldPath = FieldPath::new("site.title");
    const URL: FieldPath = FieldPath::new("site.url");
    const FALLBACK_IMAGE: FieldPath = FieldPath::new("site.fallback_image");

    /// Base URL without trailing slash, empty when unset.
    pub fn base_url(&self) -> &str {
        self.url.as_deref().unwrap_or_default().trim_end_matches('/')
    }

    /// Header title, falling back to the site title.
    pub fn header_title(&self) -> &str {
        if self.header.title.is_empty() {
            &self.title
        } else {
            &self.header.title
        }
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `title` is not empty
    /// - `url` is set and is an http(s) URL with a host
    /// - `fallback_image` is site-root relative or absolute
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::TITLE,
                "site title must not be empty",
                "set site.title, e.g.: \"My Blog\"",
            );
        }

        match &self.url {
            None => diag.error_with_hint(
                Self::URL,
                "site url is required for canonical links and social images",
                "set site.url, e.g.: \"https://example.com\"",
            ),
            Some(url_str) => match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::URL,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::URL,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => diag.error_with_hint(
                    Self::URL,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                ),
            },
        }

        if let Some(image) = &self.fallback_image
            && !image.starts_with('/')
            && url::Url::parse(image).is_err()
        {
            diag.error_with_hint(
                Self::FALLBACK_IMAGE,
                format!("'{image}' is neither site-root relative nor an absolute URL"),
                "use a path like \"/images/profile.png\"",
            );
        }
    }
}
