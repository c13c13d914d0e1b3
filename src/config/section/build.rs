//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content/blog"    # Markdown posts (relative to site root)
//! output = "public"           # Generated site (relative to site root)
//! minify = false              # Minify feed and sitemap XML
//!
//! [build.feed]
//! enable = true
//! path = "rss.xml"
//! format = "rss"              # rss | atom
//!
//! [build.sitemap]
//! enable = true
//!
//! [build.manifest]
//! enable = true
//! short_name = "Suspend Fun"
//! icon = "content/assets/favicon.png"   # relative to site root
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Markdown content directory.
    pub content: PathBuf,

    /// Build output directory.
    pub output: PathBuf,

    /// Minify generated XML.
    pub minify: bool,

    /// Clean output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,

    /// Skip draft posts (CLI only).
    #[serde(skip)]
    pub skip_drafts: bool,

    pub feed: FeedConfig,

    pub sitemap: SitemapConfig,

    pub manifest: ManifestConfig,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "content/blog".into(),
            output: "public".into(),
            minify: false,
            clean: false,
            skip_drafts: false,
            feed: FeedConfig::default(),
            sitemap: SitemapConfig::default(),
            manifest: ManifestConfig::default(),
        }
    }
}

/// Feed output format
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    /// RSS 2.0 format (default).
    #[default]
    Rss,
    /// Atom 1.0 format.
    Atom,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub enable: bool,
    /// Output path, relative to the output directory.
    pub path: PathBuf,
    pub format: FeedFormat,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "rss.xml".into(),
            format: FeedFormat::Rss,
        }
    }
}

impl FeedConfig {
    /// MIME type for the `<link rel="alternate">` head tag.
    pub const fn mime_type(&self) -> &'static str {
        match self.format {
            FeedFormat::Rss => "application/rss+xml",
            FeedFormat::Atom => "application/atom+xml",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    pub enable: bool,
    /// Output path, relative to the output directory.
    pub path: PathBuf,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sitemap.xml".into(),
        }
    }
}

/// Web app manifest (`manifest.webmanifest`).
///
/// `name` and `short_name` fall back to the site title and header title.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    pub enable: bool,
    /// Output path, relative to the output directory.
    pub path: PathBuf,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub start_url: String,
    pub background_color: String,
    pub theme_color: String,
    /// `fullscreen`, `standalone`, `minimal-ui` or `browser`.
    pub display: String,
    /// Icon image, relative to the site root.
    pub icon: Option<PathBuf>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "manifest.webmanifest".into(),
            name: None,
            short_name: None,
            start_url: "/".into(),
            background_color: "#ffffff".into(),
            theme_color: "#663399".into(),
            display: "minimal-ui".into(),
            icon: None,
        }
    }
}

const DISPLAY_MODES: [&str; 4] = ["fullscreen", "standalone", "minimal-ui", "browser"];

impl BuildSectionConfig {
    const CONTENT: FieldPath = FieldPath::new("build.content");
    const FEED_PATH: FieldPath = FieldPath::new("build.feed.path");
    const SITEMAP_PATH: FieldPath = FieldPath::new("build.sitemap.path");
    const MANIFEST_PATH: FieldPath = FieldPath::new("build.manifest.path");
    const MANIFEST_DISPLAY: FieldPath = FieldPath::new("build.manifest.display");
    const MANIFEST_ICON: FieldPath = FieldPath::new("build.manifest.icon");

    /// Validate build paths. Must run before paths are made absolute.
    pub fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        if self.content.is_absolute() {
            diag.error_with_hint(
                Self::CONTENT,
                "content directory must be relative to the site root",
                "use a path like \"content/blog\"",
            );
        }
        for (field, path) in [
            (Self::FEED_PATH, &self.feed.path),
            (Self::SITEMAP_PATH, &self.sitemap.path),
            (Self::MANIFEST_PATH, &self.manifest.path),
        ] {
            if path.is_absolute() || path.as_os_str().is_empty() {
                diag.error(field, "must be a non-empty path relative to the output directory");
            }
        }
    }

    /// Validate build settings after normalization.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.content.is_dir() {
            diag.error_with_hint(
                Self::CONTENT,
                format!("content directory `{}` not found", self.content.display()),
                "create it or point build.content at your posts",
            );
        }

        let manifest = &self.manifest;
        if !manifest.enable {
            return;
        }
        if !DISPLAY_MODES.contains(&manifest.display.as_str()) {
            diag.error_with_hint(
                Self::MANIFEST_DISPLAY,
                format!("unknown display mode `{}`", manifest.display),
                "use one of fullscreen, standalone, minimal-ui, browser",
            );
        }
        if let Some(icon) = &manifest.icon
            && !icon.is_file()
        {
            diag.error(
                Self::MANIFEST_ICON,
                format!("icon `{}` not found", icon.display()),
            );
        }
    }
}
