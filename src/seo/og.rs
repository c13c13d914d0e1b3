//! Open Graph and Twitter Card tag model.

use serde::Serialize;

use crate::config::SiteConfig;

/// Which attribute carries the tag key.
///
/// Open Graph uses `<meta property=...>`, everything else `<meta name=...>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagAttr {
    Name,
    Property,
}

impl TagAttr {
    /// Pick the attribute conventionally used for `key`.
    pub fn for_key(key: &str) -> Self {
        if key.starts_with("og:") || key.starts_with("article:") || key.starts_with("fb:") {
            Self::Property
        } else {
            Self::Name
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

/// One `<meta>` tag: key, the attribute holding it, and content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MetaTag {
    pub attr: TagAttr,
    pub key: String,
    pub content: String,
}

impl MetaTag {
    pub fn name(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            attr: TagAttr::Name,
            key: key.into(),
            content: content.into(),
        }
    }

    pub fn property(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            attr: TagAttr::Property,
            key: key.into(),
            content: content.into(),
        }
    }

    /// Build a tag, inferring the attribute from the key prefix.
    pub fn infer(key: impl Into<String>, content: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            attr: TagAttr::for_key(&key),
            key,
            content: content.into(),
        }
    }
}

/// Site-level defaults the resolver falls back to.
#[derive(Debug, Clone, Copy)]
pub struct SiteDefaults<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub author: &'a str,
    /// Base URL without trailing slash.
    pub url: &'a str,
    pub language: &'a str,
    /// Site-root path or absolute URL of the fallback social image.
    pub fallback_image: Option<&'a str>,
}

impl<'a> SiteDefaults<'a> {
    pub fn from_config(config: &'a SiteConfig) -> Self {
        let site = &config.site;
        Self {
            title: &site.title,
            description: &site.description,
            author: &site.author.name,
            url: site.base_url(),
            language: &site.language,
            fallback_image: site.fallback_image.as_deref(),
        }
    }

    /// Join a site-root path onto the base URL; absolute URLs pass through.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.url, path)
        } else {
            format!("{}/{}", self.url, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_attr_for_key() {
        assert_eq!(TagAttr::for_key("og:title"), TagAttr::Property);
        assert_eq!(TagAttr::for_key("article:author"), TagAttr::Property);
        assert_eq!(TagAttr::for_key("twitter:card"), TagAttr::Name);
        assert_eq!(TagAttr::for_key("description"), TagAttr::Name);
    }

    #[test]
    fn test_defaults_from_config() {
        let config = test_parse_config(
            "fallback_image = \"/me.png\"\n[site.author]\nname = \"Raj\"",
        );
        let defaults = SiteDefaults::from_config(&config);
        assert_eq!(defaults.title, "Test");
        assert_eq!(defaults.author, "Raj");
        assert_eq!(defaults.url, "https://example.com");
        assert_eq!(defaults.fallback_image, Some("/me.png"));
    }

    #[test]
    fn test_absolute_url() {
        let config = test_parse_config("");
        let defaults = SiteDefaults::from_config(&config);
        assert_eq!(defaults.absolute_url("/a.png"), "https://example.com/a.png");
        assert_eq!(defaults.absolute_url("a.png"), "https://example.com/a.png");
        assert_eq!(
            defaults.absolute_url("https://cdn.example.org/a.png"),
            "https://cdn.example.org/a.png"
        );
    }
}
