//! Metadata resolver: page record + site defaults -> head tag set.
//!
//! The resolver is a pure function. It performs no I/O and holds no state,
//! so identical inputs always produce identical output.
//!
//! # Tag order
//!
//! ```text
//! description
//! og:title, og:description, og:type
//! twitter:creator, twitter:title, twitter:description
//! og:image, og:image:width, og:image:height, twitter:card   (hero image)
//! twitter:card, twitter:image                               (no hero image)
//! <page overrides not matching a computed key>
//! ```
//!
//! # Overrides
//!
//! Page-level overrides are merged by key: a matching computed tag has its
//! content replaced in place, anything else is appended in the given order.
//! Within the override list the last entry for a key wins. Overrides with
//! empty content are ignored, as are the image and card keys, which always
//! follow the hero image. The result never holds two tags with one key.

use serde::Serialize;

use super::{MetaError, MetaTag, SiteDefaults};

const OG_TYPE: &str = "website";
const CARD_SUMMARY: &str = "summary";
const CARD_LARGE_IMAGE: &str = "summary_large_image";

/// A processed image variant: site-root path and pixel dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ImageDescriptor {
    source_path: String,
    width: u32,
    height: u32,
}

impl ImageDescriptor {
    /// Both dimensions must be non-zero.
    pub fn new(source_path: impl Into<String>, width: u32, height: u32) -> Result<Self, MetaError> {
        let source_path = source_path.into();
        if width == 0 || height == 0 {
            return Err(MetaError::Image {
                path: source_path,
                reason: format!("dimensions must be positive, got {width}x{height}"),
            });
        }
        Ok(Self {
            source_path,
            width,
            height,
        })
    }

    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }
}

/// Per-page input to the resolver.
#[derive(Debug, Clone, Default)]
pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
    /// Site-relative path starting with `/`.
    pub path: Option<String>,
    pub hero_image: Option<ImageDescriptor>,
    pub language: Option<String>,
    pub meta: Vec<MetaTag>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

#[cfg(test)]
impl PageMeta {
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_hero_image(mut self, image: ImageDescriptor) -> Self {
        self.hero_image = Some(image);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_meta(mut self, meta: Vec<MetaTag>) -> Self {
        self.meta = meta;
        self
    }
}

/// Resolver output handed to the head renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedMetaTagSet {
    /// Templated display title: `<page title> | <site title>`.
    pub title: String,
    pub language: String,
    pub canonical_url: Option<String>,
    pub tags: Vec<MetaTag>,
}

#[cfg(test)]
impl ResolvedMetaTagSet {
    /// Content of the tag with `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.key == key)
            .map(|tag| tag.content.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.tags.iter().any(|tag| tag.key == key)
    }
}

/// Resolve the head metadata for one page.
///
/// Fails with [`MetaError::Validation`] when the title is empty or the path
/// is not site-relative; nothing is returned in that case.
pub fn resolve(page: &PageMeta, site: &SiteDefaults<'_>) -> Result<ResolvedMetaTagSet, MetaError> {
    let title = page.title.trim();
    if title.is_empty() {
        return Err(MetaError::Validation("title must not be empty".into()));
    }

    let canonical_url = match &page.path {
        Some(path) if !path.starts_with('/') => {
            return Err(MetaError::Validation(format!(
                "path `{path}` must start with `/`"
            )));
        }
        Some(path) => Some(format!("{}{}", site.url, path)),
        None => None,
    };

    let description = page
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(site.description);

    let mut tags = vec![
        MetaTag::name("description", description),
        MetaTag::property("og:title", title),
        MetaTag::property("og:description", description),
        MetaTag::property("og:type", OG_TYPE),
        MetaTag::name("twitter:creator", site.author),
        MetaTag::name("twitter:title", title),
        MetaTag::name("twitter:description", description),
    ];

    match &page.hero_image {
        Some(image) => {
            tags.push(MetaTag::property(
                "og:image",
                site.absolute_url(image.source_path()),
            ));
            tags.push(MetaTag::property("og:image:width", image.width().to_string()));
            tags.push(MetaTag::property(
                "og:image:height",
                image.height().to_string(),
            ));
            tags.push(MetaTag::name("twitter:card", CARD_LARGE_IMAGE));
        }
        None => {
            tags.push(MetaTag::name("twitter:card", CARD_SUMMARY));
            if let Some(fallback) = site.fallback_image {
                tags.push(MetaTag::name("twitter:image", site.absolute_url(fallback)));
            }
        }
    }

    merge_overrides(&mut tags, &page.meta);

    Ok(ResolvedMetaTagSet {
        title: format!("{title} | {}", site.title),
        language: page
            .language
            .clone()
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| site.language.to_string()),
        canonical_url,
        tags,
    })
}

/// Keys derived from the hero image; a page cannot override them.
const RESERVED_KEYS: [&str; 5] = [
    "twitter:card",
    "twitter:image",
    "og:image",
    "og:image:width",
    "og:image:height",
];

fn merge_overrides(tags: &mut Vec<MetaTag>, overrides: &[MetaTag]) {
    let allowed = |t: &&MetaTag| {
        !t.content.trim().is_empty() && !RESERVED_KEYS.contains(&t.key.as_str())
    };
    for tag in overrides.iter().filter(allowed) {
        match tags.iter_mut().find(|existing| existing.key == tag.key) {
            Some(existing) => existing.content.clone_from(&tag.content),
            None => tags.push(tag.clone()),
        }
    }
}
