//! Web app manifest generation.
//!
//! ```json
//! {
//!   "name": "Technical Blog",
//!   "short_name": "Suspend Fun",
//!   "start_url": "/",
//!   "background_color": "#ffffff",
//!   "theme_color": "#663399",
//!   "display": "minimal-ui",
//!   "icons": [{ "src": "/static/<hash>/favicon.png", "sizes": "512x512", "type": "image/png" }]
//! }
//! ```
//!
//! The icon is published like any other content image, so it shares the
//! `/static/<hash>/` scheme.

use crate::{config::SiteConfig, generator::write_output, image::StaticAsset};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

/// Build the manifest if enabled. Returns the written path.
pub fn build_manifest(config: &SiteConfig) -> Result<Option<PathBuf>> {
    if !config.build.manifest.enable {
        return Ok(None);
    }

    let manifest = WebManifest::build(config)?;
    let json = if config.build.minify {
        serde_json::to_string(&manifest)
    } else {
        serde_json::to_string_pretty(&manifest)
    }
    .context("failed to serialize manifest")?;

    write_output(config, &config.build.manifest.path, &json, "manifest").map(Some)
}

#[derive(Debug, Serialize)]
struct WebManifest<'a> {
    name: &'a str,
    short_name: &'a str,
    start_url: &'a str,
    background_color: &'a str,
    theme_color: &'a str,
    display: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    icons: Vec<ManifestIcon>,
}

#[derive(Debug, Serialize)]
struct ManifestIcon {
    src: String,
    sizes: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    mime_type: Option<&'static str>,
}

impl<'a> WebManifest<'a> {
    fn build(config: &'a SiteConfig) -> Result<Self> {
        let manifest = &config.build.manifest;
        let icons = match &manifest.icon {
            Some(icon) => vec![publish_icon(config, StaticAsset::from_source(icon)?)?],
            None => Vec::new(),
        };

        Ok(Self {
            name: manifest.name.as_deref().unwrap_or(&config.site.title),
            short_name: manifest
                .short_name
                .as_deref()
                .unwrap_or_else(|| config.site.header_title()),
            start_url: &manifest.start_url,
            background_color: &manifest.background_color,
            theme_color: &manifest.theme_color,
            display: &manifest.display,
            icons,
        })
    }
}

fn publish_icon(config: &SiteConfig, asset: StaticAsset) -> Result<ManifestIcon> {
    let image = asset.describe()?;
    asset.publish(&config.build.output)?;

    Ok(ManifestIcon {
        sizes: format!("{}x{}", image.width(), image.height()),
        mime_type: ::image::ImageFormat::from_path(&asset.source)
            .ok()
            .map(|format| format.to_mime_type()),
        src: asset.url_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::image::write_test_png;
    use serde_json::Value;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn read_manifest(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_manifest_defaults_from_site() {
        let dir = TempDir::new().unwrap();
        let mut config = test_parse_config("[site.header]\ntitle = \"Suspend Fun\"");
        config.build.output = dir.path().to_path_buf();

        let path = build_manifest(&config).unwrap().unwrap();
        assert_eq!(path, dir.path().join("manifest.webmanifest"));

        let json = read_manifest(&path);
        assert_eq!(json["name"], "Test");
        assert_eq!(json["short_name"], "Suspend Fun");
        assert_eq!(json["start_url"], "/");
        assert_eq!(json["theme_color"], "#663399");
        assert_eq!(json["display"], "minimal-ui");
        assert!(json.get("icons").is_none());
    }

    #[test]
    fn test_manifest_publishes_icon() {
        let dir = TempDir::new().unwrap();
        let icon = dir.path().join("favicon.png");
        write_test_png(&icon, 48, 48);

        let mut config = test_parse_config(
            "[build.manifest]\nname = \"Technical Blog\"\nshort_name = \"Suspend\"",
        );
        config.build.output = dir.path().join("public");
        config.build.manifest.icon = Some(icon);

        let json = read_manifest(&build_manifest(&config).unwrap().unwrap());
        assert_eq!(json["name"], "Technical Blog");
        assert_eq!(json["short_name"], "Suspend");

        let entry = &json["icons"][0];
        assert_eq!(entry["sizes"], "48x48");
        assert_eq!(entry["type"], "image/png");
        let src = entry["src"].as_str().unwrap();
        assert!(src.starts_with("/static/") && src.ends_with("/favicon.png"));
        assert!(config.build.output.join(&src[1..]).is_file());
    }

    #[test]
    fn test_manifest_disabled() {
        let mut config = test_parse_config("");
        config.build.manifest.enable = false;
        assert!(build_manifest(&config).unwrap().is_none());
    }

    #[test]
    fn test_manifest_minified() {
        let dir = TempDir::new().unwrap();
        let mut config = test_parse_config("");
        config.build.output = dir.path().to_path_buf();
        config.build.minify = true;

        let path = build_manifest(&config).unwrap().unwrap();
        let text = fs::read_to_string(path).unwrap();
        assert!(!text.contains('\n'));
    }
}
