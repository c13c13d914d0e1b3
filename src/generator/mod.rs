//! Content generators for static site output.
//!
//! Generates auxiliary files from the collected posts:
//!
//! - **Feed**: RSS/Atom feeds for blog readers (`rss.xml`, `atom.xml`)
//! - **Sitemap**: Search engine indexing (`sitemap.xml`)
//! - **Manifest**: Web app manifest (`manifest.webmanifest`)
//!
//! Feed and sitemap take the already-loaded `PostList`, avoiding redundant
//! filesystem scans.

pub mod feed;
pub mod manifest;
pub mod sitemap;

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::{config::SiteConfig, log};

/// Minify XML content if enabled.
pub fn minify_xml(content: &str, enabled: bool) -> Cow<'_, str> {
    if enabled {
        let minified = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("");
        Cow::Owned(minified)
    } else {
        Cow::Borrowed(content)
    }
}

/// Write generated XML below the output directory, minified when
/// `build.minify` is set.
pub fn write_xml(
    config: &SiteConfig,
    relative: &Path,
    xml: &str,
    module: &str,
) -> Result<PathBuf> {
    write_output(config, relative, &minify_xml(xml, config.build.minify), module)
}

/// Write a generated file below the output directory.
///
/// `relative` is resolved against `build.output`; `module` is the log prefix.
pub fn write_output(
    config: &SiteConfig,
    relative: &Path,
    content: &str,
    module: &str,
) -> Result<PathBuf> {
    let path = config.build.output.join(relative);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&path, content.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;

    log!(module; "{}", relative.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_minify_xml_basic() {
        let xml = r#"<?xml version="1.0"?>
<root>
  <item>Hello</item>
</root>"#;
        assert_eq!(
            minify_xml(xml, true),
            r#"<?xml version="1.0"?><root><item>Hello</item></root>"#
        );
    }

    #[test]
    fn test_minify_xml_removes_empty_lines() {
        assert_eq!(minify_xml("<root>\n\n  <item/>\n\n</root>", true), "<root><item/></root>");
    }

    #[test]
    fn test_minify_xml_disabled() {
        let xml = "<root>\n  <item/>\n</root>";
        assert_eq!(minify_xml(xml, false), xml);
    }

    #[test]
    fn test_write_xml_creates_parents() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut config = test_parse_config("");
        config.build.output = dir.path().to_path_buf();
        config.build.minify = true;

        let path = write_xml(&config, Path::new("feeds/rss.xml"), "<a>\n  <b/>\n</a>", "rss").unwrap();
        assert_eq!(path, dir.path().join("feeds/rss.xml"));
        assert_eq!(fs::read_to_string(path).unwrap(), "<a><b/></a>");
    }
}
