//! Embedded static resources.
//!
//! - `template` - Template types for typed variable injection
//! - `css` - The site stylesheet
//!
//! # Usage
//!
//! ```ignore
//! use embed::css::{STYLE_CSS, StyleVars};
//!
//! let css = STYLE_CSS.render(&StyleVars { accent: "goldenrod" });
//! ```

mod template;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub use template::{Template, TemplateVars};

use crate::config::SiteConfig;

pub mod css {
    use super::{Template, TemplateVars};
    use crate::config::SiteConfig;

    /// Output path of the stylesheet, relative to the output directory.
    pub const STYLE_PATH: &str = "style.css";

    /// Variables for style.css.
    pub struct StyleVars<'a> {
        pub accent: &'a str,
    }

    impl<'a> StyleVars<'a> {
        pub fn from_config(config: &'a SiteConfig) -> Self {
            Self {
                accent: &config.theme.accent,
            }
        }
    }

    impl TemplateVars for StyleVars<'_> {
        fn apply(&self, content: &str) -> String {
            content.replace("__ACCENT__", self.accent)
        }
    }

    pub const STYLE_CSS: Template<StyleVars<'static>> = Template::new(include_str!("css/style.css"));
}

/// Write embedded assets into `output_dir`.
pub fn write_embedded_assets(config: &SiteConfig, output_dir: &Path) -> Result<()> {
    let css = css::STYLE_CSS.render(&css::StyleVars::from_config(config));
    let path = output_dir.join(css::STYLE_PATH);
    fs::write(&path, css).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_style_uses_accent() {
        let config = test_parse_config("[theme]\naccent = \"teal\"");
        let css = css::STYLE_CSS.render(&css::StyleVars::from_config(&config));
        assert!(css.contains("--accent: teal;"));
        assert!(!css.contains("__ACCENT__"));
    }

    #[test]
    fn test_write_embedded_assets() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = test_parse_config("");
        write_embedded_assets(&config, dir.path()).unwrap();
        let css = fs::read_to_string(dir.path().join("style.css")).unwrap();
        assert!(css.contains("goldenrod"));
    }
}
