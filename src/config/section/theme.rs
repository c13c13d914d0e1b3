//! `[theme]` section configuration.
//!
//! ```toml
//! [theme]
//! preferences = "~/.config/suspend/theme.json"
//! accent = "goldenrod"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSectionConfig {
    /// File holding the persisted light/dark preference (`~` is expanded).
    pub preferences: PathBuf,

    /// Accent color for navigation and post links.
    pub accent: String,
}

impl Default for ThemeSectionConfig {
    fn default() -> Self {
        Self {
            preferences: ".suspend/theme.json".into(),
            accent: "goldenrod".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(
            config.theme.preferences,
            PathBuf::from(".suspend/theme.json")
        );
        assert_eq!(config.theme.accent, "goldenrod");
    }

    #[test]
    fn test_override() {
        let config = test_parse_config("[theme]\naccent = \"teal\"");
        assert_eq!(config.theme.accent, "teal");
    }
}
