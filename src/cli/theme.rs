//! `suspend theme`: show or change the stored light/dark preference.

use anyhow::Result;

use crate::cli::ThemeAction;
use crate::config::SiteConfig;
use crate::log;
use crate::theme::{FilePreferences, PreferencesStore, ThemeToggle};

/// Apply `action` (default: show) to the preference file.
pub fn run_theme(config: &SiteConfig, action: Option<ThemeAction>) -> Result<()> {
    let store = FilePreferences::new(config.preferences_path());
    let path = store.path().to_path_buf();
    let dark = apply(ThemeToggle::new(store), action.unwrap_or(ThemeAction::Show))?;

    log!("theme"; "{} ({})", name(dark), path.display());
    Ok(())
}

/// Run `action` against `toggle`, returning the resulting flag.
fn apply<S: PreferencesStore>(mut toggle: ThemeToggle<S>, action: ThemeAction) -> Result<bool> {
    match action {
        ThemeAction::Show => {}
        ThemeAction::Toggle => {
            toggle.toggle()?;
        }
        ThemeAction::Dark => toggle.set(true)?,
        ThemeAction::Light => toggle.set(false)?,
    }
    Ok(toggle.is_dark())
}

const fn name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::theme::MemoryPreferences;

    #[test]
    fn test_apply_actions() {
        assert!(!apply(ThemeToggle::new(MemoryPreferences::default()), ThemeAction::Show).unwrap());
        assert!(apply(ThemeToggle::new(MemoryPreferences::default()), ThemeAction::Toggle).unwrap());
        assert!(apply(ThemeToggle::new(MemoryPreferences::new(Some(false))), ThemeAction::Dark).unwrap());
        assert!(!apply(ThemeToggle::new(MemoryPreferences::new(Some(true))), ThemeAction::Light).unwrap());
    }

    #[test]
    fn test_run_theme_persists() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut config = test_parse_config("");
        config.theme.preferences = dir.path().join("prefs/theme.json");

        run_theme(&config, Some(ThemeAction::Toggle)).unwrap();
        assert!(FilePreferences::new(config.preferences_path()).load());

        run_theme(&config, Some(ThemeAction::Light)).unwrap();
        assert!(!FilePreferences::new(config.preferences_path()).load());

        run_theme(&config, None).unwrap();
        assert!(!FilePreferences::new(config.preferences_path()).load());
    }
}
