//! Light/dark theme flag.
//!
//! The flag is read from a [`PreferencesStore`] once when the toggle is
//! created and written back on every change. Rendering only needs the
//! resulting CSS classes.

mod store;

use anyhow::Result;

pub use store::{FilePreferences, PreferencesStore};
#[cfg(test)]
pub use store::MemoryPreferences;

/// Body class for the current theme.
pub const fn body_class(dark: bool) -> &'static str {
    if dark { "theme-dark" } else { "theme-light" }
}

/// Class list of the header `<nav>` for the current theme.
pub const fn nav_class(dark: bool) -> &'static str {
    if dark {
        "header__nav"
    } else {
        "header__nav header__nav__light"
    }
}

/// Theme flag backed by a preference store.
pub struct ThemeToggle<S: PreferencesStore> {
    store: S,
    dark: bool,
}

impl<S: PreferencesStore> ThemeToggle<S> {
    /// Initialize from the stored preference.
    pub fn new(store: S) -> Self {
        let dark = store.load();
        Self { store, dark }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Flip the flag and persist it. Returns the new value.
    pub fn toggle(&mut self) -> Result<bool> {
        self.set(!self.dark)?;
        Ok(self.dark)
    }

    /// Set the flag and persist it.
    ///
    /// The in-memory flag only changes once the store accepted the value.
    pub fn set(&mut self, dark: bool) -> Result<()> {
        self.store.save(dark)?;
        self.dark = dark;
        Ok(())
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initializes_from_store() {
        assert!(!ThemeToggle::new(MemoryPreferences::default()).is_dark());
        assert!(ThemeToggle::new(MemoryPreferences::new(Some(true))).is_dark());
    }

    #[test]
    fn test_toggle_persists() {
        let mut toggle = ThemeToggle::new(MemoryPreferences::default());
        assert!(toggle.toggle().unwrap());
        assert_eq!(toggle.store().stored(), Some(true));
        assert!(!toggle.toggle().unwrap());
        assert_eq!(toggle.store().stored(), Some(false));
    }

    #[test]
    fn test_set_persists() {
        let mut toggle = ThemeToggle::new(MemoryPreferences::default());
        toggle.set(true).unwrap();
        assert!(toggle.is_dark());
        assert_eq!(toggle.store().stored(), Some(true));
    }

    #[test]
    fn test_toggle_survives_reload() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("theme.json");

        let mut toggle = ThemeToggle::new(FilePreferences::new(&path));
        toggle.toggle().unwrap();

        let reloaded = ThemeToggle::new(FilePreferences::new(&path));
        assert!(reloaded.is_dark());
    }

    #[test]
    fn test_classes() {
        assert_eq!(body_class(true), "theme-dark");
        assert_eq!(body_class(false), "theme-light");
        assert_eq!(nav_class(true), "header__nav");
        assert_eq!(nav_class(false), "header__nav header__nav__light");
    }
}
