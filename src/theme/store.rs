//! Theme preference storage.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::debug;

/// Durable storage of the dark-mode flag.
pub trait PreferencesStore {
    /// Stored flag; `false` (light) when nothing usable is stored.
    fn load(&self) -> bool;

    fn save(&self, dark: bool) -> Result<()>;
}

/// On-disk preference format.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ThemePreference {
    dark: bool,
}

/// JSON file store (`{"dark": true}`).
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferencesStore for FilePreferences {
    fn load(&self) -> bool {
        let Ok(json) = fs::read_to_string(&self.path) else {
            return false;
        };
        match serde_json::from_str::<ThemePreference>(&json) {
            Ok(pref) => pref.dark,
            Err(e) => {
                debug!("theme"; "ignoring unreadable {}: {}", self.path.display(), e);
                false
            }
        }
    }

    fn save(&self, dark: bool) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&ThemePreference { dark })?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

/// In-memory store.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    dark: parking_lot::Mutex<Option<bool>>,
}

#[cfg(test)]
impl MemoryPreferences {
    pub fn new(initial: Option<bool>) -> Self {
        Self {
            dark: parking_lot::Mutex::new(initial),
        }
    }

    /// Raw stored value, `None` if never saved.
    pub fn stored(&self) -> Option<bool> {
        *self.dark.lock()
    }
}

#[cfg(test)]
impl PreferencesStore for MemoryPreferences {
    fn load(&self) -> bool {
        self.stored().unwrap_or(false)
    }

    fn save(&self, dark: bool) -> Result<()> {
        *self.dark.lock() = Some(dark);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_missing_defaults_to_light() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferences::new(dir.path().join("theme.json"));
        assert!(!store.load());
    }

    #[test]
    fn test_file_corrupt_defaults_to_light() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        fs::write(&path, "{not json").unwrap();
        assert!(!FilePreferences::new(&path).load());
    }

    #[test]
    fn test_file_roundtrip_creates_parent() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferences::new(dir.path().join(".suspend/theme.json"));
        store.save(true).unwrap();
        assert!(store.load());
        store.save(false).unwrap();
        assert!(!store.load());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryPreferences::default();
        assert_eq!(store.stored(), None);
        assert!(!store.load());
        store.save(true).unwrap();
        assert_eq!(store.stored(), Some(true));
    }
}
