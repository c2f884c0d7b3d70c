//! Startup configuration for the site.

use std::path::PathBuf;

use frax_ui::{FileStore, MemoryStore, PreferenceStore, Theme};

/// Where the theme preference is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PrefsLocation {
    /// `<config_dir>/frax-labs/preferences.json`.
    #[default]
    Default,
    /// An explicit preference file.
    File(PathBuf),
    /// In memory only; nothing is persisted.
    Ephemeral,
}

/// Configuration assembled from the command line.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Preference storage location.
    pub prefs: PrefsLocation,
    /// Theme to apply instead of the stored one.
    pub theme_override: Option<Theme>,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            prefs: PrefsLocation::Default,
            theme_override: None,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Opens the configured preference store.
    ///
    /// If the file store cannot be opened the site still runs, with an
    /// in-memory store and the default theme.
    pub fn open_store(&self) -> Box<dyn PreferenceStore> {
        let opened = match &self.prefs {
            PrefsLocation::Ephemeral => return Box::new(MemoryStore::new()),
            PrefsLocation::Default => FileStore::open_default(),
            PrefsLocation::File(path) => FileStore::open(path.clone()),
        };

        match opened {
            Ok(store) => {
                tracing::info!("Using preference file {}", store.path().display());
                Box::new(store)
            }
            Err(e) => {
                tracing::warn!("Preferences unavailable, not persisting theme: {}", e);
                Box::new(MemoryStore::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frax_ui::THEME_KEY;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.prefs, PrefsLocation::Default);
        assert_eq!(config.theme_override, None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_ephemeral_store_starts_empty() {
        let config = SiteConfig {
            prefs: PrefsLocation::Ephemeral,
            ..Default::default()
        };
        let store = config.open_store();
        assert_eq!(store.get(THEME_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_is_persistent() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig {
            prefs: PrefsLocation::File(dir.path().join("prefs.json")),
            ..Default::default()
        };

        let mut store = config.open_store();
        store.set(THEME_KEY, "dark").unwrap();

        let reopened = config.open_store();
        assert_eq!(reopened.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_corrupt_file_falls_back_to_memory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{ nope").unwrap();

        let config = SiteConfig {
            prefs: PrefsLocation::File(path.clone()),
            ..Default::default()
        };
        let mut store = config.open_store();
        assert_eq!(store.get(THEME_KEY).unwrap(), None);

        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ nope");
    }
}
