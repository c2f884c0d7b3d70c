//! Theme controller: owns the active theme and keeps the document
//! attribute and the persisted preference in step.

use dioxus::prelude::*;

use crate::prefs::{PreferenceStore, THEME_KEY};
use crate::theme::{Theme, CURRENT_THEME};

/// The document-level attribute the stylesheet reads the theme from.
pub trait DocumentRoot {
    /// Sets the theme attribute on the document root.
    fn set_theme(&mut self, theme: Theme);

    /// Theme last written to the attribute, if any.
    fn theme(&self) -> Option<Theme>;
}

/// Document root of the running webview.
///
/// Updates [`CURRENT_THEME`] (rendered by `ThemedRoot`) and the
/// `<html data-theme>` attribute. Must be used from inside the Dioxus runtime.
#[derive(Debug, Clone, Default)]
pub struct WebviewRoot {
    applied: Option<Theme>,
}

impl DocumentRoot for WebviewRoot {
    fn set_theme(&mut self, theme: Theme) {
        *CURRENT_THEME.write() = theme;
        document::eval(&format!(
            "document.documentElement.setAttribute('data-theme', '{}');",
            theme.css_value()
        ));
        self.applied = Some(theme);
    }

    fn theme(&self) -> Option<Theme> {
        self.applied
    }
}

/// Holds the current theme and applies changes to both the document
/// attribute and the preference store.
#[derive(Debug)]
pub struct ThemeController<S, D> {
    store: S,
    root: D,
    current: Theme,
}

impl<S: PreferenceStore, D: DocumentRoot> ThemeController<S, D> {
    /// Create a controller whose current theme is the persisted one.
    ///
    /// Nothing is applied until [`apply`](Self::apply) is called.
    pub fn new(store: S, root: D) -> Self {
        let mut controller = Self {
            store,
            root,
            current: Theme::default(),
        };
        controller.current = controller.initial_theme();
        controller
    }

    /// Reads the persisted theme, defaulting to light.
    ///
    /// Missing, unreadable, or unrecognised values all fall back to light.
    pub fn initial_theme(&self) -> Theme {
        match self.store.get(THEME_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                tracing::debug!("ignoring stored theme: {}", e);
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!("preference store unavailable, using default theme: {}", e);
                Theme::default()
            }
        }
    }

    /// The theme currently in effect.
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Sets the document attribute and persists `theme`.
    ///
    /// The attribute is always updated; a failed write is logged only.
    pub fn apply(&mut self, theme: Theme) {
        self.current = theme;
        self.root.set_theme(theme);
        if let Err(e) = self.store.set(THEME_KEY, theme.css_value()) {
            tracing::warn!("failed to persist theme '{}': {}", theme, e);
        }
        tracing::debug!(theme = %theme, "theme applied");
    }

    /// Flips the current theme, applies it, and returns the new value.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.apply(next);
        tracing::info!("theme switched to {}", next.display_name());
        next
    }

    /// The backing preference store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The document root the theme is applied to.
    pub fn root(&self) -> &D {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrefsError;
    use crate::prefs::MemoryStore;

    #[derive(Default)]
    struct RecordingRoot {
        writes: Vec<Theme>,
    }

    impl DocumentRoot for RecordingRoot {
        fn set_theme(&mut self, theme: Theme) {
            self.writes.push(theme);
        }

        fn theme(&self) -> Option<Theme> {
            self.writes.last().copied()
        }
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, PrefsError> {
            Err(PrefsError::Io("storage disabled".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), PrefsError> {
            Err(PrefsError::Io("storage disabled".to_string()))
        }
    }

    fn stored(store: &impl PreferenceStore) -> Option<String> {
        store.get(THEME_KEY).unwrap()
    }

    #[test]
    fn test_initial_theme_defaults_to_light() {
        let controller = ThemeController::new(MemoryStore::new(), RecordingRoot::default());
        assert_eq!(controller.initial_theme(), Theme::Light);
        assert_eq!(controller.current(), Theme::Light);
        assert_eq!(controller.root().theme(), None);
    }

    #[test]
    fn test_initial_theme_reads_store() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "dark").unwrap();
        let controller = ThemeController::new(store, RecordingRoot::default());
        assert_eq!(controller.current(), Theme::Dark);
    }

    #[test]
    fn test_initial_theme_ignores_garbage() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "purple").unwrap();
        let controller = ThemeController::new(store, RecordingRoot::default());
        assert_eq!(controller.initial_theme(), Theme::Light);
    }

    #[test]
    fn test_unavailable_store_falls_back_to_light() {
        let controller = ThemeController::new(BrokenStore, RecordingRoot::default());
        assert_eq!(controller.initial_theme(), Theme::Light);
    }

    #[test]
    fn test_apply_updates_attribute_and_store() {
        for &theme in Theme::all() {
            let mut controller =
                ThemeController::new(MemoryStore::new(), RecordingRoot::default());
            controller.apply(theme);
            assert_eq!(controller.root().theme(), Some(theme));
            assert_eq!(stored(controller.store()).as_deref(), Some(theme.css_value()));
        }
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut controller = ThemeController::new(MemoryStore::new(), RecordingRoot::default());
        controller.apply(Theme::Dark);
        let first = (controller.root().theme(), stored(controller.store()));
        controller.apply(Theme::Dark);
        let second = (controller.root().theme(), stored(controller.store()));
        assert_eq!(first, second);
        assert_eq!(controller.current(), Theme::Dark);
    }

    #[test]
    fn test_toggle_twice_restores_theme() {
        let mut controller = ThemeController::new(MemoryStore::new(), RecordingRoot::default());
        controller.apply(Theme::Light);

        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(stored(controller.store()).as_deref(), Some("dark"));

        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(controller.root().theme(), Some(Theme::Light));
        assert_eq!(stored(controller.store()).as_deref(), Some("light"));
        assert_eq!(
            controller.root().writes,
            vec![Theme::Light, Theme::Dark, Theme::Light]
        );
    }

    #[test]
    fn test_apply_with_broken_store_still_sets_attribute() {
        let mut controller = ThemeController::new(BrokenStore, RecordingRoot::default());
        controller.apply(Theme::Dark);
        assert_eq!(controller.root().theme(), Some(Theme::Dark));
        assert_eq!(controller.current(), Theme::Dark);
    }
}
