//! Shared UI pieces for the frax labs site.
//!
//! Provides the light/dark theme and its controller, the preference store
//! that persists it, and the ticking clock shown in the sidebar.

pub mod clock;
pub mod controller;
pub mod error;
pub mod prefs;
pub mod theme;

pub use clock::{format_clock, ClockState, LiveClock, Ticker, CLOCK_PERIOD};
pub use controller::{DocumentRoot, ThemeController, WebviewRoot};
pub use error::PrefsError;
pub use prefs::{FileStore, MemoryStore, PreferenceStore, THEME_KEY};
pub use theme::{ParseThemeError, Theme, ThemeToggle, ThemedRoot, CURRENT_THEME};

/// Shared CSS containing design tokens and the light/dark palettes.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
