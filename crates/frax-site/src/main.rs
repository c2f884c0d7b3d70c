//! Entry point for the frax labs site.
//!
//! Launches the single-page site as a Dioxus desktop application.

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use frax_site::components::App;
use frax_site::config::{PrefsLocation, SiteConfig};
use frax_site::content::LAB_NAME;
use frax_ui::{PreferenceStore, Theme, ThemeController, WebviewRoot};

/// Embedded CSS styles
const SHARED_CSS: &str = frax_ui::SHARED_CSS;
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Global storage for the startup configuration.
static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

type SiteThemeController = ThemeController<Box<dyn PreferenceStore>, WebviewRoot>;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "frax-site")]
#[command(about = "The frax labs site")]
struct Args {
    /// Theme to start with, overriding the saved preference (light or dark)
    #[arg(short, long)]
    theme: Option<Theme>,

    /// Preference file to use instead of the default location
    #[arg(short, long, conflicts_with = "ephemeral")]
    prefs: Option<PathBuf>,

    /// Keep the theme preference in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl From<Args> for SiteConfig {
    fn from(args: Args) -> Self {
        let prefs = match (args.ephemeral, args.prefs) {
            (true, _) => PrefsLocation::Ephemeral,
            (false, Some(path)) => PrefsLocation::File(path),
            (false, None) => PrefsLocation::Default,
        };
        Self {
            prefs,
            theme_override: args.theme,
            log_level: args.log_level,
        }
    }
}

fn main() {
    let config = SiteConfig::from(Args::parse());

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting {} site", LAB_NAME);

    CONFIG.set(config).ok();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(LAB_NAME)
                        .with_inner_size(LogicalSize::new(1280, 860))
                        .with_resizable(true),
                )
                .with_custom_head(format!(
                    r#"<style>{}</style><style>{}</style>"#,
                    SHARED_CSS, STYLES_CSS
                )),
        )
        .launch(RootApp);
}

/// Root component owning the theme controller.
#[component]
fn RootApp() -> Element {
    let mut controller = use_signal(|| {
        let config = CONFIG.get().cloned().unwrap_or_default();
        SiteThemeController::new(config.open_store(), WebviewRoot::default())
    });

    // Apply the startup theme once the webview exists
    use_effect(move || {
        let theme_override = CONFIG.get().and_then(|c| c.theme_override);
        let theme = theme_override.unwrap_or_else(|| controller.peek().current());
        controller.write().apply(theme);
    });

    use_drop(|| {
        tracing::info!("Shutting down {} site", LAB_NAME);
    });

    let theme = controller.read().current();

    rsx! {
        App {
            theme,
            on_toggle: move |_| {
                controller.write().toggle();
            },
        }
    }
}
