//! Root application component for the site.

use dioxus::prelude::*;
use frax_ui::{Theme, ThemedRoot};

use crate::content::LAB_NAME;

use super::{
    AboutSection, ContactSection, FlagshipSection, Footer, ManifestoSection,
    OperatingModelSection, ProjectLabSection, Sidebar, VisionSection,
};

/// Root application component.
///
/// Holds no state of its own; the theme is owned by the caller.
#[component]
pub fn App(theme: Theme, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        ThemedRoot {
            div {
                class: "lab-container",

                // Left panel - logo, status block, theme toggle
                Sidebar { theme, on_toggle }

                // Main panel - numbered sections
                main {
                    class: "lab-main",

                    h1 {
                        class: "lab-title fade-in",
                        "{LAB_NAME}"
                    }

                    VisionSection {}
                    AboutSection {}
                    OperatingModelSection {}
                    ProjectLabSection {}
                    FlagshipSection {}
                    ManifestoSection {}
                    ContactSection {}

                    Footer {}
                }
            }
        }
    }
}
