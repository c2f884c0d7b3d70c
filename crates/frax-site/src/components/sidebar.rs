//! Sidebar with logo, lab status and the theme toggle.

use dioxus::prelude::*;
use frax_ui::{LiveClock, Theme, ThemeToggle};

use crate::content::{LAB_CORE, LAB_INDEX, LAB_NAME, LAB_STATUS};

/// Sidebar component.
#[component]
pub fn Sidebar(theme: Theme, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        aside {
            class: "lab-sidebar",

            div {
                class: "lab-logo",
                "{LAB_NAME}"
            }

            LabMeta {}

            ThemeToggle { theme, on_toggle }
        }
    }
}

/// Lab status block with the live clock.
#[component]
fn LabMeta() -> Element {
    rsx! {
        div {
            class: "lab-meta",
            div { "{LAB_STATUS}" }
            div { "{LAB_CORE}" }
            div {
                "SYNC // "
                LiveClock {}
            }
            div { "{LAB_INDEX}" }
        }
    }
}
