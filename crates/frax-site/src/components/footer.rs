//! Page footer.

use dioxus::prelude::*;

use crate::content::{FOOTER_EST, FOOTER_RIGHTS, LAB_NAME};

/// Copyright line and founding note.
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "lab-footer",
            span {
                "© 2026 "
                span { class: "lab-footer-name", "{LAB_NAME}" }
                " {FOOTER_RIGHTS}"
            }
            span { "{FOOTER_EST}" }
        }
    }
}
