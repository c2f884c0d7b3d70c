//! Numbered section wrapper.

use dioxus::prelude::*;

use crate::content::SectionMeta;

/// A labeled section, e.g. `01 :: VİZYON`, wrapping its content.
#[component]
pub fn Section(meta: SectionMeta, children: Element) -> Element {
    rsx! {
        section {
            class: "lab-section",
            id: "section-{meta.num}",
            span {
                class: "lab-label",
                "{meta.heading()}"
            }
            {children}
        }
    }
}
