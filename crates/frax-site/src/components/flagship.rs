//! Flagship product card.

use dioxus::prelude::*;

use crate::content::{FLAGSHIP, FLAGSHIP_PRODUCT};

use super::{is_external_link, Section};

/// Script that opens `url` in a new browsing context.
///
/// The URL is embedded as a JSON string literal. Returns `None` for anything
/// that is not an absolute link.
pub fn window_open_script(url: &str) -> Option<String> {
    if !is_external_link(url) {
        return None;
    }
    let literal = serde_json::to_string(url).ok()?;
    Some(format!("window.open({}, '_blank');", literal))
}

/// Opens `url` in a new browsing context.
pub fn open_external(url: &str) {
    match window_open_script(url) {
        Some(script) => {
            tracing::info!("Opening {}", url);
            document::eval(&script);
        }
        None => tracing::warn!("refusing to open non-external link: {}", url),
    }
}

/// 05 - the flagship product. The whole card opens the product site.
#[component]
pub fn FlagshipSection() -> Element {
    let product = FLAGSHIP_PRODUCT;

    rsx! {
        Section {
            meta: FLAGSHIP,
            div {
                class: "feature-box",
                "role": "link",
                onclick: move |_| open_external(product.url),

                div { class: "feature-title", "{product.name}" }
                div { class: "feature-tagline", "{product.tagline}" }
                div { class: "feature-desc", "{product.description}" }

                div {
                    class: "feature-footer",
                    div {
                        class: "feature-meta",
                        div { "{product.id}" }
                        div { "{product.stage}" }
                    }
                    div {
                        class: "feature-cta",
                        "{product.call_to_action} "
                        span { class: "feature-arrow", "→" }
                    }
                }
            }
        }
    }
}
