//! The fixed informational sections.

use dioxus::prelude::*;

use crate::content::{
    contact_href, ABOUT, ABOUT_TEXT, CONTACT, CONTACT_EMAIL, CONTACT_LOCATION, MANIFESTO,
    MANIFESTO_CLOSING, MANIFESTO_INTRO, METHODOLOGY, METHODOLOGY_TITLE, MISSION_TITLE,
    OPERATING_MODEL, OPERATING_MODEL_TEXT, PRINCIPLES, PROJECT_LAB, VISION, VISION_TEXT,
};

use super::{ProjectList, Section};

/// 01 - vision statement.
#[component]
pub fn VisionSection() -> Element {
    rsx! {
        Section {
            meta: VISION,
            div { class: "lab-description", "{VISION_TEXT}" }
        }
    }
}

/// 02 - who we are.
#[component]
pub fn AboutSection() -> Element {
    rsx! {
        Section {
            meta: ABOUT,
            div { class: "lab-description", "{ABOUT_TEXT}" }
        }
    }
}

/// 03 - operating model and methodology list.
#[component]
pub fn OperatingModelSection() -> Element {
    rsx! {
        Section {
            meta: OPERATING_MODEL,
            p {
                class: "lab-description lab-description-spaced",
                "{OPERATING_MODEL_TEXT}"
            }
            div {
                class: "lab-grid",
                div {
                    div { class: "lab-subtitle", "{METHODOLOGY_TITLE}" }
                    div {
                        class: "lab-list",
                        for step in METHODOLOGY.iter() {
                            div {
                                key: "{step}",
                                class: "lab-list-item",
                                span { class: "lab-bullet", "::" }
                                "{step}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// 04 - project lab.
#[component]
pub fn ProjectLabSection() -> Element {
    rsx! {
        Section {
            meta: PROJECT_LAB,
            ProjectList {}
        }
    }
}

/// 06 - manifesto and mission principles.
#[component]
pub fn ManifestoSection() -> Element {
    rsx! {
        Section {
            meta: MANIFESTO,
            div {
                class: "lab-description manifesto",
                p { "{MANIFESTO_INTRO}" }

                div { class: "lab-subtitle", "{MISSION_TITLE}" }

                div {
                    class: "principles",
                    for principle in PRINCIPLES.iter() {
                        div {
                            key: "{principle.title}",
                            span { class: "lab-bullet", "::" }
                            span { class: "principle-title", "{principle.title}" }
                            " {principle.body}"
                        }
                    }
                }

                p { class: "manifesto-closing", "{MANIFESTO_CLOSING}" }
            }
        }
    }
}

/// 07 - contact address and location.
#[component]
pub fn ContactSection() -> Element {
    let href = contact_href();

    rsx! {
        Section {
            meta: CONTACT,
            div {
                class: "contact",
                a {
                    class: "contact-email",
                    href: "{href}",
                    "{CONTACT_EMAIL}"
                }
                div { class: "contact-location", "{CONTACT_LOCATION}" }
            }
        }
    }
}
