//! Project rows for the project lab section.

use dioxus::prelude::*;

use crate::content::{ProjectRecord, ProjectStatus, PROJECTS};

/// Schemes a row link may use to become clickable.
const LINK_SCHEMES: &[&str] = &["https://", "http://", "mailto:"];

/// Whether `link` is an absolute link worth opening.
pub fn is_external_link(link: &str) -> bool {
    !link.chars().any(char::is_whitespace)
        && LINK_SCHEMES
            .iter()
            .any(|scheme| link.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
}

/// A project row: either inert or opening its link in a new context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Row {
    Plain {
        title: &'static str,
        status: ProjectStatus,
    },
    Linked {
        title: &'static str,
        status: ProjectStatus,
        url: &'static str,
    },
}

impl Row {
    /// Missing or malformed links yield an inert row.
    pub fn from_record(record: &ProjectRecord) -> Self {
        match record.link {
            Some(url) if is_external_link(url) => Row::Linked {
                title: record.title,
                status: record.status,
                url,
            },
            _ => Row::Plain {
                title: record.title,
                status: record.status,
            },
        }
    }

    /// Project title shown on the row.
    pub fn title(&self) -> &'static str {
        match self {
            Row::Plain { title, .. } | Row::Linked { title, .. } => *title,
        }
    }

    /// Status shown beside the dot.
    pub fn status(&self) -> ProjectStatus {
        match self {
            Row::Plain { status, .. } | Row::Linked { status, .. } => *status,
        }
    }

    /// Destination of the row, if it is clickable.
    pub fn url(&self) -> Option<&'static str> {
        match self {
            Row::Linked { url, .. } => Some(*url),
            Row::Plain { .. } => None,
        }
    }
}

/// One project row with its status dot.
#[component]
pub fn ProjectCard(record: ProjectRecord) -> Element {
    let row = Row::from_record(&record);
    let status = row.status();
    let dot_class = if status.is_pending() {
        "status-dot upcoming"
    } else {
        "status-dot"
    };

    let content = rsx! {
        div {
            class: if row.url().is_some() { "node-row node-row-linked" } else { "node-row" },
            span {
                class: "node-title",
                "{row.title()}"
            }
            div {
                class: "status-indicator",
                div { class: "{dot_class}" }
                span { "{status}" }
            }
        }
    };

    match row.url() {
        Some(url) => rsx! {
            a {
                class: "node-link",
                href: "{url}",
                target: "_blank",
                rel: "noopener noreferrer",
                {content}
            }
        },
        None => content,
    }
}

/// All project rows in their fixed order.
#[component]
pub fn ProjectList() -> Element {
    rsx! {
        div {
            class: "node-list",
            for record in PROJECTS.iter().copied() {
                ProjectCard { key: "{record.title}", record }
            }
        }
    }
}
