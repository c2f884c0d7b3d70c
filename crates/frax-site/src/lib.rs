//! Single-page frax labs site.
//!
//! This crate provides a Dioxus desktop application rendering the lab's
//! sidebar (clock, status, theme toggle) and its seven content sections.

pub mod components;
pub mod config;
pub mod content;
