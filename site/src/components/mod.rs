//! Reusable UI component modules.
//!
//! Components render page chrome and the backdrop bridge while reading
//! shared state from Leptos context providers.

pub mod backdrop_host;
pub mod project_card;
pub mod theme_toggle;
