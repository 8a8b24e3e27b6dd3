//! Reactive theme state shared through context.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use backdrop::style::Theme;

/// Current visual theme for every themed surface: pages, the toggle, and
/// the backdrop renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
}
