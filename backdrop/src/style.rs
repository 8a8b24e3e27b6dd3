//! Theme palette and stroke styling.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEPTH_OPACITY_SCALE, HIGHLIGHT_OPACITY, MAX_OPACITY, POINTER_RADIUS};

/// Visual theme for the site and the backdrop.
///
/// Controls the stroke palette and line width only; the scene geometry is
/// theme-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark strokes on a light page.
    Light,
    /// Light strokes on a dark page (the default for first-time visitors).
    #[default]
    Dark,
}

impl Theme {
    /// Baseline stroke opacity for grid lines far from the pointer.
    #[must_use]
    pub fn base_opacity(self) -> f64 {
        match self {
            Self::Dark => 0.08,
            Self::Light => 0.05,
        }
    }

    /// Stroke width in CSS pixels.
    #[must_use]
    pub fn line_width(self) -> f64 {
        match self {
            Self::Dark => 0.5,
            Self::Light => 0.4,
        }
    }

    /// CSS `rgba()` stroke color at the given opacity.
    #[must_use]
    pub fn stroke_style(self, opacity: f64) -> String {
        match self {
            Self::Dark => format!("rgba(255,255,255,{opacity})"),
            Self::Light => format!("rgba(0,0,0,{opacity})"),
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Lowercase name, matching the `data-theme` attribute values.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Compose the stroke opacity for one grid vertex: theme base, plus a
/// pointer-proximity highlight with linear falloff inside the interaction
/// radius, plus a depth term, capped at the maximum.
#[must_use]
pub fn stroke_opacity(theme: Theme, pointer_dist: f64, normalized_radial: f64) -> f64 {
    let highlight = if pointer_dist < POINTER_RADIUS {
        (1.0 - pointer_dist / POINTER_RADIUS) * HIGHLIGHT_OPACITY
    } else {
        0.0
    };
    let depth = normalized_radial * DEPTH_OPACITY_SCALE;
    (theme.base_opacity() + highlight + depth).min(MAX_OPACITY)
}
