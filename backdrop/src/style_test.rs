#![allow(clippy::float_cmp)]

use super::*;

// --- Palette ---

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn base_opacity_per_theme() {
    assert_eq!(Theme::Dark.base_opacity(), 0.08);
    assert_eq!(Theme::Light.base_opacity(), 0.05);
}

#[test]
fn line_width_per_theme() {
    assert_eq!(Theme::Dark.line_width(), 0.5);
    assert_eq!(Theme::Light.line_width(), 0.4);
}

#[test]
fn stroke_style_is_white_on_dark_and_black_on_light() {
    assert_eq!(Theme::Dark.stroke_style(0.25), "rgba(255,255,255,0.25)");
    assert_eq!(Theme::Light.stroke_style(0.25), "rgba(0,0,0,0.25)");
}

#[test]
fn toggled_flips_both_ways() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
}

#[test]
fn as_str_matches_data_theme_values() {
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Light.as_str(), "light");
}

#[test]
fn serde_round_trip_uses_lowercase_names() {
    let encoded = serde_json::to_string(&Theme::Light).unwrap();
    assert_eq!(encoded, "\"light\"");
    let decoded: Theme = serde_json::from_str("\"dark\"").unwrap();
    assert_eq!(decoded, Theme::Dark);
}

// --- Opacity composition ---

#[test]
fn far_pointer_yields_base_plus_depth() {
    let opacity = stroke_opacity(Theme::Dark, crate::consts::POINTER_FAR, 0.5);
    assert_eq!(opacity, 0.08 + 0.5 * DEPTH_OPACITY_SCALE);
}

#[test]
fn pointer_on_top_adds_full_highlight() {
    let opacity = stroke_opacity(Theme::Light, 0.0, 0.0);
    assert_eq!(opacity, 0.05 + HIGHLIGHT_OPACITY);
}

#[test]
fn highlight_fades_linearly_with_distance() {
    let near = stroke_opacity(Theme::Dark, POINTER_RADIUS * 0.25, 0.0);
    let far = stroke_opacity(Theme::Dark, POINTER_RADIUS * 0.75, 0.0);
    assert_eq!(near, 0.08 + 0.75 * HIGHLIGHT_OPACITY);
    assert_eq!(far, 0.08 + 0.25 * HIGHLIGHT_OPACITY);
}

#[test]
fn highlight_cuts_off_at_the_interaction_radius() {
    let at_edge = stroke_opacity(Theme::Dark, POINTER_RADIUS, 0.0);
    assert_eq!(at_edge, 0.08);
}

#[test]
fn opacity_is_capped_at_the_maximum() {
    // Large depth plus full highlight would exceed the cap.
    let opacity = stroke_opacity(Theme::Dark, 0.0, 3.0);
    assert_eq!(opacity, MAX_OPACITY);
}

#[test]
fn opacity_never_drops_below_the_theme_base() {
    for theme in [Theme::Light, Theme::Dark] {
        for dist in [0.0, 100.0, 499.0, 500.0, 9999.0] {
            for radial in [0.0, 0.1, 1.0, 2.5] {
                let opacity = stroke_opacity(theme, dist, radial);
                assert!(opacity >= theme.base_opacity());
                assert!(opacity <= MAX_OPACITY);
            }
        }
    }
}
