#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn read_preference_defaults_to_dark() {
    assert_eq!(read_preference(), Theme::Dark);
}

#[test]
fn toggle_flips_the_theme() {
    assert_eq!(toggle(Theme::Dark), Theme::Light);
    assert_eq!(toggle(Theme::Light), Theme::Dark);
}

#[test]
fn apply_is_a_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
