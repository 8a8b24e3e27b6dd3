#![allow(clippy::float_cmp)]

use super::*;

// --- Construction ---

#[test]
fn at_starts_both_positions_at_origin() {
    let pointer = PointerState::at(Point::new(400.0, 300.0));
    assert_eq!(pointer.target, pointer.eased);
    assert_eq!(pointer.target, Point::new(400.0, 300.0));
}

// --- Target updates ---

#[test]
fn set_target_leaves_eased_untouched() {
    let mut pointer = PointerState::at(Point::new(0.0, 0.0));
    pointer.set_target(100.0, 50.0);
    assert_eq!(pointer.target, Point::new(100.0, 50.0));
    assert_eq!(pointer.eased, Point::new(0.0, 0.0));
}

// --- Easing ---

#[test]
fn ease_moves_a_fixed_fraction_toward_target() {
    let mut pointer = PointerState::at(Point::new(0.0, 0.0));
    pointer.set_target(100.0, 200.0);
    pointer.ease();
    assert_eq!(pointer.eased, Point::new(100.0 * POINTER_EASE, 200.0 * POINTER_EASE));
}

#[test]
fn ease_is_identity_when_target_is_reached() {
    let mut pointer = PointerState::at(Point::new(33.0, 44.0));
    pointer.ease();
    assert_eq!(pointer.eased, Point::new(33.0, 44.0));
}

#[test]
fn ease_converges_geometrically() {
    let mut pointer = PointerState::at(Point::new(0.0, 0.0));
    pointer.set_target(1000.0, 0.0);

    let frames = 100;
    for _ in 0..frames {
        pointer.ease();
    }

    // Remaining distance shrinks by (1 - POINTER_EASE) per frame.
    let expected_remaining = 1000.0 * (1.0 - POINTER_EASE).powi(frames);
    let remaining = pointer.target.x - pointer.eased.x;
    assert!((remaining - expected_remaining).abs() < 1e-6);
    assert!(remaining < 1000.0 * 0.95_f64.powi(frames) + 1e-9);
}

#[test]
fn ease_converges_from_either_side() {
    let mut pointer = PointerState::at(Point::new(500.0, 500.0));
    pointer.set_target(0.0, 0.0);
    for _ in 0..400 {
        pointer.ease();
    }
    assert!(pointer.eased.x.abs() < 1e-3);
    assert!(pointer.eased.y.abs() < 1e-3);
}
