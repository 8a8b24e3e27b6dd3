#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0)
}

// --- Viewport ---

#[test]
fn center_is_half_dimensions() {
    assert_eq!(viewport().center(), Point::new(400.0, 300.0));
}

#[test]
fn contains_with_buffer_accepts_interior_points() {
    assert!(viewport().contains_with_buffer(Point::new(10.0, 10.0)));
    assert!(viewport().contains_with_buffer(Point::new(799.0, 599.0)));
}

#[test]
fn contains_with_buffer_accepts_the_margin() {
    let vp = viewport();
    assert!(vp.contains_with_buffer(Point::new(-CULL_BUFFER_PX, 300.0)));
    assert!(vp.contains_with_buffer(Point::new(800.0 + CULL_BUFFER_PX, 300.0)));
    assert!(vp.contains_with_buffer(Point::new(400.0, -CULL_BUFFER_PX)));
    assert!(vp.contains_with_buffer(Point::new(400.0, 600.0 + CULL_BUFFER_PX)));
}

#[test]
fn contains_with_buffer_rejects_points_past_the_margin() {
    let vp = viewport();
    assert!(!vp.contains_with_buffer(Point::new(-CULL_BUFFER_PX - 1.0, 300.0)));
    assert!(!vp.contains_with_buffer(Point::new(801.0 + CULL_BUFFER_PX, 300.0)));
    assert!(!vp.contains_with_buffer(Point::new(400.0, -CULL_BUFFER_PX - 1.0)));
    assert!(!vp.contains_with_buffer(Point::new(400.0, 601.0 + CULL_BUFFER_PX)));
}

// --- Isometric projector ---

#[test]
fn centered_pointer_produces_zero_tilt() {
    let projector = Projector::new(Point::new(400.0, 300.0), viewport());
    let p = projector.project(100.0, 40.0, 25.0);
    let expected = Point::new(
        (100.0 - 40.0) * ISO_ANGLE.cos() + 400.0,
        (100.0 + 40.0) * ISO_ANGLE.sin() - 25.0 + 300.0,
    );
    assert!(point_approx_eq(p, expected));
}

#[test]
fn origin_projects_to_viewport_center_at_zero_height() {
    let projector = Projector::new(Point::new(400.0, 300.0), viewport());
    assert!(point_approx_eq(projector.project(0.0, 0.0, 0.0), Point::new(400.0, 300.0)));
}

#[test]
fn height_moves_the_projection_straight_up() {
    let projector = Projector::new(Point::new(400.0, 300.0), viewport());
    let flat = projector.project(50.0, 50.0, 0.0);
    let raised = projector.project(50.0, 50.0, 30.0);
    assert_eq!(flat.x, raised.x);
    assert!(approx_eq(flat.y - raised.y, 30.0));
}

#[test]
fn pointer_offset_tilts_the_projection() {
    let vp = viewport();
    let centered = Projector::new(vp.center(), vp);
    // Pointer at the right edge: tilt_x reaches +TILT_RANGE/2.
    let tilted = Projector::new(Point::new(800.0, 300.0), vp);

    let p = Point::new(100.0, 0.0);
    let straight = centered.project(p.x, p.y, 0.0);
    let skewed = tilted.project(p.x, p.y, 0.0);
    let expected_x = 100.0 * (ISO_ANGLE + TILT_RANGE * 0.5).cos() + 400.0;
    assert!(approx_eq(skewed.x, expected_x));
    assert_ne!(straight.x, skewed.x);
}

// --- Broad-phase projection ---

#[test]
fn approx_project_matches_formula() {
    let p = approx_project(120.0, 30.0, viewport());
    assert!(approx_eq(p.x, (120.0 - 30.0) * APPROX_X_SCALE + 400.0));
    assert!(approx_eq(p.y, (120.0 + 30.0) * APPROX_Y_SCALE + 300.0));
}

#[test]
fn approx_project_ignores_pointer_tilt() {
    // The approximation has no tilt inputs at all: same result no matter
    // where the pointer is.
    let a = approx_project(10.0, 20.0, viewport());
    let b = approx_project(10.0, 20.0, viewport());
    assert_eq!(a, b);
}

#[test]
fn approx_project_centers_the_origin() {
    assert!(point_approx_eq(approx_project(0.0, 0.0, viewport()), Point::new(400.0, 300.0)));
}
