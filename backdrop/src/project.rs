//! Screen projection: the isometric transform, the simplified broad-phase
//! projection used for pointer proximity, and viewport culling.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use crate::consts::{APPROX_X_SCALE, APPROX_Y_SCALE, CULL_BUFFER_PX, ISO_ANGLE, TILT_RANGE};

/// A point in either grid or screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Drawing-surface dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }

    /// Whether a projected point falls inside the viewport expanded by the
    /// cull buffer.
    #[must_use]
    pub fn contains_with_buffer(&self, p: Point) -> bool {
        p.x >= -CULL_BUFFER_PX
            && p.x <= self.width + CULL_BUFFER_PX
            && p.y >= -CULL_BUFFER_PX
            && p.y <= self.height + CULL_BUFFER_PX
    }
}

/// Fixed-angle isometric projector with a per-frame tilt derived from the
/// eased pointer's offset from the viewport center.
///
/// The trig factors are computed once per frame; tilt is zero when the
/// pointer sits exactly at the viewport center.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    cos_x: f64,
    sin_y: f64,
    center: Point,
}

impl Projector {
    /// Build the frame's projector from the eased pointer and viewport.
    #[must_use]
    pub fn new(eased_pointer: Point, viewport: Viewport) -> Self {
        let tilt_x = (eased_pointer.x / viewport.width - 0.5) * TILT_RANGE;
        let tilt_y = (eased_pointer.y / viewport.height - 0.5) * TILT_RANGE;
        Self {
            cos_x: (ISO_ANGLE + tilt_x).cos(),
            sin_y: (ISO_ANGLE + tilt_y).sin(),
            center: viewport.center(),
        }
    }

    /// Project a grid-space point with height `z` to screen space.
    #[must_use]
    pub fn project(&self, x: f64, y: f64, z: f64) -> Point {
        Point::new(
            (x - y) * self.cos_x + self.center.x,
            (x + y) * self.sin_y - z + self.center.y,
        )
    }
}

/// The simplified flat projection used only for pointer-proximity tests.
///
/// A cheap approximation without tilt; pointer distances are measured in
/// this space, not in the render projection.
#[must_use]
pub fn approx_project(x: f64, y: f64, viewport: Viewport) -> Point {
    Point::new(
        (x - y).mul_add(APPROX_X_SCALE, viewport.width * 0.5),
        (x + y).mul_add(APPROX_Y_SCALE, viewport.height * 0.5),
    )
}
