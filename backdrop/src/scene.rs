//! Per-frame scene state and vertex math for the animated grid.
//!
//! `SceneCore` owns everything that varies frame to frame — the animation
//! clock, pointer, viewport, and theme — and computes the per-vertex
//! geometry the renderer draws. It never touches the browser, so the whole
//! per-frame algorithm is unit-testable on native targets.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::consts::{POINTER_BROADPHASE_X, POINTER_FAR, POINTER_RADIUS, RIPPLE_DEPTH, RIPPLE_FREQUENCY, TIME_STEP};
use crate::grid::{GridSpec, wave_height};
use crate::pointer::PointerState;
use crate::project::{Point, Projector, Viewport, approx_project};
use crate::style::{Theme, stroke_opacity};

/// One grid vertex for the current frame.
#[derive(Debug, Clone, Copy)]
pub struct GridPoint {
    /// Planar grid-space x (fixed per cell).
    pub x: f64,
    /// Planar grid-space y (fixed per cell).
    pub y: f64,
    /// Wave height after pointer displacement.
    pub z: f64,
    /// Distance to the eased pointer in the approximate projection, or
    /// [`POINTER_FAR`] when outside the interaction range.
    pub pointer_dist: f64,
}

/// Instance-owned animation state: clock, pointer, viewport, theme.
///
/// Each renderer instance owns its own `SceneCore`; there is no shared or
/// global animation state, so independent instances and clean teardown come
/// for free.
#[derive(Debug, Clone)]
pub struct SceneCore {
    grid: GridSpec,
    theme: Theme,
    time: f64,
    pointer: PointerState,
    viewport: Viewport,
}

impl SceneCore {
    /// New scene with the clock at zero and the pointer resting at the
    /// viewport center (zero tilt until the first pointer event).
    #[must_use]
    pub fn new(width: f64, height: f64, theme: Theme) -> Self {
        let viewport = Viewport::new(width, height);
        Self {
            grid: GridSpec::default(),
            theme,
            time: 0.0,
            pointer: PointerState::at(viewport.center()),
            viewport,
        }
    }

    // --- Event inputs ---

    /// Update viewport dimensions. Read by the next frame; the in-flight
    /// frame is not redrawn.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
    }

    /// Record a new raw pointer position. The eased position only advances
    /// inside the frame loop.
    pub fn set_pointer_target(&mut self, x: f64, y: f64) {
        self.pointer.set_target(x, y);
    }

    // --- Queries ---

    #[must_use]
    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[must_use]
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    // --- Frame advancement ---

    /// Advance one frame: ease the pointer, then tick the clock.
    pub fn begin_frame(&mut self) {
        self.pointer.ease();
        self.time += TIME_STEP;
    }

    /// Projector for the current eased pointer and viewport.
    #[must_use]
    pub fn projector(&self) -> Projector {
        Projector::new(self.pointer.eased, self.viewport)
    }

    /// Compute the vertex at (row, col) for the current frame.
    ///
    /// Pointer displacement runs in two phases: a broad-phase x-band test in
    /// grid space, then a precise distance in the approximate projection.
    /// Vertices failing either phase carry the sentinel distance.
    #[must_use]
    pub fn compute_point(&self, row: usize, col: usize) -> GridPoint {
        let planar = self.grid.planar(row, col);
        let normalized = self.grid.normalized_radial(planar);
        let mut z = wave_height(row, col, self.time, normalized);

        let eased = self.pointer.eased;
        let pointer_grid_x = eased.x - self.viewport.width * 0.5;
        let pointer_dist = if (planar.x - pointer_grid_x).abs() < POINTER_BROADPHASE_X {
            let approx = approx_project(planar.x, planar.y, self.viewport);
            let dist = (eased.x - approx.x).hypot(eased.y - approx.y);
            if dist < POINTER_RADIUS {
                z -= (dist * RIPPLE_FREQUENCY).cos() * RIPPLE_DEPTH * (1.0 - dist / POINTER_RADIUS);
                dist
            } else {
                POINTER_FAR
            }
        } else {
            POINTER_FAR
        };

        GridPoint { x: planar.x, y: planar.y, z, pointer_dist }
    }

    /// Whether a projected vertex may draw its segments this frame.
    #[must_use]
    pub fn visible(&self, projected: Point) -> bool {
        self.viewport.contains_with_buffer(projected)
    }

    /// Stroke opacity for a vertex.
    #[must_use]
    pub fn point_opacity(&self, point: &GridPoint) -> f64 {
        let normalized = self.grid.normalized_radial(Point::new(point.x, point.y));
        stroke_opacity(self.theme, point.pointer_dist, normalized)
    }
}
