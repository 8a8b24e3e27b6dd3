//! Grid topology and wave-surface height math.
//!
//! The planar layout (rows x columns, spacing) is fixed for the life of a
//! renderer instance; only the height computed from the clock and pointer
//! varies per frame.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::consts::{GRID_COLS, GRID_GAP, GRID_ROWS, RADIAL_DIST_SCALE, WAVE_AMPLITUDE, WAVE_PHASE_STEP};
use crate::project::Point;

/// Immutable grid topology: row/column counts and vertex spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub rows: usize,
    pub cols: usize,
    pub gap: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self { rows: GRID_ROWS, cols: GRID_COLS, gap: GRID_GAP }
    }
}

impl GridSpec {
    /// Planar position of cell (row, col), centered on the grid origin.
    ///
    /// Depends only on the cell indices and spacing, never on time or the
    /// pointer.
    #[must_use]
    pub fn planar(&self, row: usize, col: usize) -> Point {
        let x = (col as f64).mul_add(self.gap, -(self.cols as f64) * self.gap * 0.5);
        let y = (row as f64).mul_add(self.gap, -(self.rows as f64) * self.gap * 0.5);
        Point::new(x, y)
    }

    /// Radial distance of a planar position from the grid center, normalized
    /// by the fixed distance scale.
    #[must_use]
    pub fn normalized_radial(&self, planar: Point) -> f64 {
        planar.x.hypot(planar.y) / RADIAL_DIST_SCALE
    }
}

/// Base wave height at cell (row, col) for a given clock value, before any
/// pointer displacement.
#[must_use]
pub fn wave_height(row: usize, col: usize, time: f64, normalized_radial: f64) -> f64 {
    let row_phase = (row as f64).mul_add(WAVE_PHASE_STEP, time);
    let col_phase = (col as f64).mul_add(WAVE_PHASE_STEP, time);
    row_phase.sin() * col_phase.cos() * (normalized_radial * WAVE_AMPLITUDE)
}
