//! Shared numeric constants for the backdrop renderer.

// ── Grid topology ───────────────────────────────────────────────

/// Number of grid rows.
pub const GRID_ROWS: usize = 160;

/// Number of grid columns.
pub const GRID_COLS: usize = 160;

/// Spacing between adjacent grid vertices, in grid units.
pub const GRID_GAP: f64 = 45.0;

// ── Animation ───────────────────────────────────────────────────

/// Clock increment per frame.
pub const TIME_STEP: f64 = 0.01;

/// Fraction of the remaining pointer delta applied per frame.
pub const POINTER_EASE: f64 = 0.05;

// ── Wave shape ──────────────────────────────────────────────────

/// Phase advance per row/column index.
pub const WAVE_PHASE_STEP: f64 = 0.1;

/// Peak wave height multiplier at full radial distance.
pub const WAVE_AMPLITUDE: f64 = 60.0;

/// Divisor normalizing radial distance from the grid center.
pub const RADIAL_DIST_SCALE: f64 = 2500.0;

// ── Pointer interaction ─────────────────────────────────────────

/// Half-width of the broad-phase x band around the pointer, in grid units.
pub const POINTER_BROADPHASE_X: f64 = 1000.0;

/// Interaction radius around the pointer in the approximate projection.
pub const POINTER_RADIUS: f64 = 500.0;

/// Angular frequency of the pointer ripple.
pub const RIPPLE_FREQUENCY: f64 = 0.006;

/// Peak depth of the pointer ripple displacement.
pub const RIPPLE_DEPTH: f64 = 100.0;

/// Sentinel pointer distance meaning "no interaction".
pub const POINTER_FAR: f64 = 9999.0;

// ── Projection ──────────────────────────────────────────────────

/// Fixed isometric rotation angle in radians.
pub const ISO_ANGLE: f64 = 0.5;

/// Maximum tilt in radians when the pointer reaches a viewport edge.
pub const TILT_RANGE: f64 = 0.05;

/// Horizontal scale of the broad-phase approximate projection.
pub const APPROX_X_SCALE: f64 = 0.8;

/// Vertical scale of the broad-phase approximate projection.
pub const APPROX_Y_SCALE: f64 = 0.5;

// ── Culling / style ─────────────────────────────────────────────

/// Margin around the viewport inside which points still draw, in pixels.
pub const CULL_BUFFER_PX: f64 = 100.0;

/// Peak pointer-proximity opacity boost.
pub const HIGHLIGHT_OPACITY: f64 = 0.5;

/// Opacity contribution per unit of normalized radial distance.
pub const DEPTH_OPACITY_SCALE: f64 = 0.3;

/// Hard cap on stroke opacity.
pub const MAX_OPACITY: f64 = 0.6;
