//! Frame drawing: the only module that touches `CanvasRenderingContext2d`.
//!
//! Receives read-only scene state and produces pixels — it does not mutate
//! any animation state. All the 2D primitives used here (clear, stroke
//! styling, path segments) are infallible in the browser API, so drawing a
//! frame cannot fail once a context exists.

use web_sys::CanvasRenderingContext2d;

use crate::scene::{GridPoint, SceneCore};

/// Draw one frame of the animated grid.
///
/// Iterates rows top to bottom with two row buffers (current and previous)
/// so each vertical edge reuses the row above without recomputing it.
/// Buffer writes always happen; culling only skips segment drawing.
///
/// Each vertex strokes up to two segments — to its left neighbor and to the
/// vertex directly above — both styled with the vertex's own opacity and
/// color rather than an interpolation between endpoints.
pub fn draw(ctx: &CanvasRenderingContext2d, scene: &SceneCore) {
    let viewport = scene.viewport();
    let grid = scene.grid();
    let projector = scene.projector();

    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    ctx.set_line_width(scene.theme().line_width());

    let mut current: Vec<GridPoint> = Vec::with_capacity(grid.cols);
    let mut previous: Vec<GridPoint> = Vec::with_capacity(grid.cols);

    for row in 0..grid.rows {
        std::mem::swap(&mut current, &mut previous);
        current.clear();

        for col in 0..grid.cols {
            let point = scene.compute_point(row, col);
            current.push(point);

            let projected = projector.project(point.x, point.y, point.z);
            if !scene.visible(projected) {
                continue;
            }

            let opacity = scene.point_opacity(&point);
            ctx.set_stroke_style_str(&scene.theme().stroke_style(opacity));
            ctx.begin_path();

            if col > 0 {
                let left = current[col - 1];
                let left_projected = projector.project(left.x, left.y, left.z);
                ctx.move_to(left_projected.x, left_projected.y);
                ctx.line_to(projected.x, projected.y);
            }
            if row > 0 {
                let above = previous[col];
                let above_projected = projector.project(above.x, above.y, above.z);
                ctx.move_to(above_projected.x, above_projected.y);
                ctx.line_to(projected.x, projected.y);
            }
            ctx.stroke();
        }
    }
}
