//! The backdrop renderer: binds a canvas element to scene state.

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::render;
use crate::scene::SceneCore;
use crate::style::Theme;

/// Failure to acquire a drawing context at construction time.
///
/// Callers log and ignore this: the backdrop is decorative, so the page
/// simply renders without it and the frame loop never starts.
#[derive(Debug, Error)]
pub enum InitError {
    /// `get_context("2d")` returned nothing or an unexpected object.
    #[error("canvas 2d context unavailable")]
    ContextUnavailable,
}

/// Owns the canvas element, its 2D context, and the scene state.
///
/// The frame loop lives in [`crate::raf`]; theme changes are handled by
/// dropping the renderer and constructing a fresh one rather than mutating
/// the palette in place.
pub struct Renderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    scene: SceneCore,
}

impl Renderer {
    /// Bind a renderer to `canvas`, sizing its backing store to the given
    /// viewport dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::ContextUnavailable`] when the 2D context cannot
    /// be acquired.
    pub fn new(canvas: HtmlCanvasElement, width: f64, height: f64, theme: Theme) -> Result<Self, InitError> {
        let ctx_object = match canvas.get_context("2d") {
            Ok(Some(object)) => object,
            _ => return Err(InitError::ContextUnavailable),
        };
        let Ok(ctx) = ctx_object.dyn_into::<CanvasRenderingContext2d>() else {
            return Err(InitError::ContextUnavailable);
        };

        let mut renderer = Self { canvas, ctx, scene: SceneCore::new(width, height, theme) };
        renderer.size_backing_store();
        Ok(renderer)
    }

    /// Update viewport dimensions on resize. Takes effect on the next frame.
    pub fn on_resize(&mut self, width: f64, height: f64) {
        self.scene.set_viewport(width, height);
        self.size_backing_store();
    }

    /// Record a raw pointer position. The eased position catches up inside
    /// the frame loop.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.scene.set_pointer_target(x, y);
    }

    /// Advance and paint one frame.
    pub fn frame(&mut self) {
        self.scene.begin_frame();
        render::draw(&self.ctx, &self.scene);
    }

    #[must_use]
    pub fn scene(&self) -> &SceneCore {
        &self.scene
    }

    fn size_backing_store(&self) {
        let viewport = self.scene.viewport();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            self.canvas.set_width(viewport.width.round().max(0.0) as u32);
            self.canvas.set_height(viewport.height.round().max(0.0) as u32);
        }
    }
}
