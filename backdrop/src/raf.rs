//! requestAnimationFrame loop ownership with guaranteed cancellation.
//!
//! `LoopState` is plain data so the stop/tick contract is testable without
//! a browser; [`FrameLoop`] wraps it with the wasm closure machinery.

#[cfg(test)]
#[path = "raf_test.rs"]
mod raf_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::renderer::Renderer;

/// Scheduling state shared between the loop handle and the frame callback.
///
/// `stop` both cancels the pending registration and flips `stopped`, which
/// the callback checks before drawing — so no frame runs after `stop`
/// returns even when the host cannot cancel synchronously.
#[derive(Debug, Default)]
pub struct LoopState {
    stopped: bool,
    pending: Option<i32>,
}

impl LoopState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gate at the top of every frame callback. Clears the pending handle
    /// and reports whether the frame may run.
    pub fn begin_frame(&mut self) -> bool {
        self.pending = None;
        !self.stopped
    }

    /// Record the handle of a newly scheduled callback.
    pub fn scheduled(&mut self, handle: i32) {
        self.pending = Some(handle);
    }

    /// Mark the loop stopped and yield the handle to cancel, if any.
    pub fn stop(&mut self) -> Option<i32> {
        self.stopped = true;
        self.pending.take()
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

/// Handle to a running requestAnimationFrame loop over a [`Renderer`].
///
/// Dropping the handle does not stop the loop; call [`FrameLoop::stop`].
/// Starting a second loop over the same renderer is a caller error.
pub struct FrameLoop {
    state: Rc<RefCell<LoopState>>,
}

impl FrameLoop {
    /// Start the loop: the renderer advances and paints once per animation
    /// frame until [`stop`](Self::stop) is called.
    #[must_use]
    pub fn start(renderer: Rc<RefCell<Renderer>>) -> Self {
        let state = Rc::new(RefCell::new(LoopState::new()));
        schedule(&state, &renderer);
        Self { state }
    }

    /// Stop the loop. No frame callback runs after this returns.
    pub fn stop(&self) {
        let handle = self.state.borrow_mut().stop();
        let Some(handle) = handle else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        if window.cancel_animation_frame(handle).is_err() {
            log::debug!("cancel_animation_frame failed; the stopped flag gates the callback");
        }
    }
}

/// Register the next frame callback. Each frame holds its own closure alive
/// through a holder cell and releases it after running.
fn schedule(state: &Rc<RefCell<LoopState>>, renderer: &Rc<RefCell<Renderer>>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let state_for_cb = Rc::clone(state);
    let renderer_for_cb = Rc::clone(renderer);
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);

    let cb = Closure::wrap(Box::new(move |_timestamp: f64| {
        if state_for_cb.borrow_mut().begin_frame() {
            renderer_for_cb.borrow_mut().frame();
            schedule(&state_for_cb, &renderer_for_cb);
        }
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(handle) => {
            state.borrow_mut().scheduled(handle);
            *holder.borrow_mut() = Some(cb);
        }
        Err(_) => {
            log::warn!("request_animation_frame unavailable; backdrop loop not scheduled");
        }
    }
}
