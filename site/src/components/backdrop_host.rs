//! Bridge component between Leptos state and the imperative backdrop
//! renderer.
//!
//! ARCHITECTURE
//! ============
//! The backdrop crate owns the frame loop and render-time concerns; this
//! host wires DOM events (resize, pointer) into the renderer and rebuilds
//! it from scratch whenever the theme changes, so palette swaps never
//! inherit stale eased-pointer state.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::state::theme::ThemeState;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use backdrop::raf::FrameLoop;
#[cfg(feature = "csr")]
use backdrop::renderer::Renderer;
#[cfg(feature = "csr")]
use backdrop::style::Theme;
#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;
#[cfg(feature = "csr")]
use wasm_bindgen::closure::Closure;

/// A running renderer and its frame loop, torn down as one unit.
#[cfg(feature = "csr")]
struct ActiveBackdrop {
    renderer: Rc<RefCell<Renderer>>,
    frame_loop: FrameLoop,
}

/// Full-viewport canvas hosting the animated grid backdrop.
///
/// Sits behind all page content; pointer events are observed on the window
/// so the grid reacts even while the cursor is over page chrome.
#[component]
pub fn BackdropHost() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    {
        let theme = expect_context::<RwSignal<ThemeState>>();
        let active: Rc<RefCell<Option<ActiveBackdrop>>> = Rc::new(RefCell::new(None));

        // (Re)build the renderer on mount and on every theme change.
        {
            let active = Rc::clone(&active);
            let canvas_ref_mount = canvas_ref.clone();
            Effect::new(move || {
                let current_theme = theme.get().theme;
                let Some(canvas) = canvas_ref_mount.get() else {
                    return;
                };
                if let Some(previous) = active.borrow_mut().take() {
                    previous.frame_loop.stop();
                }
                *active.borrow_mut() = start_backdrop(&canvas, current_theme);
            });
        }

        // Window listeners: resize and pointer. The closures live until the
        // component unmounts; cleanup removes the listeners and stops the
        // loop.
        {
            let active_for_resize = Rc::clone(&active);
            let resize = Closure::wrap(Box::new(move || {
                let Some((width, height)) = window_size() else {
                    return;
                };
                if let Some(running) = active_for_resize.borrow().as_ref() {
                    running.renderer.borrow_mut().on_resize(width, height);
                }
            }) as Box<dyn FnMut()>);

            let active_for_pointer = Rc::clone(&active);
            let pointer = Closure::wrap(Box::new(move |ev: web_sys::MouseEvent| {
                if let Some(running) = active_for_pointer.borrow().as_ref() {
                    running
                        .renderer
                        .borrow_mut()
                        .on_pointer_move(f64::from(ev.client_x()), f64::from(ev.client_y()));
                }
            }) as Box<dyn FnMut(web_sys::MouseEvent)>);

            if let Some(window) = web_sys::window() {
                let _ = window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
                let _ = window.add_event_listener_with_callback("mousemove", pointer.as_ref().unchecked_ref());
            }

            let active_for_cleanup = Rc::clone(&active);
            on_cleanup(move || {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
                    let _ = window.remove_event_listener_with_callback("mousemove", pointer.as_ref().unchecked_ref());
                }
                if let Some(running) = active_for_cleanup.borrow_mut().take() {
                    running.frame_loop.stop();
                }
            });
        }
    }

    view! {
        <canvas class="backdrop-canvas" node_ref=canvas_ref></canvas>
    }
}

/// Construct and start a renderer for the current window size. A missing 2D
/// context disables the backdrop instead of failing the page.
#[cfg(feature = "csr")]
fn start_backdrop(canvas: &web_sys::HtmlCanvasElement, theme: Theme) -> Option<ActiveBackdrop> {
    let (width, height) = window_size()?;
    match Renderer::new(canvas.clone(), width, height, theme) {
        Ok(renderer) => {
            let renderer = Rc::new(RefCell::new(renderer));
            let frame_loop = FrameLoop::start(Rc::clone(&renderer));
            Some(ActiveBackdrop { renderer, frame_loop })
        }
        Err(err) => {
            log::warn!("backdrop disabled: {err}");
            None
        }
    }
}

/// Current window inner dimensions in CSS pixels.
#[cfg(feature = "csr")]
fn window_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}
