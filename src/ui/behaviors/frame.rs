//! `requestAnimationFrame` loops

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::dom;
use crate::core::PageResult;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Run `step` once per display refresh until it returns `false`.
///
/// `step` receives the frame timestamp in milliseconds. The loop holds the
/// only reference to its closure and drops it after the last frame.
pub fn run_frames<F>(mut step: F) -> PageResult<()>
where
    F: FnMut(f64) -> bool + 'static,
{
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = callback.clone();

    *callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        if !step(timestamp) {
            // breaks the self-reference so the closure is freed
            let _ = next.borrow_mut().take();
            return;
        }
        if let Err(err) = request(&next) {
            leptos::logging::warn!("Animation stopped: {}", err);
            let _ = next.borrow_mut().take();
        }
    }));

    request(&callback)
}

/// Run `f` on the next frame only
pub fn next_frame<F>(f: F) -> PageResult<()>
where
    F: FnOnce() + 'static,
{
    let mut f = Some(f);
    run_frames(move |_| {
        if let Some(f) = f.take() {
            f();
        }
        false
    })
}

fn request(callback: &FrameCallback) -> PageResult<()> {
    if let Some(closure) = callback.borrow().as_ref() {
        dom::window()?.request_animation_frame(closure.as_ref().unchecked_ref())?;
    }
    Ok(())
}
