//! Debounced event handlers backed by browser timers

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use super::dom;
use crate::core::Debouncer;

struct Shared {
    debouncer: Debouncer,
    /// Dropping a pending `Timeout` cancels it
    timer: Option<Timeout>,
}

/// Wrap `callback` so that bursts of calls collapse into one invocation.
///
/// Each call restarts the quiet-period timer. With an immediate debouncer the
/// callback runs on the leading call of a burst, otherwise once the timer
/// fires.
pub fn debounced<F>(debouncer: Debouncer, callback: F) -> impl FnMut() + 'static
where
    F: Fn() + 'static,
{
    let callback = Rc::new(callback);
    let shared = Rc::new(RefCell::new(Shared {
        debouncer,
        timer: None,
    }));

    move || {
        let Ok(window) = dom::window() else {
            return;
        };

        let (call_now, wait_ms) = {
            let mut state = shared.borrow_mut();
            let call_now = state.debouncer.trigger(dom::now(&window));
            (call_now, state.debouncer.wait_ms())
        };

        let timer = {
            let shared = shared.clone();
            let callback = callback.clone();
            // timer clocks are coarser than `performance.now()`
            Timeout::new(wait_ms.ceil() as u32 + 1, move || {
                // the fired timer stays in `shared` until the next call replaces it
                let fire = dom::window()
                    .map(|window| shared.borrow_mut().debouncer.expire(dom::now(&window)))
                    .unwrap_or(false);
                if fire {
                    callback();
                }
            })
        };
        shared.borrow_mut().timer = Some(timer);

        if call_now {
            callback();
        }
    }
}
