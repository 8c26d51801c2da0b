//! Browser side of the landing page behaviors.
//!
//! Each widget looks up its own elements and attaches its own listeners. A
//! widget whose markup is missing is skipped with a diagnostic; the others
//! still initialize.

mod burger_menu;
mod carousel;
mod debounce;
mod dom;
mod form;
mod frame;
mod reveal;
mod scroll_spy;
mod smooth_scroll;

pub use smooth_scroll::scroll_to;

use crate::core::config::CONFIG_ELEMENT_ID;
use crate::core::{PageConfig, PageResult};

/// Read the configuration the server embedded in the page head.
pub fn load_page_config() -> PageConfig {
    let embedded = dom::document()
        .ok()
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match embedded {
        Some(json) => PageConfig::from_embedded_json(&json).unwrap_or_else(|err| {
            leptos::logging::warn!("Unreadable page config, using defaults: {}", err);
            PageConfig::default()
        }),
        None => PageConfig::default(),
    }
}

fn report(widget: &str, result: PageResult<()>) {
    match result {
        Ok(()) => {}
        Err(err) if err.is_missing_markup() => {
            leptos::logging::log!("{} not initialized: {}", widget, err);
        }
        Err(err) => leptos::logging::warn!("{} failed to initialize: {}", widget, err),
    }
}

/// Attach every page widget, after the page is mounted.
///
/// Listeners left over from an earlier mount are detached first, so calling
/// this again never stacks handlers.
pub fn init_page_behaviors(config: &PageConfig) {
    teardown_page_behaviors();

    report("Nav indicator", scroll_spy::init(config));
    report("Smooth scroll", smooth_scroll::init(config));
    report("Itinerary form", form::init());
    report("Bubble selectors", form::init_bubbles());
    report("Carousel", carousel::init(config));
    report("Burger menu", burger_menu::init());
    report("Reveal animations", reveal::init());
}

/// Detach every listener the page widgets attached.
pub fn teardown_page_behaviors() {
    let detached = dom::detach_all();
    if detached > 0 {
        leptos::logging::log!("Detached {} page listeners", detached);
    }
}
