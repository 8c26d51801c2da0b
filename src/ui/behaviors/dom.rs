//! Thin helpers over `web_sys` for looking up elements and wiring listeners

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::JsValue;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

use crate::core::{PageError, PageResult, Rect, Subscriptions};

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Browser(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

pub fn window() -> PageResult<Window> {
    web_sys::window().ok_or_else(|| PageError::missing("window"))
}

pub fn document() -> PageResult<Document> {
    window()?
        .document()
        .ok_or_else(|| PageError::missing("document"))
}

/// First element matching `selector`
pub fn query(selector: &str) -> PageResult<Element> {
    document()?
        .query_selector(selector)?
        .ok_or_else(|| PageError::missing(selector))
}

/// First element matching `selector`, cast to a concrete element type
pub fn query_as<T: JsCast>(selector: &str, expected: &'static str) -> PageResult<T> {
    query(selector)?
        .dyn_into::<T>()
        .map_err(|_| PageError::UnexpectedElement {
            selector: selector.to_string(),
            expected,
        })
}

/// All elements matching `selector`, in document order
pub fn query_all(selector: &str) -> PageResult<Vec<Element>> {
    let nodes = document()?.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn html(element: &Element) -> Option<&HtmlElement> {
    element.dyn_ref::<HtmlElement>()
}

/// Bounding client rect of an element
pub fn rect_of(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Viewport size in CSS pixels
pub fn viewport(window: &Window) -> PageResult<(f64, f64)> {
    let width = window.inner_width()?.as_f64().unwrap_or_default();
    let height = window.inner_height()?.as_f64().unwrap_or_default();
    Ok((width, height))
}

/// High resolution timestamp in milliseconds
pub fn now(window: &Window) -> f64 {
    window
        .performance()
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

pub fn set_style(element: &Element, property: &str, value: &str) -> PageResult<()> {
    if let Some(html) = html(element) {
        html.style().set_property(property, value)?;
    }
    Ok(())
}

pub fn clear_style(element: &Element, property: &str) -> PageResult<()> {
    if let Some(html) = html(element) {
        html.style().remove_property(property)?;
    }
    Ok(())
}

struct Listener {
    target: EventTarget,
    event: String,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

// Listeners attached by the page widgets, detached together on unmount
thread_local! {
    static LISTENERS: RefCell<Subscriptions<Listener>> = const { RefCell::new(Subscriptions::new()) };
}

/// Attach a listener that stays until [`detach_all`].
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> PageResult<()>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;

    LISTENERS.with(|listeners| {
        listeners.borrow_mut().add(Listener {
            target: target.clone(),
            event: event.to_string(),
            closure,
        })
    });
    Ok(())
}

/// Remove every listener added through [`listen`]; returns how many there were.
pub fn detach_all() -> usize {
    let detached = LISTENERS.with(|listeners| listeners.borrow_mut().release());
    for listener in &detached {
        let _ = listener
            .target
            .remove_event_listener_with_callback(&listener.event, listener.closure.as_ref().unchecked_ref());
    }
    detached.len()
}
