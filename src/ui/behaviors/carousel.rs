//! Gallery carousel bound to the `.image-gallery` strip

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::JsValue;
use web_sys::{Element, HtmlElement, HtmlProgressElement};

use super::{dom, frame};
use crate::core::{
    Breakpoints, CarouselState, Easing, PageConfig, PageResult, Tween, visible_count,
};

pub const NEXT_SELECTOR: &str = ".next";
pub const PREV_SELECTOR: &str = ".prev";
pub const GALLERY_SELECTOR: &str = ".image-gallery";
pub const PROGRESS_SELECTOR: &str = ".gallery-progress";

struct Carousel {
    gallery: HtmlElement,
    progress: Element,
    state: RefCell<CarouselState>,
    /// Strip offset as last written to the DOM
    offset: Cell<f64>,
    tween_ms: f64,
    breakpoints: Breakpoints,
}

impl Carousel {
    fn visible(&self) -> PageResult<usize> {
        let (width, _) = dom::viewport(&dom::window()?)?;
        Ok(visible_count(width, &self.breakpoints))
    }

    fn item_width(&self) -> f64 {
        self.gallery
            .first_element_child()
            .and_then(|item| item.dyn_into::<HtmlElement>().ok())
            .map(|item| item.offset_width() as f64)
            .unwrap_or_default()
    }

    fn next(self: &Rc<Self>) -> PageResult<()> {
        let visible = self.visible()?;
        self.sync_item_count();
        self.state.borrow_mut().next(visible);
        self.render()
    }

    fn prev(self: &Rc<Self>) -> PageResult<()> {
        self.state.borrow_mut().prev();
        self.render()
    }

    fn sync_item_count(&self) {
        let count = self.gallery.children().length() as usize;
        self.state.borrow_mut().set_item_count(count);
    }

    /// Move the strip to the current position and refresh the progress bar.
    fn render(self: &Rc<Self>) -> PageResult<()> {
        self.sync_item_count();
        let visible = self.visible()?;
        self.state.borrow_mut().clamp_to(visible);

        let Some(rendered) = self.state.borrow().render(visible, self.item_width()) else {
            return Ok(());
        };

        self.set_progress(rendered.progress)?;
        self.slide_to(rendered.offset_px)
    }

    fn set_progress(&self, value: f64) -> PageResult<()> {
        match self.progress.dyn_ref::<HtmlProgressElement>() {
            Some(progress) => progress.set_value(value),
            // component-library progress bars expose `value` as a plain property
            None => {
                js_sys::Reflect::set(&self.progress, &"value".into(), &JsValue::from_f64(value))?;
            }
        }
        Ok(())
    }

    fn slide_to(self: &Rc<Self>, target: f64) -> PageResult<()> {
        let tween = Tween::new(self.offset.get(), target, self.tween_ms).with_easing(Easing::Power2Out);
        let carousel = self.clone();
        let mut started_at = None;

        frame::run_frames(move |now| {
            let elapsed = now - *started_at.get_or_insert(now);
            let offset = tween.value_at(elapsed);
            carousel.offset.set(offset);
            let _ = dom::set_style(&carousel.gallery, "transform", &format!("translateX({offset}px)"));
            !tween.is_finished(elapsed)
        })
    }
}

/// Wire the next/prev controls and resize handling of the gallery.
pub fn init(config: &PageConfig) -> PageResult<()> {
    let next_button = dom::query(NEXT_SELECTOR)?;
    let gallery = dom::query_as::<HtmlElement>(GALLERY_SELECTOR, "HTML element")?;
    let progress = dom::query(PROGRESS_SELECTOR)?;

    let carousel = Rc::new(Carousel {
        state: RefCell::new(CarouselState::new(gallery.children().length() as usize)),
        gallery,
        progress,
        offset: Cell::new(0.0),
        tween_ms: config.carousel_tween_ms,
        breakpoints: config.breakpoints,
    });

    {
        let carousel = carousel.clone();
        dom::listen(&next_button, "click", move |_| {
            if let Err(err) = carousel.next() {
                leptos::logging::warn!("Carousel: {}", err);
            }
        })?;
    }

    // previous control is optional
    if let Ok(prev_button) = dom::query(PREV_SELECTOR) {
        let carousel = carousel.clone();
        dom::listen(&prev_button, "click", move |_| {
            if let Err(err) = carousel.prev() {
                leptos::logging::warn!("Carousel: {}", err);
            }
        })?;
    }

    {
        let carousel = carousel.clone();
        dom::listen(&dom::window()?, "resize", move |_| {
            if let Err(err) = carousel.render() {
                leptos::logging::warn!("Carousel: {}", err);
            }
        })?;
    }

    carousel.render()
}
