//! Itinerary form: confirmation swap and bubble selectors

use web_sys::{Element, HtmlMediaElement};

use super::dom;
use crate::core::{FormPhase, PageResult};

pub const FORM_SELECTOR: &str = "#itinerary-form";
pub const DESCRIPTOR_SELECTOR: &str = "#itinerary-descriptor";
pub const CONFIRMATION_SELECTOR: &str = "#confirmation-message";
pub const SUBMIT_SELECTOR: &str = "#submit-btn";
pub const SOUND_SELECTOR: &str = "#confirmation-sound";
pub const BUBBLE_SELECTOR: &str = ".bubble";

struct FormRegions {
    form: Element,
    descriptor: Element,
    confirmation: Element,
}

impl FormRegions {
    fn show(&self, phase: FormPhase) -> PageResult<()> {
        let visibility = phase.visibility();
        dom::set_style(&self.form, "display", visibility.form)?;
        dom::set_style(&self.descriptor, "display", visibility.descriptor)?;
        dom::set_style(&self.confirmation, "display", visibility.confirmation)
    }
}

/// Swap the form for the confirmation message on submit.
pub fn init() -> PageResult<()> {
    let regions = FormRegions {
        form: dom::query(FORM_SELECTOR)?,
        descriptor: dom::query(DESCRIPTOR_SELECTOR)?,
        confirmation: dom::query(CONFIRMATION_SELECTOR)?,
    };
    let submit = dom::query(SUBMIT_SELECTOR)?;
    let sound = dom::query_as::<HtmlMediaElement>(SOUND_SELECTOR, "media element").ok();
    let mut phase = FormPhase::default();

    dom::listen(&submit, "click", move |event| {
        event.prevent_default();

        if !phase.submit() {
            return;
        }

        if let Err(err) = regions.show(phase) {
            leptos::logging::warn!("Itinerary form: {}", err);
        }
        if let Some(sound) = &sound {
            // autoplay policies may reject; the confirmation is shown regardless
            let _ = sound.play();
        }
    })
}

/// Toggle the `selected` state of each bubble on click.
pub fn init_bubbles() -> PageResult<()> {
    for bubble in dom::query_all(BUBBLE_SELECTOR)? {
        let target = bubble.clone();
        dom::listen(&bubble, "click", move |_| {
            let _ = target.class_list().toggle("selected");
        })?;
    }
    Ok(())
}
