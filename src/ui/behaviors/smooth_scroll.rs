//! Eased window scrolling to in-page sections

use web_sys::HtmlElement;

use super::{dom, frame};
use crate::core::smooth_scroll::target_offset;
use crate::core::{PageConfig, PageResult, ScrollAnimation};

pub const NAVBAR_SELECTOR: &str = "nav";
pub const NAV_LINK_SELECTOR: &str = "nav ul li a";
pub const HERO_BUTTON_SELECTOR: &str = "#hero-button";

/// Animate the window so the section matched by `target` sits under the navbar.
///
/// A scroll already in flight is not cancelled; both write the scroll
/// position every frame until each runs out.
pub fn scroll_to(target: &str, duration_ms: f64) -> PageResult<()> {
    let window = dom::window()?;
    let navbar = dom::query_as::<HtmlElement>(NAVBAR_SELECTOR, "HTML element")?;
    let section = dom::query_as::<HtmlElement>(target, "HTML element")?;

    let destination = target_offset(section.offset_top() as f64, navbar.offset_height() as f64);
    let mut animation = ScrollAnimation::new(window.scroll_y()?, destination, duration_ms);

    frame::run_frames(move |now| {
        let step = animation.step(now);
        window.scroll_to_with_x_and_y(0.0, step.position);
        step.keep_going
    })
}

/// Only same-page anchors are animated; other links navigate normally
fn section_anchor(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Animate clicks on nav links and the hero button.
pub fn init(config: &PageConfig) -> PageResult<()> {
    let duration_ms = config.scroll_duration_ms;

    for link in dom::query_all(NAV_LINK_SELECTOR)? {
        let Some(target) = link
            .get_attribute("href")
            .and_then(|href| section_anchor(&href).map(str::to_string))
        else {
            continue;
        };

        dom::listen(&link, "click", move |event| {
            event.prevent_default();
            if let Err(err) = scroll_to(&target, duration_ms) {
                leptos::logging::warn!("Smooth scroll to {}: {}", target, err);
            }
        })?;
    }

    if let Ok(hero_button) = dom::query(HERO_BUTTON_SELECTOR) {
        let target = config.hero_target.clone();
        dom::listen(&hero_button, "click", move |event| {
            event.prevent_default();
            if let Err(err) = scroll_to(&target, duration_ms) {
                leptos::logging::warn!("Smooth scroll to {}: {}", target, err);
            }
        })?;
    }

    Ok(())
}
