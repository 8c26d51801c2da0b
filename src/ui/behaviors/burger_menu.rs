//! Mobile side navigation toggled by the burger button

use wasm_bindgen::JsCast;
use web_sys::Element;

use super::dom;
use crate::core::PageResult;

pub const BURGER_SELECTOR: &str = "#burger-menu";
pub const SIDE_NAV_SELECTOR: &str = "#side-nav";
pub const OPEN_CLASS: &str = "open";

pub fn init() -> PageResult<()> {
    let burger = dom::query(BURGER_SELECTOR)?;
    let side_nav = dom::query(SIDE_NAV_SELECTOR)?;

    {
        let side_nav = side_nav.clone();
        dom::listen(&burger, "click", move |_| {
            let _ = side_nav.class_list().toggle(OPEN_CLASS);
        })?;
    }

    let panel = side_nav.clone();
    dom::listen(&side_nav, "click", move |event| {
        let clicked_link = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|element| element.closest("a").ok().flatten())
            .is_some();

        if clicked_link {
            let _ = panel.class_list().remove_1(OPEN_CLASS);
        }
    })
}
