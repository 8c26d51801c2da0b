//! Wayfarer - travel agency landing page
//!
//! A server-rendered Leptos page hydrated with WebAssembly. The page logic
//! (carousel paging, scroll spy, scroll tweens, reveal triggers) lives in
//! [`core`] and runs natively; `ui::behaviors` binds it to the browser.

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
