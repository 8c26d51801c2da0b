use leptos::prelude::*;

/// SVG icon served from `/icons`
#[component]
pub fn Icon(
    /// Icon file name without the `.svg` extension
    name: &'static str,
    #[prop(default = "icon-sm")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const COMPASS: &str = "compass";
    pub const MENU: &str = "menu";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const MAP_PIN: &str = "map-pin";
    pub const CHECK: &str = "check";
}
