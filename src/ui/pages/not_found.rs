//! Not found page component
//!
//! A 404 page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found - Wayfarer" />

        <div class="not-found">
            <Icon name=icons::COMPASS class="icon-xl" />

            <h1>"404"</h1>
            <h2>"Off the map"</h2>
            <p>"The page you're looking for doesn't exist or has been moved."</p>

            <A href="/" attr:class="hero-button">
                "Back to Wayfarer"
            </A>
        </div>
    }
}
