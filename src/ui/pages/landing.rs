//! Landing page component
//!
//! The Wayfarer landing page:
//! - SEO meta tags
//! - Fixed navbar with scroll-spy indicator and a burger menu for small screens
//! - Hero section with entrance animation and a smooth-scroll call to action
//! - About, gallery carousel and experiences sections
//! - Itinerary request form with interest bubbles and a confirmation message
//!
//! Markup is rendered by Leptos; the interactive behavior is attached once the
//! page is hydrated (see `ui::behaviors`).

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::ui::icon::{Icon, icons};

/// Sections reachable from the navbar, in page order
const NAV_SECTIONS: &[(&str, &str)] = &[
    ("hero", "Home"),
    ("about", "About"),
    ("gallery", "Gallery"),
    ("experiences", "Experiences"),
    ("itinerary", "Plan a Trip"),
];

const DESTINATIONS: &[(&str, &str)] = &[
    ("Lofoten Islands", "/images/gallery/lofoten.svg"),
    ("Kyoto", "/images/gallery/kyoto.svg"),
    ("Patagonia", "/images/gallery/patagonia.svg"),
    ("Marrakesh", "/images/gallery/marrakesh.svg"),
    ("Banff", "/images/gallery/banff.svg"),
    ("Azores", "/images/gallery/azores.svg"),
];

const CONFIRMATION_SOUND: &str = "/sounds/confirmation.wav";
const OG_IMAGE: &str = "/images/og-image.svg";
const FAVICON: &str = "/icons/compass.svg";

const EXPERIENCES: &[(&str, &str)] = &[
    (
        "Slow Travel",
        "Fewer stops, longer stays. Every itinerary leaves room to wander.",
    ),
    (
        "Local Guides",
        "Walk with people who live there, not people who read about it.",
    ),
    (
        "Small Groups",
        "Never more than eight travellers, so plans stay flexible.",
    ),
];

const INTERESTS: &[&str] = &[
    "Hiking",
    "Food",
    "Photography",
    "History",
    "Wildlife",
    "Beaches",
    "Architecture",
    "Nightlife",
];

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    // Widgets bind to the rendered DOM, so wait until the page is mounted
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            let config = crate::ui::behaviors::load_page_config();
            crate::ui::behaviors::init_page_behaviors(&config);
        });

        on_cleanup(crate::ui::behaviors::teardown_page_behaviors);
    }

    view! {
        <SeoMeta />

        <div class="landing">
            <Header />
            <SideNav />

            // Hero Section
            <section id="hero" class="hero">
                <div class="hero-content">
                    <h1>"Wayfarer"</h1>
                    <p id="sub-heading">
                        "Hand-built itineraries for travellers who would rather explore than plan."
                    </p>
                    <a id="hero-button" class="hero-button" href="#itinerary">
                        "Plan my trip"
                    </a>
                </div>
                <div class="hero-scroll-hint" aria-hidden="true">
                    <Icon name=icons::CHEVRON_DOWN class="icon-md" />
                </div>
            </section>

            // About Section
            <section id="about" class="about">
                <h2>"Travel, unhurried"</h2>
                <p>
                    "We design every trip around you: your pace, your interests, your budget. "
                    "Tell us what you love and we will put together a route worth taking."
                </p>
            </section>

            // Gallery Section
            <section id="gallery" class="gallery">
                <h2>"Where we go"</h2>
                <div class="gallery-container">
                    <button class="carousel-control prev" aria-label="Previous destination">
                        <Icon name=icons::CHEVRON_LEFT class="icon-md" />
                    </button>
                    <div class="gallery-viewport">
                        <div class="image-gallery">
                            {DESTINATIONS
                                .iter()
                                .map(|&(name, src)| view! { <GalleryItem name=name src=src /> })
                                .collect_view()}
                        </div>
                    </div>
                    <button class="carousel-control next" aria-label="Next destination">
                        <Icon name=icons::CHEVRON_RIGHT class="icon-md" />
                    </button>
                </div>
                <progress class="gallery-progress" max="100" value="0"></progress>
            </section>

            // Experiences Section
            <section id="experiences" class="experiences">
                <h2>"How we travel"</h2>
                <div class="experiences-grid">
                    {EXPERIENCES
                        .iter()
                        .map(|&(title, description)| {
                            view! { <ExperienceCard title=title description=description /> }
                        })
                        .collect_view()}
                </div>
            </section>

            // Itinerary Section
            <ItinerarySection />

            <Footer />
        </div>
    }
}

/// Fixed navbar with the scroll-spy underline
#[component]
fn Header() -> impl IntoView {
    view! {
        <nav id="main-nav" class="main-nav">
            <a href="#hero" class="brand">
                <Icon name=icons::COMPASS class="icon-md" />
                <span>"Wayfarer"</span>
            </a>
            <ul class="nav-links">
                {NAV_SECTIONS
                    .iter()
                    .map(|&(id, label)| {
                        view! {
                            <li>
                                <a href=format!("#{}", id)>{label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
                <span id="nav-indicator" class="nav-indicator" aria-hidden="true"></span>
            </ul>
            <button id="burger-menu" class="burger-menu" aria-label="Toggle navigation menu">
                <Icon name=icons::MENU class="icon-md" />
            </button>
        </nav>
    }
}

/// Slide-in navigation for small screens
#[component]
fn SideNav() -> impl IntoView {
    view! {
        <nav id="side-nav" class="side-nav">
            <ul>
                {NAV_SECTIONS
                    .iter()
                    .map(|&(id, label)| {
                        view! {
                            <li>
                                <a href=format!("#{}", id)>{label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

/// Single carousel image
#[component]
fn GalleryItem(name: &'static str, src: &'static str) -> impl IntoView {
    view! {
        <figure class="gallery-item">
            <img src=src alt=name loading="lazy" draggable="false" />
            <figcaption>{name}</figcaption>
        </figure>
    }
}

/// Experience card component
#[component]
fn ExperienceCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="experience-card">
            <Icon name=icons::MAP_PIN class="icon-lg" />
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

/// Itinerary request form and its confirmation message
#[component]
fn ItinerarySection() -> impl IntoView {
    view! {
        <section id="itinerary" class="itinerary">
            <h2>"Plan your trip"</h2>
            <p id="itinerary-descriptor">
                "Pick what you are into and tell us when you want to go. We will be in touch within two days."
            </p>

            <form id="itinerary-form" class="itinerary-form">
                <div class="bubbles" role="group" aria-label="Interests">
                    {INTERESTS
                        .iter()
                        .map(|&interest| view! { <span class="bubble">{interest}</span> })
                        .collect_view()}
                </div>

                <label>
                    "Name"
                    <input type="text" name="name" autocomplete="name" />
                </label>
                <label>
                    "Email"
                    <input type="email" name="email" autocomplete="email" />
                </label>
                <label>
                    "When"
                    <input type="month" name="month" />
                </label>

                <button id="submit-btn" type="submit" class="submit-button">
                    "Send request"
                </button>
            </form>

            <div id="confirmation-message" class="confirmation-message" style="display: none;">
                <Icon name=icons::CHECK class="icon-lg" />
                <h3>"Request received"</h3>
                <p>"Thanks! Your travel designer will reach out soon."</p>
            </div>

            <audio id="confirmation-sound" src=CONFIRMATION_SOUND preload="auto"></audio>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© 2026 Wayfarer Travel"</p>
        </footer>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Wayfarer - Hand-built Travel Itineraries" />

        <Meta name="description" content="Hand-built travel itineraries around your pace and interests. Small groups, local guides, slow travel." />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Wayfarer - Hand-built Travel Itineraries" />
        <Meta property="og:description" content="Hand-built travel itineraries around your pace and interests." />
        <Meta property="og:image" content=OG_IMAGE />

        <Link rel="icon" type_="image/svg+xml" href=FAVICON />
    }
}
