//! Page behavior configuration.
//!
//! The server loads `PageConfig` from environment variables (call
//! `dotenvy::dotenv()` first), renders it into the page head as JSON and the
//! hydrated client reads it back. Anything missing falls back to defaults.

use serde::{Deserialize, Serialize};

/// Id of the `<script type="application/json">` element carrying the config
pub const CONFIG_ELEMENT_ID: &str = "page-config";

/// Default duration of a smooth scroll to a section
pub const DEFAULT_SCROLL_DURATION_MS: f64 = 1200.0;

/// Default quiet period of the scroll/resize debounce
pub const DEFAULT_DEBOUNCE_MS: u32 = 10;

/// Default duration of the carousel strip tween
pub const DEFAULT_CAROUSEL_TWEEN_MS: f64 = 100.0;

/// Section the hero button scrolls to
pub const DEFAULT_HERO_TARGET: &str = "#itinerary";

/// Viewport widths (inclusive, in CSS pixels) where the layout changes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// Up to this width the carousel shows a single image
    pub small: f64,
    /// Up to this width the carousel shows two images and the nav indicator is hidden
    pub medium: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            small: 480.0,
            medium: 768.0,
        }
    }
}

impl Breakpoints {
    pub fn is_mobile(&self, viewport_width: f64) -> bool {
        viewport_width <= self.medium
    }
}

/// Tunables shared by every page behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub scroll_duration_ms: f64,
    pub debounce_ms: u32,
    pub carousel_tween_ms: f64,
    /// Selector of the section the hero button scrolls to
    pub hero_target: String,
    pub breakpoints: Breakpoints,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scroll_duration_ms: DEFAULT_SCROLL_DURATION_MS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            carousel_tween_ms: DEFAULT_CAROUSEL_TWEEN_MS,
            hero_target: DEFAULT_HERO_TARGET.to_string(),
            breakpoints: Breakpoints::default(),
        }
    }
}

impl PageConfig {
    /// Serialize for embedding inside a `<script>` element.
    ///
    /// `<` is escaped so a value can never close the surrounding tag.
    pub fn to_embedded_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_string())
            .replace('<', "\\u003c")
    }

    /// Parse the embedded JSON written by [`PageConfig::to_embedded_json`]
    pub fn from_embedded_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load configuration from environment variables.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from a key lookup, keeping defaults for absent or
    /// unparsable values.
    #[cfg(feature = "ssr")]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(ms) = parse_duration(&lookup, "WAYFARER_SCROLL_DURATION_MS") {
            config.scroll_duration_ms = ms;
        }
        if let Some(ms) = parse_var(&lookup, "WAYFARER_DEBOUNCE_MS") {
            config.debounce_ms = ms;
        }
        if let Some(ms) = parse_duration(&lookup, "WAYFARER_CAROUSEL_TWEEN_MS") {
            config.carousel_tween_ms = ms;
        }
        if let Some(target) = lookup("WAYFARER_HERO_TARGET") {
            if target.starts_with('#') && target.len() > 1 {
                config.hero_target = target;
            } else {
                tracing::warn!("Ignoring WAYFARER_HERO_TARGET={:?}: expected `#section-id`", target);
            }
        }

        config
    }
}

#[cfg(feature = "ssr")]
fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}: not a number", key, raw);
            None
        }
    }
}

/// Durations must survive the JSON handoff, which has no NaN or infinity
#[cfg(feature = "ssr")]
fn parse_duration(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<f64> {
    let ms: f64 = parse_var(lookup, key)?;
    if ms.is_finite() && ms >= 0.0 {
        Some(ms)
    } else {
        tracing::warn!("Ignoring {}={}: expected a non-negative duration", key, ms);
        None
    }
}
