//! Scroll-spy: which page section is in view and where the nav underline goes

/// Bounding box in viewport coordinates, as `getBoundingClientRect` reports it
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// A page section as seen from the current viewport
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub id: String,
    pub rect: Rect,
}

/// A nav link and the list it lives in
#[derive(Debug, Clone, PartialEq)]
pub struct NavLinkView {
    /// Raw `href`, e.g. `#about`
    pub href: String,
    pub rect: Rect,
    /// Bounding box of the nav list the indicator is positioned in
    pub container: Rect,
}

impl NavLinkView {
    /// Section id this link points at
    pub fn target_id(&self) -> &str {
        self.href.strip_prefix('#').unwrap_or(&self.href)
    }
}

/// Size and offset of the underline, relative to the nav list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorGeometry {
    pub width: f64,
    pub left: f64,
}

/// What the nav indicator should show after a scroll or resize
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorUpdate {
    /// Small screens have no indicator
    Hidden,
    Shown {
        /// Index of the link to mark active, if any section is visible
        active: Option<usize>,
        /// New underline placement; unchanged when no link matches
        geometry: Option<IndicatorGeometry>,
    },
}

/// Height of `rect` inside a viewport of `viewport_height`
pub fn visible_height(rect: &Rect, viewport_height: f64) -> f64 {
    viewport_height.min(rect.bottom()) - rect.top.max(0.0)
}

/// Id of the section with the largest visible height.
///
/// Only strictly larger heights replace the current pick, so the first
/// section wins ties and nothing is picked when no section is on screen.
pub fn most_visible_section(sections: &[SectionView], viewport_height: f64) -> Option<&str> {
    let mut best: Option<&str> = None;
    let mut best_height = 0.0;

    for section in sections {
        let height = visible_height(&section.rect, viewport_height);
        if height > best_height {
            best_height = height;
            best = Some(section.id.as_str());
        }
    }

    best
}

/// Decide the active link and underline geometry for the current layout.
pub fn update_indicator(
    viewport_width: f64,
    viewport_height: f64,
    mobile_max_width: f64,
    sections: &[SectionView],
    links: &[NavLinkView],
) -> IndicatorUpdate {
    if viewport_width <= mobile_max_width {
        return IndicatorUpdate::Hidden;
    }

    let current = most_visible_section(sections, viewport_height);
    let active = current.and_then(|id| links.iter().position(|link| link.target_id() == id));
    let geometry = active.map(|index| {
        let link = &links[index];
        IndicatorGeometry {
            width: link.rect.width,
            left: link.rect.left - link.container.left,
        }
    });

    IndicatorUpdate::Shown { active, geometry }
}
