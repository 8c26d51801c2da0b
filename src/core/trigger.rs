//! Scroll triggers
//!
//! A trigger watches one element against two horizontal lines in the
//! viewport. `start` is crossed when the chosen edge of the element scrolls
//! up past the start line, `end` likewise for the end line. Between the two
//! the trigger is active, and its progress runs from 0 to 1.

use std::fmt;
use std::str::FromStr;

use super::error::PageError;

/// Which horizontal line of the trigger element is tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

impl Edge {
    fn fraction(self) -> f64 {
        match self {
            Edge::Top => 0.0,
            Edge::Center => 0.5,
            Edge::Bottom => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Center => "center",
            Edge::Bottom => "bottom",
        }
    }
}

/// `"<element edge> <viewport percentage>"`, e.g. `"top 80%"`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPosition {
    pub edge: Edge,
    /// Distance of the viewport line from the viewport top, in percent
    pub viewport_percent: f64,
}

impl TriggerPosition {
    pub const fn new(edge: Edge, viewport_percent: f64) -> Self {
        Self {
            edge,
            viewport_percent,
        }
    }

    /// Scroll distance left until this position is reached; negative once passed.
    fn remaining(&self, element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
        let element_line = element_top + self.edge.fraction() * element_height;
        let viewport_line = self.viewport_percent / 100.0 * viewport_height;
        element_line - viewport_line
    }
}

impl FromStr for TriggerPosition {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PageError::InvalidTriggerPosition(s.to_string());

        let mut parts = s.split_whitespace();
        let (Some(edge), Some(percent), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };

        let edge = match edge {
            "top" => Edge::Top,
            "center" => Edge::Center,
            "bottom" => Edge::Bottom,
            _ => return Err(invalid()),
        };
        let viewport_percent = percent
            .strip_suffix('%')
            .and_then(|n| n.parse::<f64>().ok())
            .filter(|n| n.is_finite())
            .ok_or_else(invalid)?;

        Ok(Self::new(edge, viewport_percent))
    }
}

impl fmt::Display for TriggerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}%", self.edge.as_str(), self.viewport_percent)
    }
}

/// Lifecycle callbacks a trigger reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    /// Scrolling down past the start line
    Enter,
    /// Scrolling down past the end line
    Leave,
    /// Scrolling up past the end line
    EnterBack,
    /// Scrolling up past the start line
    LeaveBack,
}

/// Where the viewport is relative to the trigger range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerRegion {
    #[default]
    Before,
    Active,
    After,
}

/// What an animation does in response to a trigger event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
    None,
}

impl FromStr for ToggleAction {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "play" => ToggleAction::Play,
            "pause" => ToggleAction::Pause,
            "resume" => ToggleAction::Resume,
            "reverse" => ToggleAction::Reverse,
            "restart" => ToggleAction::Restart,
            "reset" => ToggleAction::Reset,
            "complete" => ToggleAction::Complete,
            "none" => ToggleAction::None,
            other => return Err(PageError::InvalidToggleAction(other.to_string())),
        })
    }
}

/// Actions for `Enter`, `Leave`, `EnterBack` and `LeaveBack`, in that order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    pub fn action_for(&self, event: TriggerEvent) -> ToggleAction {
        match event {
            TriggerEvent::Enter => self.on_enter,
            TriggerEvent::Leave => self.on_leave,
            TriggerEvent::EnterBack => self.on_enter_back,
            TriggerEvent::LeaveBack => self.on_leave_back,
        }
    }
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self {
            on_enter: ToggleAction::Play,
            on_leave: ToggleAction::None,
            on_enter_back: ToggleAction::None,
            on_leave_back: ToggleAction::None,
        }
    }
}

impl FromStr for ToggleActions {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actions = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<ToggleAction>, _>>()?;

        match actions.as_slice() {
            &[on_enter, on_leave, on_enter_back, on_leave_back] => Ok(Self {
                on_enter,
                on_leave,
                on_enter_back,
                on_leave_back,
            }),
            _ => Err(PageError::InvalidToggleAction(s.to_string())),
        }
    }
}

/// Scroll trigger state for one element
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTrigger {
    pub start: TriggerPosition,
    pub end: TriggerPosition,
    region: TriggerRegion,
}

impl ScrollTrigger {
    pub fn new(start: TriggerPosition, end: TriggerPosition) -> Self {
        Self {
            start,
            end,
            region: TriggerRegion::Before,
        }
    }

    /// Parse both positions, e.g. `ScrollTrigger::parse("top 80%", "top 20%")`
    pub fn parse(start: &str, end: &str) -> Result<Self, PageError> {
        Ok(Self::new(start.parse()?, end.parse()?))
    }

    pub fn region(&self) -> TriggerRegion {
        self.region
    }

    /// Region for an element at `element_top` (viewport coordinates)
    pub fn region_for(&self, element_top: f64, element_height: f64, viewport_height: f64) -> TriggerRegion {
        if self.start.remaining(element_top, element_height, viewport_height) > 0.0 {
            TriggerRegion::Before
        } else if self.end.remaining(element_top, element_height, viewport_height) > 0.0 {
            TriggerRegion::Active
        } else {
            TriggerRegion::After
        }
    }

    /// Scroll progress between the start and end lines, clamped to `[0, 1]`
    pub fn progress(&self, element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
        let to_start = self.start.remaining(element_top, element_height, viewport_height);
        let to_end = self.end.remaining(element_top, element_height, viewport_height);
        let span = to_end - to_start;

        if span <= 0.0 {
            return if to_start <= 0.0 { 1.0 } else { 0.0 };
        }
        (-to_start / span).clamp(0.0, 1.0)
    }

    /// Move to the element's current position and report the crossed lines
    /// in the order they were crossed.
    pub fn update(
        &mut self,
        element_top: f64,
        element_height: f64,
        viewport_height: f64,
    ) -> Vec<TriggerEvent> {
        use TriggerRegion::*;

        let next = self.region_for(element_top, element_height, viewport_height);
        let events = match (self.region, next) {
            (Before, Active) => vec![TriggerEvent::Enter],
            (Before, After) => vec![TriggerEvent::Enter, TriggerEvent::Leave],
            (Active, After) => vec![TriggerEvent::Leave],
            (After, Active) => vec![TriggerEvent::EnterBack],
            (After, Before) => vec![TriggerEvent::EnterBack, TriggerEvent::LeaveBack],
            (Active, Before) => vec![TriggerEvent::LeaveBack],
            _ => Vec::new(),
        };
        self.region = next;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 1000.0;

    #[test]
    fn test_parse_positions() {
        assert_eq!(
            "top 80%".parse::<TriggerPosition>().unwrap(),
            TriggerPosition::new(Edge::Top, 80.0)
        );
        assert_eq!(
            "  bottom   25% ".parse::<TriggerPosition>().unwrap(),
            TriggerPosition::new(Edge::Bottom, 25.0)
        );
        assert_eq!(
            "center 50%".parse::<TriggerPosition>().unwrap().to_string(),
            "center 50%"
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "top", "top 80", "left 10%", "top 80% extra", "top x%"] {
            assert_eq!(
                input.parse::<TriggerPosition>(),
                Err(PageError::InvalidTriggerPosition(input.to_string())),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_parse_toggle_actions() {
        let actions: ToggleActions = "play none none reverse".parse().unwrap();
        assert_eq!(actions.action_for(TriggerEvent::Enter), ToggleAction::Play);
        assert_eq!(actions.action_for(TriggerEvent::Leave), ToggleAction::None);
        assert_eq!(actions.action_for(TriggerEvent::LeaveBack), ToggleAction::Reverse);

        assert!("play none".parse::<ToggleActions>().is_err());
        assert!("play none none rewind".parse::<ToggleActions>().is_err());
    }

    #[test]
    fn test_lifecycle_scrolling_down_and_back() {
        // start when the top hits 80%, end when the top hits 20%
        let mut trigger = ScrollTrigger::parse("top 80%", "top 20%").unwrap();

        assert!(trigger.update(1200.0, 400.0, VIEWPORT).is_empty());
        assert_eq!(trigger.update(700.0, 400.0, VIEWPORT), vec![TriggerEvent::Enter]);
        assert_eq!(trigger.region(), TriggerRegion::Active);
        assert_eq!(trigger.update(100.0, 400.0, VIEWPORT), vec![TriggerEvent::Leave]);
        assert_eq!(trigger.update(500.0, 400.0, VIEWPORT), vec![TriggerEvent::EnterBack]);
        assert_eq!(trigger.update(900.0, 400.0, VIEWPORT), vec![TriggerEvent::LeaveBack]);
        assert!(trigger.update(950.0, 400.0, VIEWPORT).is_empty());
    }

    #[test]
    fn test_jumping_over_the_range_reports_both_events() {
        let mut trigger = ScrollTrigger::parse("top 80%", "top 20%").unwrap();
        assert_eq!(
            trigger.update(-500.0, 400.0, VIEWPORT),
            vec![TriggerEvent::Enter, TriggerEvent::Leave]
        );
        assert_eq!(
            trigger.update(2000.0, 400.0, VIEWPORT),
            vec![TriggerEvent::EnterBack, TriggerEvent::LeaveBack]
        );
    }

    #[test]
    fn test_progress_between_lines() {
        let trigger = ScrollTrigger::parse("top 80%", "top 20%").unwrap();
        assert_eq!(trigger.progress(900.0, 300.0, VIEWPORT), 0.0);
        assert_eq!(trigger.progress(800.0, 300.0, VIEWPORT), 0.0);
        assert_eq!(trigger.progress(500.0, 300.0, VIEWPORT), 0.5);
        assert_eq!(trigger.progress(200.0, 300.0, VIEWPORT), 1.0);
        assert_eq!(trigger.progress(-100.0, 300.0, VIEWPORT), 1.0);
    }

    #[test]
    fn test_progress_with_bottom_end() {
        // hero: top 60% -> bottom 40% over a 600px tall element
        let trigger = ScrollTrigger::parse("top 60%", "bottom 40%").unwrap();
        // start at top=600, end at top=400-600=-200, span 800
        assert_eq!(trigger.progress(600.0, 600.0, VIEWPORT), 0.0);
        assert_eq!(trigger.progress(200.0, 600.0, VIEWPORT), 0.5);
        assert_eq!(trigger.progress(-200.0, 600.0, VIEWPORT), 1.0);
    }

    #[test]
    fn test_degenerate_range() {
        let trigger = ScrollTrigger::parse("top 20%", "top 80%").unwrap();
        assert_eq!(trigger.progress(900.0, 100.0, VIEWPORT), 0.0);
        assert_eq!(trigger.progress(100.0, 100.0, VIEWPORT), 1.0);
    }
}
