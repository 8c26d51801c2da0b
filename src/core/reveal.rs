//! Scroll-triggered entrance animations
//!
//! Each reveal animates opacity and a translation of one or more elements
//! between two poses, either played on trigger events or scrubbed by scroll
//! progress. [`landing_reveals`] lists the animations of the landing page.

use super::easing::{Easing, Tween};
use super::error::PageError;
use super::trigger::{ToggleAction, ToggleActions, TriggerPosition};

/// Visual state of an animated element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    /// Horizontal translation in percent of the element width
    pub x_percent: f64,
    /// Vertical translation in pixels
    pub y_px: f64,
}

impl Pose {
    /// Where every reveal ends: fully opaque, untranslated
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x_percent: 0.0,
        y_px: 0.0,
    };

    pub const fn faded(y_px: f64) -> Self {
        Self {
            opacity: 0.0,
            x_percent: 0.0,
            y_px,
        }
    }

    pub const fn shifted(x_percent: f64) -> Self {
        Self {
            opacity: 1.0,
            x_percent,
            y_px: 0.0,
        }
    }

    pub fn lerp(&self, to: &Pose, t: f64) -> Pose {
        Pose {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            x_percent: self.x_percent + (to.x_percent - self.x_percent) * t,
            y_px: self.y_px + (to.y_px - self.y_px) * t,
        }
    }

    /// CSS `transform` value for this pose
    pub fn transform(&self) -> String {
        format!("translate({}%, {}px)", self.x_percent, self.y_px)
    }
}

/// Motion of one element from `from` to `to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealAnimation {
    pub from: Pose,
    pub to: Pose,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
}

impl RevealAnimation {
    pub fn new(from: Pose, duration_ms: f64) -> Self {
        Self {
            from,
            to: Pose::REST,
            duration_ms,
            delay_ms: 0.0,
            easing: Easing::default(),
        }
    }

    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Total timeline length, delay included
    pub fn total_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }

    fn tween(&self) -> Tween {
        Tween::new(0.0, 1.0, self.duration_ms)
            .with_delay(self.delay_ms)
            .with_easing(self.easing)
    }

    /// Pose at a point of the timeline
    pub fn pose_at(&self, time_ms: f64) -> Pose {
        self.from.lerp(&self.to, self.tween().value_at(time_ms))
    }

    /// Pose for scrubbed playback; `progress` is scroll progress in `[0, 1]`
    pub fn pose_at_progress(&self, progress: f64) -> Pose {
        self.from.lerp(&self.to, self.easing.apply(progress))
    }
}

/// Direction a timeline is being played in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Playhead over a timeline of `total_ms`, driven by toggle actions.
#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    time_ms: f64,
    total_ms: f64,
    direction: Direction,
    playing: bool,
}

impl Playback {
    pub fn new(total_ms: f64) -> Self {
        Self {
            time_ms: 0.0,
            total_ms,
            direction: Direction::Forward,
            playing: false,
        }
    }

    pub fn time_ms(&self) -> f64 {
        self.time_ms
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn apply(&mut self, action: ToggleAction) {
        match action {
            ToggleAction::Play => self.start(Direction::Forward),
            ToggleAction::Reverse => self.start(Direction::Backward),
            ToggleAction::Restart => {
                self.time_ms = 0.0;
                self.start(Direction::Forward);
            }
            ToggleAction::Pause => self.playing = false,
            ToggleAction::Resume => self.playing = self.has_room(),
            ToggleAction::Reset => {
                self.time_ms = 0.0;
                self.direction = Direction::Forward;
                self.playing = false;
            }
            ToggleAction::Complete => {
                self.time_ms = self.total_ms;
                self.playing = false;
            }
            ToggleAction::None => {}
        }
    }

    /// Move the playhead by `delta_ms`; returns whether it is still playing.
    pub fn advance(&mut self, delta_ms: f64) -> bool {
        if !self.playing {
            return false;
        }

        self.time_ms = match self.direction {
            Direction::Forward => (self.time_ms + delta_ms).min(self.total_ms),
            Direction::Backward => (self.time_ms - delta_ms).max(0.0),
        };
        self.playing = self.has_room();
        self.playing
    }

    fn start(&mut self, direction: Direction) {
        self.direction = direction;
        self.playing = self.has_room();
    }

    fn has_room(&self) -> bool {
        match self.direction {
            Direction::Forward => self.time_ms < self.total_ms,
            Direction::Backward => self.time_ms > 0.0,
        }
    }
}

/// How trigger state drives the animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealMode {
    /// Timeline played in response to trigger events
    Toggle {
        actions: ToggleActions,
        /// Drop the inline styles again when scrolling back above the start
        clear_on_leave_back: bool,
        /// Apply the starting pose before the first trigger event
        immediate_render: bool,
    },
    /// Pose follows scroll progress directly
    Scrub,
}

/// Which element the scroll trigger watches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerSource {
    /// One shared trigger element
    Element(&'static str),
    /// Every matched target triggers its own animation
    EachTarget,
}

/// Elements animated by a reveal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTarget {
    pub selector: &'static str,
    pub animation: RevealAnimation,
    /// Extra delay per matched element, for staggered entrances
    pub stagger_ms: f64,
}

impl RevealTarget {
    pub fn new(selector: &'static str, animation: RevealAnimation) -> Self {
        Self {
            selector,
            animation,
            stagger_ms: 0.0,
        }
    }

    pub fn with_stagger(mut self, stagger_ms: f64) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    /// Animation of the `index`-th matched element
    pub fn animation_for(&self, index: usize) -> RevealAnimation {
        let delay = self.animation.delay_ms + self.stagger_ms * index as f64;
        self.animation.with_delay(delay)
    }
}

/// A scroll trigger and the animations it drives
#[derive(Debug, Clone, PartialEq)]
pub struct RevealPlan {
    pub source: TriggerSource,
    pub start: TriggerPosition,
    pub end: TriggerPosition,
    pub mode: RevealMode,
    pub targets: Vec<RevealTarget>,
}

impl RevealPlan {
    fn new(
        source: TriggerSource,
        start: &str,
        end: &str,
        mode: RevealMode,
        targets: Vec<RevealTarget>,
    ) -> Result<Self, PageError> {
        Ok(Self {
            source,
            start: start.parse()?,
            end: end.parse()?,
            mode,
            targets,
        })
    }
}

/// Entrance animations of the landing page
pub fn landing_reveals() -> Result<Vec<RevealPlan>, PageError> {
    let slide_in = |x_percent: f64| {
        RevealAnimation::new(Pose::shifted(x_percent), 2500.0).with_easing(Easing::Power2Out)
    };

    Ok(vec![
        RevealPlan::new(
            TriggerSource::Element("#hero"),
            "top 60%",
            "bottom 40%",
            RevealMode::Toggle {
                actions: "restart none restart reset".parse()?,
                clear_on_leave_back: true,
                immediate_render: false,
            },
            vec![
                RevealTarget::new(
                    "h1",
                    RevealAnimation::new(Pose::faded(-50.0), 1500.0)
                        .with_delay(200.0)
                        .with_easing(Easing::Power2Out),
                ),
                RevealTarget::new(
                    "#sub-heading",
                    RevealAnimation::new(Pose::faded(30.0), 1500.0)
                        .with_delay(400.0)
                        .with_easing(Easing::Power2Out),
                ),
            ],
        )?,
        RevealPlan::new(
            TriggerSource::EachTarget,
            "top 75%",
            "bottom 25%",
            RevealMode::Scrub,
            vec![RevealTarget::new(
                "h2",
                RevealAnimation::new(Pose::faded(50.0), 3000.0),
            )],
        )?,
        RevealPlan::new(
            TriggerSource::EachTarget,
            "top 80%",
            "top 20%",
            RevealMode::Scrub,
            vec![RevealTarget::new(".gallery-container", slide_in(-100.0))],
        )?,
        RevealPlan::new(
            TriggerSource::EachTarget,
            "top 80%",
            "top 20%",
            RevealMode::Scrub,
            vec![RevealTarget::new(".experiences-grid", slide_in(100.0))],
        )?,
        RevealPlan::new(
            TriggerSource::Element("#itinerary"),
            "top 80%",
            "top 20%",
            RevealMode::Toggle {
                actions: "play none none reverse".parse()?,
                clear_on_leave_back: false,
                immediate_render: true,
            },
            vec![
                RevealTarget::new(
                    ".bubble",
                    RevealAnimation::new(Pose::faded(50.0), 600.0).with_easing(Easing::Power2Out),
                )
                .with_stagger(200.0),
            ],
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_transform() {
        assert_eq!(Pose::shifted(-100.0).transform(), "translate(-100%, 0px)");
        assert_eq!(Pose::faded(30.0).transform(), "translate(0%, 30px)");
    }

    #[test]
    fn test_animation_endpoints() {
        let animation = RevealAnimation::new(Pose::faded(-50.0), 1500.0).with_delay(200.0);
        assert_eq!(animation.pose_at(0.0), Pose::faded(-50.0));
        assert_eq!(animation.pose_at(200.0), Pose::faded(-50.0));
        assert_eq!(animation.pose_at(1700.0), Pose::REST);
        assert_eq!(animation.total_ms(), 1700.0);
    }

    #[test]
    fn test_scrub_pose_follows_progress() {
        let animation = RevealAnimation::new(Pose::shifted(-100.0), 2500.0);
        assert_eq!(animation.pose_at_progress(0.0).x_percent, -100.0);
        assert_eq!(animation.pose_at_progress(0.25).x_percent, -56.25);
        assert_eq!(animation.pose_at_progress(1.0), Pose::REST);
    }

    #[test]
    fn test_stagger_delays() {
        let target = RevealTarget::new(".bubble", RevealAnimation::new(Pose::faded(50.0), 600.0))
            .with_stagger(200.0);
        assert_eq!(target.animation_for(0).delay_ms, 0.0);
        assert_eq!(target.animation_for(3).delay_ms, 600.0);
    }

    #[test]
    fn test_playback_play_and_reverse() {
        let mut playback = Playback::new(1000.0);
        assert!(!playback.advance(16.0));

        playback.apply(ToggleAction::Play);
        assert!(playback.advance(400.0));
        assert_eq!(playback.time_ms(), 400.0);

        playback.apply(ToggleAction::Reverse);
        assert_eq!(playback.direction(), Direction::Backward);
        assert!(playback.advance(300.0));
        assert!(!playback.advance(300.0));
        assert_eq!(playback.time_ms(), 0.0);
    }

    #[test]
    fn test_playback_stops_at_end() {
        let mut playback = Playback::new(600.0);
        playback.apply(ToggleAction::Play);
        assert!(!playback.advance(1000.0));
        assert_eq!(playback.time_ms(), 600.0);

        // already at the end
        playback.apply(ToggleAction::Play);
        assert!(!playback.is_playing());
    }

    #[test]
    fn test_playback_restart_reset_complete() {
        let mut playback = Playback::new(600.0);
        playback.apply(ToggleAction::Complete);
        assert_eq!(playback.time_ms(), 600.0);

        playback.apply(ToggleAction::Restart);
        assert_eq!(playback.time_ms(), 0.0);
        assert!(playback.is_playing());

        playback.advance(100.0);
        playback.apply(ToggleAction::Pause);
        assert!(!playback.advance(100.0));
        playback.apply(ToggleAction::Resume);
        assert!(playback.advance(100.0));
        assert_eq!(playback.time_ms(), 200.0);

        playback.apply(ToggleAction::Reset);
        assert_eq!(playback.time_ms(), 0.0);
        assert!(!playback.is_playing());
    }

    #[test]
    fn test_landing_reveals_are_valid() {
        let reveals = landing_reveals().unwrap();
        assert_eq!(reveals.len(), 5);

        let hero = &reveals[0];
        assert_eq!(hero.source, TriggerSource::Element("#hero"));
        assert_eq!(hero.targets.len(), 2);
        assert!(matches!(
            hero.mode,
            RevealMode::Toggle {
                clear_on_leave_back: true,
                immediate_render: false,
                ..
            }
        ));

        assert!(reveals[1..4].iter().all(|plan| plan.mode == RevealMode::Scrub));

        let bubbles = &reveals[4];
        assert_eq!(bubbles.source, TriggerSource::Element("#itinerary"));
        assert_eq!(bubbles.targets[0].stagger_ms, 200.0);
    }
}
