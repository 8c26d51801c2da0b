//! Frame-by-frame smooth scrolling of the window

use super::easing::ease_in_out_quad;

/// Window offset that puts `section_top` just below a fixed navbar
pub fn target_offset(section_top: f64, navbar_height: f64) -> f64 {
    section_top - navbar_height
}

/// Result of one animation frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollStep {
    /// Vertical scroll position to apply this frame
    pub position: f64,
    /// Whether another frame should be requested
    pub keep_going: bool,
}

/// A single scroll from the current position to a target.
///
/// The clock starts on the first frame, so the first step always lands on the
/// starting position.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimation {
    start: f64,
    change: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl ScrollAnimation {
    pub fn new(start: f64, target: f64, duration_ms: f64) -> Self {
        Self {
            start,
            change: target - start,
            duration_ms,
            started_at: None,
        }
    }

    /// Advance to the frame timestamp `now` (milliseconds).
    pub fn step(&mut self, now: f64) -> ScrollStep {
        let started_at = *self.started_at.get_or_insert(now);
        let elapsed = now - started_at;

        ScrollStep {
            position: ease_in_out_quad(
                elapsed.min(self.duration_ms),
                self.start,
                self.change,
                self.duration_ms,
            ),
            keep_going: elapsed < self.duration_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_offset_accounts_for_navbar() {
        assert_eq!(target_offset(2400.0, 72.0), 2328.0);
    }

    #[test]
    fn test_first_frame_starts_clock() {
        let mut animation = ScrollAnimation::new(100.0, 900.0, 1200.0);
        let step = animation.step(5_000.0);
        assert_eq!(step.position, 100.0);
        assert!(step.keep_going);
    }

    #[test]
    fn test_frames_until_duration() {
        let mut animation = ScrollAnimation::new(0.0, 1000.0, 1200.0);
        animation.step(0.0);

        let mid = animation.step(600.0);
        assert_eq!(mid.position, 500.0);
        assert!(mid.keep_going);

        let last = animation.step(1216.0);
        assert_eq!(last.position, 1000.0);
        assert!(!last.keep_going);
    }

    #[test]
    fn test_scrolling_up() {
        let mut animation = ScrollAnimation::new(800.0, 200.0, 400.0);
        animation.step(10.0);
        let step = animation.step(410.0);
        assert_eq!(step.position, 200.0);
        assert!(!step.keep_going);
    }

    #[test]
    fn test_positions_are_monotonic() {
        let mut animation = ScrollAnimation::new(0.0, 500.0, 1000.0);
        let mut last = f64::MIN;
        for frame in 0..=70 {
            let step = animation.step(frame as f64 * 16.0);
            assert!(step.position >= last);
            last = step.position;
        }
        assert_eq!(last, 500.0);
    }
}
