//! Easing curves and single-value tweens

/// Quadratic ease-in-out in the classic `(time, begin, change, duration)` form.
///
/// The first half accelerates, the second half mirrors it to decelerate into
/// `begin + change`. A non-positive duration jumps straight to the end.
pub fn ease_in_out_quad(time: f64, begin: f64, change: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return begin + change;
    }

    let t = time / (duration / 2.0);
    if t < 1.0 {
        return change / 2.0 * t * t + begin;
    }

    let t = t - 1.0;
    -change / 2.0 * (t * (t - 2.0) - 1.0) + begin
}

/// Named easing curves mapping linear progress in `[0, 1]` to eased progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Quadratic deceleration, `1 - (1 - p)^2`
    #[default]
    Power1Out,
    /// Cubic deceleration, `1 - (1 - p)^3`
    Power2Out,
}

impl Easing {
    pub fn apply(self, progress: f64) -> f64 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            Easing::Power1Out => 1.0 - (1.0 - p).powi(2),
            Easing::Power2Out => 1.0 - (1.0 - p).powi(3),
        }
    }
}

/// A scalar animated from `from` to `to` after an optional delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
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

    /// Linear progress in `[0, 1]` after `elapsed_ms` (delay included)
    ///
    /// A tween without duration completes as soon as its delay has passed.
    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        let active = elapsed_ms - self.delay_ms;
        if self.duration_ms <= 0.0 && active >= 0.0 {
            1.0
        } else if active <= 0.0 {
            0.0
        } else if active >= self.duration_ms {
            1.0
        } else {
            active / self.duration_ms
        }
    }

    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        let eased = self.easing.apply(self.progress_at(elapsed_ms));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.delay_ms + self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_boundaries_are_exact() {
        for &(b, c, d) in &[(0.0, 100.0, 1200.0), (350.0, -200.0, 800.0), (12.5, 0.0, 10.0)] {
            assert_eq!(ease_in_out_quad(0.0, b, c, d), b);
            assert_eq!(ease_in_out_quad(d, b, c, d), b + c);
        }
    }

    #[test]
    fn test_ease_midpoint_is_half_way() {
        assert_eq!(ease_in_out_quad(600.0, 0.0, 1000.0, 1200.0), 500.0);
    }

    #[test]
    fn test_ease_is_symmetric() {
        let d = 1000.0;
        for step in 0..=10 {
            let t = step as f64 * 50.0;
            let early = ease_in_out_quad(t, 0.0, 1.0, d);
            let late = ease_in_out_quad(d - t, 0.0, 1.0, d);
            assert!((early + late - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_ease_zero_duration_jumps_to_end() {
        assert_eq!(ease_in_out_quad(0.0, 10.0, 5.0, 0.0), 15.0);
    }

    #[test]
    fn test_power_out_curves() {
        assert_eq!(Easing::Power2Out.apply(0.0), 0.0);
        assert_eq!(Easing::Power2Out.apply(1.0), 1.0);
        assert_eq!(Easing::Power2Out.apply(0.5), 0.875);
        assert_eq!(Easing::Power2Out.apply(2.0), 1.0);
        assert_eq!(Easing::Power1Out.apply(0.5), 0.75);
    }

    #[test]
    fn test_tween_respects_delay() {
        let tween = Tween::new(0.0, 1.0, 1500.0).with_delay(200.0);
        assert_eq!(tween.value_at(0.0), 0.0);
        assert_eq!(tween.value_at(200.0), 0.0);
        assert_eq!(tween.value_at(1700.0), 1.0);
        assert!(!tween.is_finished(1699.0));
        assert!(tween.is_finished(1700.0));
    }

    #[test]
    fn test_tween_default_easing_midpoint() {
        let tween = Tween::new(-50.0, 0.0, 100.0);
        assert_eq!(tween.value_at(50.0), -12.5);
    }

    #[test]
    fn test_zero_duration_tween_lands_on_first_frame() {
        let tween = Tween::new(0.0, -400.0, 0.0).with_easing(Easing::Power2Out);
        assert_eq!(tween.value_at(0.0), -400.0);
        assert!(tween.is_finished(0.0));
    }

    #[test]
    fn test_zero_duration_tween_waits_for_delay() {
        let tween = Tween::new(0.0, 1.0, 0.0).with_delay(200.0);
        assert_eq!(tween.value_at(100.0), 0.0);
        assert!(!tween.is_finished(100.0));
        assert_eq!(tween.value_at(200.0), 1.0);
        assert!(tween.is_finished(200.0));
    }
}
