//! Debouncing of bursty browser events
//!
//! The debouncer itself is clock-free: callers pass the timestamp of every
//! event and of every timer expiry, which keeps it usable from a browser
//! timer as well as from tests.
//!
//! # Example
//! ```
//! # use wayfarer::core::debounce::Debouncer;
//! let mut debouncer = Debouncer::immediate(10.0);
//!
//! assert!(debouncer.trigger(0.0)); // leading edge runs right away
//! assert!(!debouncer.trigger(4.0)); // suppressed inside the quiet window
//! assert!(!debouncer.expire(14.0)); // immediate mode has no trailing call
//! assert!(debouncer.trigger(20.0)); // next burst
//! ```

/// Rate limiter that collapses a burst of calls into one invocation.
///
/// In immediate mode the first call of a burst runs; in trailing mode the
/// invocation happens once the burst has been quiet for `wait_ms`. Every call
/// restarts the quiet window.
#[derive(Debug, Clone, PartialEq)]
pub struct Debouncer {
    wait_ms: f64,
    immediate: bool,
    last_call: Option<f64>,
}

impl Debouncer {
    pub fn new(wait_ms: f64, immediate: bool) -> Self {
        Self {
            wait_ms,
            immediate,
            last_call: None,
        }
    }

    /// Leading-edge debouncer
    pub fn immediate(wait_ms: f64) -> Self {
        Self::new(wait_ms, true)
    }

    pub fn wait_ms(&self) -> f64 {
        self.wait_ms
    }

    /// Whether a burst is in progress at `now`
    pub fn is_pending(&self, now: f64) -> bool {
        self.last_call
            .is_some_and(|last| now - last < self.wait_ms)
    }

    /// Record a call at `now`; returns `true` if it should run immediately.
    ///
    /// The caller should (re)arm a timer for [`Debouncer::wait_ms`] and
    /// report its expiry through [`Debouncer::expire`].
    pub fn trigger(&mut self, now: f64) -> bool {
        let call_now = self.immediate && !self.is_pending(now);
        self.last_call = Some(now);
        call_now
    }

    /// Report a timer expiry at `now`; returns `true` if the trailing call
    /// should run.
    ///
    /// Expiries that arrive before the quiet window of the latest call has
    /// passed are stale and ignored.
    pub fn expire(&mut self, now: f64) -> bool {
        if self.last_call.is_none() || self.is_pending(now) {
            return false;
        }
        self.last_call = None;
        !self.immediate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_immediate_first_call_runs() {
        let mut debouncer = Debouncer::immediate(10.0);
        assert!(debouncer.trigger(100.0));
    }

    #[test]
    fn test_immediate_burst_is_suppressed() {
        let mut debouncer = Debouncer::immediate(10.0);
        assert!(debouncer.trigger(0.0));
        assert!(!debouncer.trigger(3.0));
        assert!(!debouncer.trigger(9.0));
        // each call restarts the window
        assert!(!debouncer.trigger(15.0));
        assert!(debouncer.trigger(25.0));
    }

    #[test]
    fn test_immediate_runs_again_after_expiry() {
        let mut debouncer = Debouncer::immediate(10.0);
        assert!(debouncer.trigger(0.0));
        assert!(!debouncer.expire(10.0));
        assert!(!debouncer.is_pending(10.0));
        assert!(debouncer.trigger(11.0));
    }

    #[test]
    fn test_trailing_runs_once_after_quiet_period() {
        let mut debouncer = Debouncer::new(10.0, false);
        assert!(!debouncer.trigger(0.0));
        assert!(!debouncer.trigger(5.0));
        // timer armed by the first call is stale
        assert!(!debouncer.expire(10.0));
        assert!(debouncer.expire(15.0));
        // nothing left to flush
        assert!(!debouncer.expire(30.0));
    }

    #[test]
    fn test_expire_without_calls() {
        let mut debouncer = Debouncer::new(10.0, false);
        assert!(!debouncer.expire(100.0));
        assert!(!debouncer.is_pending(100.0));
    }
}
