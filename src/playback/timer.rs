//! Cooperative auto-play timer
//!
//! The timer never runs on its own. The host loop passes the current
//! [`Instant`] to [`AutoPlayTimer::fire`]; a due timer fires exactly once and
//! stays disarmed until it is armed again, so two ticks can never overlap.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct AutoPlayTimer {
    deadline: Option<Instant>,
}

impl AutoPlayTimer {
    pub fn new() -> Self {
        AutoPlayTimer { deadline: None }
    }

    /// Schedule the next firing `interval` after `now`, replacing any pending one
    pub fn arm(&mut self, now: Instant, interval: Duration) {
        self.deadline = Some(now + interval);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fire if the deadline has passed; disarms on success
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_arming() {
        let start = Instant::now();
        let mut timer = AutoPlayTimer::new();
        timer.arm(start, Duration::from_millis(100));

        assert!(!timer.fire(start + Duration::from_millis(99)));
        assert!(timer.fire(start + Duration::from_millis(100)));
        assert!(!timer.fire(start + Duration::from_millis(500)));
        assert_eq!(timer.deadline(), None);
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut timer = AutoPlayTimer::new();
        timer.arm(start, Duration::from_millis(10));
        timer.cancel();

        assert_eq!(timer.deadline(), None);
        assert!(!timer.fire(start + Duration::from_secs(1)));
    }
}
