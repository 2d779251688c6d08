//! Visual transition tracking
//!
//! The terminal can't interpolate positions, so a "transition" here is a
//! short emphasis of the nodes touched by the step. While it lasts, the
//! controller holds back the next auto-play tick.

use crate::playback::{ChangeCause, PlaybackObserver, PositionChange, Transition, TransitionToken};
use crate::snapshot::StepSequence;
use std::time::{Duration, Instant};

#[derive(Debug)]
struct ActiveTransition {
    token: TransitionToken,
    started: Instant,
}

#[derive(Debug)]
pub struct TransitionAnimator {
    duration: Duration,
    active: Option<ActiveTransition>,
}

impl TransitionAnimator {
    pub fn new(duration: Duration) -> Self {
        TransitionAnimator {
            duration,
            active: None,
        }
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Hand back the token of a transition that has run its course
    pub fn take_finished(&mut self, now: Instant) -> Option<TransitionToken> {
        let finished = self
            .active
            .as_ref()
            .is_some_and(|active| now.saturating_duration_since(active.started) >= self.duration);
        if finished {
            self.active.take().map(|active| active.token)
        } else {
            None
        }
    }
}

impl PlaybackObserver for TransitionAnimator {
    fn on_sequence_loaded(&mut self, _sequence: &StepSequence) {
        self.active = None;
    }

    fn on_position_changed(&mut self, change: &PositionChange<'_>) -> Transition {
        // Jumps skip many steps at once; there is nothing meaningful to emphasize
        if change.cause == ChangeCause::Jump {
            self.active = None;
            return Transition::Settled;
        }
        self.active = Some(ActiveTransition {
            token: change.token,
            started: Instant::now(),
        });
        Transition::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::PlaybackController;
    use crate::snapshot::generate;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_forward_step_is_awaited() {
        let animator = Rc::new(RefCell::new(TransitionAnimator::new(Duration::ZERO)));
        let mut controller = PlaybackController::default();
        controller.subscribe(Box::new(Rc::clone(&animator)));
        controller.load(generate(&[2, 7]));

        controller.step_forward().unwrap();
        assert!(controller.is_transition_pending());
        assert!(animator.borrow().is_animating());

        let token = animator.borrow_mut().take_finished(Instant::now());
        assert!(controller.complete_transition(token.unwrap(), Instant::now()));
        assert!(!animator.borrow().is_animating());
    }

    #[test]
    fn test_jump_settles_immediately() {
        let animator = Rc::new(RefCell::new(TransitionAnimator::new(
            Duration::from_secs(60),
        )));
        let mut controller = PlaybackController::default();
        controller.subscribe(Box::new(Rc::clone(&animator)));
        controller.load(generate(&[2, 7, 1]));

        controller.jump_to_end().unwrap();
        assert!(!controller.is_transition_pending());
        assert_eq!(animator.borrow_mut().take_finished(Instant::now()), None);
    }
}
