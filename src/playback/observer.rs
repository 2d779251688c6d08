//! Observer interface for presentation layers

use crate::snapshot::{PhaseTag, Step, StepSequence};
use std::cell::RefCell;
use std::rc::Rc;

/// What triggered a position change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    Forward,
    Backward,
    /// Auto-play timer tick
    Tick,
    /// Jump to the first or last step
    Jump,
}

/// Identifies one position change so its visual transition can be completed later
///
/// Tokens from a previously loaded sequence are never accepted again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionToken {
    pub(crate) generation: u64,
    pub(crate) serial: u64,
}

/// Returned by an observer after it has been told about a position change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    /// Nothing to wait for
    #[default]
    Settled,
    /// The observer is animating; auto-play waits for
    /// [`PlaybackController::complete_transition`](super::PlaybackController::complete_transition)
    Pending,
}

/// Payload of [`PlaybackObserver::on_position_changed`]
#[derive(Debug, Clone, Copy)]
pub struct PositionChange<'a> {
    pub index: usize,
    pub step: &'a Step,
    pub phase: PhaseTag,
    pub cause: ChangeCause,
    pub token: TransitionToken,
}

/// Receives playback notifications
///
/// Both methods have no-op defaults so observers implement only what they need.
pub trait PlaybackObserver {
    fn on_sequence_loaded(&mut self, _sequence: &StepSequence) {}

    fn on_position_changed(&mut self, _change: &PositionChange<'_>) -> Transition {
        Transition::Settled
    }
}

/// Lets the owner keep a handle to an observer it has subscribed
impl<T: PlaybackObserver> PlaybackObserver for Rc<RefCell<T>> {
    fn on_sequence_loaded(&mut self, sequence: &StepSequence) {
        self.borrow_mut().on_sequence_loaded(sequence);
    }

    fn on_position_changed(&mut self, change: &PositionChange<'_>) -> Transition {
        self.borrow_mut().on_position_changed(change)
    }
}
