//! Navigation over a generated [`StepSequence`]
//!
//! [`PlaybackController`] owns the current position, the auto-play timer and
//! the pacing interval. It is a small state machine:
//!
//! ```text
//!          load                start_auto_play
//! Idle ──────────▶ Ready ◀──────────────────▶ AutoPlaying
//!                    ▲      stop_auto_play /        │
//!                    └──── last step reached ───────┘
//! ```
//!
//! Manual navigation only moves the position in `Ready`. While auto-playing
//! it is suppressed, and at either end of the sequence it saturates. Neither
//! case is an error.
//!
//! The controller is driven cooperatively: the host calls [`tick`] with the
//! current time from its event loop. All mutation goes through `&mut self`,
//! so a multithreaded host serializes access by putting the controller
//! behind a single owning thread or a `Mutex`.
//!
//! [`tick`]: PlaybackController::tick

mod errors;
mod observer;
mod timer;

pub use errors::PlaybackError;
pub use observer::{ChangeCause, PlaybackObserver, PositionChange, Transition, TransitionToken};
pub use timer::AutoPlayTimer;

use crate::snapshot::{PhaseTag, Step, StepSequence};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Pacing used until the caller configures another one
pub const DEFAULT_PACING: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    /// No sequence loaded
    Idle,
    /// Sequence loaded, manual navigation enabled
    Ready,
    AutoPlaying,
}

/// Result of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved { position: usize },
    /// Already at the boundary in the requested direction
    Saturated,
    /// Manual navigation is disabled while auto-playing
    Suppressed,
}

/// Read-only view of the controller's position and timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
    pub position: usize,
    pub auto_playing: bool,
    pub pacing: Duration,
}

pub struct PlaybackController {
    sequence: Option<StepSequence>,
    position: usize,
    mode: PlaybackMode,
    pacing: Duration,
    timer: AutoPlayTimer,
    /// Transition an observer is still animating
    pending: Option<TransitionToken>,
    /// Bumped on every load so stale tokens are rejected
    generation: u64,
    serial: u64,
    observers: Vec<Box<dyn PlaybackObserver>>,
}

impl PlaybackController {
    pub fn new(pacing: Duration) -> Result<Self, PlaybackError> {
        validate_pacing(pacing)?;
        Ok(PlaybackController {
            sequence: None,
            position: 0,
            mode: PlaybackMode::Idle,
            pacing,
            timer: AutoPlayTimer::new(),
            pending: None,
            generation: 0,
            serial: 0,
            observers: Vec::new(),
        })
    }

    /// Register an observer; it is notified of every later load and move
    pub fn subscribe(&mut self, observer: Box<dyn PlaybackObserver>) {
        self.observers.push(observer);
    }

    /// Replace the current sequence and rewind to its first step
    ///
    /// Valid in any state. A running auto-play is cancelled first.
    pub fn load(&mut self, sequence: StepSequence) {
        self.timer.cancel();
        self.pending = None;
        self.generation += 1;
        self.position = 0;
        self.mode = PlaybackMode::Ready;

        debug!(
            steps = sequence.len(),
            heap_complete = sequence.heap_complete_index(),
            generation = self.generation,
            "loaded step sequence"
        );

        let sequence = self.sequence.insert(sequence);
        for observer in self.observers.iter_mut() {
            observer.on_sequence_loaded(sequence);
        }
    }

    pub fn step_forward(&mut self) -> Result<StepOutcome, PlaybackError> {
        let last = self.loaded_last_index()?;
        if self.mode == PlaybackMode::AutoPlaying {
            return Ok(StepOutcome::Suppressed);
        }
        if self.position >= last {
            return Ok(StepOutcome::Saturated);
        }
        Ok(self.move_to(self.position + 1, ChangeCause::Forward))
    }

    pub fn step_backward(&mut self) -> Result<StepOutcome, PlaybackError> {
        self.loaded_last_index()?;
        if self.mode == PlaybackMode::AutoPlaying {
            return Ok(StepOutcome::Suppressed);
        }
        if self.position == 0 {
            return Ok(StepOutcome::Saturated);
        }
        Ok(self.move_to(self.position - 1, ChangeCause::Backward))
    }

    /// Rewind to the seed snapshot
    pub fn jump_to_start(&mut self) -> Result<StepOutcome, PlaybackError> {
        self.loaded_last_index()?;
        if self.mode == PlaybackMode::AutoPlaying {
            return Ok(StepOutcome::Suppressed);
        }
        if self.position == 0 {
            return Ok(StepOutcome::Saturated);
        }
        Ok(self.move_to(0, ChangeCause::Jump))
    }

    /// Skip to the final, sorted snapshot
    pub fn jump_to_end(&mut self) -> Result<StepOutcome, PlaybackError> {
        let last = self.loaded_last_index()?;
        if self.mode == PlaybackMode::AutoPlaying {
            return Ok(StepOutcome::Suppressed);
        }
        if self.position >= last {
            return Ok(StepOutcome::Saturated);
        }
        Ok(self.move_to(last, ChangeCause::Jump))
    }

    /// Begin auto-play; the first tick is due one pacing interval after `now`
    ///
    /// Returns `false` when already auto-playing or when there is nothing
    /// left to play.
    pub fn start_auto_play(&mut self, now: Instant) -> Result<bool, PlaybackError> {
        let last = self.loaded_last_index()?;
        if self.mode == PlaybackMode::AutoPlaying || self.position >= last {
            return Ok(false);
        }
        self.mode = PlaybackMode::AutoPlaying;
        self.timer.arm(now, self.pacing);
        debug!(position = self.position, pacing = ?self.pacing, "auto-play started");
        Ok(true)
    }

    /// Stop auto-play, keeping the current position
    ///
    /// Returns `false` if auto-play was not running.
    pub fn stop_auto_play(&mut self) -> bool {
        if self.mode != PlaybackMode::AutoPlaying {
            return false;
        }
        self.timer.cancel();
        self.mode = PlaybackMode::Ready;
        debug!(position = self.position, "auto-play stopped");
        true
    }

    /// Start or stop auto-play; returns whether it is running afterwards
    pub fn toggle_auto_play(&mut self, now: Instant) -> Result<bool, PlaybackError> {
        if self.stop_auto_play() {
            return Ok(false);
        }
        self.start_auto_play(now)
    }

    /// Change the auto-play interval
    ///
    /// A wait that is already scheduled keeps its deadline; the new value is
    /// used from the next scheduling on.
    pub fn set_pacing(&mut self, pacing: Duration) -> Result<(), PlaybackError> {
        validate_pacing(pacing)?;
        self.pacing = pacing;
        trace!(pacing = ?pacing, "pacing changed");
        Ok(())
    }

    /// Advance auto-play if its timer is due
    ///
    /// Does nothing while an observer is still animating the previous tick.
    /// Returns `true` if the position moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.mode != PlaybackMode::AutoPlaying || self.pending.is_some() {
            return false;
        }
        if !self.timer.fire(now) {
            return false;
        }
        let Ok(last) = self.loaded_last_index() else {
            return false;
        };
        if self.position >= last {
            self.finish_auto_play();
            return false;
        }

        self.move_to(self.position + 1, ChangeCause::Tick);
        trace!(position = self.position, "auto-play tick");

        if self.position >= last {
            self.finish_auto_play();
        } else if self.pending.is_none() {
            self.timer.arm(now, self.pacing);
        }
        true
    }

    /// Mark the visual transition identified by `token` as finished
    ///
    /// Tokens that are not the latest pending one (superseded by another
    /// move, or from a previously loaded sequence) are ignored and `false`
    /// is returned.
    pub fn complete_transition(&mut self, token: TransitionToken, now: Instant) -> bool {
        if self.pending != Some(token) {
            return false;
        }
        self.pending = None;
        if self.mode == PlaybackMode::AutoPlaying {
            self.timer.arm(now, self.pacing);
        }
        true
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn pacing(&self) -> Duration {
        self.pacing
    }

    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            position: self.position,
            auto_playing: self.mode == PlaybackMode::AutoPlaying,
            pacing: self.pacing,
        }
    }

    pub fn sequence(&self) -> Option<&StepSequence> {
        self.sequence.as_ref()
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.sequence.as_ref()?.get(self.position)
    }

    pub fn current_phase(&self) -> Option<PhaseTag> {
        self.sequence.as_ref()?.phase_at(self.position)
    }

    /// `(position + 1, length)` for display
    pub fn progress(&self) -> Option<(usize, usize)> {
        let sequence = self.sequence.as_ref()?;
        Some((self.position + 1, sequence.len()))
    }

    pub fn is_transition_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the next auto-play tick is due, if one is scheduled
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    fn loaded_last_index(&self) -> Result<usize, PlaybackError> {
        self.sequence
            .as_ref()
            .map(StepSequence::last_index)
            .ok_or(PlaybackError::SequenceNotLoaded)
    }

    fn finish_auto_play(&mut self) {
        self.timer.cancel();
        self.mode = PlaybackMode::Ready;
        debug!(position = self.position, "auto-play reached the last step");
    }

    /// Move to `target` (already validated) and notify observers
    fn move_to(&mut self, target: usize, cause: ChangeCause) -> StepOutcome {
        self.position = target;
        self.serial += 1;
        let token = TransitionToken {
            generation: self.generation,
            serial: self.serial,
        };

        let mut transition = Transition::Settled;
        if let Some(sequence) = self.sequence.as_ref() {
            if let (Some(step), Some(phase)) = (sequence.get(target), sequence.phase_at(target)) {
                let change = PositionChange {
                    index: target,
                    step,
                    phase,
                    cause,
                    token,
                };
                for observer in self.observers.iter_mut() {
                    if observer.on_position_changed(&change) == Transition::Pending {
                        transition = Transition::Pending;
                    }
                }
            }
        }
        self.pending = (transition == Transition::Pending).then_some(token);

        trace!(position = target, ?cause, "position changed");
        StepOutcome::Moved { position: target }
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        PlaybackController {
            sequence: None,
            position: 0,
            mode: PlaybackMode::Idle,
            pacing: DEFAULT_PACING,
            timer: AutoPlayTimer::new(),
            pending: None,
            generation: 0,
            serial: 0,
            observers: Vec::new(),
        }
    }
}

impl fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackController")
            .field("mode", &self.mode)
            .field("position", &self.position)
            .field("steps", &self.sequence.as_ref().map(StepSequence::len))
            .field("pacing", &self.pacing)
            .field("pending", &self.pending)
            .field("observers", &self.observers.len())
            .finish()
    }
}

fn validate_pacing(pacing: Duration) -> Result<(), PlaybackError> {
    if pacing.is_zero() {
        return Err(PlaybackError::InvalidPacing(pacing));
    }
    Ok(())
}
