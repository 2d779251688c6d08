//! Error types for playback control
//!
//! Reaching either end of the sequence is not an error; see
//! [`StepOutcome`](super::StepOutcome). These variants are caller
//! programming errors and should be reported rather than retried.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// Navigation was requested before any sequence was loaded
    #[error("no step sequence loaded")]
    SequenceNotLoaded,

    /// Auto-play pacing must be a positive duration
    #[error("pacing must be positive, got {0:?}")]
    InvalidPacing(Duration),
}
