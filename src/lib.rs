//! # Introduction
//!
//! heapstep replays heap sort one operation at a time. Every insertion,
//! comparison and swap is captured as an immutable snapshot of the array;
//! the snapshot history is then navigated forward and backward, by hand or
//! on a timer, through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → Validation → Step generation → Playback controller → TUI
//! ```
//!
//! 1. [`input`] — parses and bounds user numbers, draws random arrays.
//! 2. [`snapshot`] — the step generator and the immutable
//!    [`snapshot::StepSequence`] it produces, with [`snapshot::PhaseTag`]
//!    derived from the heap-complete boundary.
//! 3. [`playback`] — [`playback::PlaybackController`]: position, auto-play
//!    timer, pacing, and observer notifications.
//! 4. [`config`] — command line flags.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use heapstep::playback::{PlaybackController, StepOutcome};
//! use heapstep::snapshot::generate;
//!
//! let sequence = generate(&[5, 3, 8, 1]);
//! assert_eq!(sequence.snapshot(sequence.last_index()).unwrap().as_slice(), &[1, 3, 5, 8]);
//!
//! let mut controller = PlaybackController::default();
//! controller.load(sequence);
//! assert_eq!(controller.step_forward(), Ok(StepOutcome::Moved { position: 1 }));
//! ```

pub mod config;
pub mod input;
pub mod playback;
pub mod snapshot;
pub mod ui;

pub use snapshot::generate;
