//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! This is the presentation side of the crate. It consumes the step sequence
//! and playback notifications but contains no sorting logic of its own.
//!
//! - **[`app`]** — application state, keyboard event loop, number entry
//! - **[`animator`]** — observer that turns each move into a short emphasis
//!   and holds back auto-play until it has been shown
//! - **[`panes`]** — stateless render functions (tree, array, input, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! [`App`] is the entry point: construct it with a
//! [`PlaybackController`](crate::playback::PlaybackController) and call
//! [`App::run`](app::App::run).

pub mod animator;
pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
