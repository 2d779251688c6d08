//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`tree`]: the heap drawn as a binary tree
//! - [`array`]: the working array with indices, plus the pending-input / edit box
//! - [`status`]: status bar with step counter, phase, pacing and keybindings
//! - `highlight`: per-index roles (inserted, compared, swapped, sorted) shared by
//!   the tree and array panes
//!
//! Each pane module exports a `render_*` function that takes a small
//! `*RenderData` struct borrowed from the application state.

mod highlight;

pub mod array;
pub mod status;
pub mod tree;

pub use array::{render_array_pane, render_input_pane, ArrayRenderData};
pub use highlight::{highlights_for, Highlight, HighlightMap};
pub use status::{render_status_bar, StatusRenderData};
pub use tree::{render_tree_pane, TreeRenderData};
