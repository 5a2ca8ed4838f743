//! TUI pane rendering
//!
//! - [`prompt`]: the element being rated and the question, with the pending choice
//! - [`status`]: status bar with keybindings, answer count and last message
//!
//! Each pane module exports a `render_*` function that draws from borrowed state
//! and keeps nothing between frames.

pub mod prompt;
pub mod status;

pub use prompt::{render_prompt_pane, WRAP_WIDTH};
pub use status::{render_status_bar, MessageKind};
