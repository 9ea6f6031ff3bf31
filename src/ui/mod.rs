//! Terminal display helpers for embedding callers.
//!
//! The engine already produces the board as text; these helpers only lay it
//! out inside a ratatui frame. Terminal setup and input stay with the caller.

pub mod board_scene;

pub use board_scene::render_board_scene;
