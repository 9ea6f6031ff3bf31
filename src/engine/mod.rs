//! Snake engine: grid state, movement rules and the text renderer.
//!
//! This module has no I/O. Callers feed it directions and read back the status
//! and the rendered board.

pub mod config;
pub mod error;
pub mod logic;
pub mod render;
pub mod types;

pub use config::{BoardPreset, EngineConfig};
pub use error::{ConfigError, EngineError, ParseDirectionError};
pub use logic::SnakeEngine;
pub use render::BoardRenderer;
pub use types::{Cell, Coord, Direction, GameStatus, Score, MIN_BOARD_SIDE};
