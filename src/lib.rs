//! Snake Engine - grid snake simulation with a fixed-layout text renderer
//!
//! This library exposes the engine for embedding and testing:
//! - Core game state and rules (engine module)
//! - A ratatui widget for showing the rendered board (ui module)

pub mod build_info;
pub mod engine;
pub mod ui;

pub use engine::{
    BoardPreset, Cell, Coord, Direction, EngineConfig, EngineError, GameStatus, Score,
    SnakeEngine,
};
