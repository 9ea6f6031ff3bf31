//! Error types for the snake engine.

use super::types::{Coord, GameStatus, Score, MIN_BOARD_SIDE};
use thiserror::Error;

/// Reasons a board configuration is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(
        "board {width}x{height} is too small (each side must be at least {min})",
        min = MIN_BOARD_SIDE
    )]
    BoardTooSmall { width: Coord, height: Coord },

    #[error("food target must be at least 1")]
    NoFoodTarget,

    #[error("initial score {initial_score} leaves no room for {food_target} more points")]
    ScoreOverflow {
        initial_score: Score,
        food_target: Coord,
    },
}

/// Errors returned by [`SnakeEngine`](super::SnakeEngine) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// A move was requested after the game already ended.
    #[error("game already over ({0:?})")]
    GameOver(GameStatus),
}

/// A move token that names no direction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction {0:?} (expected one of U, D, L, R)")]
pub struct ParseDirectionError(pub String);
