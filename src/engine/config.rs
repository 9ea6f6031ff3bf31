//! Board configuration and named presets.

use super::error::ConfigError;
use super::types::{Coord, Score, MIN_BOARD_SIDE};
use serde::{Deserialize, Serialize};

/// Named board presets, smallest and easiest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardPreset {
    Novice,
    Apprentice,
    Journeyman,
    Master,
}

impl BoardPreset {
    pub const ALL: [BoardPreset; 4] = [
        BoardPreset::Novice,
        BoardPreset::Apprentice,
        BoardPreset::Journeyman,
        BoardPreset::Master,
    ];

    /// Case-insensitive lookup by [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|preset| preset.name().eq_ignore_ascii_case(name))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Apprentice => "Apprentice",
            Self::Journeyman => "Journeyman",
            Self::Master => "Master",
        }
    }

    /// Board side length (rows and columns).
    pub fn board_side(&self) -> Coord {
        match self {
            Self::Novice => 9,
            Self::Apprentice => 13,
            Self::Journeyman => 20,
            Self::Master => 26,
        }
    }

    /// Number of food items to eat to win.
    pub fn food_target(&self) -> Coord {
        match self {
            Self::Novice => 5,
            Self::Apprentice => 10,
            Self::Journeyman => 20,
            Self::Master => 25,
        }
    }
}

/// Parameters an engine is constructed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub width: Coord,
    pub height: Coord,
    pub food_target: Coord,
    #[serde(default)]
    pub initial_score: Score,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from_preset(BoardPreset::Novice)
    }
}

impl EngineConfig {
    pub fn new(width: Coord, height: Coord, food_target: Coord, initial_score: Score) -> Self {
        Self {
            width,
            height,
            food_target,
            initial_score,
        }
    }

    pub fn from_preset(preset: BoardPreset) -> Self {
        Self::new(
            preset.board_side(),
            preset.board_side(),
            preset.food_target(),
            0,
        )
    }

    /// Check the board size, the food target, and that the score cannot
    /// overflow once every food item is eaten.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_BOARD_SIDE || self.height < MIN_BOARD_SIDE {
            return Err(ConfigError::BoardTooSmall {
                width: self.width,
                height: self.height,
            });
        }

        if self.food_target == 0 {
            return Err(ConfigError::NoFoodTarget);
        }

        if self
            .initial_score
            .checked_add(Score::from(self.food_target))
            .is_none()
        {
            return Err(ConfigError::ScoreOverflow {
                initial_score: self.initial_score,
                food_target: self.food_target,
            });
        }

        Ok(())
    }
}
