//! Snake engine value types.
//!
//! Coordinates follow the rendered layout: `x` picks the text line (grows
//! downward) and `y` picks the column pair (grows rightward).

use super::error::ParseDirectionError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unsigned type used for coordinates, board sizes and the food counter.
pub type Coord = u8;

/// Unsigned type used for the score. Must stay wider than [`Coord`].
pub type Score = u16;

const _: () = assert!(
    std::mem::size_of::<Score>() > std::mem::size_of::<Coord>(),
    "Score must be strictly wider than Coord"
);

/// Smallest accepted board side.
pub const MIN_BOARD_SIDE: Coord = 9;

/// Outcome of a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Continue,
    Win,
    Loss,
}

impl GameStatus {
    /// True for `Win` and `Loss`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Continue)
    }
}

/// Cardinal direction for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn.
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Returns the (dx, dy) delta for this direction.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = ParseDirectionError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'u' => Ok(Self::Up),
            'd' => Ok(Self::Down),
            'l' => Ok(Self::Left),
            'r' => Ok(Self::Right),
            _ => Err(ParseDirectionError(c.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::try_from(c),
                    _ => Err(ParseDirectionError(s.to_string())),
                }
            }
        }
    }
}

/// A position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: Coord,
    pub y: Coord,
}

impl Cell {
    pub fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `direction`, or `None` when it would leave a
    /// `width` x `height` board.
    pub fn neighbor(&self, direction: Direction, width: Coord, height: Coord) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx).filter(|&x| x < width)?;
        let y = self.y.checked_add_signed(dy).filter(|&y| y < height)?;
        Some(Self { x, y })
    }
}
