//! # Game Module
//!
//! Core world representation, entities, movement and the game session.
//!
//! This module contains the fundamental building blocks of Burrow:
//! - The tile grid and its closed set of tile symbols
//! - The player entity and its spawn rules
//! - Wall-aware single-step movement
//! - The session that owns all of the above and runs the turn loop

pub mod entities;
pub mod movement;
pub mod state;
pub mod world;

pub use entities::*;
pub use movement::*;
pub use state::*;
pub use world::*;

use serde::{Deserialize, Serialize};

/// Represents a 2D coordinate in the game world.
///
/// `x` selects the row and `y` the column, so moving "up" decreases `x`.
///
/// # Examples
///
/// ```
/// use burrow::Position;
///
/// let pos = Position::new(10, 5);
/// assert_eq!(pos.x, 10);
/// assert_eq!(pos.y, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the origin position (0, 0).
    pub fn origin() -> Self {
        Self::new(0, 0)
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four single-step movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Converts a direction to a position delta.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::{Direction, Position};
    ///
    /// assert_eq!(Direction::Up.to_delta(), Position::new(-1, 0));
    /// assert_eq!(Direction::Right.to_delta(), Position::new(0, 1));
    /// ```
    pub fn to_delta(self) -> Position {
        match self {
            Direction::Up => Position::new(-1, 0),
            Direction::Down => Position::new(1, 0),
            Direction::Left => Position::new(0, -1),
            Direction::Right => Position::new(0, 1),
        }
    }

    /// Converts a position delta to a direction.
    ///
    /// Returns None for diagonal, multi-step or zero deltas.
    pub fn from_delta(delta: Position) -> Option<Direction> {
        match (delta.x, delta.y) {
            (-1, 0) => Some(Direction::Up),
            (1, 0) => Some(Direction::Down),
            (0, -1) => Some(Direction::Left),
            (0, 1) => Some(Direction::Right),
            _ => None,
        }
    }

    /// Returns all four directions.
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}
