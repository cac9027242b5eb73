//! # Burrow
//!
//! A terminal tile-grid dungeon explorer.
//!
//! ## Architecture Overview
//!
//! The crate is the world/viewport core of the game. Each turn flows through
//! the same components:
//!
//! - **World**: a fixed-size square [`TileGrid`] filled once by a [`Generator`]
//! - **Entities**: a movable [`Entity`] spawned on the interior floor
//! - **Movement**: [`try_move`] validates one step against the grid
//! - **Rendering**: the [`Camera`] maps a player-centred viewport onto the
//!   world, the [`Renderer`] turns it into text rows and a [`Legend`]
//! - **Session**: [`GameSession`] owns the grid and the player and drives
//!   the accept-command / re-render cycle

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;

pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;

/// Core error type for the Burrow engine.
#[derive(thiserror::Error, Debug)]
pub enum BurrowError {
    /// A grid cell outside `[0, size)` was addressed
    #[error("Cell ({x}, {y}) is outside a {size}x{size} grid")]
    OutOfBounds { x: i32, y: i32, size: usize },

    /// The grid is too small to hold a walled interior
    #[error("Grid size {size} is too small (minimum {minimum})")]
    InvalidSize { size: usize, minimum: usize },

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type used throughout the Burrow codebase.
pub type BurrowResult<T> = Result<T, BurrowError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Side length of the square world in tiles
    pub const WORLD_SIZE: usize = 20;

    /// Number of tiles visible on each side of the player
    pub const CAMERA_RADIUS: usize = 7;

    /// Smallest world that still has a one-tile floor interior
    pub const MIN_WORLD_SIZE: usize = 3;

    /// Up staircases placed per generated world
    pub const STAIRS_UP_COUNT: u32 = 1;

    /// Down staircases placed per generated world
    pub const STAIRS_DOWN_COUNT: u32 = 1;
}
