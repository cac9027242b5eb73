//! # Generation Module
//!
//! World generation for Burrow.
//!
//! Generation is a single pass over a [`TileGrid`]: a fixed walled shape with
//! randomized detail (marker placement). Randomness comes from one seeded
//! [`StdRng`] per run so a seed reproduces a world exactly.

pub mod dungeon;

pub use dungeon::*;

use crate::{config, BurrowError, BurrowResult, Camera, TileGrid};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Configuration for world generation and the camera that views it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Side length of the square world
    pub world_size: usize,
    /// Tiles visible on each side of the player
    pub camera_radius: usize,
    /// Number of up staircases to place
    pub stairs_up: u32,
    /// Number of down staircases to place
    pub stairs_down: u32,
}

impl GenerationConfig {
    /// Creates the standard configuration from the compile-time constants.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(12345);
    /// assert_eq!(config.seed, 12345);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            world_size: config::WORLD_SIZE,
            camera_radius: config::CAMERA_RADIUS,
            stairs_up: config::STAIRS_UP_COUNT,
            stairs_down: config::STAIRS_DOWN_COUNT,
        }
    }

    /// Creates a configuration for testing: standard sizes, no markers.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            stairs_up: 0,
            stairs_down: 0,
            ..Self::new(seed)
        }
    }

    /// Side length of the square camera viewport.
    pub fn viewport_side(&self) -> usize {
        Camera::side_for(self.camera_radius)
    }

    /// Checks that the world can be generated and fully viewed.
    pub fn validate(&self) -> BurrowResult<()> {
        if self.world_size < config::MIN_WORLD_SIZE {
            return Err(BurrowError::InvalidSize {
                size: self.world_size,
                minimum: config::MIN_WORLD_SIZE,
            });
        }

        if self.viewport_side() > self.world_size {
            return Err(BurrowError::InvalidState(format!(
                "Camera radius {} gives a {}-wide viewport, larger than the {}-wide world",
                self.camera_radius,
                self.viewport_side(),
                self.world_size
            )));
        }

        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Trait for world generators.
pub trait Generator {
    /// Overwrites every cell of `grid`.
    fn generate(
        &self,
        grid: &mut TileGrid,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> BurrowResult<()>;

    /// Validates that a generated grid meets the generator's guarantees.
    fn validate(&self, grid: &TileGrid, config: &GenerationConfig) -> BurrowResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation.
pub mod utils {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }

    /// Seed derived from the wall clock, for runs without an explicit seed.
    pub fn time_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0)
    }
}
