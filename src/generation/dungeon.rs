//! # Dungeon Generation
//!
//! The walled-room layout: a one-tile wall ring around a floor interior,
//! with staircases dropped onto random interior cells.

use crate::{
    config, BurrowError, BurrowResult, GenerationConfig, Generator, Position, Tile, TileGrid,
};
use log::{debug, info};
use rand::{rngs::StdRng, Rng};

/// Generator producing a single walled room covering the whole grid.
///
/// The generator:
/// 1. Fills the whole grid with walls
/// 2. Carves the interior `[1, size - 2]` on both axes into floor
/// 3. Places the configured staircases on uniformly drawn interior cells
///
/// Staircases are not checked against each other, so a later one may
/// overwrite an earlier one.
#[derive(Debug, Clone, Default)]
pub struct WalledRoomGenerator;

impl WalledRoomGenerator {
    /// Creates a new walled-room generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::{GenerationConfig, Generator, TileGrid, WalledRoomGenerator};
    /// use burrow::generation::utils::create_rng;
    ///
    /// let config = GenerationConfig::for_testing(1);
    /// let mut grid = TileGrid::new(config.world_size);
    /// WalledRoomGenerator::new()
    ///     .generate(&mut grid, &config, &mut create_rng(&config))
    ///     .unwrap();
    /// ```
    pub fn new() -> Self {
        Self
    }

    fn fill(&self, grid: &mut TileGrid, from: i32, to: i32, tile: Tile) -> BurrowResult<()> {
        for x in from..to {
            for y in from..to {
                grid.set(x, y, tile)?;
            }
        }
        Ok(())
    }

    fn place_markers(
        &self,
        grid: &mut TileGrid,
        tile: Tile,
        count: u32,
        rng: &mut StdRng,
    ) -> BurrowResult<()> {
        let last = grid.size() as i32 - 2;
        for _ in 0..count {
            let pos = Position::new(rng.gen_range(1..=last), rng.gen_range(1..=last));
            grid.set(pos.x, pos.y, tile)?;
            debug!("Placed {:?} at {}", tile, pos);
        }
        Ok(())
    }
}

impl Generator for WalledRoomGenerator {
    fn generate(
        &self,
        grid: &mut TileGrid,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> BurrowResult<()> {
        let size = grid.size();
        if size < config::MIN_WORLD_SIZE {
            return Err(BurrowError::InvalidSize {
                size,
                minimum: config::MIN_WORLD_SIZE,
            });
        }

        info!("Generating {}x{} world with {}", size, size, self.generator_type());

        let size = size as i32;
        self.fill(grid, 0, size, Tile::Wall)?;
        self.fill(grid, 1, size - 1, Tile::Floor)?;
        self.place_markers(grid, Tile::StairsUp, config.stairs_up, rng)?;
        self.place_markers(grid, Tile::StairsDown, config.stairs_down, rng)?;

        Ok(())
    }

    fn validate(&self, grid: &TileGrid, _config: &GenerationConfig) -> BurrowResult<()> {
        let last = grid.size() as i32 - 1;
        for (pos, tile) in grid.iter() {
            let on_border = pos.x == 0 || pos.y == 0 || pos.x == last || pos.y == last;
            let valid = if on_border {
                tile == Tile::Wall
            } else {
                matches!(tile, Tile::Floor | Tile::StairsUp | Tile::StairsDown)
            };

            if !valid {
                return Err(BurrowError::InvalidState(format!(
                    "Unexpected {:?} at {} after generation",
                    tile, pos
                )));
            }
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "WalledRoomGenerator"
    }
}
