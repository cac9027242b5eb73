//! # Entities
//!
//! Movable things that live on the tile grid.

use crate::{config, BurrowError, BurrowResult, Position, Tile, TileGrid};
use log::debug;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A movable point on the grid with the symbol it is drawn as.
///
/// # Examples
///
/// ```
/// use burrow::{Entity, Position, Tile};
///
/// let player = Entity::player(Position::new(3, 4));
/// assert_eq!(player.position, Position::new(3, 4));
/// assert_eq!(player.symbol, Tile::Player);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Current world position
    pub position: Position,
    /// Symbol drawn at the entity's position
    pub symbol: Tile,
}

impl Entity {
    /// Creates an entity drawn with the given symbol.
    pub fn new(position: Position, symbol: Tile) -> Self {
        Self { position, symbol }
    }

    /// Creates the player entity.
    pub fn player(position: Position) -> Self {
        Self::new(position, Tile::Player)
    }

    /// Spawns the player at a uniformly random interior cell.
    ///
    /// Both coordinates are drawn from `[1, size - 2]`. The drawn cell is not
    /// checked against the grid contents, so the player may start on a
    /// staircase placed by the generator.
    pub fn spawn(grid: &TileGrid, rng: &mut StdRng) -> BurrowResult<Self> {
        let size = grid.size();
        if size < config::MIN_WORLD_SIZE {
            return Err(BurrowError::InvalidSize {
                size,
                minimum: config::MIN_WORLD_SIZE,
            });
        }

        let last = size as i32 - 2;
        let position = Position::new(rng.gen_range(1..=last), rng.gen_range(1..=last));
        debug!("Spawned player at {}", position);

        Ok(Self::player(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_lands_in_interior() {
        let grid = TileGrid::new(10);
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let entity = Entity::spawn(&grid, &mut rng).unwrap();
            assert!((1..=8).contains(&entity.position.x));
            assert!((1..=8).contains(&entity.position.y));
            assert_eq!(entity.symbol, Tile::Player);
        }
    }

    #[test]
    fn test_spawn_in_smallest_world_is_centre() {
        let grid = TileGrid::new(3);
        let mut rng = StdRng::seed_from_u64(7);
        let entity = Entity::spawn(&grid, &mut rng).unwrap();
        assert_eq!(entity.position, Position::new(1, 1));
    }

    #[test]
    fn test_spawn_rejects_tiny_world() {
        let grid = TileGrid::new(2);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            Entity::spawn(&grid, &mut rng),
            Err(BurrowError::InvalidSize { size: 2, minimum: 3 })
        ));
    }

    #[test]
    fn test_spawn_is_reproducible_for_a_seed() {
        let grid = TileGrid::new(20);
        let a = Entity::spawn(&grid, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = Entity::spawn(&grid, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }
}
