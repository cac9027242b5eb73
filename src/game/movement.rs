//! # Movement
//!
//! Single-step, wall-aware movement of an entity across the grid.

use crate::{Direction, Entity, Position, TileGrid};
use log::debug;
use serde::{Deserialize, Serialize};

/// Outcome of a movement attempt.
///
/// A blocked move is a normal result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The entity now stands on the target cell
    Moved,
    /// The target was a wall or outside the world; nothing changed
    Blocked,
}

/// Attempts to move `entity` by `(dx, dy)`.
///
/// The target cell is checked before anything is written, so the entity is
/// either fully moved or left untouched.
///
/// # Examples
///
/// ```
/// use burrow::{try_move, Entity, MoveOutcome, Position, Tile, TileGrid};
///
/// let mut grid = TileGrid::new(3);
/// grid.set(1, 1, Tile::Floor).unwrap();
/// grid.set(0, 1, Tile::Wall).unwrap();
///
/// let mut player = Entity::player(Position::new(1, 1));
/// assert_eq!(try_move(&mut player, &grid, -1, 0), MoveOutcome::Blocked);
/// assert_eq!(player.position, Position::new(1, 1));
/// ```
pub fn try_move(entity: &mut Entity, grid: &TileGrid, dx: i32, dy: i32) -> MoveOutcome {
    let target = entity.position + Position::new(dx, dy);

    match grid.get_at(target) {
        Ok(tile) if !tile.blocks_movement() => {
            debug!("Moved {:?} from {} to {}", entity.symbol, entity.position, target);
            entity.position = target;
            MoveOutcome::Moved
        }
        Ok(tile) => {
            debug!("Move to {} blocked by {:?}", target, tile);
            MoveOutcome::Blocked
        }
        Err(_) => {
            debug!("Move to {} blocked by world edge", target);
            MoveOutcome::Blocked
        }
    }
}

/// Attempts to move `entity` one step in `direction`.
pub fn try_step(entity: &mut Entity, grid: &TileGrid, direction: Direction) -> MoveOutcome {
    let delta = direction.to_delta();
    try_move(entity, grid, delta.x, delta.y)
}
