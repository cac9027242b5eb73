//! # World Representation
//!
//! The closed set of tile symbols and the square grid that holds them.

use crate::{BurrowError, BurrowResult, Position};
use serde::{Deserialize, Serialize};

/// A symbol occupying one grid cell.
///
/// `Empty` means "nothing rendered" and is what the camera shows for cells
/// outside the world. It is not an error value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Empty,
    Wall,
    Tunnel,
    Floor,
    Player,
    Enemy,
    Mob,
    StairsUp,
    StairsDown,
}

impl Tile {
    /// Every tile symbol, in declaration order.
    pub const ALL: [Tile; 9] = [
        Tile::Empty,
        Tile::Wall,
        Tile::Tunnel,
        Tile::Floor,
        Tile::Player,
        Tile::Enemy,
        Tile::Mob,
        Tile::StairsUp,
        Tile::StairsDown,
    ];

    /// Gets the display character for this tile.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::Tile;
    ///
    /// assert_eq!(Tile::Floor.glyph(), '.');
    /// assert_eq!(Tile::Player.glyph(), '@');
    /// ```
    pub fn glyph(self) -> char {
        match self {
            Tile::Empty => ' ',
            Tile::Wall => '█',
            Tile::Tunnel => '#',
            Tile::Floor => '.',
            Tile::Player => '@',
            Tile::Enemy => 'E',
            Tile::Mob => 'M',
            Tile::StairsUp => '<',
            Tile::StairsDown => '>',
        }
    }

    /// Whether an entity may not enter this tile.
    pub fn blocks_movement(self) -> bool {
        matches!(self, Tile::Wall)
    }
}

/// Fixed-size square matrix of tiles.
///
/// All reads and writes go through [`TileGrid::get`] and [`TileGrid::set`],
/// which reject coordinates outside `[0, size)` with
/// [`BurrowError::OutOfBounds`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    size: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Creates a grid of the given side length with every cell `Empty`.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::{Tile, TileGrid};
    ///
    /// let grid = TileGrid::new(5);
    /// assert_eq!(grid.size(), 5);
    /// assert_eq!(grid.get(2, 2).unwrap(), Tile::Empty);
    /// assert!(grid.get(5, 0).is_err());
    /// ```
    pub fn new(size: usize) -> Self {
        Self {
            size,
            tiles: vec![Tile::Empty; size * size],
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Checks whether `(x, y)` addresses a cell of this grid.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    /// Gets the tile at `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> BurrowResult<Tile> {
        let index = self.index(x, y)?;
        Ok(self.tiles[index])
    }

    /// Gets the tile at a position.
    pub fn get_at(&self, pos: Position) -> BurrowResult<Tile> {
        self.get(pos.x, pos.y)
    }

    /// Overwrites the tile at `(x, y)`. Any symbol may replace any other.
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) -> BurrowResult<()> {
        let index = self.index(x, y)?;
        self.tiles[index] = tile;
        Ok(())
    }

    /// Iterates over every `(position, tile)` pair in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        let size = self.size;
        self.tiles.iter().enumerate().map(move |(index, tile)| {
            (
                Position::new((index / size) as i32, (index % size) as i32),
                *tile,
            )
        })
    }

    fn index(&self, x: i32, y: i32) -> BurrowResult<usize> {
        if !self.in_bounds(x, y) {
            return Err(BurrowError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        Ok(x as usize * self.size + y as usize)
    }
}
