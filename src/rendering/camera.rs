//! # Camera
//!
//! Maps a square, player-centred viewport onto world coordinates.

use crate::Position;

/// A square window of side `2 * radius + 1` centred on a focus position.
///
/// The camera is derived fresh every frame and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Camera {
    /// World position shown at viewport cell `(radius, radius)`
    pub focus: Position,
    /// Tiles visible on each side of the focus
    pub radius: usize,
}

impl Camera {
    /// Creates a camera centred on `focus`.
    pub fn new(focus: Position, radius: usize) -> Self {
        Self { focus, radius }
    }

    /// Side length of the viewport.
    pub fn side(&self) -> usize {
        Self::side_for(self.radius)
    }

    /// Side length of the viewport of a camera with the given radius.
    pub fn side_for(radius: usize) -> usize {
        2 * radius + 1
    }

    /// Maps a viewport cell to its world position.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::{Camera, Position};
    ///
    /// let camera = Camera::new(Position::new(5, 5), 2);
    /// assert_eq!(camera.to_world(2, 2), Position::new(5, 5));
    /// assert_eq!(camera.to_world(0, 4), Position::new(3, 7));
    /// ```
    pub fn to_world(&self, viewport_x: usize, viewport_y: usize) -> Position {
        let radius = self.radius as i32;
        Position::new(
            self.focus.x - radius + viewport_x as i32,
            self.focus.y - radius + viewport_y as i32,
        )
    }

    /// Maps a world position back to its viewport cell, if visible.
    pub fn to_viewport(&self, world: Position) -> Option<(usize, usize)> {
        let radius = self.radius as i32;
        let offset = world - self.focus + Position::new(radius, radius);
        let side = self.side() as i32;

        if (0..side).contains(&offset.x) && (0..side).contains(&offset.y) {
            Some((offset.x as usize, offset.y as usize))
        } else {
            None
        }
    }

    /// Whether the viewport cell is the focus cell.
    pub fn is_focus(&self, viewport_x: usize, viewport_y: usize) -> bool {
        viewport_x == self.radius && viewport_y == self.radius
    }

    /// Whether a world position lies outside a `size`x`size` world.
    pub fn is_out_of_world(world: Position, size: usize) -> bool {
        let size = size as i32;
        world.x < 0 || world.y < 0 || world.x >= size || world.y >= size
    }
}
