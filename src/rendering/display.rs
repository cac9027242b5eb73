//! # Display
//!
//! Turns the grid and the player into a frame of text: viewport rows, the
//! legend, and the data panel.

use crate::rendering::StatusPanel;
use crate::{BurrowResult, Camera, Entity, Legend, Tile, TileGrid};
use log::debug;
use std::io::Write;

/// Walks the camera viewport and collects the visible symbols.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Tiles visible on each side of the player
    pub radius: usize,
}

/// One rendered viewport and the legend for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Viewport rows, top to bottom
    pub rows: Vec<Vec<Tile>>,
    /// Distinct symbols present in `rows`
    pub legend: Legend,
}

impl View {
    /// Viewport rows as strings of glyphs.
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|tile| tile.glyph()).collect())
            .collect()
    }
}

impl Renderer {
    /// Creates a renderer for a camera of the given radius.
    pub fn new(radius: usize) -> Self {
        Self { radius }
    }

    /// Renders the viewport centred on `entity`.
    ///
    /// The focus cell always shows the entity's symbol and cells outside the
    /// world show [`Tile::Empty`]. The entity's symbol is registered in the
    /// legend first, followed by every other non-empty symbol in row-major
    /// order of first appearance. Neither the grid nor the entity is touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::{Entity, Position, Renderer, Tile, TileGrid};
    ///
    /// let mut grid = TileGrid::new(3);
    /// grid.set(1, 1, Tile::Floor).unwrap();
    /// let view = Renderer::new(1)
    ///     .render(&grid, &Entity::player(Position::new(1, 1)))
    ///     .unwrap();
    /// assert_eq!(view.rows[1][1], Tile::Player);
    /// assert_eq!(view.legend.entries(), &[Tile::Player]);
    /// ```
    pub fn render(&self, grid: &TileGrid, entity: &Entity) -> BurrowResult<View> {
        let camera = Camera::new(entity.position, self.radius);
        let side = camera.side();
        let mut legend = Legend::for_radius(self.radius);
        legend.register(entity.symbol);

        let mut rows = Vec::with_capacity(side);
        for vx in 0..side {
            let mut row = Vec::with_capacity(side);
            for vy in 0..side {
                let tile = if camera.is_focus(vx, vy) {
                    entity.symbol
                } else {
                    let world = camera.to_world(vx, vy);
                    if Camera::is_out_of_world(world, grid.size()) {
                        Tile::Empty
                    } else {
                        let tile = grid.get_at(world)?;
                        if tile != Tile::Empty {
                            legend.register(tile);
                        }
                        tile
                    }
                };
                row.push(tile);
            }
            rows.push(row);
        }

        debug!(
            "Rendered {}x{} view around {} with {} legend entries",
            side,
            side,
            entity.position,
            legend.len()
        );

        Ok(View { rows, legend })
    }
}

/// Writes a full frame: viewport with the command keys beside it, the
/// legend, then the data panel.
pub fn draw_frame<W: Write>(out: &mut W, view: &View, panel: &StatusPanel) -> BurrowResult<()> {
    let help = StatusPanel::command_lines();
    for (index, line) in view.lines().iter().enumerate() {
        match help.get(index) {
            Some(text) => writeln!(out, "{}\t {}", line, text)?,
            None => writeln!(out, "{}", line)?,
        }
    }
    writeln!(out)?;

    writeln!(out, "Origin:")?;
    for line in view.legend.lines() {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;

    for line in panel.lines() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
