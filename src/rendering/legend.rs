//! # Legend
//!
//! The key printed under the viewport: each distinct visible symbol, in the
//! order it was first seen, with a human-readable label.

use crate::{Camera, Tile};
use log::trace;

/// Bounded, insertion-ordered set of tile symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    entries: Vec<Tile>,
    capacity: usize,
}

impl Legend {
    /// Creates an empty legend holding at most `capacity` symbols.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity.min(Tile::ALL.len())),
            capacity,
        }
    }

    /// Creates a legend sized for a camera of the given radius.
    pub fn for_radius(radius: usize) -> Self {
        let side = Camera::side_for(radius);
        Self::new(side * side)
    }

    /// Maximum number of symbols this legend accepts.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Adds `symbol` unless it is already present or the legend is full.
    ///
    /// Returns whether the symbol was added.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::{Legend, Tile};
    ///
    /// let mut legend = Legend::new(4);
    /// assert!(legend.register(Tile::Wall));
    /// assert!(legend.register(Tile::Floor));
    /// assert!(!legend.register(Tile::Wall));
    /// assert_eq!(legend.entries(), &[Tile::Wall, Tile::Floor]);
    /// ```
    pub fn register(&mut self, symbol: Tile) -> bool {
        if self.contains(symbol) || self.entries.len() >= self.capacity {
            return false;
        }
        trace!("Legend registered {:?}", symbol);
        self.entries.push(symbol);
        true
    }

    /// Whether `symbol` has been registered.
    pub fn contains(&self, symbol: Tile) -> bool {
        self.entries.contains(&symbol)
    }

    /// Registered symbols in first-seen order.
    pub fn entries(&self) -> &[Tile] {
        &self.entries
    }

    /// Number of registered symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Label shown for a symbol, or None if the symbol has no entry.
    pub fn describe(symbol: Tile) -> Option<&'static str> {
        match symbol {
            Tile::Empty => None,
            Tile::Wall => Some("Wall"),
            Tile::Tunnel => Some("Tunnel"),
            Tile::Floor => Some("Floor"),
            Tile::Player => Some("Player"),
            Tile::Enemy => Some("Enemy"),
            Tile::Mob => Some("Mob"),
            Tile::StairsUp => Some("Stairs Up"),
            Tile::StairsDown => Some("Stairs Down"),
        }
    }

    /// Display lines of the form `"<symbol> - <label>"`.
    ///
    /// Symbols without a label are skipped.
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter_map(|&symbol| {
                Self::describe(symbol).map(|label| format!("{} - {}", symbol.glyph(), label))
            })
            .collect()
    }
}
