//! # UI Panels
//!
//! Text shown around the viewport: command keys and the data panel.

use crate::input::COMMAND_KEYS;
use crate::Position;

/// Data panel printed below the legend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPanel {
    /// Player position to report
    pub position: Position,
    /// One-frame message, e.g. a blocked move
    pub message: Option<String>,
    /// Seed and turn count, shown after a debug command
    pub debug: Option<(u64, u64)>,
}

impl StatusPanel {
    /// Creates a panel reporting only the player position.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            message: None,
            debug: None,
        }
    }

    /// Lines listing the command keys, printed beside the viewport.
    pub fn command_lines() -> Vec<String> {
        std::iter::once("Commands keys:".to_string())
            .chain(
                COMMAND_KEYS
                    .iter()
                    .map(|(keys, meaning)| format!("{} - {}", keys, meaning)),
            )
            .collect()
    }

    /// Lines of the data panel.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Position: {}", self.position)];
        if let Some((seed, turn)) = self.debug {
            lines.push(format!("Seed: {}  Turn: {}", seed, turn));
        }
        if let Some(message) = &self.message {
            lines.push(message.clone());
        }
        lines
    }
}
