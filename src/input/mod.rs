//! # Input Module
//!
//! Line-based command reading for the turn loop.

pub mod commands;

pub use commands::*;

use crate::{BurrowResult, Direction};
use log::debug;
use std::io::BufRead;

/// Player input types understood by the game loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    /// Move one step in a direction
    Move(Direction),
    /// Show seed and turn count in the next frame
    Debug,
    /// Quit the game
    Quit,
    /// Anything else; re-renders without changes
    Unrecognized(String),
}

/// Reads commands from a line-buffered source.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    pub fn new() -> Self {
        Self
    }

    /// Parses one input line.
    ///
    /// Whole words (`up`, `quit`, `debug`, ...) are matched first, then the
    /// first character as a single-key command.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::{Direction, InputHandler, PlayerInput};
    ///
    /// let input = InputHandler::new();
    /// assert_eq!(input.parse("w"), PlayerInput::Move(Direction::Up));
    /// assert_eq!(input.parse("Quit\n"), PlayerInput::Quit);
    /// ```
    pub fn parse(&self, line: &str) -> PlayerInput {
        let command = line.trim().to_lowercase();

        commands::word_command(&command)
            .or_else(|| command.chars().next().and_then(commands::key_command))
            .unwrap_or(PlayerInput::Unrecognized(command))
    }

    /// Reads and parses the next line. Returns None at end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced, so such a line parses as
    /// an unrecognized command instead of failing the read.
    pub fn read_input<R: BufRead>(&self, reader: &mut R) -> BurrowResult<Option<PlayerInput>> {
        let mut bytes = Vec::new();
        if reader.read_until(b'\n', &mut bytes)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        Ok(Some(self.parse(&String::from_utf8_lossy(&bytes))))
    }
}
