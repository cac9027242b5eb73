//! # Command Definitions
//!
//! Keys and words recognised on the command line.

use super::PlayerInput;
use crate::Direction;

/// Command keys and their meaning, as listed beside the viewport.
pub const COMMAND_KEYS: &[(&str, &str)] = &[("w/a/s/d", "move"), ("q", "quit")];

/// Maps a single command key to its input.
pub(crate) fn key_command(key: char) -> Option<PlayerInput> {
    match key {
        'w' => Some(PlayerInput::Move(Direction::Up)),
        's' => Some(PlayerInput::Move(Direction::Down)),
        'a' => Some(PlayerInput::Move(Direction::Left)),
        'd' => Some(PlayerInput::Move(Direction::Right)),
        'q' => Some(PlayerInput::Quit),
        _ => None,
    }
}

/// Maps a whole command word to its input.
pub(crate) fn word_command(word: &str) -> Option<PlayerInput> {
    match word {
        "up" => Some(PlayerInput::Move(Direction::Up)),
        "down" => Some(PlayerInput::Move(Direction::Down)),
        "left" => Some(PlayerInput::Move(Direction::Left)),
        "right" => Some(PlayerInput::Move(Direction::Right)),
        "exit" | "quit" => Some(PlayerInput::Quit),
        "debug" => Some(PlayerInput::Debug),
        _ => None,
    }
}
