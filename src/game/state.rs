//! # Game State Module
//!
//! The game session: one world, one player, and the turn loop that drives
//! them.
//!
//! Each turn is two phases with nothing in between: accept one command, then
//! re-render. The grid and the player are only mutated between renders.

use crate::generation::utils::create_rng;
use crate::{
    draw_frame, try_step, BurrowError, BurrowResult, Entity, GenerationConfig, Generator,
    InputHandler, MoveOutcome, PlayerInput, Renderer, StatusPanel, TileGrid, View,
    WalledRoomGenerator,
};
use log::{debug, info};
use std::io::{BufRead, Write};

/// Prompt written after every frame.
pub const PROMPT: &str = "Action > ";

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// Re-render and wait for the next command
    Continue,
    /// Stop the loop
    Quit,
}

/// Explicitly owned game session.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// The world
    pub grid: TileGrid,
    /// The player entity
    pub player: Entity,
    /// Configuration the session was built from
    pub config: GenerationConfig,
    /// Commands accepted so far
    pub turn_number: u64,
    /// Message for the next frame
    message: Option<String>,
    /// Whether the next frame shows debug data
    show_debug: bool,
}

impl GameSession {
    /// Generates a fresh world and spawns the player in it.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::{GameSession, GenerationConfig};
    ///
    /// let session = GameSession::generate(GenerationConfig::new(12345)).unwrap();
    /// assert_eq!(session.grid.size(), 20);
    /// ```
    pub fn generate(config: GenerationConfig) -> BurrowResult<Self> {
        config.validate()?;

        let mut rng = create_rng(&config);
        let generator = WalledRoomGenerator::new();
        let mut grid = TileGrid::new(config.world_size);
        generator.generate(&mut grid, &config, &mut rng)?;
        generator.validate(&grid, &config)?;

        let player = Entity::spawn(&grid, &mut rng)?;
        info!(
            "Session started with seed {}; player at {}",
            config.seed, player.position
        );

        Self::new_with_world(grid, player, config)
    }

    /// Builds a session around an existing world and player.
    ///
    /// Fails if the player does not stand on a walkable cell of the grid.
    pub fn new_with_world(
        grid: TileGrid,
        player: Entity,
        config: GenerationConfig,
    ) -> BurrowResult<Self> {
        let tile = grid.get_at(player.position)?;
        if tile.blocks_movement() {
            return Err(BurrowError::InvalidState(format!(
                "Player placed on {:?} at {}",
                tile, player.position
            )));
        }

        Ok(Self {
            grid,
            player,
            config,
            turn_number: 0,
            message: None,
            show_debug: false,
        })
    }

    /// Applies one command to the session.
    pub fn apply(&mut self, input: &PlayerInput) -> TurnResult {
        self.message = None;
        self.show_debug = false;

        match input {
            PlayerInput::Quit => {
                info!("Player quit after {} turns", self.turn_number);
                return TurnResult::Quit;
            }
            PlayerInput::Move(direction) => {
                if try_step(&mut self.player, &self.grid, *direction) == MoveOutcome::Blocked {
                    self.message = Some("Blocked.".to_string());
                }
            }
            PlayerInput::Debug => self.show_debug = true,
            PlayerInput::Unrecognized(text) => debug!("Ignoring command {:?}", text),
        }

        self.turn_number += 1;
        TurnResult::Continue
    }

    /// Renders the current viewport.
    pub fn render(&self) -> BurrowResult<View> {
        Renderer::new(self.config.camera_radius).render(&self.grid, &self.player)
    }

    /// Data panel for the current frame.
    pub fn status_panel(&self) -> StatusPanel {
        let mut panel = StatusPanel::new(self.player.position);
        panel.message = self.message.clone();
        if self.show_debug {
            panel.debug = Some((self.config.seed, self.turn_number));
        }
        panel
    }

    /// Writes the current frame followed by the prompt.
    pub fn draw<W: Write>(&self, out: &mut W) -> BurrowResult<()> {
        let view = self.render()?;
        draw_frame(out, &view, &self.status_panel())?;
        write!(out, "{}", PROMPT)?;
        out.flush()?;
        Ok(())
    }

    /// Runs the turn loop until a quit command or end of input.
    ///
    /// Nothing is written after the quit command is read.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> BurrowResult<()> {
        let handler = InputHandler::new();

        loop {
            self.draw(&mut output)?;

            let command = match handler.read_input(&mut input)? {
                Some(command) => command,
                None => break,
            };

            if self.apply(&command) == TurnResult::Quit {
                break;
            }
            writeln!(output)?;
        }

        info!("Game loop ended");
        Ok(())
    }
}
