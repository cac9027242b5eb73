//! Integration tests for the text frame and the turn loop.

use burrow::{
    BurrowResult, Camera, Entity, GameSession, GenerationConfig, Generator, MoveOutcome,
    Position, Renderer, Tile, TileGrid, WalledRoomGenerator, PROMPT,
};
use std::io::Cursor;

fn walled_session(player: Position) -> BurrowResult<GameSession> {
    let config = GenerationConfig::for_testing(12345);
    let mut grid = TileGrid::new(config.world_size);
    let mut rng = burrow::generation::utils::create_rng(&config);
    WalledRoomGenerator::new().generate(&mut grid, &config, &mut rng)?;
    GameSession::new_with_world(grid, Entity::player(player), config)
}

fn run(session: &mut GameSession, commands: &str) -> BurrowResult<String> {
    let mut output = Vec::new();
    session.run(Cursor::new(commands), &mut output)?;
    Ok(String::from_utf8(output).expect("frame output is UTF-8"))
}

/// First seed whose spawn lands on `target` in a marker-free world.
fn seed_spawning_at(target: Position) -> BurrowResult<u64> {
    for seed in 0..50_000 {
        let session = GameSession::generate(GenerationConfig::for_testing(seed))?;
        if session.player.position == target {
            return Ok(seed);
        }
    }
    panic!("no seed below 50000 spawns at {}", target);
}

#[test]
fn test_walk_then_quit() -> BurrowResult<()> {
    let seed = seed_spawning_at(Position::new(5, 5))?;
    let mut session = GameSession::generate(GenerationConfig::for_testing(seed))?;
    assert_eq!(session.player.position, Position::new(5, 5));
    let output = run(&mut session, "w\nw\na\nq\n")?;

    assert_eq!(session.player.position, Position::new(3, 4));
    assert_eq!(session.turn_number, 3);

    // One frame per command read, nothing after the quit
    assert_eq!(output.matches(PROMPT).count(), 4);
    assert!(output.ends_with(PROMPT));
    assert!(output.contains("Position: (3, 4)"));
    Ok(())
}

#[test]
fn test_blocked_at_corner() -> BurrowResult<()> {
    let mut session = walled_session(Position::new(1, 1))?;
    let output = run(&mut session, "w\nq\n")?;

    assert_eq!(session.player.position, Position::new(1, 1));
    assert!(output.contains("Blocked."));
    Ok(())
}

#[test]
fn test_end_of_input_ends_the_loop() -> BurrowResult<()> {
    let mut session = walled_session(Position::new(5, 5))?;
    let output = run(&mut session, "s\n")?;
    assert_eq!(session.player.position, Position::new(6, 5));
    assert_eq!(output.matches(PROMPT).count(), 2);
    Ok(())
}

#[test]
fn test_invalid_utf8_line_is_ignored() -> BurrowResult<()> {
    let mut session = walled_session(Position::new(5, 5))?;
    let mut output = Vec::new();
    session.run(Cursor::new(&b"\xff\nw\nq\n"[..]), &mut output)?;

    assert_eq!(session.player.position, Position::new(4, 5));
    assert_eq!(session.turn_number, 2);
    assert_eq!(String::from_utf8_lossy(&output).matches(PROMPT).count(), 3);
    Ok(())
}

#[test]
fn test_unknown_command_rerenders_unchanged() -> BurrowResult<()> {
    let mut session = walled_session(Position::new(5, 5))?;
    let output = run(&mut session, "z\nq\n")?;
    assert_eq!(session.player.position, Position::new(5, 5));
    assert_eq!(output.matches("Position: (5, 5)").count(), 2);
    assert!(!output.contains("Blocked."));
    Ok(())
}

#[test]
fn test_frame_contents() -> BurrowResult<()> {
    let mut session = walled_session(Position::new(10, 10))?;
    let output = run(&mut session, "q\n")?;

    assert!(output.contains("Commands keys:"));
    assert!(output.contains("Origin:\n@ - Player\n. - Floor\n"));
    // Centre of a 20x20 world with radius 7 sees no walls
    assert!(!output.contains("Wall"));
    Ok(())
}

#[test]
fn test_corner_view_truncates_to_empty() -> BurrowResult<()> {
    let session = walled_session(Position::new(2, 2))?;
    let radius = session.config.camera_radius;
    assert_eq!(radius, 7);

    let view = session.render()?;
    let camera = Camera::new(session.player.position, radius);

    for (vx, row) in view.rows.iter().enumerate() {
        for (vy, tile) in row.iter().enumerate() {
            let world = camera.to_world(vx, vy);
            if world.x < 0 || world.y < 0 {
                assert_eq!(*tile, Tile::Empty, "viewport ({}, {})", vx, vy);
            } else {
                assert_ne!(*tile, Tile::Empty, "viewport ({}, {})", vx, vy);
            }
        }
    }

    assert!(!view.legend.contains(Tile::Empty));
    assert_eq!(
        view.legend.entries(),
        &[Tile::Player, Tile::Wall, Tile::Floor]
    );

    // Blank cells render as spaces
    assert!(view.lines()[0].chars().all(|c| c == ' '));
    Ok(())
}

#[test]
fn test_renderer_matches_grid_inside_world() -> BurrowResult<()> {
    let mut session = walled_session(Position::new(9, 9))?;
    session.grid.set(8, 9, Tile::Tunnel)?;
    session.grid.set(12, 3, Tile::Enemy)?;

    let view = Renderer::new(7).render(&session.grid, &session.player)?;
    assert_eq!(view.rows[6][7], Tile::Tunnel);
    assert_eq!(view.rows[10][1], Tile::Enemy);
    assert!(view.legend.contains(Tile::Tunnel));
    assert!(view.legend.contains(Tile::Enemy));

    let line = view.legend.lines().join("\n");
    assert!(line.contains("# - Tunnel"));
    assert!(line.contains("E - Enemy"));
    Ok(())
}

#[test]
fn test_walk_across_stairs() -> BurrowResult<()> {
    let mut session = walled_session(Position::new(5, 5))?;
    session.grid.set(5, 6, Tile::StairsUp)?;
    let outcome = burrow::try_move(&mut session.player, &session.grid, 0, 1);
    assert_eq!(outcome, MoveOutcome::Moved);

    // Player hides the stairs it stands on
    let view = session.render()?;
    assert!(!view.legend.contains(Tile::StairsUp));
    Ok(())
}
