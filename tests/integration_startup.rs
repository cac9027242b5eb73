//! Integration test to ensure a session can start up without errors.

use burrow::{
    BurrowResult, Entity, GameSession, GenerationConfig, Generator, Position, Tile, TileGrid,
    WalledRoomGenerator,
};

#[test]
fn test_basic_startup() -> BurrowResult<()> {
    let session = GameSession::generate(GenerationConfig::new(12345))?;

    assert_eq!(session.turn_number, 0);
    assert_eq!(session.grid.size(), burrow::config::WORLD_SIZE);

    // The player spawns strictly inside the wall ring
    let pos = session.player.position;
    let last = session.grid.size() as i32 - 2;
    assert!((1..=last).contains(&pos.x) && (1..=last).contains(&pos.y));
    assert_ne!(session.grid.get_at(pos)?, Tile::Wall);

    Ok(())
}

#[test]
fn test_same_seed_same_world() -> BurrowResult<()> {
    let a = GameSession::generate(GenerationConfig::new(777))?;
    let b = GameSession::generate(GenerationConfig::new(777))?;
    assert_eq!(a.grid, b.grid);
    assert_eq!(a.player, b.player);
    Ok(())
}

#[test]
fn test_generated_world_has_both_stairs_most_of_the_time() -> BurrowResult<()> {
    // Stairs may overwrite each other, which is rare on an 18x18 interior
    let with_both = (0..20u64)
        .filter_map(|seed| GameSession::generate(GenerationConfig::new(seed)).ok())
        .filter(|session| {
            let tiles: Vec<Tile> = session.grid.iter().map(|(_, t)| t).collect();
            tiles.contains(&Tile::StairsUp) && tiles.contains(&Tile::StairsDown)
        })
        .count();
    assert!(with_both >= 15);
    Ok(())
}

#[test]
fn test_player_can_be_created_on_custom_world() -> BurrowResult<()> {
    let config = GenerationConfig::for_testing(3);
    let mut grid = TileGrid::new(config.world_size);
    let mut rng = burrow::generation::utils::create_rng(&config);
    WalledRoomGenerator::new().generate(&mut grid, &config, &mut rng)?;
    grid.set(5, 5, Tile::StairsDown)?;

    // Standing on a marker is allowed
    let session = GameSession::new_with_world(grid, Entity::player(Position::new(5, 5)), config)?;
    assert_eq!(session.player.symbol, Tile::Player);
    Ok(())
}
