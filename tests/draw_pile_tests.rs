//! Draw pile disciplines driven through the engine.

mod common;

use common::{init_logging, play_turn, players, tiles};
use tile_turn_engine::{EdgeType, GameConfig, GameState, PileDiscipline, TileDefinition};

fn start(discipline: PileDiscipline, n: usize) -> GameState {
    let config = GameConfig::new()
        .with_players(players(&["A", "B"]))
        .with_tiles(tiles(n))
        .with_discipline(discipline);
    GameState::from_config(&config).unwrap()
}

/// Tiles offered turn by turn until the pile runs out.
fn offered(discipline: PileDiscipline, n: usize) -> Vec<usize> {
    let all = tiles(n);
    let mut state = start(discipline, n);
    let mut out = Vec::new();

    while let Some(tile) = state.current_tile() {
        out.push(all.iter().position(|t| t == tile).unwrap());
        state = play_turn(&state);
    }
    out
}

#[test]
fn test_stack_draws_from_back() {
    init_logging();
    assert_eq!(offered(PileDiscipline::Stack, 4), vec![3, 2, 1, 0]);
}

#[test]
fn test_queue_draws_from_front() {
    init_logging();
    assert_eq!(offered(PileDiscipline::Queue, 4), vec![0, 1, 2, 3]);
}

#[test]
fn test_legacy_opens_front_then_back() {
    init_logging();
    // Tile 0 is offered first but tile 3 is the one discarded after turn 1.
    assert_eq!(offered(PileDiscipline::Legacy, 4), vec![0, 2, 1, 0]);
}

#[test]
fn test_every_discipline_takes_one_turn_per_tile() {
    init_logging();

    for discipline in [PileDiscipline::Stack, PileDiscipline::Queue, PileDiscipline::Legacy] {
        assert_eq!(offered(discipline, 6).len(), 6, "{discipline:?}");
    }
}

#[test]
fn test_current_tile_tracks_top_after_end_turn() {
    init_logging();

    for discipline in [PileDiscipline::Stack, PileDiscipline::Queue, PileDiscipline::Legacy] {
        let mut state = start(discipline, 5);
        while !state.game_complete() {
            state = play_turn(&state);
            assert_eq!(state.current_tile(), state.draw_pile().top());
        }
    }
}

#[test]
fn test_shuffled_pile_is_reproducible() {
    init_logging();

    let config = GameConfig::new()
        .with_players(players(&["A", "B"]))
        .with_tiles(tiles(8))
        .shuffled(2024);

    let a = GameState::from_config(&config).unwrap();
    let b = GameState::from_config(&config).unwrap();
    assert_eq!(a, b);

    let key = |t: &TileDefinition| (t.garden, t.edges.iter().position(|e| *e == EdgeType::City));
    let mut remaining: Vec<_> = a.draw_pile().iter().cloned().collect();
    let mut original = tiles(8);
    remaining.sort_by_key(key);
    original.sort_by_key(key);
    assert_eq!(remaining, original);
}
