//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use tile_turn_engine::{ActionKind, EdgeType, GameState, PlayerSetup, TileDefinition};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Players named as given, five meeple and an abbot each.
pub fn players(names: &[&str]) -> Vec<PlayerSetup> {
    names.iter().map(|n| PlayerSetup::new(*n, 5, true)).collect()
}

/// `n` distinguishable tiles: tile `i` has a city on edge `i % 4` and the
/// garden flag set when `i >= 4`.
pub fn tiles(n: usize) -> Vec<TileDefinition> {
    (0..n)
        .map(|i| {
            let mut edges = [EdgeType::Grass; 4];
            edges[i % 4] = EdgeType::City;
            let mut tile = TileDefinition::new(edges);
            tile.garden = i >= 4;
            tile
        })
        .collect()
}

/// Place the tile, place a meeple, end the turn.
pub fn play_turn(state: &GameState) -> GameState {
    [ActionKind::PlaceTile, ActionKind::PlaceMeeple, ActionKind::EndTurn]
        .into_iter()
        .fold(state.clone(), |s, action| s.apply_action(action).unwrap())
}
