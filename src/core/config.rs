//! Game configuration.
//!
//! A `GameConfig` collects everything fixed at game start:
//! - Players in turn order
//! - The draw pile in stored order
//! - The pile discipline
//! - An optional shuffle seed
//!
//! `GameState::from_config` turns it into the first snapshot.

use serde::{Deserialize, Serialize};

use super::pile::{DrawPile, PileDiscipline};
use super::player::PlayerSetup;
use super::rng::PileRng;
use super::tile::TileDefinition;

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Players in turn order.
    pub players: Vec<PlayerSetup>,

    /// Tiles in stored order, before any shuffle.
    pub tiles: Vec<TileDefinition>,

    /// Which end of the pile is drawn from.
    pub discipline: PileDiscipline,

    /// Shuffle the pile with this seed at creation.
    pub shuffle_seed: Option<u64>,
}

impl GameConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player at the end of the turn order.
    #[must_use]
    pub fn with_player(mut self, player: PlayerSetup) -> Self {
        self.players.push(player);
        self
    }

    /// Add several players in order.
    #[must_use]
    pub fn with_players(mut self, players: impl IntoIterator<Item = PlayerSetup>) -> Self {
        self.players.extend(players);
        self
    }

    /// Add a tile at the end of the stored pile.
    #[must_use]
    pub fn with_tile(mut self, tile: TileDefinition) -> Self {
        self.tiles.push(tile);
        self
    }

    /// Add several tiles in order.
    #[must_use]
    pub fn with_tiles(mut self, tiles: impl IntoIterator<Item = TileDefinition>) -> Self {
        self.tiles.extend(tiles);
        self
    }

    /// Set the pile discipline.
    #[must_use]
    pub fn with_discipline(mut self, discipline: PileDiscipline) -> Self {
        self.discipline = discipline;
        self
    }

    /// Shuffle the pile once, deterministically, at creation.
    #[must_use]
    pub fn shuffled(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    /// Build the draw pile, applying the shuffle if one was requested.
    #[must_use]
    pub fn build_pile(&self) -> DrawPile {
        let mut tiles = self.tiles.clone();
        if let Some(seed) = self.shuffle_seed {
            PileRng::new(seed).shuffle(&mut tiles);
        }
        DrawPile::new(tiles, self.discipline)
    }
}
