//! The draw pile.
//!
//! The current tile is a view of the pile's top, not a removed element:
//! EndTurn discards the top (the tile just played) and then reads the new
//! top. Which end counts as "top" is set by `PileDiscipline`.
//!
//! | Discipline | Opening tile | EndTurn discards / reads |
//! |------------|--------------|--------------------------|
//! | `Stack`    | back         | back                     |
//! | `Queue`    | front        | front                    |
//! | `Legacy`   | front        | back                     |

use im::Vector;
use serde::{Deserialize, Serialize};

use super::tile::TileDefinition;

/// Which end of the pile tiles are drawn from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PileDiscipline {
    /// Last element is the top for every draw.
    #[default]
    Stack,
    /// First element is the top for every draw.
    Queue,
    /// Opening tile from the front, later draws from the back.
    Legacy,
}

/// Ordered remaining tiles.
///
/// Backed by `im::Vector` so snapshots share structure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPile {
    tiles: Vector<TileDefinition>,
    discipline: PileDiscipline,
}

impl DrawPile {
    /// Create a pile from tiles in stored order.
    pub fn new(tiles: impl IntoIterator<Item = TileDefinition>, discipline: PileDiscipline) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
            discipline,
        }
    }

    /// Draw discipline.
    #[must_use]
    pub fn discipline(&self) -> PileDiscipline {
        self.discipline
    }

    /// Number of remaining tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if the pile is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in stored order.
    pub fn iter(&self) -> impl Iterator<Item = &TileDefinition> {
        self.tiles.iter()
    }

    /// Tile handed to the first player at game start.
    #[must_use]
    pub fn opening_tile(&self) -> Option<&TileDefinition> {
        match self.discipline {
            PileDiscipline::Stack => self.tiles.back(),
            PileDiscipline::Queue | PileDiscipline::Legacy => self.tiles.front(),
        }
    }

    /// Tile an EndTurn draw would read.
    #[must_use]
    pub fn top(&self) -> Option<&TileDefinition> {
        match self.discipline {
            PileDiscipline::Stack | PileDiscipline::Legacy => self.tiles.back(),
            PileDiscipline::Queue => self.tiles.front(),
        }
    }

    /// Remove the top tile. No-op on an empty pile.
    pub fn discard_top(&mut self) -> Option<TileDefinition> {
        match self.discipline {
            PileDiscipline::Stack | PileDiscipline::Legacy => self.tiles.pop_back(),
            PileDiscipline::Queue => self.tiles.pop_front(),
        }
    }

    /// Discard the top and return the new top, as EndTurn does.
    pub fn advance(&mut self) -> Option<TileDefinition> {
        self.discard_top();
        self.top().cloned()
    }
}
