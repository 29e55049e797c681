//! Turn phases and the phase → legal action table.
//!
//! | Phase         | Legal actions                            |
//! |---------------|------------------------------------------|
//! | `TilePhase`   | RotateTile, PlaceTile                    |
//! | `MeeplePhase` | PlaceMeeple, PlaceAbbot, RecallAbbot     |
//! | `EndPhase`    | EndTurn                                  |

use serde::{Deserialize, Serialize};

use crate::core::ActionKind;

/// Step within a player's turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    #[default]
    TilePhase,
    MeeplePhase,
    EndPhase,
}

impl TurnPhase {
    /// All phases in turn order.
    pub const ALL: [TurnPhase; 3] = [TurnPhase::TilePhase, TurnPhase::MeeplePhase, TurnPhase::EndPhase];

    /// Phase that follows this one. EndPhase wraps to TilePhase.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            TurnPhase::TilePhase => TurnPhase::MeeplePhase,
            TurnPhase::MeeplePhase => TurnPhase::EndPhase,
            TurnPhase::EndPhase => TurnPhase::TilePhase,
        }
    }
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TurnPhase::TilePhase => "tile_phase",
            TurnPhase::MeeplePhase => "meeple_phase",
            TurnPhase::EndPhase => "end_phase",
        };
        f.write_str(label)
    }
}

const TILE_ACTIONS: &[ActionKind] = &[ActionKind::RotateTile, ActionKind::PlaceTile];
const MEEPLE_ACTIONS: &[ActionKind] = &[
    ActionKind::PlaceMeeple,
    ActionKind::PlaceAbbot,
    ActionKind::RecallAbbot,
];
const END_ACTIONS: &[ActionKind] = &[ActionKind::EndTurn];

/// Actions legal in `phase`.
#[must_use]
pub const fn legal_actions(phase: TurnPhase) -> &'static [ActionKind] {
    match phase {
        TurnPhase::TilePhase => TILE_ACTIONS,
        TurnPhase::MeeplePhase => MEEPLE_ACTIONS,
        TurnPhase::EndPhase => END_ACTIONS,
    }
}

/// Is `action` legal in `phase`?
#[must_use]
pub fn is_legal(phase: TurnPhase, action: ActionKind) -> bool {
    legal_actions(phase).contains(&action)
}
