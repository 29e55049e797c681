//! Action kinds and action history.
//!
//! Every action is a bare verb: none of them carry a payload. The phase
//! table in `rules::phase` decides which verbs are legal when.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::error::ParseActionError;

/// A player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Turn the current tile a quarter turn.
    RotateTile,
    /// Commit the current tile to the board.
    PlaceTile,
    PlaceMeeple,
    PlaceAbbot,
    RecallAbbot,
    /// Pass control to the next player and draw.
    EndTurn,
}

impl ActionKind {
    /// Every action kind.
    pub const ALL: [ActionKind; 6] = [
        ActionKind::RotateTile,
        ActionKind::PlaceTile,
        ActionKind::PlaceMeeple,
        ActionKind::PlaceAbbot,
        ActionKind::RecallAbbot,
        ActionKind::EndTurn,
    ];

    /// UI label, e.g. `rotate_tile`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ActionKind::RotateTile => "rotate_tile",
            ActionKind::PlaceTile => "place_tile",
            ActionKind::PlaceMeeple => "place_meeple",
            ActionKind::PlaceAbbot => "place_abbot",
            ActionKind::RecallAbbot => "recall_abbot",
            ActionKind::EndTurn => "end_turn",
        }
    }

    /// Does this action need a drawn tile?
    #[must_use]
    pub const fn needs_tile(self) -> bool {
        matches!(self, ActionKind::RotateTile | ActionKind::PlaceTile)
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ActionKind {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionKind::ALL
            .into_iter()
            .find(|a| a.label() == s)
            .ok_or_else(|| ParseActionError(s.to_string()))
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: ActionKind,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: ActionKind, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
