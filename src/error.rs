//! Error types.
//!
//! - `GameError`: rejected actions. Always recoverable, never mutates state.
//! - `SetupError`: invalid game construction or snapshot (players, seats,
//!   joins).
//! - `ParseActionError`: unknown action label from a UI layer.

use thiserror::Error;

use crate::core::{ActionKind, PlayerId};
use crate::rules::TurnPhase;

/// An action was rejected by the engine.
///
/// The snapshot the action was applied to is left untouched.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The action is not in `legal_actions(phase)`.
    #[error("{action} is not legal during {phase}")]
    InvalidActionForPhase { action: ActionKind, phase: TurnPhase },

    /// RotateTile or PlaceTile without a current tile.
    #[error("{action} requires a drawn tile")]
    NoTileDrawn { action: ActionKind },
}

/// Game construction failed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("a game needs at least one player")]
    NoPlayers,

    #[error("at most 255 players supported, got {0}")]
    TooManyPlayers(usize),

    #[error("duplicate player name: {0}")]
    DuplicatePlayerName(String),

    /// Active seat is not a seat in the roster.
    #[error("active player {seat} is not among {players} players")]
    UnknownActivePlayer { seat: PlayerId, players: usize },

    /// A drawn tile is held outside the tile and meeple phases.
    #[error("a drawn tile cannot be held during {0}")]
    TileOutsidePlacement(TurnPhase),

    /// Join indices must be distinct edges in `0..=3`.
    #[error("invalid join ({0}, {1})")]
    InvalidJoin(u8, u8),
}

/// Unknown action label.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown action: {0}")]
pub struct ParseActionError(pub String);
