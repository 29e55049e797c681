//! # tile-turn-engine
//!
//! Turn-phase state machine and draw pile for a tile-laying board game.
//!
//! ## Design Principles
//!
//! 1. **Snapshots**: `GameState` is an immutable value. Every accepted action
//!    returns a new snapshot; rejected actions change nothing.
//!
//! 2. **Engine-Enforced Phases**: Legality is checked inside
//!    `apply_action`, not left to whoever renders the buttons.
//!
//! 3. **Deterministic**: A game is a pure function of its configuration and
//!    the actions applied. The pile is never shuffled mid-game.
//!
//! ## Turn Structure
//!
//! ```text
//! TilePhase ──PlaceTile──▶ MeeplePhase ──PlaceMeeple/PlaceAbbot/RecallAbbot──▶ EndPhase
//!    ▲  │                                                                        │
//!    │  └─RotateTile                                                             │
//!    └──────────────────────────────── EndTurn ──────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use tile_turn_engine::{ActionKind, PrototypeBuilder, TurnPhase};
//!
//! let state = PrototypeBuilder::new().build().unwrap();
//! let state = state.apply_action(ActionKind::RotateTile).unwrap();
//! let state = state.apply_action(ActionKind::PlaceTile).unwrap();
//! let state = state.apply_action(ActionKind::PlaceMeeple).unwrap();
//! let state = state.apply_action(ActionKind::EndTurn).unwrap();
//!
//! assert_eq!(state.active_player_name(), "Megan");
//! assert_eq!(state.turn_phase(), TurnPhase::TilePhase);
//! assert_eq!(state.draw_pile().len(), 2);
//! ```
//!
//! ## Modules
//!
//! - `core`: Tiles, players, actions, draw pile, configuration, state
//! - `rules`: Phase table, transition engine, resource hooks
//! - `session`: Mutex-guarded game for multiple callers
//! - `games`: Ready-made setups
//! - `error`: Error types

pub mod core;
pub mod error;
pub mod games;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    create_game, ActionKind, ActionRecord, Direction, DrawPile, EdgeType, GameConfig, GameState,
    Join, Orientation, PileDiscipline, PlayerId, PlayerRoster, PlayerSetup, PlayerState,
    TileDefinition,
};

pub use crate::error::{GameError, ParseActionError, SetupError};

pub use crate::rules::{
    apply_action, is_legal, legal_actions, NoResourceEffects, ResourceLedger, TurnEngine,
    TurnPhase,
};

pub use crate::session::GameSession;

pub use crate::games::prototype::{prototype_tiles, PrototypeBuilder};
