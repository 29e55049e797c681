//! Core types: tiles, players, actions, the draw pile, configuration and
//! game state snapshots.

pub mod tile;
pub mod player;
pub mod action;
pub mod pile;
pub mod rng;
pub mod config;
pub mod state;

pub use tile::{Direction, EdgeType, Join, Orientation, TileDefinition, EDGE_COUNT};
pub use player::{PlayerId, PlayerRoster, PlayerSetup, PlayerState};
pub use action::{ActionKind, ActionRecord};
pub use pile::{DrawPile, PileDiscipline};
pub use rng::PileRng;
pub use config::GameConfig;
pub use state::{create_game, GameState};
