//! Turn rules.
//!
//! - `phase`: the phase → legal action table
//! - `engine`: validates and applies actions, producing new snapshots
//! - `resources`: hooks for meeple and abbot accounting

pub mod phase;
pub mod engine;
pub mod resources;

pub use phase::{is_legal, legal_actions, TurnPhase};
pub use engine::{apply_action, TurnEngine};
pub use resources::{NoResourceEffects, ResourceLedger};
