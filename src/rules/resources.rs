//! Meeple and abbot resource hooks.
//!
//! The turn engine calls a `ResourceLedger` for PlaceMeeple, PlaceAbbot and
//! RecallAbbot with the active player's state. The stock ledger,
//! `NoResourceEffects`, leaves counters untouched: placement and recall do
//! not yet cost or return anything.

use crate::core::PlayerState;

/// Resource accounting for meeple and abbot actions.
///
/// All hooks default to no-ops. Implementations must be deterministic.
pub trait ResourceLedger {
    /// Called when the active player places a meeple.
    fn place_meeple(&self, _player: &mut PlayerState) {}

    /// Called when the active player places their abbot.
    fn place_abbot(&self, _player: &mut PlayerState) {}

    /// Called when the active player recalls their abbot.
    fn recall_abbot(&self, _player: &mut PlayerState) {}
}

/// Ledger that changes nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoResourceEffects;

impl ResourceLedger for NoResourceEffects {}
