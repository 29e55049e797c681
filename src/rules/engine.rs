//! Turn transition engine.
//!
//! `TurnEngine::apply_action` is the only way a game moves forward:
//! - Validate the action against the phase table
//! - Check tile-dependent actions have a drawn tile
//! - Produce the next snapshot
//!
//! Validation runs before anything is cloned, so a rejected action cannot
//! leave a partially updated state behind.
//!
//! | Action                             | From → To     |
//! |------------------------------------|---------------|
//! | RotateTile                         | Tile → Tile   |
//! | PlaceTile                          | Tile → Meeple |
//! | PlaceMeeple/PlaceAbbot/RecallAbbot | Meeple → End  |
//! | EndTurn                            | End → Tile    |

use tracing::{debug, info, trace};

use super::phase::{is_legal, TurnPhase};
use super::resources::{NoResourceEffects, ResourceLedger};
use crate::core::{ActionKind, GameState};
use crate::error::GameError;

/// Applies actions to snapshots, calling a `ResourceLedger` for meeple and
/// abbot actions.
#[derive(Clone, Debug, Default)]
pub struct TurnEngine<R = NoResourceEffects> {
    ledger: R,
}

impl TurnEngine {
    /// Engine with no resource effects.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ledger: NoResourceEffects,
        }
    }
}

impl<R: ResourceLedger> TurnEngine<R> {
    /// Engine with a custom resource ledger.
    pub fn with_ledger(ledger: R) -> Self {
        Self { ledger }
    }

    /// The resource ledger in use.
    pub fn ledger(&self) -> &R {
        &self.ledger
    }

    /// Check an action without applying it.
    pub fn validate(&self, state: &GameState, action: ActionKind) -> Result<(), GameError> {
        let phase = state.turn_phase();
        if !is_legal(phase, action) {
            return Err(GameError::InvalidActionForPhase { action, phase });
        }
        if action.needs_tile() && state.current_tile().is_none() {
            return Err(GameError::NoTileDrawn { action });
        }
        Ok(())
    }

    /// Apply an action, returning the next snapshot.
    ///
    /// `state` is never modified, whether the action succeeds or not.
    pub fn apply_action(&self, state: &GameState, action: ActionKind) -> Result<GameState, GameError> {
        if let Err(err) = self.validate(state, action) {
            trace!(player = %state.active_player_name(), %action, %err, "action rejected");
            return Err(err);
        }

        let mut next = state.clone();
        next.record_action(action);
        let phase = state.turn_phase();

        match action {
            ActionKind::RotateTile => {
                if let Some(tile) = next.current_tile.as_mut() {
                    tile.orientation = tile.orientation.rotated();
                }
            }
            ActionKind::PlaceTile => {
                next.current_tile = None;
                next.turn_phase = phase.next();
            }
            ActionKind::PlaceMeeple => {
                if let Some(player) = next.active_player_mut() {
                    self.ledger.place_meeple(player);
                }
                next.turn_phase = phase.next();
            }
            ActionKind::PlaceAbbot => {
                if let Some(player) = next.active_player_mut() {
                    self.ledger.place_abbot(player);
                }
                next.turn_phase = phase.next();
            }
            ActionKind::RecallAbbot => {
                if let Some(player) = next.active_player_mut() {
                    self.ledger.recall_abbot(player);
                }
                next.turn_phase = phase.next();
            }
            ActionKind::EndTurn => {
                next.advance_turn();
                next.current_tile = next.draw_pile.advance();
                next.turn_phase = phase.next();

                if next.game_complete() && !state.game_complete() {
                    info!(turn = state.turn_number(), "draw pile exhausted, game complete");
                }
            }
        }

        debug!(
            player = %state.active_player_name(),
            %action,
            from = %state.turn_phase(),
            to = %next.turn_phase(),
            "action applied"
        );

        Ok(next)
    }
}

/// Apply an action with no resource effects.
pub fn apply_action(state: &GameState, action: ActionKind) -> Result<GameState, GameError> {
    TurnEngine::new().apply_action(state, action)
}
