//! Serialized access to a running game.
//!
//! Snapshots are plain values, so a single caller needs nothing more than
//! `GameState::apply_action`. When several callers share one game (a UI
//! thread and a bot, say), `GameSession` holds the current snapshot behind a
//! mutex so each `apply` reads and replaces it atomically.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::core::{ActionKind, GameState};
use crate::error::GameError;
use crate::rules::{NoResourceEffects, ResourceLedger, TurnEngine};

/// A shared, mutex-guarded game.
#[derive(Debug)]
pub struct GameSession<R = NoResourceEffects> {
    engine: TurnEngine<R>,
    state: Mutex<GameState>,
}

impl GameSession {
    /// Start a session with no resource effects.
    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self::with_engine(TurnEngine::new(), state)
    }
}

impl<R: ResourceLedger> GameSession<R> {
    /// Start a session with a specific engine.
    pub fn with_engine(engine: TurnEngine<R>, state: GameState) -> Self {
        Self {
            engine,
            state: Mutex::new(state),
        }
    }

    // Poisoning is ignored: the snapshot is only ever replaced whole.
    fn lock(&self) -> MutexGuard<'_, GameState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply an action to the current snapshot.
    ///
    /// On success the session advances and the new snapshot is returned.
    /// On failure the session is unchanged.
    pub fn apply(&self, action: ActionKind) -> Result<GameState, GameError> {
        let mut guard = self.lock();
        let next = self.engine.apply_action(&guard, action)?;
        *guard = next.clone();
        Ok(next)
    }

    /// Copy of the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.lock().clone()
    }

    /// Consume the session, returning the final snapshot.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
