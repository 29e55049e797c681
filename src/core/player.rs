//! Players and turn order.
//!
//! ## PlayerId
//!
//! 0-based seat index into the fixed player order.
//!
//! ## PlayerRoster
//!
//! The ordered, fixed membership of a game. Turn order is list order,
//! round-robin with wrap-around. Names are unique within a roster.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::SetupError;

/// Seat index supporting 1-255 players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Starting configuration for one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub name: String,
    pub initial_meeple: u32,
    pub has_abbot: bool,
}

impl PlayerSetup {
    /// Create a player setup.
    pub fn new(name: impl Into<String>, initial_meeple: u32, has_abbot: bool) -> Self {
        Self {
            name: name.into(),
            initial_meeple,
            has_abbot,
        }
    }
}

/// In-game player state.
///
/// `score` belongs to scoring; `meeple_count` and `has_abbot` belong to a
/// `ResourceLedger`. The turn engine itself never changes them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    pub score: u32,
    pub meeple_count: u32,
    pub has_abbot: bool,
}

impl From<PlayerSetup> for PlayerState {
    fn from(setup: PlayerSetup) -> Self {
        Self {
            name: setup.name,
            score: 0,
            meeple_count: setup.initial_meeple,
            has_abbot: setup.has_abbot,
        }
    }
}

/// Fixed, ordered player list.
///
/// Deserialization goes through the same checks as `new`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RosterRepr")]
pub struct PlayerRoster {
    players: Vector<PlayerState>,
}

/// Unchecked wire form of a roster.
#[derive(Deserialize)]
struct RosterRepr {
    players: Vector<PlayerState>,
}

impl TryFrom<RosterRepr> for PlayerRoster {
    type Error = SetupError;

    fn try_from(repr: RosterRepr) -> Result<Self, Self::Error> {
        Self::from_states(repr.players)
    }
}

impl PlayerRoster {
    /// Build a roster, rejecting empty, oversized, or duplicate-named lists.
    pub fn new(setups: impl IntoIterator<Item = PlayerSetup>) -> Result<Self, SetupError> {
        Self::from_states(setups.into_iter().map(PlayerState::from).collect())
    }

    fn from_states(players: Vector<PlayerState>) -> Result<Self, SetupError> {
        let mut seen = FxHashSet::default();
        for player in &players {
            if !seen.insert(player.name.as_str()) {
                return Err(SetupError::DuplicatePlayerName(player.name.clone()));
            }
        }

        if players.is_empty() {
            return Err(SetupError::NoPlayers);
        }
        if players.len() > u8::MAX as usize {
            return Err(SetupError::TooManyPlayers(players.len()));
        }

        Ok(Self { players })
    }

    /// Get the number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false for a constructed roster.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Get a player's state.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&PlayerState> {
        self.players.get(player.index())
    }

    /// Get a mutable reference to a player's state.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut PlayerState> {
        self.players.get_mut(player.index())
    }

    /// Look a player up by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<PlayerId> {
        self.players
            .iter()
            .position(|p| p.name == name)
            .map(|i| PlayerId(i as u8))
    }

    /// The seat that plays after `player`, wrapping after the last seat.
    #[must_use]
    pub fn next_after(&self, player: PlayerId) -> PlayerId {
        PlayerId(((player.index() + 1) % self.players.len()) as u8)
    }

    /// Iterate over (PlayerId, &PlayerState) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &PlayerState)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| (PlayerId(i as u8), p))
    }

    /// Player names in turn order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(|p| p.name.as_str())
    }
}
