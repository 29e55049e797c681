//! Game state snapshots.
//!
//! A `GameState` is an immutable value: every accepted action produces a new
//! snapshot and leaves the old one intact. Uses `im` persistent data
//! structures so that producing a snapshot is cheap.
//!
//! Contents:
//! - Players (fixed order) and the active player
//! - Turn phase
//! - Draw pile and the currently drawn tile
//! - Turn counter and action history
//!
//! Once the draw pile is empty the game is complete. The snapshot stays
//! usable; completion is a signal for callers, not a lock.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::action::{ActionKind, ActionRecord};
use super::config::GameConfig;
use super::pile::{DrawPile, PileDiscipline};
use super::player::{PlayerId, PlayerRoster, PlayerSetup, PlayerState};
use super::tile::TileDefinition;
use crate::error::{GameError, SetupError};
use crate::rules::{self, TurnEngine, TurnPhase};

/// Create a game with the default (`Stack`) pile discipline.
///
/// ```
/// use tile_turn_engine::core::{create_game, EdgeType, PlayerSetup, TileDefinition};
///
/// let state = create_game(
///     [PlayerSetup::new("A", 5, true), PlayerSetup::new("B", 5, true)],
///     [TileDefinition::new([EdgeType::Road; 4])],
/// )
/// .unwrap();
///
/// assert_eq!(state.active_player_name(), "A");
/// assert!(state.current_tile().is_some());
/// ```
pub fn create_game(
    players: impl IntoIterator<Item = PlayerSetup>,
    draw_pile: impl IntoIterator<Item = TileDefinition>,
) -> Result<GameState, SetupError> {
    GameState::new(players, DrawPile::new(draw_pile, PileDiscipline::default()))
}

/// Complete game snapshot.
///
/// Deserialization rejects snapshots whose active seat is outside the roster
/// or that hold a drawn tile during EndPhase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRepr")]
pub struct GameState {
    pub(crate) players: PlayerRoster,
    pub(crate) active_player: PlayerId,
    pub(crate) turn_phase: TurnPhase,
    pub(crate) draw_pile: DrawPile,
    pub(crate) current_tile: Option<TileDefinition>,

    /// Turn number (starts at 1).
    pub(crate) turn_number: u32,

    /// Action sequence within turn.
    pub(crate) action_sequence: u32,

    pub(crate) history: Vector<ActionRecord>,
}

/// Unchecked wire form of a snapshot.
#[derive(Deserialize)]
struct GameStateRepr {
    players: PlayerRoster,
    active_player: PlayerId,
    turn_phase: TurnPhase,
    draw_pile: DrawPile,
    current_tile: Option<TileDefinition>,
    turn_number: u32,
    action_sequence: u32,
    history: Vector<ActionRecord>,
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = SetupError;

    fn try_from(repr: GameStateRepr) -> Result<Self, Self::Error> {
        if repr.players.get(repr.active_player).is_none() {
            return Err(SetupError::UnknownActivePlayer {
                seat: repr.active_player,
                players: repr.players.len(),
            });
        }
        if repr.current_tile.is_some() && repr.turn_phase == TurnPhase::EndPhase {
            return Err(SetupError::TileOutsidePlacement(repr.turn_phase));
        }

        Ok(Self {
            players: repr.players,
            active_player: repr.active_player,
            turn_phase: repr.turn_phase,
            draw_pile: repr.draw_pile,
            current_tile: repr.current_tile,
            turn_number: repr.turn_number,
            action_sequence: repr.action_sequence,
            history: repr.history,
        })
    }
}

impl GameState {
    /// Create the opening snapshot: first player active, TilePhase, and the
    /// pile's opening tile drawn.
    pub fn new(
        players: impl IntoIterator<Item = PlayerSetup>,
        draw_pile: DrawPile,
    ) -> Result<Self, SetupError> {
        let players = PlayerRoster::new(players)?;
        let current_tile = draw_pile.opening_tile().cloned();

        debug!(
            players = players.len(),
            tiles = draw_pile.len(),
            discipline = ?draw_pile.discipline(),
            "game created"
        );

        Ok(Self {
            players,
            active_player: PlayerId::new(0),
            turn_phase: TurnPhase::TilePhase,
            draw_pile,
            current_tile,
            turn_number: 1,
            action_sequence: 0,
            history: Vector::new(),
        })
    }

    /// Create the opening snapshot from a configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self, SetupError> {
        Self::new(config.players.iter().cloned(), config.build_pile())
    }

    /// Apply an action with the default resource ledger.
    ///
    /// Returns the next snapshot; `self` is never modified.
    pub fn apply_action(&self, action: ActionKind) -> Result<Self, GameError> {
        TurnEngine::new().apply_action(self, action)
    }

    // === Projections ===

    /// All players in turn order.
    #[must_use]
    pub fn players(&self) -> &PlayerRoster {
        &self.players
    }

    /// Seat of the player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// State of the player whose turn it is.
    #[must_use]
    pub fn active_player_state(&self) -> Option<&PlayerState> {
        self.players.get(self.active_player)
    }

    /// Name of the player whose turn it is.
    #[must_use]
    pub fn active_player_name(&self) -> &str {
        self.active_player_state().map_or("", |p| p.name.as_str())
    }

    /// Current turn phase.
    #[must_use]
    pub fn turn_phase(&self) -> TurnPhase {
        self.turn_phase
    }

    /// Actions legal right now.
    #[must_use]
    pub fn legal_actions(&self) -> &'static [ActionKind] {
        rules::legal_actions(self.turn_phase)
    }

    /// Remaining draw pile.
    #[must_use]
    pub fn draw_pile(&self) -> &DrawPile {
        &self.draw_pile
    }

    /// Tile drawn for the active player, if any.
    #[must_use]
    pub fn current_tile(&self) -> Option<&TileDefinition> {
        self.current_tile.as_ref()
    }

    /// True exactly when the draw pile is empty.
    #[must_use]
    pub fn game_complete(&self) -> bool {
        self.draw_pile.is_empty()
    }

    /// Turn number (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every accepted action, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === Transitions (engine only) ===

    /// Record an accepted action for the active player.
    pub(crate) fn record_action(&mut self, action: ActionKind) {
        let record = ActionRecord::new(self.active_player, action, self.turn_number, self.action_sequence);
        self.action_sequence += 1;
        self.history.push_back(record);
    }

    /// Mutable state of the player whose turn it is.
    pub(crate) fn active_player_mut(&mut self) -> Option<&mut PlayerState> {
        self.players.get_mut(self.active_player)
    }

    /// Pass to the next seat and start a new turn.
    pub(crate) fn advance_turn(&mut self) {
        self.active_player = self.players.next_after(self.active_player);
        self.turn_number += 1;
        self.action_sequence = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tile::EdgeType;

    fn setups() -> Vec<PlayerSetup> {
        vec![PlayerSetup::new("A", 5, true), PlayerSetup::new("B", 5, true)]
    }

    fn tiles() -> Vec<TileDefinition> {
        vec![
            TileDefinition::new([EdgeType::City; 4]),
            TileDefinition::new([EdgeType::Road; 4]),
        ]
    }

    #[test]
    fn test_create_game_defaults() {
        let state = create_game(setups(), tiles()).unwrap();

        assert_eq!(state.active_player(), PlayerId::new(0));
        assert_eq!(state.active_player_name(), "A");
        assert_eq!(state.turn_phase(), TurnPhase::TilePhase);
        assert_eq!(state.turn_number(), 1);
        assert_eq!(state.draw_pile().len(), 2);
        assert!(state.history().is_empty());
        assert!(!state.game_complete());
        // Stack discipline: opening tile is the back of the pile.
        assert_eq!(state.current_tile(), Some(&tiles()[1]));
    }

    #[test]
    fn test_create_game_empty_pile_is_complete() {
        let state = create_game(setups(), Vec::new()).unwrap();

        assert!(state.game_complete());
        assert!(state.current_tile().is_none());
    }

    #[test]
    fn test_create_game_rejects_bad_roster() {
        assert_eq!(create_game(Vec::new(), tiles()), Err(SetupError::NoPlayers));

        let dup = vec![PlayerSetup::new("A", 5, true), PlayerSetup::new("A", 5, true)];
        assert_eq!(
            create_game(dup, tiles()),
            Err(SetupError::DuplicatePlayerName("A".to_string()))
        );
    }

    #[test]
    fn test_from_config_uses_discipline() {
        let config = GameConfig::new()
            .with_players(setups())
            .with_tiles(tiles())
            .with_discipline(PileDiscipline::Queue);
        let state = GameState::from_config(&config).unwrap();

        assert_eq!(state.current_tile(), Some(&tiles()[0]));
        assert_eq!(state.draw_pile().discipline(), PileDiscipline::Queue);
    }

    #[test]
    fn test_legal_actions_projection() {
        let state = create_game(setups(), tiles()).unwrap();
        assert_eq!(
            state.legal_actions(),
            &[ActionKind::RotateTile, ActionKind::PlaceTile]
        );
    }

    #[test]
    fn test_record_and_advance() {
        let mut state = create_game(setups(), tiles()).unwrap();

        state.record_action(ActionKind::PlaceTile);
        state.record_action(ActionKind::PlaceMeeple);
        state.advance_turn();
        state.record_action(ActionKind::RotateTile);

        let records: Vec<_> = state.history().iter().cloned().collect();
        assert_eq!(records[0], ActionRecord::new(PlayerId::new(0), ActionKind::PlaceTile, 1, 0));
        assert_eq!(records[1], ActionRecord::new(PlayerId::new(0), ActionKind::PlaceMeeple, 1, 1));
        assert_eq!(records[2], ActionRecord::new(PlayerId::new(1), ActionKind::RotateTile, 2, 0));
        assert_eq!(state.active_player_name(), "B");
    }

    fn snapshot_json(state: &GameState) -> serde_json::Value {
        serde_json::to_value(state).unwrap()
    }

    #[test]
    fn test_deserialize_rejects_unknown_active_player() {
        let mut json = snapshot_json(&create_game(setups(), tiles()).unwrap());
        json["active_player"] = serde_json::json!(7);

        let err = serde_json::from_value::<GameState>(json).unwrap_err();
        assert!(err.to_string().contains("active player Player 7 is not among 2 players"));
    }

    #[test]
    fn test_deserialize_rejects_tile_in_end_phase() {
        let mut json = snapshot_json(&create_game(setups(), tiles()).unwrap());
        json["turn_phase"] = serde_json::json!("end_phase");

        let err = serde_json::from_value::<GameState>(json).unwrap_err();
        assert!(err.to_string().contains("cannot be held during end_phase"));
    }

    #[test]
    fn test_deserialize_rejects_empty_roster() {
        let mut json = snapshot_json(&create_game(setups(), Vec::new()).unwrap());
        json["players"]["players"] = serde_json::json!([]);
        json["turn_phase"] = serde_json::json!("end_phase");

        let err = serde_json::from_value::<GameState>(json).unwrap_err();
        assert!(err.to_string().contains("at least one player"));
    }

    #[test]
    fn test_deserialize_accepts_end_phase_without_tile() {
        let state = create_game(setups(), tiles()).unwrap();
        let state = state.apply_action(ActionKind::PlaceTile).unwrap();
        let state = state.apply_action(ActionKind::PlaceMeeple).unwrap();

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, state);

        let next = deserialized.apply_action(ActionKind::EndTurn).unwrap();
        assert_eq!(next.active_player_name(), "B");
    }

    #[test]
    fn test_snapshot_serialization() {
        let state = create_game(setups(), tiles()).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
