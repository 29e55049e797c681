//! Prototype setup builder.

use crate::core::{EdgeType, GameConfig, GameState, PileDiscipline, PlayerSetup, TileDefinition};
use crate::error::SetupError;

const STARTING_MEEPLE: u32 = 5;

/// The prototype's three tiles, in stored order.
pub fn prototype_tiles() -> Result<Vec<TileDefinition>, SetupError> {
    use EdgeType::{City, Grass, Road};

    Ok(vec![
        TileDefinition::new([City, Road, Grass, Road]).with_join(1, 3)?,
        TileDefinition::new([Grass, Road, Grass, Road]),
        TileDefinition::new([City, City, Grass, Grass]).with_join(0, 1)?,
    ])
}

/// Builder for the prototype game.
pub struct PrototypeBuilder {
    names: Vec<String>,
    discipline: PileDiscipline,
    shuffle_seed: Option<u64>,
}

impl Default for PrototypeBuilder {
    fn default() -> Self {
        Self {
            names: vec!["Fraser".to_string(), "Megan".to_string()],
            discipline: PileDiscipline::Legacy,
            shuffle_seed: None,
        }
    }
}

impl PrototypeBuilder {
    /// Builder for the default two-player table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the player names. Each player still gets five meeple and an
    /// abbot.
    #[must_use]
    pub fn player_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the pile discipline.
    #[must_use]
    pub fn discipline(mut self, discipline: PileDiscipline) -> Self {
        self.discipline = discipline;
        self
    }

    /// Shuffle the pile once, deterministically, at creation.
    #[must_use]
    pub fn shuffled(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    /// The configuration this builder describes.
    pub fn config(&self) -> Result<GameConfig, SetupError> {
        let mut config = GameConfig::new()
            .with_players(
                self.names
                    .iter()
                    .map(|name| PlayerSetup::new(name.clone(), STARTING_MEEPLE, true)),
            )
            .with_tiles(prototype_tiles()?)
            .with_discipline(self.discipline);

        if let Some(seed) = self.shuffle_seed {
            config = config.shuffled(seed);
        }
        Ok(config)
    }

    /// Build the opening snapshot.
    pub fn build(self) -> Result<GameState, SetupError> {
        GameState::from_config(&self.config()?)
    }
}
