//! Tile definitions and orientation.
//!
//! A tile stores its four edges in a fixed cyclic order (unrotated
//! N, E, S, W). Rotation never permutes that array: it only moves the read
//! offset, so the edge facing north is `edges[orientation]`, east is
//! `edges[(orientation + 1) % 4]`, and so on.
//!
//! ```
//! use tile_turn_engine::core::{Direction, EdgeType, TileDefinition};
//!
//! let tile = TileDefinition::new([EdgeType::City, EdgeType::Road, EdgeType::Grass, EdgeType::Road]);
//! assert_eq!(tile.edge(Direction::North), EdgeType::City);
//!
//! let turned = tile.rotated();
//! assert_eq!(turned.edge(Direction::North), EdgeType::Road);
//! assert_eq!(turned.edges, tile.edges); // storage untouched
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::SetupError;

/// Number of edges on every tile.
pub const EDGE_COUNT: usize = 4;

/// Terrain on one edge of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    City,
    Road,
    Grass,
}

impl std::fmt::Display for EdgeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EdgeType::City => "city",
            EdgeType::Road => "road",
            EdgeType::Grass => "grass",
        };
        f.write_str(label)
    }
}

/// Logical compass direction after rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in clockwise order starting at north.
    pub const ALL: [Direction; EDGE_COUNT] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Clockwise offset from north.
    #[must_use]
    pub const fn offset(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }
}

/// Rotation offset in `0..=3`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Orientation(u8);

impl Orientation {
    /// Create an orientation, reducing modulo 4.
    #[must_use]
    pub const fn new(turns: u8) -> Self {
        Self(turns % EDGE_COUNT as u8)
    }

    /// Get the raw offset.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// One quarter turn further.
    #[must_use]
    pub const fn rotated(self) -> Self {
        Self::new(self.0 + 1)
    }
}

impl TryFrom<u8> for Orientation {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (value as usize) < EDGE_COUNT {
            Ok(Self(value))
        } else {
            Err(format!("orientation out of range: {value}"))
        }
    }
}

impl From<Orientation> for u8 {
    fn from(orientation: Orientation) -> Self {
        orientation.0
    }
}

/// Two original edge indices belonging to the same feature.
///
/// Unordered: `Join::new(3, 1) == Join::new(1, 3)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Join {
    low: u8,
    high: u8,
}

impl Join {
    /// Create a join between two distinct edges in `0..=3`.
    pub fn new(a: u8, b: u8) -> Result<Self, SetupError> {
        if a == b || a as usize >= EDGE_COUNT || b as usize >= EDGE_COUNT {
            return Err(SetupError::InvalidJoin(a, b));
        }
        Ok(Self {
            low: a.min(b),
            high: a.max(b),
        })
    }

    /// Smaller edge index.
    #[must_use]
    pub const fn low(self) -> u8 {
        self.low
    }

    /// Larger edge index.
    #[must_use]
    pub const fn high(self) -> u8 {
        self.high
    }

    /// Does this join connect edges `a` and `b` (in either order)?
    #[must_use]
    pub fn connects(self, a: u8, b: u8) -> bool {
        (self.low, self.high) == (a.min(b), a.max(b))
    }
}

/// A tile as drawn from the pile.
///
/// `joins`, `garden` and `abby` are carried for scoring and special tiles;
/// the turn engine does not read them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileDefinition {
    /// Unrotated edges in N, E, S, W order.
    pub edges: [EdgeType; EDGE_COUNT],

    /// Connected edge pairs. Most tiles have zero to two.
    pub joins: SmallVec<[Join; 2]>,

    /// Current rotation offset.
    pub orientation: Orientation,

    pub garden: bool,
    pub abby: bool,
}

impl TileDefinition {
    /// Create an unrotated tile with no joins or special flags.
    #[must_use]
    pub fn new(edges: [EdgeType; EDGE_COUNT]) -> Self {
        Self {
            edges,
            joins: SmallVec::new(),
            orientation: Orientation::default(),
            garden: false,
            abby: false,
        }
    }

    /// Add a join between two original edge indices.
    pub fn with_join(mut self, a: u8, b: u8) -> Result<Self, SetupError> {
        let join = Join::new(a, b)?;
        if !self.joins.contains(&join) {
            self.joins.push(join);
        }
        Ok(self)
    }

    /// Mark the tile as having a garden.
    #[must_use]
    pub fn with_garden(mut self) -> Self {
        self.garden = true;
        self
    }

    /// Mark the tile as having an abbey.
    #[must_use]
    pub fn with_abby(mut self) -> Self {
        self.abby = true;
        self
    }

    /// Edge currently facing `direction`.
    #[must_use]
    pub fn edge(&self, direction: Direction) -> EdgeType {
        let index = (self.orientation.raw() as usize + direction.offset()) % EDGE_COUNT;
        self.edges[index]
    }

    /// Edges as currently facing, in N, E, S, W order.
    #[must_use]
    pub fn oriented_edges(&self) -> [EdgeType; EDGE_COUNT] {
        Direction::ALL.map(|d| self.edge(d))
    }

    /// Copy of this tile turned one step.
    #[must_use]
    pub fn rotated(&self) -> Self {
        Self {
            orientation: self.orientation.rotated(),
            ..self.clone()
        }
    }

    /// Are original edges `a` and `b` part of the same feature?
    #[must_use]
    pub fn joined(&self, a: u8, b: u8) -> bool {
        self.joins.iter().any(|j| j.connects(a, b))
    }
}
