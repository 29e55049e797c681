//! The prototype table setup.
//!
//! Two players, five meeple and an abbot each, and a three-tile pile:
//! - city/road/grass/road with the two roads joined
//! - grass/road/grass/road
//! - city/city/grass/grass with the two cities joined
//!
//! Uses the `Legacy` pile discipline by default: the first tile comes from
//! the front, later draws from the back.

mod game;

pub use game::{prototype_tiles, PrototypeBuilder};
