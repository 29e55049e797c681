//! Ready-made game setups.

pub mod prototype;
