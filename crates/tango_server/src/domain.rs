//! Domain operations.

pub mod generator;
