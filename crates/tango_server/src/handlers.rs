//! Handlers for each main route.

pub mod generate;

mod prelude;
