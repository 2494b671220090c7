//! Command implementations for the fpl-xi CLI

pub mod generate;
pub mod pick;
pub mod serve;

pub use generate::{generate_lineup, LineupOutcome, LineupResponse};
