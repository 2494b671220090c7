//! Core utilities for the lineup service
//!
//! - `scratch`: request-local file hand-off of the candidate table

pub mod scratch;

// Re-export commonly used items for convenience
pub use scratch::{default_scratch_dir, write_string, CandidateStore};
