//! Lineup selection: shortlist, formulate, solve, summarize.

pub mod filter;
pub mod formulation;
pub mod optimizer;
pub mod solver;
pub mod summary;

pub use filter::{shortlist, Candidate, SHORTLIST_PER_POSITION};
pub use formulation::{formulate, BinaryProgram, SquadRules, DEFAULT_BUDGET};
pub use optimizer::{optimize, Selection};
pub use solver::{MicroLpSolver, MipSolver, SolveError};
pub use summary::{summarize, LineupPlayer, LineupSummary};
