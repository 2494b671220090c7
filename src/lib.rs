//! Fantasy Premier League Optimal XI
//!
//! Fetches player projections from the public Fantasy Premier League API and
//! picks the eleven players with the highest projected points that satisfy
//! the squad rules, solved as a 0/1 integer program.
//!
//! ## Pipeline
//!
//! - **Acquisition** ([`fpl`]): one `bootstrap-static` request per run
//! - **Shortlist** ([`lineup::filter`]): available players, top 20 per position
//! - **Optimize** ([`lineup::optimizer`]): exactly 11 players, 1 GK, 3-5 DEF,
//!   2-5 MID, 1-3 FWD, at most 3 per club, under the budget
//! - **Summarize** ([`lineup::summary`]): totals, captain and vice-captain
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_xi::{
//!     commands::generate_lineup, core::CandidateStore, lineup::MicroLpSolver, FplClient,
//!     SquadRules,
//! };
//!
//! # async fn example() -> fpl_xi::Result<()> {
//! let client = FplClient::new(fpl_xi::fpl::BOOTSTRAP_URL, std::time::Duration::from_secs(10))?;
//! let lineup = generate_lineup(
//!     &client,
//!     &MicroLpSolver,
//!     &SquadRules::default(),
//!     &CandidateStore::InMemory,
//! )
//! .await?;
//! println!("Captain: {:?}", lineup.captain);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export PORT=8080
//! export FPL_BUDGET=1000
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod fpl;
pub mod lineup;

// Re-export commonly used types
pub use cli::types::{Availability, Position, TeamId};
pub use config::AppConfig;
pub use error::{FplError, Result};
pub use fpl::{FplClient, PlayerRecord};
pub use lineup::{LineupSummary, SquadRules};

pub const PORT_ENV_VAR: &str = "PORT";
pub const API_URL_ENV_VAR: &str = "FPL_API_URL";
pub const FETCH_TIMEOUT_ENV_VAR: &str = "FPL_FETCH_TIMEOUT_SECS";
pub const BUDGET_ENV_VAR: &str = "FPL_BUDGET";
pub const SCRATCH_DIR_ENV_VAR: &str = "FPL_SCRATCH_DIR";
