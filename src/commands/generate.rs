//! The lineup pipeline: fetch, shortlist, hand off, optimize, summarize.
//!
//! [`generate_lineup`] runs the stages in order and stops at the first
//! failure. Callers that must never fail (the HTTP handler) wrap the
//! result in a [`LineupOutcome`] and inspect it explicitly.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    core::CandidateStore,
    fpl::PlayerSource,
    lineup::{
        filter::{shortlist, SHORTLIST_PER_POSITION},
        formulation::SquadRules,
        optimizer::optimize,
        solver::MipSolver,
        summary::{summarize, LineupSummary},
    },
    FplError, Result,
};

pub const INFEASIBLE_MESSAGE: &str = "No feasible solution found. Consider relaxing constraints.";

/// Run the whole pipeline once.
///
/// Every call fetches a fresh pool; there are no retries.
pub async fn generate_lineup<S, M>(
    source: &S,
    solver: &M,
    rules: &SquadRules,
    store: &CandidateStore,
) -> Result<LineupSummary>
where
    S: PlayerSource,
    M: MipSolver + ?Sized,
{
    let players = source.fetch_players().await?;

    let pool = shortlist(&players, SHORTLIST_PER_POSITION);
    debug!(players = players.len(), candidates = pool.len(), "shortlisted");

    let candidates = store.hand_off(pool)?;
    let selection = optimize(&candidates, rules, solver)?;
    let summary = summarize(&selection);

    info!(
        total_cost = summary.total_cost,
        total_points = summary.total_points,
        captain = summary.captain.as_deref().unwrap_or("-"),
        "lineup generated"
    );
    Ok(summary)
}

/// Result of one pipeline run, classified for the caller.
#[derive(Debug)]
pub enum LineupOutcome {
    Ok(LineupSummary),
    FetchFailed(String),
    Infeasible,
    SolverFailed(String),
    Failed(String),
}

impl From<Result<LineupSummary>> for LineupOutcome {
    fn from(result: Result<LineupSummary>) -> Self {
        match result {
            Ok(summary) => LineupOutcome::Ok(summary),
            Err(err) => {
                warn!(error = %err, "lineup generation failed");
                match err {
                    FplError::Http(e) => LineupOutcome::FetchFailed(e.to_string()),
                    FplError::Infeasible => LineupOutcome::Infeasible,
                    FplError::Solver { message } => LineupOutcome::SolverFailed(message),
                    other => LineupOutcome::Failed(other.to_string()),
                }
            }
        }
    }
}

impl LineupOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, LineupOutcome::Ok(_))
    }

    /// User-facing message for every non-success outcome.
    pub fn error_message(&self) -> Option<String> {
        match self {
            LineupOutcome::Ok(_) => None,
            LineupOutcome::FetchFailed(detail) => {
                Some(format!("Failed to fetch FPL data: {}", detail))
            }
            LineupOutcome::Infeasible => Some(INFEASIBLE_MESSAGE.to_string()),
            LineupOutcome::SolverFailed(detail) | LineupOutcome::Failed(detail) => {
                Some(format!("An error occurred: {}", detail))
            }
        }
    }

    pub fn into_response(self) -> LineupResponse {
        match self {
            LineupOutcome::Ok(summary) => LineupResponse::Lineup(summary),
            failed => LineupResponse::Error {
                error: failed.error_message().unwrap_or_default(),
            },
        }
    }
}

/// Body of `/generate_team`: either the lineup or an `error` string.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LineupResponse {
    Lineup(LineupSummary),
    Error { error: String },
}
