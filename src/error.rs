//! Error types for the FPL lineup optimizer

use thiserror::Error;

use crate::lineup::solver::SolveError;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, FplError>;

#[derive(Error, Debug)]
pub enum FplError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid position code: {code}")]
    InvalidPosition { code: String },

    #[error("Invalid player cost: {cost}")]
    InvalidCost { cost: i64 },

    #[error("Invalid value for {var}: {value}")]
    InvalidConfig { var: String, value: String },

    #[error("No feasible lineup satisfies the squad rules")]
    Infeasible,

    #[error("Solver error: {message}")]
    Solver { message: String },
}

impl FplError {
    /// True when the failure happened while talking to the upstream API.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, FplError::Http(_))
    }
}

impl From<SolveError> for FplError {
    fn from(err: SolveError) -> Self {
        match err {
            SolveError::Infeasible => FplError::Infeasible,
            SolveError::Backend(message) => FplError::Solver { message },
        }
    }
}
