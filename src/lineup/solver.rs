//! Mixed-integer solver seam.
//!
//! The optimizer only talks to [`MipSolver`]; the default backend hands the
//! program to `good_lp` and its pure-Rust `microlp` solver.

use good_lp::{
    constraint, default_solver, variable, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};
use thiserror::Error;

use crate::lineup::formulation::BinaryProgram;

/// Why a solve produced no assignment.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error("no feasible assignment exists")]
    Infeasible,

    #[error("{0}")]
    Backend(String),
}

/// A backend able to maximise a [`BinaryProgram`].
///
/// Implementations return one flag per variable: `true` when selected.
pub trait MipSolver: Send + Sync {
    fn name(&self) -> &'static str;

    fn solve(&self, program: &BinaryProgram) -> Result<Vec<bool>, SolveError>;
}

/// `good_lp` backed solver using branch and bound from `microlp`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MicroLpSolver;

impl MipSolver for MicroLpSolver {
    fn name(&self) -> &'static str {
        "microlp"
    }

    fn solve(&self, program: &BinaryProgram) -> Result<Vec<bool>, SolveError> {
        let mut vars = ProblemVariables::new();
        let picks: Vec<Variable> = (0..program.num_vars())
            .map(|_| vars.add(variable().binary()))
            .collect();

        let objective: Expression = program
            .objective
            .iter()
            .zip(&picks)
            .map(|(&coef, &var)| coef * var)
            .sum();

        let mut model = vars.maximise(objective).using(default_solver);

        for c in &program.constraints {
            let lhs: Expression = c.terms.iter().map(|&(i, coef)| coef * picks[i]).sum();
            match (c.min, c.max) {
                (Some(min), Some(max)) if min == max => {
                    model = model.with(constraint!(lhs == min));
                }
                (min, max) => {
                    if let Some(min) = min {
                        model = model.with(constraint!(lhs.clone() >= min));
                    }
                    if let Some(max) = max {
                        model = model.with(constraint!(lhs <= max));
                    }
                }
            }
        }

        let solution = model.solve().map_err(|e| match e {
            ResolutionError::Infeasible => SolveError::Infeasible,
            other => SolveError::Backend(other.to_string()),
        })?;

        Ok(picks.iter().map(|&var| solution.value(var) > 0.5).collect())
    }
}
