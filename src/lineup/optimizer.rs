//! Optimal XI selection.

use tracing::{debug, warn};

use crate::{
    error::{FplError, Result},
    lineup::{
        filter::Candidate,
        formulation::{formulate, SquadRules},
        solver::MipSolver,
    },
};


/// The chosen players, in candidate-table order.
///
/// Only [`optimize`] builds one, so every selection satisfies the rules it
/// was solved against.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    indices: Vec<usize>,
    players: Vec<Candidate>,
}

impl Selection {
    /// Row indices into the candidate table, ascending.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn players(&self) -> &[Candidate] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Pick the lineup maximising total `ep_next` under `rules`.
///
/// # Errors
///
/// - [`FplError::Infeasible`] when no lineup satisfies the rules
/// - [`FplError::Solver`] when the backend fails or returns an assignment
///   that breaks a constraint
pub fn optimize<M>(candidates: &[Candidate], rules: &SquadRules, solver: &M) -> Result<Selection>
where
    M: MipSolver + ?Sized,
{
    let program = formulate(candidates, rules);

    if let Some(c) = program
        .constraints
        .iter()
        .find(|c| c.is_unsatisfiable_constant())
    {
        debug!(constraint = %c.name, "no candidates can satisfy constraint");
        return Err(FplError::Infeasible);
    }

    debug!(
        solver = solver.name(),
        vars = program.num_vars(),
        constraints = program.constraints.len(),
        "solving lineup program"
    );
    let picks = solver.solve(&program)?;

    if picks.len() != program.num_vars() {
        return Err(FplError::Solver {
            message: format!(
                "expected {} values, solver returned {}",
                program.num_vars(),
                picks.len()
            ),
        });
    }

    let violations = program.violations(&picks);
    if !violations.is_empty() {
        warn!(?violations, "solver returned an assignment that breaks constraints");
        return Err(FplError::Solver {
            message: format!("assignment violates {}", violations.join(", ")),
        });
    }

    let indices: Vec<usize> = picks
        .iter()
        .enumerate()
        .filter(|(_, &picked)| picked)
        .map(|(i, _)| i)
        .collect();
    let players = indices.iter().map(|&i| candidates[i].clone()).collect();

    debug!(objective = program.objective_value(&picks), "lineup solved");
    Ok(Selection { indices, players })
}
