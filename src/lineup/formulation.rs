//! Squad rules and their 0/1 integer program.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{cli::types::Position, lineup::filter::Candidate};

/// Default budget ceiling, in the same units as `now_cost`.
pub const DEFAULT_BUDGET: u32 = 8500;

/// Inclusive bounds on how many players of a position may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionBounds {
    pub min: u32,
    pub max: u32,
}

impl PositionBounds {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// Squad-composition rules for a starting XI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquadRules {
    pub squad_size: u32,
    pub budget: u32,
    pub max_per_team: u32,
    pub goalkeepers: PositionBounds,
    pub defenders: PositionBounds,
    pub midfielders: PositionBounds,
    pub forwards: PositionBounds,
}

impl Default for SquadRules {
    fn default() -> Self {
        Self {
            squad_size: 11,
            budget: DEFAULT_BUDGET,
            max_per_team: 3,
            goalkeepers: PositionBounds::new(1, 1),
            defenders: PositionBounds::new(3, 5),
            midfielders: PositionBounds::new(2, 5),
            forwards: PositionBounds::new(1, 3),
        }
    }
}

impl SquadRules {
    pub fn with_budget(mut self, budget: u32) -> Self {
        self.budget = budget;
        self
    }

    pub fn bounds(&self, position: Position) -> PositionBounds {
        match position {
            Position::GK => self.goalkeepers,
            Position::DEF => self.defenders,
            Position::MID => self.midfielders,
            Position::FWD => self.forwards,
        }
    }
}

/// `min <= sum(coef * x_i) <= max` over binary variables.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    pub name: String,
    pub terms: Vec<(usize, f64)>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl LinearConstraint {
    fn between(name: impl Into<String>, terms: Vec<(usize, f64)>, min: f64, max: f64) -> Self {
        Self {
            name: name.into(),
            terms,
            min: Some(min),
            max: Some(max),
        }
    }

    fn at_most(name: impl Into<String>, terms: Vec<(usize, f64)>, max: f64) -> Self {
        Self {
            name: name.into(),
            terms,
            min: None,
            max: Some(max),
        }
    }

    /// Value of the left-hand side under `picks`.
    pub fn lhs(&self, picks: &[bool]) -> f64 {
        self.terms
            .iter()
            .filter(|(i, _)| picks.get(*i).copied().unwrap_or(false))
            .map(|(_, coef)| coef)
            .sum()
    }

    pub fn is_satisfied(&self, picks: &[bool]) -> bool {
        const EPS: f64 = 1e-6;
        let lhs = self.lhs(picks);
        let above_min = self.min.map_or(true, |min| lhs >= min - EPS);
        let below_max = self.max.map_or(true, |max| lhs <= max + EPS);
        above_min && below_max
    }

    /// A constraint without variables that no assignment can satisfy.
    pub fn is_unsatisfiable_constant(&self) -> bool {
        self.terms.is_empty() && !self.is_satisfied(&[])
    }
}

/// Maximisation problem over one binary variable per candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryProgram {
    pub objective: Vec<f64>,
    pub constraints: Vec<LinearConstraint>,
}

impl BinaryProgram {
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }

    pub fn objective_value(&self, picks: &[bool]) -> f64 {
        self.objective
            .iter()
            .zip(picks)
            .filter(|(_, &picked)| picked)
            .map(|(coef, _)| coef)
            .sum()
    }

    /// Names of the constraints `picks` breaks.
    pub fn violations(&self, picks: &[bool]) -> Vec<&str> {
        self.constraints
            .iter()
            .filter(|c| !c.is_satisfied(picks))
            .map(|c| c.name.as_str())
            .collect()
    }
}

fn indicator<F>(candidates: &[Candidate], pred: F) -> Vec<(usize, f64)>
where
    F: Fn(&Candidate) -> bool,
{
    candidates
        .iter()
        .enumerate()
        .filter(|(_, c)| pred(*c))
        .map(|(i, _)| (i, 1.0))
        .collect()
}

/// Translate the candidate table and rules into a [`BinaryProgram`].
///
/// Constraints, in order: squad size, one per position, budget, then one
/// per distinct team in ascending team id.
pub fn formulate(candidates: &[Candidate], rules: &SquadRules) -> BinaryProgram {
    let objective = candidates.iter().map(|c| c.ep_next).collect();
    let mut constraints = Vec::new();

    let size = rules.squad_size as f64;
    constraints.push(LinearConstraint::between(
        "squad_size",
        indicator(candidates, |_| true),
        size,
        size,
    ));

    for position in Position::ALL {
        let bounds = rules.bounds(position);
        constraints.push(LinearConstraint::between(
            format!("position_{}", position),
            indicator(candidates, |c| c.position == position),
            bounds.min as f64,
            bounds.max as f64,
        ));
    }

    constraints.push(LinearConstraint::at_most(
        "budget",
        candidates
            .iter()
            .enumerate()
            .map(|(i, c)| (i, c.cost as f64))
            .collect(),
        rules.budget as f64,
    ));

    let teams: BTreeSet<_> = candidates.iter().map(|c| c.team).collect();
    for team in teams {
        constraints.push(LinearConstraint::at_most(
            format!("team_{}", team),
            indicator(candidates, |c| c.team == team),
            rules.max_per_team as f64,
        ));
    }

    BinaryProgram {
        objective,
        constraints,
    }
}
