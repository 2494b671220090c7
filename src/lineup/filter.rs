//! Candidate shortlisting.
//!
//! Narrows the full player pool to the highest-projected available players
//! in each position. The optimizer only ever sees this shortlist, which
//! keeps the integer program small at the cost of never considering
//! players outside the top slice of each position.

use serde::{Deserialize, Serialize};

use crate::{
    cli::types::{Position, TeamId},
    fpl::types::PlayerRecord,
};

/// Players kept per position.
pub const SHORTLIST_PER_POSITION: usize = 20;

/// One row of the candidate table handed to the optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub first_name: String,
    pub second_name: String,
    pub web_name: String,
    pub team: TeamId,
    pub cost: u32,
    pub ep_next: f64,
    pub position: Position,
    pub total_points: i32,
    pub event_points: i32,
}

impl From<&PlayerRecord> for Candidate {
    fn from(p: &PlayerRecord) -> Self {
        Self {
            first_name: p.first_name.clone(),
            second_name: p.second_name.clone(),
            web_name: p.web_name.clone(),
            team: p.team,
            cost: p.cost,
            ep_next: p.ep_next,
            position: p.position,
            total_points: p.total_points,
            event_points: p.event_points,
        }
    }
}

/// Build the candidate pool.
///
/// Keeps available or doubtful players, groups them GK, DEF, MID, FWD, sorts
/// each group by `ep_next` descending and keeps the first `per_position`.
/// The sort is stable, so equal projections keep their upstream order.
pub fn shortlist(players: &[PlayerRecord], per_position: usize) -> Vec<Candidate> {
    let mut pool = Vec::with_capacity(per_position * Position::ALL.len());

    for position in Position::ALL {
        let mut group: Vec<&PlayerRecord> = players
            .iter()
            .filter(|p| p.position == position && p.status.is_selectable())
            .collect();

        group.sort_by(|a, b| b.ep_next.total_cmp(&a.ep_next));
        pool.extend(group.into_iter().take(per_position).map(Candidate::from));
    }

    pool
}
