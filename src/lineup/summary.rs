//! Lineup totals and armband picks.

use serde::Serialize;

use crate::{
    cli::types::TeamId,
    lineup::{filter::Candidate, optimizer::Selection},
};

/// A selected player as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineupPlayer {
    pub first_name: String,
    pub second_name: String,
    pub web_name: String,
    pub team: TeamId,
    pub now_cost: u32,
    pub ep_next: f64,
    pub element_type: u8,
    pub position: &'static str,
    pub total_points: i32,
    pub event_points: i32,
    pub captain: bool,
    pub vice_captain: bool,
}

impl From<&Candidate> for LineupPlayer {
    fn from(c: &Candidate) -> Self {
        Self {
            first_name: c.first_name.clone(),
            second_name: c.second_name.clone(),
            web_name: c.web_name.clone(),
            team: c.team,
            now_cost: c.cost,
            ep_next: c.ep_next,
            element_type: c.position.code(),
            position: c.position.label(),
            total_points: c.total_points,
            event_points: c.event_points,
            captain: false,
            vice_captain: false,
        }
    }
}

/// Everything the lineup view needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineupSummary {
    pub team: Vec<LineupPlayer>,
    pub total_cost: u32,
    pub total_points: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vice_captain: Option<String>,
}

/// Totals plus captain (highest `ep_next`) and vice-captain (second).
///
/// Ties go to whoever comes first in the selection. The armbands are also
/// flagged on the players themselves, since `web_name` is not unique.
pub fn summarize(selection: &Selection) -> LineupSummary {
    let players = selection.players();

    let mut ranked: Vec<usize> = (0..players.len()).collect();
    ranked.sort_by(|&a, &b| players[b].ep_next.total_cmp(&players[a].ep_next));
    let captain = ranked.first().copied();
    let vice_captain = ranked.get(1).copied();

    let team = players
        .iter()
        .enumerate()
        .map(|(i, c)| LineupPlayer {
            captain: captain == Some(i),
            vice_captain: vice_captain == Some(i),
            ..LineupPlayer::from(c)
        })
        .collect();

    LineupSummary {
        team,
        total_cost: players.iter().map(|c| c.cost).sum(),
        total_points: players.iter().map(|c| c.ep_next).sum(),
        captain: captain.map(|i| players[i].web_name.clone()),
        vice_captain: vice_captain.map(|i| players[i].web_name.clone()),
    }
}
