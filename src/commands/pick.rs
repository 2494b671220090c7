//! One-shot lineup selection from the command line.

use crate::{
    commands::generate::{generate_lineup, LineupOutcome},
    config::AppConfig,
    core::CandidateStore,
    fpl::FplClient,
    lineup::{solver::MicroLpSolver, summary::LineupSummary},
    Result,
};

/// Options for [`handle_pick`].
#[derive(Debug)]
pub struct PickParams {
    pub as_json: bool,
    pub budget: Option<u32>,
    pub in_memory: bool,
}

/// Render a lineup as text lines.
pub fn format_lineup(summary: &LineupSummary) -> String {
    let mut out = String::new();
    for p in &summary.team {
        let armband = if p.captain {
            " (C)"
        } else if p.vice_captain {
            " (V)"
        } else {
            ""
        };
        out.push_str(&format!(
            "{:<4} {:<20} team {:>2}  cost {:>5}  xP {:>5.1}{}\n",
            p.position, p.web_name, p.team, p.now_cost, p.ep_next, armband
        ));
    }
    out.push_str(&format!(
        "Total cost: {}  Total xP: {:.1}\n",
        summary.total_cost, summary.total_points
    ));
    out
}

/// Run the pipeline once and print the result.
///
/// Returns `Ok(false)` when the run produced no lineup; the message has
/// already been printed.
pub async fn handle_pick(config: AppConfig, params: PickParams) -> Result<bool> {
    let client = FplClient::new(&config.api_url, config.fetch_timeout)?;
    let rules = match params.budget {
        Some(budget) => config.rules.with_budget(budget),
        None => config.rules,
    };
    let store = if params.in_memory {
        CandidateStore::InMemory
    } else {
        CandidateStore::from_dir(config.scratch_dir)
    };

    let result = generate_lineup(&client, &MicroLpSolver, &rules, &store).await;
    let outcome = LineupOutcome::from(result);
    let ok = outcome.is_ok();

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&outcome.into_response())?);
    } else {
        match outcome {
            LineupOutcome::Ok(summary) => print!("{}", format_lineup(&summary)),
            failed => eprintln!("{}", failed.error_message().unwrap_or_default()),
        }
    }

    Ok(ok)
}
