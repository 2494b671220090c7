//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the lineup view and `/generate_team` over HTTP.
    Serve {
        /// Port to listen on (or set `PORT` env var, default 5000).
        #[clap(long, short)]
        port: Option<u16>,
    },

    /// Fetch current player data once and print the optimal XI.
    Pick {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Budget ceiling in `now_cost` units (or set `FPL_BUDGET`, default 8500).
        #[clap(long, short)]
        budget: Option<u32>,

        /// Skip the scratch file and keep the candidate table in memory.
        #[clap(long)]
        in_memory: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "fpl-xi", about = "Fantasy Premier League optimal XI picker")]
pub struct FplXi {
    #[clap(subcommand)]
    pub command: Commands,
}
