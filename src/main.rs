//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use fpl_xi::{
    cli::{Commands, FplXi},
    commands::{
        pick::{handle_pick, PickParams},
        serve::handle_serve,
    },
    AppConfig, Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fpl_xi=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = FplXi::parse();
    let mut config = AppConfig::from_env()?;

    match app.command {
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            handle_serve(config).await?
        }

        Commands::Pick {
            json,
            budget,
            in_memory,
        } => {
            let ok = handle_pick(
                config,
                PickParams {
                    as_json: json,
                    budget,
                    in_memory,
                },
            )
            .await?;
            if !ok {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
