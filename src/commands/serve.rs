//! HTTP surface: a static view and the lineup endpoint.
//!
//! `/generate_team` always answers `200 OK`. Failures are reported through
//! the `error` field of the body, never through the status code.

use std::{net::SocketAddr, sync::Arc};

use axum::{extract::State, response::Html, routing::get, Json, Router};
use tracing::info;

use crate::{
    commands::generate::{generate_lineup, LineupOutcome, LineupResponse},
    config::AppConfig,
    core::CandidateStore,
    fpl::FplClient,
    lineup::solver::{MicroLpSolver, MipSolver},
    Result,
};

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Everything a request needs, built once at startup and never mutated.
pub struct AppState {
    pub config: AppConfig,
    pub client: FplClient,
    pub solver: Arc<dyn MipSolver>,
    pub store: CandidateStore,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = FplClient::new(&config.api_url, config.fetch_timeout)?;
        let store = CandidateStore::from_dir(config.scratch_dir.clone());

        Ok(Self {
            config,
            client,
            solver: Arc::new(MicroLpSolver),
            store,
        })
    }

    /// Swap the solver backend.
    pub fn with_solver(mut self, solver: Arc<dyn MipSolver>) -> Self {
        self.solver = solver;
        self
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate_team", get(generate_team))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn generate_team(State(state): State<Arc<AppState>>) -> Json<LineupResponse> {
    let result = generate_lineup(
        &state.client,
        state.solver.as_ref(),
        &state.config.rules,
        &state.store,
    )
    .await;

    Json(LineupOutcome::from(result).into_response())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutting down");
}

/// Bind to `0.0.0.0:<port>` and serve until Ctrl-C.
pub async fn handle_serve(config: AppConfig) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(AppState::new(config)?);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, solver = state.solver.name(), upstream = state.client.url(), "listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
