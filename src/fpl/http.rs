//! HTTP client for the Fantasy Premier League API

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use tracing::{debug, info};

use crate::fpl::types::{BootstrapStatic, PlayerRecord};
use crate::Result;

#[cfg(test)]
mod tests;

/// Public bootstrap endpoint carrying every player for the current season.
pub const BOOTSTRAP_URL: &str = "https://fantasy.premierleague.com/api/bootstrap-static/";

/// Default upstream timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

fn common_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Thin client around the `bootstrap-static` endpoint.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct FplClient {
    client: Client,
    url: String,
}

impl FplClient {
    /// Build a client for `url` whose requests fail after `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("fpl-xi/", env!("CARGO_PKG_VERSION")))
            .default_headers(common_headers())
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the raw bootstrap document.
    ///
    /// Transport failures and non-2xx responses are `FplError::Http`; a body
    /// that does not decode is `FplError::Json`.
    pub async fn get_bootstrap(&self) -> Result<BootstrapStatic> {
        debug!(url = %self.url, "requesting bootstrap-static");

        let bytes = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(serde_json::from_slice::<BootstrapStatic>(&bytes)?)
    }

    /// Fetch and convert every player entry.
    ///
    /// Entries that are not squad players (unknown position, zero cost)
    /// are skipped.
    pub async fn get_players(&self) -> Result<Vec<PlayerRecord>> {
        let bootstrap = self.get_bootstrap().await?;
        let total = bootstrap.elements.len();

        let players: Vec<PlayerRecord> = bootstrap
            .elements
            .into_iter()
            .filter_map(|el| {
                let name = el.web_name.clone();
                match PlayerRecord::try_from(el) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        debug!(player = %name, error = %e, "skipping element");
                        None
                    }
                }
            })
            .collect();

        info!(total, kept = players.len(), "fetched player pool");
        Ok(players)
    }
}
