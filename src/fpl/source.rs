//! Where player pools come from.

use std::future::Future;

use crate::fpl::{http::FplClient, types::PlayerRecord};
use crate::Result;

/// A restartable source of player records.
///
/// Every call produces a fresh pool; nothing is cached between calls.
pub trait PlayerSource: Send + Sync {
    fn fetch_players(&self) -> impl Future<Output = Result<Vec<PlayerRecord>>> + Send;
}

impl PlayerSource for FplClient {
    async fn fetch_players(&self) -> Result<Vec<PlayerRecord>> {
        self.get_players().await
    }
}

/// A fixed pool, for offline runs and tests.
impl PlayerSource for Vec<PlayerRecord> {
    async fn fetch_players(&self) -> Result<Vec<PlayerRecord>> {
        Ok(self.clone())
    }
}
