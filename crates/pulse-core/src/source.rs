use std::future::Future;

use pulse_api::{PlayerCountClient, PlayerCounts};

use crate::error::CoreError;

/// Where a widget gets its counts from.
///
/// The HTTP client is the production implementation; tests plug in
/// in-memory sources.
pub trait PlayerCountSource: Send + Sync {
    fn fetch_counts(&self) -> impl Future<Output = Result<PlayerCounts, CoreError>> + Send;
}

impl PlayerCountSource for PlayerCountClient {
    async fn fetch_counts(&self) -> Result<PlayerCounts, CoreError> {
        Ok(self.get_player_count().await?)
    }
}
