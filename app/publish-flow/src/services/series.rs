/// Series directory backing the selection/creation detour
///
/// Thin pass-through over the series endpoints; the flow only needs id,
/// title and episode count.
use std::sync::Arc;

use tracing::info;
use vidora_api::models::{CreateSeriesRequest, SeriesSummary};
use vidora_api::{AuthToken, PlatformApi};

use crate::error::Result;

pub struct SeriesDirectory {
    api: Arc<dyn PlatformApi>,
}

impl SeriesDirectory {
    pub fn new(api: Arc<dyn PlatformApi>) -> Self {
        Self { api }
    }

    /// Series available for episode association
    pub async fn list(&self, token: &AuthToken) -> Result<Vec<SeriesSummary>> {
        Ok(self.api.list_series(token).await?)
    }

    /// Create a new series; the caller adopts it as the selection
    pub async fn create(&self, token: &AuthToken, title: &str) -> Result<SeriesSummary> {
        let req = CreateSeriesRequest {
            title: title.to_string(),
        };
        let series = self.api.create_series(token, &req).await?;
        info!(series_id = %series.id, "series created");
        Ok(series)
    }
}
