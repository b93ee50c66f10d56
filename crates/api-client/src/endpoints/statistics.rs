//! Statistics endpoint

use crate::client::JowClient;
use crate::envelope::{ApiResponse, Endpoint};
use jowafrique_core::models::Statistics;

/// Statistics API interface
#[derive(Clone)]
pub struct StatisticsApi {
    client: JowClient,
}

impl StatisticsApi {
    /// Create a new statistics API interface
    pub(crate) fn new(client: JowClient) -> Self {
        Self { client }
    }

    /// `GET /api/statistics`
    pub async fn get(&self) -> ApiResponse<Statistics> {
        ApiResponse::from_result(
            Endpoint::Statistics,
            self.client.get("api/statistics").await,
        )
    }
}
