//! Shopping list endpoint

use crate::client::JowClient;
use crate::envelope::{ApiResponse, Endpoint};
use jowafrique_core::models::PlanId;

/// Shopping list API interface
#[derive(Clone)]
pub struct ShoppingApi {
    client: JowClient,
}

impl ShoppingApi {
    /// Create a new shopping API interface
    pub(crate) fn new(client: JowClient) -> Self {
        Self { client }
    }

    /// `GET /api/plans/{id}/shopping-list`, one ingredient per entry
    pub async fn list(&self, plan_id: PlanId) -> ApiResponse<Vec<String>> {
        ApiResponse::from_result(
            Endpoint::ShoppingList,
            self.client
                .get(&format!("api/plans/{plan_id}/shopping-list"))
                .await,
        )
    }
}
