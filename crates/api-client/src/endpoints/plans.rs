//! Weekly plan endpoints

use crate::client::JowClient;
use crate::envelope::{ApiResponse, Endpoint};
use jowafrique_core::models::{NewPlanRequest, PlanId, WeeklyPlan};

/// Weekly plan API interface
#[derive(Clone)]
pub struct PlansApi {
    client: JowClient,
}

impl PlansApi {
    /// Create a new plans API interface
    pub(crate) fn new(client: JowClient) -> Self {
        Self { client }
    }

    /// `GET /api/plans`
    pub async fn list(&self) -> ApiResponse<Vec<WeeklyPlan>> {
        ApiResponse::from_result(Endpoint::ListPlans, self.client.get("api/plans").await)
    }

    /// `POST /api/plans`
    ///
    /// The backend acknowledges with `{id, success}`; fields it does not echo
    /// are left at their defaults.
    pub async fn create(&self, request: &NewPlanRequest) -> ApiResponse<WeeklyPlan> {
        ApiResponse::from_result(
            Endpoint::CreatePlan,
            self.client.post("api/plans", request).await,
        )
    }

    /// `DELETE /api/plans/{id}`
    pub async fn delete(&self, plan_id: PlanId) -> ApiResponse<()> {
        ApiResponse::from_result(
            Endpoint::DeletePlan,
            self.client.delete(&format!("api/plans/{plan_id}")).await,
        )
    }
}
