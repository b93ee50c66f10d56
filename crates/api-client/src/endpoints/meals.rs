//! Meal endpoints

use crate::client::JowClient;
use crate::envelope::{ApiResponse, Endpoint};
use jowafrique_core::models::{Meal, MealId, MealPatch, PlanId};

/// Meal API interface
#[derive(Clone)]
pub struct MealsApi {
    client: JowClient,
}

impl MealsApi {
    /// Create a new meals API interface
    pub(crate) fn new(client: JowClient) -> Self {
        Self { client }
    }

    /// `GET /api/meals`
    pub async fn list(&self) -> ApiResponse<Vec<Meal>> {
        ApiResponse::from_result(Endpoint::ListMeals, self.client.get("api/meals").await)
    }

    /// `GET /api/current-meal`
    pub async fn current(&self) -> ApiResponse<Meal> {
        ApiResponse::from_result(
            Endpoint::CurrentMeal,
            self.client.get("api/current-meal").await,
        )
    }

    /// `GET /api/plans/{id}/meals`
    pub async fn for_plan(&self, plan_id: PlanId) -> ApiResponse<Vec<Meal>> {
        ApiResponse::from_result(
            Endpoint::PlanMeals,
            self.client.get(&format!("api/plans/{plan_id}/meals")).await,
        )
    }

    /// `POST /api/plans/{id}/meals`
    pub async fn add(&self, plan_id: PlanId, meal: &MealPatch) -> ApiResponse<Meal> {
        ApiResponse::from_result(
            Endpoint::AddMeal,
            self.client
                .post(&format!("api/plans/{plan_id}/meals"), meal)
                .await,
        )
    }

    /// `PUT /api/meals/{id}`
    ///
    /// Yields the updated meal when the backend echoes one, `None` when it only
    /// acknowledges with `{success: true}`.
    pub async fn update(&self, meal_id: MealId, patch: &MealPatch) -> ApiResponse<Option<Meal>> {
        let result = self
            .client
            .put::<serde_json::Value, _>(&format!("api/meals/{meal_id}"), patch)
            .await
            .map(|body| serde_json::from_value::<Meal>(body).ok());
        ApiResponse::from_result(Endpoint::UpdateMeal, result)
    }

    /// `DELETE /api/meals/{id}`
    pub async fn delete(&self, meal_id: MealId) -> ApiResponse<()> {
        ApiResponse::from_result(
            Endpoint::DeleteMeal,
            self.client.delete(&format!("api/meals/{meal_id}")).await,
        )
    }
}
