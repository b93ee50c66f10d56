//! Favorite endpoints

use crate::client::JowClient;
use crate::envelope::{ApiResponse, Endpoint};
use jowafrique_core::models::{Meal, MealId};

/// Favorites API interface
#[derive(Clone)]
pub struct FavoritesApi {
    client: JowClient,
}

impl FavoritesApi {
    /// Create a new favorites API interface
    pub(crate) fn new(client: JowClient) -> Self {
        Self { client }
    }

    /// `GET /api/favorites`
    pub async fn list(&self) -> ApiResponse<Vec<Meal>> {
        ApiResponse::from_result(
            Endpoint::ListFavorites,
            self.client.get("api/favorites").await,
        )
    }

    /// `POST /api/meals/{id}/favorite`
    pub async fn add(&self, meal_id: MealId) -> ApiResponse<()> {
        ApiResponse::from_result(
            Endpoint::AddFavorite,
            self.client
                .post_empty(&format!("api/meals/{meal_id}/favorite"))
                .await,
        )
    }

    /// `DELETE /api/favorites/{id}`
    pub async fn remove(&self, meal_id: MealId) -> ApiResponse<()> {
        ApiResponse::from_result(
            Endpoint::RemoveFavorite,
            self.client.delete(&format!("api/favorites/{meal_id}")).await,
        )
    }
}
