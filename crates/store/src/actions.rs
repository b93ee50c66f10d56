//! Single-field meal updates used from the meal detail view

use crate::error::StoreResult;
use crate::resource::{InFlight, Resource};
use jowafrique_api_client::{ApiResponse, MealPlannerApi};
use jowafrique_core::models::{MealId, MealPatch};
use std::sync::Arc;
use tracing::info;

const RATE_FAILED: &str = "Erreur lors de la notation";
const FAVORITE_FAILED: &str = "Erreur lors de l'ajout aux favoris";
const NOTES_FAILED: &str = "Erreur lors de l'ajout des notes";

/// Rate, favorite and annotate meals through `PUT /api/meals/{id}`
///
/// Holds no meals; callers refetch the stores they display.
pub struct MealActions {
    api: Arc<dyn MealPlannerApi>,
    status: Resource<()>,
    in_flight: InFlight,
}

impl MealActions {
    /// Create the action set
    pub fn new(api: Arc<dyn MealPlannerApi>) -> Self {
        Self {
            api,
            status: Resource::default(),
            in_flight: InFlight::default(),
        }
    }

    /// Whether an action is running
    #[must_use]
    pub fn loading(&self) -> bool {
        self.status.loading()
    }

    /// Last error message
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.status.error()
    }

    /// Forget the last error
    pub fn clear_error(&self) {
        self.status.clear_error();
    }

    async fn send(
        &self,
        action: &str,
        meal_id: MealId,
        patch: MealPatch,
        fallback: &str,
    ) -> StoreResult<()> {
        let _claim = self.in_flight.try_acquire(format!("{action}:{meal_id}"))?;
        let _loading = self.status.begin();

        match self.api.update_meal(meal_id, &patch).await {
            ApiResponse::Success(_) => {
                info!(meal_id, action, "Meal action applied");
                Ok(())
            }
            ApiResponse::Failure(message) => Err(self.status.fail(message, fallback)),
        }
    }

    /// Set the rating, sent as-is
    pub async fn rate(&self, meal_id: MealId, rating: u8) -> StoreResult<()> {
        self.send("rate", meal_id, MealPatch::rating(rating), RATE_FAILED)
            .await
    }

    /// Flag the meal as favorite
    pub async fn mark_favorite(&self, meal_id: MealId) -> StoreResult<()> {
        self.send("favorite", meal_id, MealPatch::favorite(true), FAVORITE_FAILED)
            .await
    }

    /// Replace the meal notes
    pub async fn add_notes(&self, meal_id: MealId, notes: impl Into<String>) -> StoreResult<()> {
        self.send("notes", meal_id, MealPatch::notes(notes), NOTES_FAILED)
            .await
    }
}
