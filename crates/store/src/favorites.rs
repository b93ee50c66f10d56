//! Favorite meals store

use crate::error::StoreResult;
use crate::resource::{InFlight, Resource};
use jowafrique_api_client::{ApiResponse, MealPlannerApi};
use jowafrique_core::models::{Meal, MealId};
use std::sync::Arc;
use tracing::{info, warn};

const LOAD_FAILED: &str = "Erreur lors du chargement des favoris";
const ADD_FAILED: &str = "Erreur lors de l'ajout aux favoris";
const REMOVE_FAILED: &str = "Erreur lors de la suppression des favoris";

/// Favorite meals
///
/// `add` refetches the whole list while `remove` filters locally.
pub struct FavoritesStore {
    api: Arc<dyn MealPlannerApi>,
    favorites: Resource<Vec<Meal>>,
    in_flight: InFlight,
}

impl FavoritesStore {
    /// Create an empty store without contacting the backend
    pub fn new(api: Arc<dyn MealPlannerApi>) -> Self {
        Self {
            api,
            favorites: Resource::default(),
            in_flight: InFlight::default(),
        }
    }

    /// Create the store and fetch once
    pub async fn load(api: Arc<dyn MealPlannerApi>) -> Self {
        let store = Self::new(api);
        let _ = store.fetch().await;
        store
    }

    /// Current favorites
    #[must_use]
    pub fn favorites(&self) -> Vec<Meal> {
        self.favorites.snapshot()
    }

    /// Whether the meal is held as a favorite
    #[must_use]
    pub fn contains(&self, meal_id: MealId) -> bool {
        self.favorites
            .read(|favorites| favorites.iter().any(|m| m.id == meal_id))
    }

    /// Whether an operation is running
    #[must_use]
    pub fn loading(&self) -> bool {
        self.favorites.loading()
    }

    /// Last error message
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.favorites.error()
    }

    /// Forget the last error
    pub fn clear_error(&self) {
        self.favorites.clear_error();
    }

    /// Replace the favorites with the backend's list
    pub async fn fetch(&self) -> StoreResult<()> {
        let _loading = self.favorites.begin();
        match self.api.list_favorites().await {
            ApiResponse::Success(favorites) => {
                self.favorites.replace(favorites);
                Ok(())
            }
            ApiResponse::Failure(message) => Err(self.favorites.fail(message, LOAD_FAILED)),
        }
    }

    /// Alias of [`fetch`](Self::fetch)
    pub async fn refetch(&self) -> StoreResult<()> {
        self.fetch().await
    }

    /// Mark a meal as favorite, then refetch the list
    pub async fn add(&self, meal_id: MealId) -> StoreResult<()> {
        let _claim = self.in_flight.try_acquire(format!("add_favorite:{meal_id}"))?;

        match self.api.add_favorite(meal_id).await {
            ApiResponse::Success(()) => {
                info!(meal_id, "Favorite added");
                if let Err(e) = self.fetch().await {
                    warn!(meal_id, error = %e, "Refetch after add failed");
                }
                Ok(())
            }
            ApiResponse::Failure(message) => Err(self.favorites.fail(message, ADD_FAILED)),
        }
    }

    /// Remove a favorite and drop it locally
    pub async fn remove(&self, meal_id: MealId) -> StoreResult<()> {
        let _claim = self
            .in_flight
            .try_acquire(format!("remove_favorite:{meal_id}"))?;

        match self.api.remove_favorite(meal_id).await {
            ApiResponse::Success(()) => {
                info!(meal_id, "Favorite removed");
                self.favorites.update(|favorites| favorites.retain(|m| m.id != meal_id));
                Ok(())
            }
            ApiResponse::Failure(message) => Err(self.favorites.fail(message, REMOVE_FAILED)),
        }
    }
}
