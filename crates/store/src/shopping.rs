//! Shopping list store

use crate::error::StoreResult;
use crate::resource::Resource;
use jowafrique_api_client::{ApiResponse, MealPlannerApi};
use jowafrique_core::models::PlanId;
use std::sync::Arc;

const GENERATE_FAILED: &str = "Erreur lors de la génération de la liste";

/// Ingredients needed for a plan, generated on demand
pub struct ShoppingListStore {
    api: Arc<dyn MealPlannerApi>,
    ingredients: Resource<Vec<String>>,
}

impl ShoppingListStore {
    /// Create an empty store
    pub fn new(api: Arc<dyn MealPlannerApi>) -> Self {
        Self {
            api,
            ingredients: Resource::default(),
        }
    }

    /// Current ingredients
    #[must_use]
    pub fn ingredients(&self) -> Vec<String> {
        self.ingredients.snapshot()
    }

    /// Whether an operation is running
    #[must_use]
    pub fn loading(&self) -> bool {
        self.ingredients.loading()
    }

    /// Last error message
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.ingredients.error()
    }

    /// Generate the list for a plan
    pub async fn generate(&self, plan_id: PlanId) -> StoreResult<()> {
        let _loading = self.ingredients.begin();
        match self.api.shopping_list(plan_id).await {
            ApiResponse::Success(ingredients) => {
                self.ingredients.replace(ingredients);
                Ok(())
            }
            ApiResponse::Failure(message) => {
                Err(self.ingredients.fail(message, GENERATE_FAILED))
            }
        }
    }

    /// Empty the list and forget the last error
    pub fn clear(&self) {
        self.ingredients.replace(Vec::new());
        self.ingredients.clear_error();
    }
}
