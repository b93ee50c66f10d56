//! AI feature calls
//!
//! None of these mutate held data; results go straight back to the caller.
//! Only loading and the last error are tracked.

use crate::error::StoreResult;
use crate::resource::Resource;
use jowafrique_api_client::{ApiResponse, MealPlannerApi};
use jowafrique_core::models::{
    DayOfWeek, DayRegeneration, MealId, MealVariation, NewPlanRequest, NutritionAnalysis, PlanId,
    ShoppingOptimization, WeeklyPlan,
};
use std::sync::Arc;
use tracing::info;

const GENERATE_FAILED: &str = "Erreur lors de la génération du plan IA";
const VARIATIONS_FAILED: &str = "Erreur lors de la récupération des variations";
const OPTIMIZE_FAILED: &str = "Erreur lors de l'optimisation";
const NUTRITION_FAILED: &str = "Erreur lors de l'analyse nutritionnelle";
const REGENERATE_FAILED: &str = "Erreur lors de la régénération";

/// Entry point for the AI-assisted endpoints
pub struct AiFeatures {
    api: Arc<dyn MealPlannerApi>,
    status: Resource<()>,
}

impl AiFeatures {
    /// Create the feature set
    pub fn new(api: Arc<dyn MealPlannerApi>) -> Self {
        Self {
            api,
            status: Resource::default(),
        }
    }

    /// Whether a call is running
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

    async fn run<T>(
        &self,
        call: impl std::future::Future<Output = ApiResponse<T>>,
        fallback: &str,
    ) -> StoreResult<T> {
        let _loading = self.status.begin();
        call.await
            .into_result()
            .map_err(|message| self.status.fail(message, fallback))
    }

    /// Generate a whole plan
    pub async fn generate_plan(&self, request: &NewPlanRequest) -> StoreResult<WeeklyPlan> {
        let plan = self
            .run(self.api.generate_plan(request), GENERATE_FAILED)
            .await?;
        info!(plan_id = plan.id, "AI plan generated");
        Ok(plan)
    }

    /// Alternatives to a meal
    pub async fn variations(&self, meal_id: MealId) -> StoreResult<Vec<MealVariation>> {
        self.run(self.api.meal_variations(meal_id), VARIATIONS_FAILED)
            .await
    }

    /// Shopping list optimized for an optional budget ceiling
    pub async fn optimize_shopping(
        &self,
        plan_id: PlanId,
        budget: Option<f64>,
    ) -> StoreResult<ShoppingOptimization> {
        self.run(self.api.optimize_shopping(plan_id, budget), OPTIMIZE_FAILED)
            .await
    }

    /// Nutritional assessment of a plan
    pub async fn nutrition_analysis(&self, plan_id: PlanId) -> StoreResult<NutritionAnalysis> {
        self.run(self.api.nutrition_analysis(plan_id), NUTRITION_FAILED)
            .await
    }

    /// Replace the meals of one day
    pub async fn regenerate_day(
        &self,
        plan_id: PlanId,
        day: DayOfWeek,
    ) -> StoreResult<DayRegeneration> {
        let outcome = self
            .run(self.api.regenerate_day(plan_id, day), REGENERATE_FAILED)
            .await?;
        info!(plan_id, day = %day, meals_added = ?outcome.meals_added, "Day regenerated");
        Ok(outcome)
    }
}
