//! Backend seam consumed by the stores
//!
//! [`MealPlannerApi`] lists one operation per backend route. [`JowClient`]
//! implements it over HTTP; tests substitute an in-memory backend.

use crate::client::JowClient;
use crate::envelope::ApiResponse;
use async_trait::async_trait;
use jowafrique_core::models::{
    DayOfWeek, DayRegeneration, Meal, MealId, MealPatch, MealVariation, NewPlanRequest,
    NutritionAnalysis, PlanId, ShoppingOptimization, Statistics, WeeklyPlan,
};

/// Operations offered by the meal-planning backend
#[async_trait]
pub trait MealPlannerApi: Send + Sync {
    /// All weekly plans
    async fn list_plans(&self) -> ApiResponse<Vec<WeeklyPlan>>;
    /// Create a plan
    async fn create_plan(&self, request: &NewPlanRequest) -> ApiResponse<WeeklyPlan>;
    /// Delete a plan and its meals
    async fn delete_plan(&self, plan_id: PlanId) -> ApiResponse<()>;

    /// All meals across plans
    async fn list_meals(&self) -> ApiResponse<Vec<Meal>>;
    /// The meal scheduled for now
    async fn current_meal(&self) -> ApiResponse<Meal>;
    /// Meals of one plan
    async fn plan_meals(&self, plan_id: PlanId) -> ApiResponse<Vec<Meal>>;
    /// Add a meal to a plan
    async fn add_meal(&self, plan_id: PlanId, meal: &MealPatch) -> ApiResponse<Meal>;
    /// Partially update a meal
    async fn update_meal(&self, meal_id: MealId, patch: &MealPatch) -> ApiResponse<Option<Meal>>;
    /// Delete a meal
    async fn delete_meal(&self, meal_id: MealId) -> ApiResponse<()>;

    /// Favorite meals
    async fn list_favorites(&self) -> ApiResponse<Vec<Meal>>;
    /// Mark a meal as favorite
    async fn add_favorite(&self, meal_id: MealId) -> ApiResponse<()>;
    /// Remove a favorite
    async fn remove_favorite(&self, meal_id: MealId) -> ApiResponse<()>;

    /// Aggregate statistics
    async fn statistics(&self) -> ApiResponse<Statistics>;
    /// Ingredients needed for a plan
    async fn shopping_list(&self, plan_id: PlanId) -> ApiResponse<Vec<String>>;

    /// Generate a whole plan with the AI planner
    async fn generate_plan(&self, request: &NewPlanRequest) -> ApiResponse<WeeklyPlan>;
    /// Alternatives to a meal
    async fn meal_variations(&self, meal_id: MealId) -> ApiResponse<Vec<MealVariation>>;
    /// Budget-aware shopping list
    async fn optimize_shopping(
        &self,
        plan_id: PlanId,
        budget: Option<f64>,
    ) -> ApiResponse<ShoppingOptimization>;
    /// Nutritional assessment of a plan
    async fn nutrition_analysis(&self, plan_id: PlanId) -> ApiResponse<NutritionAnalysis>;
    /// Replace the meals of one day
    async fn regenerate_day(&self, plan_id: PlanId, day: DayOfWeek)
    -> ApiResponse<DayRegeneration>;
}

#[async_trait]
impl MealPlannerApi for JowClient {
    async fn list_plans(&self) -> ApiResponse<Vec<WeeklyPlan>> {
        self.plans().list().await
    }

    async fn create_plan(&self, request: &NewPlanRequest) -> ApiResponse<WeeklyPlan> {
        self.plans().create(request).await
    }

    async fn delete_plan(&self, plan_id: PlanId) -> ApiResponse<()> {
        self.plans().delete(plan_id).await
    }

    async fn list_meals(&self) -> ApiResponse<Vec<Meal>> {
        self.meals().list().await
    }

    async fn current_meal(&self) -> ApiResponse<Meal> {
        self.meals().current().await
    }

    async fn plan_meals(&self, plan_id: PlanId) -> ApiResponse<Vec<Meal>> {
        self.meals().for_plan(plan_id).await
    }

    async fn add_meal(&self, plan_id: PlanId, meal: &MealPatch) -> ApiResponse<Meal> {
        self.meals().add(plan_id, meal).await
    }

    async fn update_meal(&self, meal_id: MealId, patch: &MealPatch) -> ApiResponse<Option<Meal>> {
        self.meals().update(meal_id, patch).await
    }

    async fn delete_meal(&self, meal_id: MealId) -> ApiResponse<()> {
        self.meals().delete(meal_id).await
    }

    async fn list_favorites(&self) -> ApiResponse<Vec<Meal>> {
        self.favorites().list().await
    }

    async fn add_favorite(&self, meal_id: MealId) -> ApiResponse<()> {
        self.favorites().add(meal_id).await
    }

    async fn remove_favorite(&self, meal_id: MealId) -> ApiResponse<()> {
        self.favorites().remove(meal_id).await
    }

    async fn statistics(&self) -> ApiResponse<Statistics> {
        self.statistics().get().await
    }

    async fn shopping_list(&self, plan_id: PlanId) -> ApiResponse<Vec<String>> {
        self.shopping().list(plan_id).await
    }

    async fn generate_plan(&self, request: &NewPlanRequest) -> ApiResponse<WeeklyPlan> {
        self.ai().generate_plan(request).await
    }

    async fn meal_variations(&self, meal_id: MealId) -> ApiResponse<Vec<MealVariation>> {
        self.ai().meal_variations(meal_id).await
    }

    async fn optimize_shopping(
        &self,
        plan_id: PlanId,
        budget: Option<f64>,
    ) -> ApiResponse<ShoppingOptimization> {
        self.ai().optimize_shopping(plan_id, budget).await
    }

    async fn nutrition_analysis(&self, plan_id: PlanId) -> ApiResponse<NutritionAnalysis> {
        self.ai().nutrition_analysis(plan_id).await
    }

    async fn regenerate_day(
        &self,
        plan_id: PlanId,
        day: DayOfWeek,
    ) -> ApiResponse<DayRegeneration> {
        self.ai().regenerate_day(plan_id, day).await
    }
}
