//! AI feature endpoints
//!
//! None of these touch locally held state; callers decide what to do with
//! the returned records.

use crate::client::JowClient;
use crate::envelope::{ApiResponse, Endpoint};
use jowafrique_core::models::{
    DayOfWeek, DayRegeneration, MealId, MealVariation, NewPlanRequest, NutritionAnalysis, PlanId,
    ShoppingOptimization, WeeklyPlan,
};
use serde::{Deserialize, Serialize};

/// AI API interface
#[derive(Clone)]
pub struct AiApi {
    client: JowClient,
}

#[derive(Deserialize)]
struct VariationsBody {
    #[serde(default)]
    variations: Vec<MealVariation>,
}

#[derive(Deserialize)]
struct OptimizationBody {
    #[serde(default)]
    optimization: ShoppingOptimization,
}

#[derive(Deserialize)]
struct AnalysisBody {
    #[serde(default)]
    analysis: NutritionAnalysis,
}

#[derive(Serialize)]
struct OptimizeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    budget: Option<f64>,
}

#[derive(Serialize)]
struct RegenerateRequest {
    day_of_week: DayOfWeek,
}

impl AiApi {
    /// Create a new AI API interface
    pub(crate) fn new(client: JowClient) -> Self {
        Self { client }
    }

    /// `POST /api/ai/generate-plan`
    pub async fn generate_plan(&self, request: &NewPlanRequest) -> ApiResponse<WeeklyPlan> {
        ApiResponse::from_result(
            Endpoint::GeneratePlan,
            self.client.post("api/ai/generate-plan", request).await,
        )
    }

    /// `GET /api/ai/meal-variations/{mealId}`
    pub async fn meal_variations(&self, meal_id: MealId) -> ApiResponse<Vec<MealVariation>> {
        let result = self
            .client
            .get::<VariationsBody>(&format!("api/ai/meal-variations/{meal_id}"))
            .await
            .map(|body| body.variations);
        ApiResponse::from_result(Endpoint::MealVariations, result)
    }

    /// `POST /api/ai/optimize-shopping/{planId}` with an optional budget ceiling
    pub async fn optimize_shopping(
        &self,
        plan_id: PlanId,
        budget: Option<f64>,
    ) -> ApiResponse<ShoppingOptimization> {
        let result = self
            .client
            .post::<OptimizationBody, _>(
                &format!("api/ai/optimize-shopping/{plan_id}"),
                &OptimizeRequest { budget },
            )
            .await
            .map(|body| body.optimization);
        ApiResponse::from_result(Endpoint::OptimizeShopping, result)
    }

    /// `GET /api/ai/nutrition-analysis/{planId}`
    pub async fn nutrition_analysis(&self, plan_id: PlanId) -> ApiResponse<NutritionAnalysis> {
        let result = self
            .client
            .get::<AnalysisBody>(&format!("api/ai/nutrition-analysis/{plan_id}"))
            .await
            .map(|body| body.analysis);
        ApiResponse::from_result(Endpoint::NutritionAnalysis, result)
    }

    /// `POST /api/ai/regenerate-day/{planId}`
    pub async fn regenerate_day(
        &self,
        plan_id: PlanId,
        day: DayOfWeek,
    ) -> ApiResponse<DayRegeneration> {
        ApiResponse::from_result(
            Endpoint::RegenerateDay,
            self.client
                .post(
                    &format!("api/ai/regenerate-day/{plan_id}"),
                    &RegenerateRequest { day_of_week: day },
                )
                .await,
        )
    }
}
