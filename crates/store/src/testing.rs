//! In-memory backend used by the store tests

use async_trait::async_trait;
use jowafrique_api_client::{ApiResponse, MealPlannerApi};
use jowafrique_core::models::{
    DayOfWeek, DayRegeneration, Meal, MealId, MealPatch, MealVariation, NewPlanRequest,
    NutritionAnalysis, PlanId, ShoppingOptimization, Statistics, WeeklyPlan,
};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::Notify;

pub(crate) fn plan(id: PlanId, name: &str) -> WeeklyPlan {
    WeeklyPlan {
        id,
        plan_name: name.to_string(),
        week_start_date: "2024-03-18".to_string(),
        ..WeeklyPlan::default()
    }
}

pub(crate) fn meal(id: MealId, name: &str) -> Meal {
    Meal {
        id,
        name: name.to_string(),
        ..Meal::default()
    }
}

#[derive(Default)]
pub(crate) struct FakeState {
    pub plans: Vec<WeeklyPlan>,
    pub meals: BTreeMap<PlanId, Vec<Meal>>,
    pub favorites: Vec<Meal>,
    pub current: Option<Meal>,
    pub statistics: Statistics,
    pub shopping: Vec<String>,
    pub failure: Option<String>,
    /// Becomes `failure` once an add succeeds
    pub fail_after_write: Option<String>,
    pub calls: Vec<String>,
    pub next_id: i64,
}

/// Backend double keeping its data in memory
///
/// `hold` makes every mutating call wait until `release`.
#[derive(Default)]
pub(crate) struct FakeBackend {
    state: Mutex<FakeState>,
    held: AtomicBool,
    gate: Notify,
}

impl FakeBackend {
    pub fn new(state: FakeState) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(FakeState {
                next_id: 100,
                ..state
            }),
            ..Self::default()
        })
    }

    pub fn with_plans(plans: Vec<WeeklyPlan>) -> Arc<Self> {
        Self::new(FakeState {
            plans,
            ..FakeState::default()
        })
    }

    pub fn with_meals(plan_id: PlanId, meals: Vec<Meal>) -> Arc<Self> {
        Self::new(FakeState {
            meals: BTreeMap::from([(plan_id, meals)]),
            ..FakeState::default()
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Self::new(FakeState {
            failure: Some(message.to_string()),
            ..FakeState::default()
        })
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    pub fn hold(&self) {
        self.held.store(true, Ordering::SeqCst);
    }

    pub fn release(&self) {
        self.held.store(false, Ordering::SeqCst);
        self.gate.notify_one();
    }

    /// Record the call and return the forced failure, if any
    fn enter<T>(&self, call: &str) -> Result<MutexGuard<'_, FakeState>, ApiResponse<T>> {
        let mut state = self.state();
        state.calls.push(call.to_string());
        match &state.failure {
            Some(message) => Err(ApiResponse::Failure(message.clone())),
            None => Ok(state),
        }
    }

    fn after_write(state: &mut FakeState) {
        if let Some(message) = state.fail_after_write.take() {
            state.failure = Some(message);
        }
    }

    async fn pause(&self) {
        if self.held.load(Ordering::SeqCst) {
            self.gate.notified().await;
        }
    }

    fn next_id(state: &mut FakeState) -> i64 {
        state.next_id += 1;
        state.next_id
    }
}

macro_rules! enter {
    ($self:ident, $call:literal) => {
        match $self.enter($call) {
            Ok(state) => state,
            Err(failure) => return failure,
        }
    };
}

#[async_trait]
impl MealPlannerApi for FakeBackend {
    async fn list_plans(&self) -> ApiResponse<Vec<WeeklyPlan>> {
        let state = enter!(self, "list_plans");
        ApiResponse::Success(state.plans.clone())
    }

    async fn create_plan(&self, request: &NewPlanRequest) -> ApiResponse<WeeklyPlan> {
        let created = {
            let mut state = enter!(self, "create_plan");
            let id = Self::next_id(&mut state);
            state.plans.insert(0, plan(id, &request.plan_name));
            id
        };
        self.pause().await;
        // acknowledgement only carries the id
        ApiResponse::Success(WeeklyPlan {
            id: created,
            ..WeeklyPlan::default()
        })
    }

    async fn delete_plan(&self, plan_id: PlanId) -> ApiResponse<()> {
        drop(enter!(self, "delete_plan"));
        self.pause().await;
        let mut state = self.state();
        let before = state.plans.len();
        state.plans.retain(|p| p.id != plan_id);
        if state.plans.len() == before {
            return ApiResponse::failure("Plan non trouvé");
        }
        state.meals.remove(&plan_id);
        ApiResponse::Success(())
    }

    async fn list_meals(&self) -> ApiResponse<Vec<Meal>> {
        let state = enter!(self, "list_meals");
        ApiResponse::Success(state.meals.values().flatten().cloned().collect())
    }

    async fn current_meal(&self) -> ApiResponse<Meal> {
        let state = enter!(self, "current_meal");
        match &state.current {
            Some(meal) => ApiResponse::Success(meal.clone()),
            None => ApiResponse::failure("Aucun repas actuel trouvé"),
        }
    }

    async fn plan_meals(&self, plan_id: PlanId) -> ApiResponse<Vec<Meal>> {
        self.pause().await;
        let state = enter!(self, "plan_meals");
        ApiResponse::Success(state.meals.get(&plan_id).cloned().unwrap_or_default())
    }

    async fn add_meal(&self, plan_id: PlanId, patch: &MealPatch) -> ApiResponse<Meal> {
        let mut state = enter!(self, "add_meal");
        let id = Self::next_id(&mut state);
        let mut created = meal(id, "");
        patch.apply(&mut created);
        state.meals.entry(plan_id).or_default().push(created);
        Self::after_write(&mut state);
        ApiResponse::Success(meal(id, ""))
    }

    async fn update_meal(&self, meal_id: MealId, patch: &MealPatch) -> ApiResponse<Option<Meal>> {
        drop(enter!(self, "update_meal"));
        self.pause().await;
        let mut state = self.state();
        match state
            .meals
            .values_mut()
            .flatten()
            .find(|m| m.id == meal_id)
        {
            Some(meal) => {
                patch.apply(meal);
                ApiResponse::Success(None)
            }
            None => ApiResponse::failure("Repas non trouvé"),
        }
    }

    async fn delete_meal(&self, meal_id: MealId) -> ApiResponse<()> {
        let mut state = enter!(self, "delete_meal");
        let mut removed = false;
        for meals in state.meals.values_mut() {
            let before = meals.len();
            meals.retain(|m| m.id != meal_id);
            removed |= meals.len() != before;
        }
        if removed {
            ApiResponse::Success(())
        } else {
            ApiResponse::failure("Repas non trouvé")
        }
    }

    async fn list_favorites(&self) -> ApiResponse<Vec<Meal>> {
        let state = enter!(self, "list_favorites");
        ApiResponse::Success(state.favorites.clone())
    }

    async fn add_favorite(&self, meal_id: MealId) -> ApiResponse<()> {
        let mut state = enter!(self, "add_favorite");
        let Some(found) = state
            .meals
            .values()
            .flatten()
            .find(|m| m.id == meal_id)
            .cloned()
        else {
            return ApiResponse::failure("Repas non trouvé");
        };
        if !state.favorites.iter().any(|f| f.id == meal_id) {
            state.favorites.push(Meal {
                is_favorite: Some(true),
                ..found
            });
        }
        Self::after_write(&mut state);
        ApiResponse::Success(())
    }

    async fn remove_favorite(&self, meal_id: MealId) -> ApiResponse<()> {
        let mut state = enter!(self, "remove_favorite");
        let before = state.favorites.len();
        state.favorites.retain(|f| f.id != meal_id);
        if state.favorites.len() == before {
            return ApiResponse::failure("Favori non trouvé");
        }
        ApiResponse::Success(())
    }

    async fn statistics(&self) -> ApiResponse<Statistics> {
        let state = enter!(self, "statistics");
        ApiResponse::Success(state.statistics.clone())
    }

    async fn shopping_list(&self, _plan_id: PlanId) -> ApiResponse<Vec<String>> {
        let state = enter!(self, "shopping_list");
        ApiResponse::Success(state.shopping.clone())
    }

    async fn generate_plan(&self, request: &NewPlanRequest) -> ApiResponse<WeeklyPlan> {
        let mut state = enter!(self, "generate_plan");
        let id = Self::next_id(&mut state);
        let generated = WeeklyPlan {
            generated_by_ai: true,
            ..plan(id, &request.plan_name)
        };
        state.plans.insert(0, generated.clone());
        ApiResponse::Success(generated)
    }

    async fn meal_variations(&self, meal_id: MealId) -> ApiResponse<Vec<MealVariation>> {
        drop(enter!(self, "meal_variations"));
        ApiResponse::Success(vec![MealVariation {
            name: Some(format!("Variation {meal_id}")),
            ..MealVariation::default()
        }])
    }

    async fn optimize_shopping(
        &self,
        _plan_id: PlanId,
        budget: Option<f64>,
    ) -> ApiResponse<ShoppingOptimization> {
        drop(enter!(self, "optimize_shopping"));
        ApiResponse::Success(ShoppingOptimization {
            total_estimated_cost: budget,
            ..ShoppingOptimization::default()
        })
    }

    async fn nutrition_analysis(&self, _plan_id: PlanId) -> ApiResponse<NutritionAnalysis> {
        drop(enter!(self, "nutrition_analysis"));
        ApiResponse::Success(NutritionAnalysis {
            overall_score: Some(7.5),
            ..NutritionAnalysis::default()
        })
    }

    async fn regenerate_day(
        &self,
        _plan_id: PlanId,
        day: DayOfWeek,
    ) -> ApiResponse<DayRegeneration> {
        drop(enter!(self, "regenerate_day"));
        ApiResponse::Success(DayRegeneration {
            day_of_week: Some(day.to_string()),
            meals_added: Some(2),
        })
    }
}
