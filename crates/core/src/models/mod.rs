//! Domain model shared by the api client, the stores and the search layer
//!
//! Wire names follow the planning backend: camelCase for the records the UI
//! consumes, with snake_case aliases where the backend forwards raw rows.

mod ai;
mod de;
mod meal;
mod plan;
mod stats;

pub use ai::{
    DayRegeneration, MealVariation, NutrientRating, NutritionAnalysis, OptimizedItem,
    ShoppingOptimization,
};
pub use meal::{Meal, MealPatch, MealSlot};
pub use plan::{BudgetLevel, Cuisine, DayOfWeek, NewPlanRequest, UserPreferences, WeeklyPlan};
pub use stats::Statistics;

/// Backend identifier of a weekly plan
pub type PlanId = i64;

/// Backend identifier of a meal slot
pub type MealId = i64;
