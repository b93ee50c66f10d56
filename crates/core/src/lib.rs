//! Core types for the JowAfrique meal-planning client
//!
//! This crate provides the pieces shared by every other crate in the workspace:
//!
//! - **Domain model**: meals, weekly plans, preferences, statistics and the
//!   structured AI results returned by the planning backend
//! - **Configuration**: `jowafrique.toml` loading with defaults
//! - **Error handling**: coded errors with context and recovery suggestions
//!
//! # Example
//!
//! ```rust
//! use jowafrique_core::models::{BudgetLevel, UserPreferences};
//!
//! let prefs = UserPreferences::default().with_budget(BudgetLevel::Economical);
//! assert_eq!(serde_json::to_value(&prefs).unwrap()["budget"], "économique");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod models;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{Error, ErrorCode, Result, ResultExt};
    pub use crate::models::{
        BudgetLevel, Cuisine, DayOfWeek, Meal, MealId, MealPatch, MealSlot, NewPlanRequest,
        PlanId, Statistics, UserPreferences, WeeklyPlan,
    };
}
