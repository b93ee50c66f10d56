//! Backend-synchronized state stores for the JowAfrique meal planner
//!
//! Each store owns one remote-backed value plus its loading flag and last
//! error, and mediates every read and write of that value:
//!
//! - **Fetch**: replaces the data wholesale; failures are kept as `error`
//! - **Mutators**: apply the confirmed change locally or refetch, never before
//!   the backend has answered
//! - **In-flight guard**: a second identical mutation while the first is
//!   running is rejected with [`StoreError::InFlight`]
//!
//! Stores talk to the backend through [`MealPlannerApi`], so any
//! implementation (HTTP client or in-memory double) can back them. Instances
//! never share a cache: two stores over the same resource fetch independently.
//!
//! # Example
//!
//! ```rust,no_run
//! use jowafrique_api_client::{ClientConfig, JowClient, MealPlannerApi};
//! use jowafrique_store::PlansStore;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let api: Arc<dyn MealPlannerApi> = Arc::new(JowClient::with_config(ClientConfig::default())?);
//! let plans = PlansStore::load(api).await;
//! match plans.error() {
//!     Some(message) => eprintln!("{message}"),
//!     None => println!("{} plans", plans.plans().len()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`MealPlannerApi`]: jowafrique_api_client::MealPlannerApi

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod actions;
pub mod ai;
pub mod app_state;
pub mod error;
pub mod favorites;
pub mod meals;
pub mod plans;
pub mod resource;
pub mod shopping;
pub mod statistics;

#[cfg(test)]
mod testing;

pub use actions::MealActions;
pub use ai::AiFeatures;
pub use app_state::{AppState, ProgressStage, Tab};
pub use error::{StoreError, StoreResult};
pub use favorites::FavoritesStore;
pub use meals::{CurrentMealStore, MealsStore};
pub use plans::PlansStore;
pub use resource::{InFlight, LoadingGuard, Resource};
pub use shopping::ShoppingListStore;
pub use statistics::StatisticsStore;
