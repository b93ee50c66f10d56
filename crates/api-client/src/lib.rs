//! HTTP client for the JowAfrique meal-planning backend
//!
//! This crate wraps every backend route in a typed call that resolves to a
//! uniform [`ApiResponse`] envelope: either the decoded payload or a French,
//! user-facing error message. Nothing past the envelope ever returns `Err`.
//!
//! # Features
//!
//! - **Environment-based configuration**: `JOWAFRIQUE_API_URL`, `JOWAFRIQUE_TIMEOUT_SECS`
//! - **Endpoint groups**: plans, meals, favorites, statistics, shopping list, AI, health
//! - **Error normalization**: connectivity, structured backend errors and per-endpoint fallbacks
//! - **Request correlation**: every request carries a unique `X-Request-ID`
//! - **Backend seam**: the [`MealPlannerApi`] trait, implemented by [`JowClient`]
//!
//! # Example
//!
//! ```rust,no_run
//! use jowafrique_api_client::{ApiResponse, ClientConfig, JowClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = JowClient::with_config(ClientConfig::default())?;
//!
//!     match client.plans().list().await {
//!         ApiResponse::Success(plans) => println!("{} plans", plans.len()),
//!         ApiResponse::Failure(message) => eprintln!("{message}"),
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod backend;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod envelope;
pub mod error;

pub use backend::MealPlannerApi;
pub use client::JowClient;
pub use config::ClientConfig;
pub use envelope::{ApiResponse, Endpoint, BACKEND_UNAVAILABLE};
pub use error::{ApiError, ApiResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::backend::MealPlannerApi;
    pub use crate::client::JowClient;
    pub use crate::config::ClientConfig;
    pub use crate::endpoints::{
        AiApi, FavoritesApi, HealthApi, HealthResponse, MealsApi, PlansApi, ShoppingApi,
        StatisticsApi,
    };
    pub use crate::envelope::{ApiResponse, Endpoint, BACKEND_UNAVAILABLE};
    pub use crate::error::{ApiError, ApiResult};
}
