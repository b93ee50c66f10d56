//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for one group of backend routes.
//! Every method returns an [`ApiResponse`](crate::envelope::ApiResponse) and
//! never fails past it.
//!
//! ## Mapping to the planning backend
//!
//! | Module | Routes |
//! |--------|--------|
//! | `plans` | `/api/plans`, `/api/plans/{id}` |
//! | `meals` | `/api/meals`, `/api/meals/{id}`, `/api/current-meal`, `/api/plans/{id}/meals` |
//! | `favorites` | `/api/favorites`, `/api/favorites/{id}`, `/api/meals/{id}/favorite` |
//! | `statistics` | `/api/statistics` |
//! | `shopping` | `/api/plans/{id}/shopping-list` |
//! | `ai` | `/api/ai/*` |
//! | `health` | `/api/health` |

pub mod ai;
pub mod favorites;
pub mod health;
pub mod meals;
pub mod plans;
pub mod shopping;
pub mod statistics;

pub use ai::AiApi;
pub use favorites::FavoritesApi;
pub use health::{HealthApi, HealthResponse};
pub use meals::MealsApi;
pub use plans::PlansApi;
pub use shopping::ShoppingApi;
pub use statistics::StatisticsApi;
