//! Uniform success/error envelope returned by every endpoint wrapper
//!
//! Wrappers never return `Err`: every transport or HTTP failure is folded into
//! [`ApiResponse::Failure`] carrying a human-readable French message.

use crate::error::{ApiError, ApiResult};
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::warn;

/// Message shown when the backend cannot be reached at all
pub const BACKEND_UNAVAILABLE: &str =
    "Serveur non disponible. Vérifiez que le backend est démarré.";

/// Backend operation a response belongs to
///
/// Each one carries its own fallback message for failures that have no
/// structured body.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ListPlans,
    CreatePlan,
    DeletePlan,
    ListMeals,
    CurrentMeal,
    PlanMeals,
    AddMeal,
    UpdateMeal,
    DeleteMeal,
    ListFavorites,
    AddFavorite,
    RemoveFavorite,
    Statistics,
    ShoppingList,
    GeneratePlan,
    MealVariations,
    OptimizeShopping,
    NutritionAnalysis,
    RegenerateDay,
    Health,
}

impl Endpoint {
    /// Stable name used in log fields
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ListPlans => "list_plans",
            Self::CreatePlan => "create_plan",
            Self::DeletePlan => "delete_plan",
            Self::ListMeals => "list_meals",
            Self::CurrentMeal => "current_meal",
            Self::PlanMeals => "plan_meals",
            Self::AddMeal => "add_meal",
            Self::UpdateMeal => "update_meal",
            Self::DeleteMeal => "delete_meal",
            Self::ListFavorites => "list_favorites",
            Self::AddFavorite => "add_favorite",
            Self::RemoveFavorite => "remove_favorite",
            Self::Statistics => "statistics",
            Self::ShoppingList => "shopping_list",
            Self::GeneratePlan => "generate_plan",
            Self::MealVariations => "meal_variations",
            Self::OptimizeShopping => "optimize_shopping",
            Self::NutritionAnalysis => "nutrition_analysis",
            Self::RegenerateDay => "regenerate_day",
            Self::Health => "health",
        }
    }

    /// Message used when the failure carries no backend message
    #[must_use]
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::ListPlans => "Erreur lors de la récupération des plans",
            Self::CreatePlan => "Erreur lors de la création du plan",
            Self::DeletePlan => "Erreur lors de la suppression du plan",
            Self::ListMeals | Self::PlanMeals => "Erreur lors de la récupération des repas",
            Self::CurrentMeal => "Erreur lors de la récupération du repas actuel",
            Self::AddMeal => "Erreur lors de l'ajout du repas",
            Self::UpdateMeal => "Erreur lors de la mise à jour du repas",
            Self::DeleteMeal => "Erreur lors de la suppression du repas",
            Self::ListFavorites => "Erreur lors de la récupération des favoris",
            Self::AddFavorite => "Erreur lors de l'ajout aux favoris",
            Self::RemoveFavorite => "Erreur lors de la suppression des favoris",
            Self::Statistics => "Erreur lors de la récupération des statistiques",
            Self::ShoppingList => "Erreur lors de la génération de la liste de courses",
            Self::GeneratePlan => "Erreur lors de la génération du plan IA",
            Self::MealVariations => "Erreur lors de la récupération des variations",
            Self::OptimizeShopping => "Erreur lors de l'optimisation de la liste",
            Self::NutritionAnalysis => "Erreur lors de l'analyse nutritionnelle",
            Self::RegenerateDay => "Erreur lors de la régénération du jour",
            Self::Health => "Erreur lors de la vérification du serveur",
        }
    }

    /// Message surfaced to the user for `err`
    #[must_use]
    pub fn failure_message(self, err: &ApiError) -> String {
        if err.is_connectivity() {
            return BACKEND_UNAVAILABLE.to_string();
        }
        err.backend_message()
            .map_or_else(|| self.fallback_message().to_string(), str::to_string)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a backend call: the payload or a displayable error message
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    /// The call succeeded
    Success(T),
    /// The call failed; the message is ready to show to the user
    Failure(String),
}

impl<T> ApiResponse<T> {
    /// Normalize a low-level result into the envelope, logging failures
    pub fn from_result(endpoint: Endpoint, result: ApiResult<T>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(err) => {
                let message = endpoint.failure_message(&err);
                warn!(endpoint = endpoint.name(), error = %err, "{message}");
                Self::Failure(message)
            }
        }
    }

    /// Failure with the given message
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    /// Whether the call succeeded
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Borrow the payload
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the error message
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message),
        }
    }

    /// Transform the payload
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        match self {
            Self::Success(data) => ApiResponse::Success(f(data)),
            Self::Failure(message) => ApiResponse::Failure(message),
        }
    }

    /// Convert into a `Result` with the message as the error
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(message) => Err(message),
        }
    }
}

impl<T> From<ApiResponse<T>> for Result<T, String> {
    fn from(response: ApiResponse<T>) -> Self {
        response.into_result()
    }
}

/// Serializes as `{"success": true, "data": …}` or `{"success": false, "error": …}`
impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Wire<'a, T> {
            success: bool,
            #[serde(skip_serializing_if = "Option::is_none")]
            data: Option<&'a T>,
            #[serde(skip_serializing_if = "Option::is_none")]
            error: Option<&'a str>,
        }

        Wire {
            success: self.is_success(),
            data: self.data(),
            error: self.error(),
        }
        .serialize(serializer)
    }
}
