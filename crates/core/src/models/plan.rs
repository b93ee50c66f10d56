//! Weekly plans and the preferences used to create them

use super::PlanId;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A named, dated collection of meals
///
/// Meals are not embedded; they are fetched per plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    pub id: PlanId,
    #[serde(default)]
    pub plan_name: String,
    #[serde(default)]
    pub week_start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_budget_estimate: Option<f64>,
    #[serde(default)]
    pub generated_by_ai: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Budget tier of a plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetLevel {
    #[serde(rename = "économique")]
    Economical,
    #[default]
    #[serde(rename = "modéré")]
    Moderate,
    #[serde(rename = "cher")]
    Expensive,
}

impl BudgetLevel {
    /// Wire value
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Economical => "économique",
            Self::Moderate => "modéré",
            Self::Expensive => "cher",
        }
    }
}

impl fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "économique" | "economique" | "economical" | "low" => Ok(Self::Economical),
            "modéré" | "modere" | "moderate" | "medium" => Ok(Self::Moderate),
            "cher" | "expensive" | "high" => Ok(Self::Expensive),
            other => Err(Error::invalid_input(format!(
                "unknown budget level `{other}` (expected économique, modéré or cher)"
            ))),
        }
    }
}

/// Cuisine preference
///
/// Serialized as a plain string; values outside the known set are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Cuisine {
    Cameroon,
    Asian,
    Mexican,
    French,
    Other(String),
}

impl Cuisine {
    /// Wire value
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cameroon => "cameroun",
            Self::Asian => "asiatique",
            Self::Mexican => "mexican",
            Self::French => "french",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for Cuisine {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "cameroun" | "cameroon" => Self::Cameroon,
            "asiatique" | "asian" => Self::Asian,
            "mexican" | "mexicain" => Self::Mexican,
            "french" | "française" | "francaise" => Self::French,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for Cuisine {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Cuisine> for String {
    fn from(value: Cuisine) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preferences sent when creating or generating a plan; never fetched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub cuisines: BTreeSet<Cuisine>,
    pub budget: BudgetLevel,
    pub light: bool,
    pub vegetarian: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            cuisines: BTreeSet::from([Cuisine::Cameroon]),
            budget: BudgetLevel::default(),
            light: false,
            vegetarian: false,
        }
    }
}

impl UserPreferences {
    /// Replace the cuisine set
    #[must_use]
    pub fn with_cuisines<I, C>(mut self, cuisines: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cuisine>,
    {
        self.cuisines = cuisines.into_iter().map(Into::into).collect();
        self
    }

    /// Set the budget tier
    #[must_use]
    pub fn with_budget(mut self, budget: BudgetLevel) -> Self {
        self.budget = budget;
        self
    }

    /// Prefer light meals
    #[must_use]
    pub fn light(mut self, light: bool) -> Self {
        self.light = light;
        self
    }

    /// Vegetarian meals only
    #[must_use]
    pub fn vegetarian(mut self, vegetarian: bool) -> Self {
        self.vegetarian = vegetarian;
        self
    }
}

/// Body of `POST /api/plans` and `POST /api/ai/generate-plan`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlanRequest {
    pub plan_name: String,
    /// ISO date (`YYYY-MM-DD`) of the Monday the plan starts on
    pub week_start_date: String,
    pub preferences: UserPreferences,
}

impl NewPlanRequest {
    /// Create a request with default preferences
    pub fn new(plan_name: impl Into<String>, week_start_date: impl Into<String>) -> Self {
        Self {
            plan_name: plan_name.into(),
            week_start_date: week_start_date.into(),
            preferences: UserPreferences::default(),
        }
    }

    /// Builder-style method to set preferences
    #[must_use]
    pub fn with_preferences(mut self, preferences: UserPreferences) -> Self {
        self.preferences = preferences;
        self
    }
}

/// Day of the week, with the French names the backend stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayOfWeek {
    #[serde(rename = "Lundi")]
    Monday,
    #[serde(rename = "Mardi")]
    Tuesday,
    #[serde(rename = "Mercredi")]
    Wednesday,
    #[serde(rename = "Jeudi")]
    Thursday,
    #[serde(rename = "Vendredi")]
    Friday,
    #[serde(rename = "Samedi")]
    Saturday,
    #[serde(rename = "Dimanche")]
    Sunday,
}

impl DayOfWeek {
    /// All days, Monday first
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// French name as stored by the backend
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Lundi",
            Self::Tuesday => "Mardi",
            Self::Wednesday => "Mercredi",
            Self::Thursday => "Jeudi",
            Self::Friday => "Vendredi",
            Self::Saturday => "Samedi",
            Self::Sunday => "Dimanche",
        }
    }

    /// Day from a zero-based index, Monday = 0
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| {
                day.as_str().to_lowercase() == lower
                    || format!("{day:?}").to_lowercase() == lower
            })
            .ok_or_else(|| Error::invalid_input(format!("unknown day of week `{s}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_deserialize() {
        let json = r#"{
            "id": 3,
            "planName": "Semaine 12",
            "weekStartDate": "2024-03-18",
            "totalBudgetEstimate": null,
            "generatedByAi": true,
            "createdAt": "2024-03-17 20:12:00"
        }"#;

        let plan: WeeklyPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.id, 3);
        assert_eq!(plan.plan_name, "Semaine 12");
        assert!(plan.generated_by_ai);
        assert!(plan.total_budget_estimate.is_none());
    }

    #[test]
    fn test_new_plan_request_wire_format() {
        let request = NewPlanRequest::new("Semaine 1", "2024-01-01").with_preferences(
            UserPreferences::default()
                .with_cuisines(["cameroun", "asiatique"])
                .with_budget(BudgetLevel::Economical)
                .vegetarian(true),
        );

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["planName"], "Semaine 1");
        assert_eq!(value["weekStartDate"], "2024-01-01");
        assert_eq!(value["preferences"]["budget"], "économique");
        assert_eq!(value["preferences"]["vegetarian"], true);
        assert_eq!(
            value["preferences"]["cuisines"],
            serde_json::json!(["cameroun", "asiatique"])
        );
    }

    #[test]
    fn test_cuisine_keeps_unknown_values() {
        let cuisine: Cuisine = serde_json::from_str(r#""éthiopienne""#).unwrap();
        assert_eq!(cuisine, Cuisine::Other("éthiopienne".to_string()));
        assert_eq!(serde_json::to_string(&cuisine).unwrap(), r#""éthiopienne""#);
    }

    #[test]
    fn test_cuisine_set_deduplicates() {
        let prefs = UserPreferences::default().with_cuisines(["cameroun", "Cameroon", "french"]);
        assert_eq!(prefs.cuisines.len(), 2);
    }

    #[test]
    fn test_budget_from_str() {
        assert_eq!("modéré".parse::<BudgetLevel>().unwrap(), BudgetLevel::Moderate);
        assert!("cheap".parse::<BudgetLevel>().is_err());
        assert_eq!("Expensive".parse::<BudgetLevel>().unwrap(), BudgetLevel::Expensive);
    }

    #[test]
    fn test_day_of_week_parsing() {
        assert_eq!("mercredi".parse::<DayOfWeek>().unwrap(), DayOfWeek::Wednesday);
        assert_eq!("Friday".parse::<DayOfWeek>().unwrap(), DayOfWeek::Friday);
        assert!("Someday".parse::<DayOfWeek>().is_err());
        assert_eq!(DayOfWeek::from_index(2), Some(DayOfWeek::Wednesday));
        assert_eq!(
            serde_json::to_string(&DayOfWeek::Sunday).unwrap(),
            r#""Dimanche""#
        );
    }
}
