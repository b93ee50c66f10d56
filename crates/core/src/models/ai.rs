//! Structured results of the AI-assisted endpoints
//!
//! The backend relays model output, so every field is optional and both the
//! camelCase names read by the UI and the snake_case names emitted by the
//! model are accepted.

use super::de::{lenient_f64, lenient_u32, null_as_default, value_to_text};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A suggested alternative to an existing meal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealVariation {
    #[serde(default, alias = "recipe_name")]
    pub name: Option<String>,
    #[serde(default, alias = "notes")]
    pub description: Option<String>,
    #[serde(default, alias = "main_ingredient")]
    pub main_ingredient: Option<String>,
    #[serde(default, alias = "cuisine_type")]
    pub cuisine: Option<String>,
    #[serde(default, alias = "prep_time", deserialize_with = "lenient_u32")]
    pub prep_time: Option<u32>,
    #[serde(default, alias = "cook_time", deserialize_with = "lenient_u32")]
    pub cook_time: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub servings: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
}

/// Shopping list rewritten for a budget
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingOptimization {
    #[serde(default, alias = "optimized_list", deserialize_with = "null_as_default")]
    pub optimized_items: Vec<OptimizedItem>,
    #[serde(default, alias = "total_estimated_cost", deserialize_with = "lenient_f64")]
    pub total_estimated_cost: Option<f64>,
    #[serde(default, alias = "savings_tips", deserialize_with = "null_as_default")]
    pub savings_tips: Vec<String>,
    #[serde(default, alias = "recommended_stores", deserialize_with = "null_as_default")]
    pub recommended_stores: Vec<String>,
}

/// One line of an optimized shopping list
///
/// The backend falls back to bare ingredient names when the model fails, so a
/// plain string decodes into an item with only `ingredient` set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "OptimizedItemRepr")]
pub struct OptimizedItem {
    pub ingredient: String,
    pub quantity: Option<String>,
    pub estimated_cost: Option<f64>,
    pub alternative: Option<String>,
    pub seasonal: Option<bool>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OptimizedItemRepr {
    Name(String),
    Full {
        #[serde(default)]
        ingredient: String,
        #[serde(default, deserialize_with = "lenient_text")]
        quantity: Option<String>,
        #[serde(default, alias = "estimatedCost", deserialize_with = "lenient_f64")]
        estimated_cost: Option<f64>,
        #[serde(default)]
        alternative: Option<String>,
        #[serde(default)]
        seasonal: Option<bool>,
    },
}

impl From<OptimizedItemRepr> for OptimizedItem {
    fn from(repr: OptimizedItemRepr) -> Self {
        match repr {
            OptimizedItemRepr::Name(ingredient) => Self {
                ingredient,
                ..Self::default()
            },
            OptimizedItemRepr::Full {
                ingredient,
                quantity,
                estimated_cost,
                alternative,
                seasonal,
            } => Self {
                ingredient,
                quantity,
                estimated_cost,
                alternative,
                seasonal,
            },
        }
    }
}

/// Nutritional assessment of a whole plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionAnalysis {
    #[serde(default, alias = "nutritional_score", deserialize_with = "lenient_f64")]
    pub overall_score: Option<f64>,
    #[serde(default, deserialize_with = "nutrient_ratings")]
    pub macronutrients: Vec<NutrientRating>,
    #[serde(default, alias = "vitamins_minerals", deserialize_with = "nutrient_ratings")]
    pub micronutrients: Vec<NutrientRating>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendations: Vec<String>,
    #[serde(default, alias = "health_benefits", deserialize_with = "null_as_default")]
    pub health_benefits: Vec<String>,
}

/// A named nutrient with its qualitative or quantitative rating
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientRating {
    pub name: String,
    #[serde(default, deserialize_with = "text")]
    pub value: String,
}

/// Outcome of regenerating a single day of a plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayRegeneration {
    #[serde(default, alias = "dayOfWeek")]
    pub day_of_week: Option<String>,
    #[serde(default, alias = "mealsAdded", deserialize_with = "lenient_u32")]
    pub meals_added: Option<u32>,
}

/// Accept either `[{name, value}]` or `{name: value}`.
fn nutrient_ratings<'de, D>(deserializer: D) -> Result<Vec<NutrientRating>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Object(map)) => Ok(map
            .into_iter()
            .map(|(name, value)| NutrientRating {
                name,
                value: value_to_text(value),
            })
            .collect()),
        Some(list @ Value::Array(_)) => {
            serde_json::from_value(list).map_err(serde::de::Error::custom)
        }
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a list or a map of nutrients, got {other}"
        ))),
    }
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_text(Value::deserialize(deserializer)?))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .map(value_to_text)
        .filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variation_from_model_output() {
        let json = r#"{
            "recipe_name": "Poulet DG aux légumes",
            "main_ingredient": "poulet",
            "cuisine_type": "cameroun",
            "prep_time": 25,
            "cook_time": 40.0,
            "notes": "Version plus légère"
        }"#;

        let variation: MealVariation = serde_json::from_str(json).unwrap();
        assert_eq!(variation.name.as_deref(), Some("Poulet DG aux légumes"));
        assert_eq!(variation.description.as_deref(), Some("Version plus légère"));
        assert_eq!(variation.cook_time, Some(40));
        assert!(variation.ingredients.is_empty());
    }

    #[test]
    fn test_variation_ui_shape() {
        let json = r#"{"name": "Ndolé", "servings": "4", "ingredients": ["arachides", "crevettes"]}"#;
        let variation: MealVariation = serde_json::from_str(json).unwrap();
        assert_eq!(variation.servings, Some(4));
        assert_eq!(variation.ingredients.len(), 2);
    }

    #[test]
    fn test_optimization_full_items() {
        let json = r#"{
            "optimized_list": [
                {"ingredient": "plantain", "quantity": "2 kg", "estimated_cost": 3.5, "seasonal": true}
            ],
            "total_estimated_cost": 45.0,
            "savings_tips": ["Acheter au marché"],
            "recommended_stores": ["Marché central"]
        }"#;

        let opt: ShoppingOptimization = serde_json::from_str(json).unwrap();
        assert_eq!(opt.optimized_items.len(), 1);
        assert_eq!(opt.optimized_items[0].quantity.as_deref(), Some("2 kg"));
        assert_eq!(opt.total_estimated_cost, Some(45.0));
        assert_eq!(opt.recommended_stores, vec!["Marché central"]);
    }

    #[test]
    fn test_optimization_fallback_plain_names() {
        let json = r#"{"optimized_list": ["riz", "tomates"], "total_estimated_cost": 0}"#;
        let opt: ShoppingOptimization = serde_json::from_str(json).unwrap();
        assert_eq!(opt.optimized_items[1].ingredient, "tomates");
        assert!(opt.optimized_items[1].estimated_cost.is_none());
    }

    #[test]
    fn test_nutrition_map_form() {
        let json = r#"{
            "nutritional_score": 8.5,
            "macronutrients": {"proteins": "Bon", "carbs": "Équilibré"},
            "vitamins_minerals": {"iron": "Bon"},
            "recommendations": ["Ajouter plus de légumes verts"],
            "health_benefits": null
        }"#;

        let analysis: NutritionAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.overall_score, Some(8.5));
        assert_eq!(analysis.macronutrients.len(), 2);
        assert_eq!(analysis.micronutrients[0].name, "iron");
        assert!(analysis.health_benefits.is_empty());
    }

    #[test]
    fn test_nutrition_list_form() {
        let json = r#"{
            "overallScore": 72,
            "macronutrients": [{"name": "Protéines", "value": 85}],
            "healthBenefits": ["Riche en fibres"]
        }"#;

        let analysis: NutritionAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.overall_score, Some(72.0));
        assert_eq!(analysis.macronutrients[0].value, "85");
        assert_eq!(analysis.health_benefits, vec!["Riche en fibres"]);
        assert!(analysis.micronutrients.is_empty());
    }

    #[test]
    fn test_day_regeneration() {
        let json = r#"{"success": true, "day_of_week": "Lundi", "meals_added": 2, "ai_model": "x"}"#;
        let regen: DayRegeneration = serde_json::from_str(json).unwrap();
        assert_eq!(regen.day_of_week.as_deref(), Some("Lundi"));
        assert_eq!(regen.meals_added, Some(2));
    }
}
