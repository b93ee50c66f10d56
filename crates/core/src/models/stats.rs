//! Aggregate statistics computed by the backend

use serde::{Deserialize, Serialize};

/// Read-only aggregate view served by `GET /api/statistics`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    #[serde(default, alias = "total_plans")]
    pub total_plans: u32,
    #[serde(default, alias = "total_recipes")]
    pub total_recipes: u32,
    #[serde(default, alias = "favorite_recipes")]
    pub favorite_recipes: u32,
    #[serde(default, alias = "avg_rating")]
    pub avg_rating: f64,
    /// `(ingredient, count)` pairs, most used first
    #[serde(default, alias = "top_ingredients")]
    pub top_ingredients: Vec<(String, u32)>,
}

impl Statistics {
    /// Share of recipes marked favorite, in `0.0..=1.0`
    #[must_use]
    pub fn favorite_ratio(&self) -> f64 {
        if self.total_recipes == 0 {
            0.0
        } else {
            f64::from(self.favorite_recipes) / f64::from(self.total_recipes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_deserialize() {
        let json = r#"{
            "totalPlans": 4,
            "totalRecipes": 40,
            "favoriteRecipes": 10,
            "avgRating": 4.2,
            "topIngredients": [["poulet", 6], ["plantain", 5]]
        }"#;

        let stats: Statistics = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_plans, 4);
        assert_eq!(stats.top_ingredients[0], ("poulet".to_string(), 6));
        assert!((stats.favorite_ratio() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_statistics_snake_case_aliases() {
        let json = r#"{"total_plans": 1, "avg_rating": 0, "top_ingredients": []}"#;
        let stats: Statistics = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_plans, 1);
        assert_eq!(stats.favorite_ratio(), 0.0);
    }
}
