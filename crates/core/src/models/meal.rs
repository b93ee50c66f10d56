//! Meals and partial meal updates

use super::MealId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lunch or dinner slot of a planned meal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealSlot {
    /// Midday meal
    #[serde(rename = "DÉJEUNER")]
    Lunch,
    /// Evening meal
    #[default]
    #[serde(rename = "DÎNER")]
    Dinner,
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lunch => f.write_str("DÉJEUNER"),
            Self::Dinner => f.write_str("DÎNER"),
        }
    }
}

/// A planned meal as served by `/api/meals` and `/api/plans/{id}/meals`
///
/// Only `id` is mandatory: the create endpoints acknowledge with `{id, success}`
/// and that acknowledgement still decodes into a `Meal`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: MealId,
    #[serde(rename = "type", default)]
    pub slot: MealSlot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<String>,

    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    #[serde(default)]
    pub calories: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jow_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
    /// 0 means "not rated yet"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Gates edit affordances in the UI
    #[serde(default)]
    pub is_editable: bool,
}

impl Meal {
    /// Total preparation plus cooking time, when both are known
    #[must_use]
    pub fn total_time(&self) -> Option<u32> {
        Some(self.prep_time? + self.cook_time?)
    }

    /// Whether the meal is currently marked as a favorite
    #[must_use]
    pub fn is_favorite(&self) -> bool {
        self.is_favorite.unwrap_or(false)
    }
}

/// Partial meal sent to `PUT /api/meals/{id}` and `POST /api/plans/{id}/meals`
///
/// Fields left as `None` are omitted from the request body and left untouched
/// by [`MealPatch::apply`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPatch {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub slot: Option<MealSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jow_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MealPatch {
    /// Patch that only sets the rating
    #[must_use]
    pub fn rating(rating: u8) -> Self {
        Self {
            rating: Some(rating),
            ..Self::default()
        }
    }

    /// Patch that only sets the favorite flag
    #[must_use]
    pub fn favorite(is_favorite: bool) -> Self {
        Self {
            is_favorite: Some(is_favorite),
            ..Self::default()
        }
    }

    /// Patch that only sets the notes
    #[must_use]
    pub fn notes(notes: impl Into<String>) -> Self {
        Self {
            notes: Some(notes.into()),
            ..Self::default()
        }
    }

    /// Builder-style method to set the name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder-style method to set the slot
    #[must_use]
    pub fn with_slot(mut self, slot: MealSlot) -> Self {
        self.slot = Some(slot);
        self
    }

    /// Builder-style method to set the day of week
    #[must_use]
    pub fn with_day(mut self, day: impl Into<String>) -> Self {
        self.day_of_week = Some(day.into());
        self
    }

    /// Builder-style method to set the main ingredient
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredient = Some(ingredient.into());
        self
    }

    /// Builder-style method to set the cuisine
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    /// True when no field would be sent
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the set fields into `meal`, leaving the others untouched
    pub fn apply(&self, meal: &mut Meal) {
        fn set<T: Clone>(target: &mut T, value: Option<&T>) {
            if let Some(v) = value {
                target.clone_from(v);
            }
        }
        fn set_opt<T: Clone>(target: &mut Option<T>, value: Option<&T>) {
            if let Some(v) = value {
                *target = Some(v.clone());
            }
        }

        set(&mut meal.slot, self.slot.as_ref());
        set(&mut meal.name, self.name.as_ref());
        set(&mut meal.calories, self.calories.as_ref());
        set_opt(&mut meal.meal_type, self.meal_type.as_ref());
        set_opt(&mut meal.day_of_week, self.day_of_week.as_ref());
        set_opt(&mut meal.image, self.image.as_ref());
        set_opt(&mut meal.time, self.time.as_ref());
        set_opt(&mut meal.weight, self.weight.as_ref());
        set_opt(&mut meal.prep_time, self.prep_time.as_ref());
        set_opt(&mut meal.cook_time, self.cook_time.as_ref());
        set_opt(&mut meal.jow_id, self.jow_id.as_ref());
        set_opt(&mut meal.url, self.url.as_ref());
        set_opt(&mut meal.video_url, self.video_url.as_ref());
        set_opt(&mut meal.ingredient, self.ingredient.as_ref());
        set_opt(&mut meal.cuisine, self.cuisine.as_ref());
        set_opt(&mut meal.is_favorite, self.is_favorite.as_ref());
        set_opt(&mut meal.rating, self.rating.as_ref());
        set_opt(&mut meal.notes, self.notes.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_deserialize_backend_shape() {
        let json = r#"{
            "id": 7,
            "type": "DÎNER",
            "time": "19:00",
            "name": "Poulet DG",
            "calories": "650 kcal",
            "weight": "450 gm",
            "image": null,
            "isEditable": true,
            "jowId": null,
            "ingredient": "poulet",
            "cuisine": "cameroun",
            "prepTime": 30,
            "cookTime": 50,
            "isFavorite": false,
            "rating": 4,
            "notes": null,
            "dayOfWeek": "Mardi",
            "mealType": "Dîner"
        }"#;

        let meal: Meal = serde_json::from_str(json).unwrap();
        assert_eq!(meal.id, 7);
        assert_eq!(meal.slot, MealSlot::Dinner);
        assert_eq!(meal.name, "Poulet DG");
        assert_eq!(meal.total_time(), Some(80));
        assert_eq!(meal.rating, Some(4));
        assert!(meal.image.is_none());
        assert!(meal.is_editable);
    }

    #[test]
    fn test_meal_from_create_acknowledgement() {
        let meal: Meal = serde_json::from_str(r#"{"id": 42, "success": true}"#).unwrap();
        assert_eq!(meal.id, 42);
        assert!(meal.name.is_empty());
        assert!(!meal.is_favorite());
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = MealPatch::rating(5);
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, serde_json::json!({"rating": 5}));

        let patch = MealPatch::favorite(true).with_slot(MealSlot::Lunch);
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, serde_json::json!({"isFavorite": true, "type": "DÉJEUNER"}));
    }

    #[test]
    fn test_patch_apply_merges_fields() {
        let mut meal = Meal {
            id: 1,
            name: "Ndolé".to_string(),
            rating: Some(2),
            notes: Some("trop salé".to_string()),
            ..Meal::default()
        };

        MealPatch::rating(5).apply(&mut meal);

        assert_eq!(meal.rating, Some(5));
        assert_eq!(meal.name, "Ndolé");
        assert_eq!(meal.notes.as_deref(), Some("trop salé"));
    }

    #[test]
    fn test_empty_patch() {
        assert!(MealPatch::default().is_empty());
        assert!(!MealPatch::notes("").is_empty());
    }
}
