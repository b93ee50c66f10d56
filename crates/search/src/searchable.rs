//! Field access for searchable records.

use jowafrique_core::models::{Meal, WeeklyPlan};

/// A record whose string fields can be searched by key.
///
/// Keys use the wire names (`planName`, `dayOfWeek`, …). Unknown keys and
/// absent fields yield `None` and are skipped by the search.
pub trait Searchable {
    /// String value of the field named `key`
    fn field(&self, key: &str) -> Option<&str>;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn field(&self, key: &str) -> Option<&str> {
        (**self).field(key)
    }
}

impl Searchable for Meal {
    fn field(&self, key: &str) -> Option<&str> {
        match key {
            "name" => Some(&self.name),
            "ingredient" => self.ingredient.as_deref(),
            "cuisine" => self.cuisine.as_deref(),
            "notes" => self.notes.as_deref(),
            "dayOfWeek" => self.day_of_week.as_deref(),
            "mealType" => self.meal_type.as_deref(),
            _ => None,
        }
    }
}

impl Searchable for WeeklyPlan {
    fn field(&self, key: &str) -> Option<&str> {
        match key {
            "planName" => Some(&self.plan_name),
            "weekStartDate" => Some(&self.week_start_date),
            _ => None,
        }
    }
}

/// JSON objects expose their string-valued members.
impl Searchable for serde_json::Value {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }
}
