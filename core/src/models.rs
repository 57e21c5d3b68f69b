use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PlannerError;

/// Weekday labels for the fixed 7-day week, Monday first.
pub const WEEKDAYS: &[&str] = &[
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// One ingredient line inside a meal. The list keeps insertion order;
/// it is a private snapshot, independent from the shopping list's copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealIngredient {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    /// Day slot 0 (Monday) through 6 (Sunday).
    pub day: u8,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<MealIngredient>,
    /// Rank among meals sharing the same day. Contiguous 0..n-1 after a
    /// move; deletions may leave gaps until the next move touches the day.
    #[serde(default)]
    pub order: i64,
}

/// A shopping list entry. At most one item exists per normalized name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    /// Display name, first-seen casing and spacing preserved.
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub bought: bool,
    #[serde(default, alias = "createdAt")]
    pub created_at: String,
}

impl InventoryItem {
    #[must_use]
    pub fn new(name: &str, quantity: u32) -> Self {
        Self {
            id: new_id(),
            name: name.trim().to_string(),
            quantity: quantity.max(1),
            bought: false,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

fn default_quantity() -> u32 {
    1
}

#[must_use]
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Canonical form used as the equality key wherever names are compared.
/// Never used for display.
#[must_use]
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

pub fn validate_day(day: u8) -> Result<(), PlannerError> {
    if usize::from(day) < WEEKDAYS.len() {
        Ok(())
    } else {
        Err(PlannerError::InvalidDay(day))
    }
}

/// Trim a required name, rejecting empty and whitespace-only input.
pub fn validate_name(name: &str) -> Result<String, PlannerError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(PlannerError::EmptyName);
    }
    Ok(trimmed.to_string())
}

#[must_use]
pub fn day_label(day: u8) -> &'static str {
    WEEKDAYS.get(usize::from(day)).copied().unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_folds_case() {
        assert_eq!(normalize("  Milk "), "milk");
        assert_eq!(normalize("OATS"), "oats");
        assert_eq!(normalize("milk"), "milk");
    }

    #[test]
    fn test_normalize_is_an_equivalence() {
        // reflexive, symmetric, transitive on representatives
        let a = normalize("Milk");
        let b = normalize("  milk ");
        let c = normalize("MILK");
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(b, c);
        assert_eq!(a, c);
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("  Oatmeal ").unwrap(), "Oatmeal");
        assert!(matches!(validate_name(""), Err(PlannerError::EmptyName)));
        assert!(matches!(validate_name("   "), Err(PlannerError::EmptyName)));
    }

    #[test]
    fn test_validate_day() {
        for day in 0..7 {
            assert!(validate_day(day).is_ok());
        }
        assert!(matches!(validate_day(7), Err(PlannerError::InvalidDay(7))));
    }

    #[test]
    fn test_day_label() {
        assert_eq!(day_label(0), "Monday");
        assert_eq!(day_label(6), "Sunday");
        assert_eq!(day_label(9), "?");
    }

    #[test]
    fn test_ingredient_quantity_defaults_to_one() {
        let ing: MealIngredient = serde_json::from_str(r#"{"name":"Oats"}"#).unwrap();
        assert_eq!(ing.quantity, 1);
    }

    #[test]
    fn test_inventory_item_new_clamps_quantity() {
        let item = InventoryItem::new("Milk", 0);
        assert_eq!(item.quantity, 1);
        assert!(!item.bought);
        assert!(!item.id.is_empty());
    }

    #[test]
    fn test_inventory_item_accepts_legacy_created_at_key() {
        let item: InventoryItem = serde_json::from_str(
            r#"{"id":"a","name":"Milk","bought":true,"createdAt":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(item.created_at, "2024-01-01T00:00:00Z");
        assert_eq!(item.quantity, 1);
        assert!(item.bought);
    }
}
