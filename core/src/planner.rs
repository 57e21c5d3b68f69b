//! The planner service: applies user intents against the meal schedule,
//! the shopping list, and the catalog, and keeps the three consistent
//! where the product requires it.
//!
//! Saving a meal merges its ingredient lines into the shopping list and
//! the catalog. The merge re-applies every line on every save — there is
//! no diff against the meal's previous ingredient list, so re-editing a
//! meal increments shopping quantities again. Preserved as-is; see
//! DESIGN.md.

use std::path::Path;

use anyhow::Result;

use crate::catalog;
use crate::drag::MoveIntent;
use crate::inventory;
use crate::models::{InventoryItem, Meal, MealIngredient, normalize};
use crate::schedule;
use crate::store::Store;

/// A meal save intent. Create vs. update is carried by the request
/// itself rather than by ambient editing state.
#[derive(Debug, Clone)]
pub enum SaveMealRequest {
    Create {
        day: u8,
        name: String,
        ingredients: Vec<MealIngredient>,
    },
    Update {
        id: String,
        day: u8,
        name: String,
        ingredients: Vec<MealIngredient>,
    },
}

pub struct Planner {
    store: Store,
}

impl Planner {
    pub fn open(path: &Path) -> Result<Self> {
        let store = Store::open(path)?;
        Ok(Self { store })
    }

    pub fn open_in_memory() -> Result<Self> {
        let store = Store::open_in_memory()?;
        Ok(Self { store })
    }

    // --- Meal schedule ---

    /// Create or update a meal, then merge its ingredients into the
    /// shopping list and catalog. Collections are written one after
    /// another (meals, inventory, catalog) with no cross-collection
    /// transaction.
    pub fn save_meal(&self, request: SaveMealRequest) -> Result<Meal> {
        let meals = self.store.load_meals()?;
        let (meals, saved) = match request {
            SaveMealRequest::Create {
                day,
                name,
                ingredients,
            } => schedule::add_meal(&meals, day, &name, ingredients)?,
            SaveMealRequest::Update {
                id,
                day,
                name,
                ingredients,
            } => schedule::edit_meal(&meals, &id, day, &name, ingredients)?,
        };

        let mut items = self.store.load_inventory()?;
        let mut names = self.store.load_catalog()?;
        for ingredient in &saved.ingredients {
            // blank lines inside a meal are skipped, not rejected
            if normalize(&ingredient.name).is_empty() {
                continue;
            }
            let (merged, _) =
                inventory::add_or_increment(&items, &ingredient.name, ingredient.quantity)?;
            items = merged;
            names = catalog::register(&names, &ingredient.name);
        }

        self.store.save_meals(&meals)?;
        self.store.save_inventory(&items)?;
        self.store.save_catalog(&names)?;
        Ok(saved)
    }

    /// Delete a meal. The day's remaining order values keep their gap
    /// until the next move touches that day.
    pub fn delete_meal(&self, id: &str) -> Result<()> {
        let meals = self.store.load_meals()?;
        let meals = schedule::delete_meal(&meals, id)?;
        self.store.save_meals(&meals)
    }

    /// Apply a completed drag gesture.
    pub fn move_meal(&self, intent: &MoveIntent) -> Result<()> {
        let meals = self.store.load_meals()?;
        let meals = schedule::move_meal(
            &meals,
            &intent.meal_id,
            intent.target_day,
            intent.before.as_deref(),
        )?;
        self.store.save_meals(&meals)
    }

    /// Wipe the week's meals and the shopping list. The catalog is
    /// suggestion history, not shopping state, and survives.
    pub fn clear_week(&self) -> Result<()> {
        self.store.save_meals(&[])?;
        self.store.save_inventory(&[])?;
        Ok(())
    }

    pub fn meals(&self) -> Result<Vec<Meal>> {
        self.store.load_meals()
    }

    pub fn meals_for_day(&self, day: u8) -> Result<Vec<Meal>> {
        crate::models::validate_day(day)?;
        Ok(schedule::meals_for_day(&self.store.load_meals()?, day))
    }

    // --- Shopping list ---

    pub fn add_item(&self, name: &str, quantity: u32) -> Result<InventoryItem> {
        let items = self.store.load_inventory()?;
        let (items, item) = inventory::add_or_increment(&items, name, quantity)?;
        let names = catalog::register(&self.store.load_catalog()?, name);
        self.store.save_inventory(&items)?;
        self.store.save_catalog(&names)?;
        Ok(item)
    }

    pub fn set_bought(&self, id: &str, bought: bool) -> Result<InventoryItem> {
        let items = self.store.load_inventory()?;
        let (items, item) = inventory::set_bought(&items, id, bought)?;
        self.store.save_inventory(&items)?;
        Ok(item)
    }

    pub fn adjust_quantity(&self, id: &str, delta: i64) -> Result<InventoryItem> {
        let items = self.store.load_inventory()?;
        let (items, item) = inventory::adjust_quantity(&items, id, delta)?;
        self.store.save_inventory(&items)?;
        Ok(item)
    }

    pub fn remove_item(&self, id: &str) -> Result<()> {
        let items = self.store.load_inventory()?;
        let items = inventory::remove(&items, id)?;
        self.store.save_inventory(&items)
    }

    /// The shopping list in display order: unbought first.
    pub fn shopping_list(&self) -> Result<Vec<InventoryItem>> {
        Ok(inventory::list_for_display(&self.store.load_inventory()?))
    }

    // --- Suggestions ---

    pub fn suggest(&self, query: &str) -> Result<Vec<String>> {
        Ok(catalog::suggest(
            &self.store.load_catalog()?,
            query,
            catalog::SUGGESTION_LIMIT,
        ))
    }

    pub fn catalog(&self) -> Result<Vec<String>> {
        self.store.load_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;

    fn ingredient(name: &str, quantity: u32) -> MealIngredient {
        MealIngredient {
            name: name.to_string(),
            quantity,
        }
    }

    fn create(day: u8, name: &str, ingredients: Vec<MealIngredient>) -> SaveMealRequest {
        SaveMealRequest::Create {
            day,
            name: name.to_string(),
            ingredients,
        }
    }

    #[test]
    fn test_first_meal_on_an_empty_week() {
        let planner = Planner::open_in_memory().unwrap();
        let meal = planner
            .save_meal(create(
                0,
                "Oatmeal",
                vec![ingredient("Oats", 1), ingredient("Milk", 1)],
            ))
            .unwrap();

        assert_eq!(meal.day, 0);
        assert_eq!(meal.order, 0);
        assert_eq!(planner.meals().unwrap().len(), 1);

        let list = planner.shopping_list().unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|item| item.quantity == 1 && !item.bought));
    }

    #[test]
    fn test_saving_two_meals_merges_shared_ingredients() {
        let planner = Planner::open_in_memory().unwrap();
        planner
            .save_meal(create(0, "Oatmeal", vec![ingredient("Milk", 1)]))
            .unwrap();
        planner
            .save_meal(create(2, "Pancakes", vec![ingredient("  milk ", 2)]))
            .unwrap();

        let list = planner.shopping_list().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "Milk");
        assert_eq!(list[0].quantity, 3);
    }

    #[test]
    fn test_editing_reapplies_ingredients_without_diffing() {
        // current behavior: every save re-applies the full ingredient
        // list, so an unchanged edit doubles the shopping quantities
        let planner = Planner::open_in_memory().unwrap();
        let meal = planner
            .save_meal(create(0, "Oatmeal", vec![ingredient("Oats", 1)]))
            .unwrap();
        planner
            .save_meal(SaveMealRequest::Update {
                id: meal.id,
                day: 0,
                name: "Oatmeal".to_string(),
                ingredients: vec![ingredient("Oats", 1)],
            })
            .unwrap();

        let list = planner.shopping_list().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].quantity, 2);
    }

    #[test]
    fn test_update_of_deleted_meal_reports_not_found() {
        let planner = Planner::open_in_memory().unwrap();
        let meal = planner
            .save_meal(create(0, "Oatmeal", vec![ingredient("Oats", 1)]))
            .unwrap();
        planner.delete_meal(&meal.id).unwrap();

        let err = planner
            .save_meal(SaveMealRequest::Update {
                id: meal.id,
                day: 0,
                name: "Oatmeal".to_string(),
                ingredients: Vec::new(),
            })
            .unwrap_err();
        let planner_err = err.downcast_ref::<PlannerError>().unwrap();
        assert!(planner_err.is_not_found());
        // no replacement record was created
        assert!(planner.meals().unwrap().is_empty());
    }

    #[test]
    fn test_blank_ingredient_lines_are_skipped() {
        let planner = Planner::open_in_memory().unwrap();
        planner
            .save_meal(create(
                0,
                "Toast",
                vec![ingredient("  ", 1), ingredient("Bread", 1)],
            ))
            .unwrap();
        let list = planner.shopping_list().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "Bread");
    }

    #[test]
    fn test_empty_name_rejected_without_side_effects() {
        let planner = Planner::open_in_memory().unwrap();
        let err = planner
            .save_meal(create(0, "   ", vec![ingredient("Oats", 1)]))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PlannerError>(),
            Some(PlannerError::EmptyName)
        ));
        assert!(planner.meals().unwrap().is_empty());
        assert!(planner.shopping_list().unwrap().is_empty());
    }

    #[test]
    fn test_move_via_intent() {
        let planner = Planner::open_in_memory().unwrap();
        let meal_a = planner.save_meal(create(0, "A", Vec::new())).unwrap();
        let _meal_b = planner.save_meal(create(3, "B", Vec::new())).unwrap();
        let meal_c = planner.save_meal(create(3, "C", Vec::new())).unwrap();

        planner
            .move_meal(&MoveIntent {
                meal_id: meal_a.id.clone(),
                target_day: 3,
                before: Some(meal_c.id.clone()),
            })
            .unwrap();

        let day3: Vec<(String, i64)> = planner
            .meals_for_day(3)
            .unwrap()
            .iter()
            .map(|meal| (meal.name.clone(), meal.order))
            .collect();
        assert_eq!(
            day3,
            vec![("B".into(), 0), ("A".into(), 1), ("C".into(), 2)]
        );
        assert!(planner.meals_for_day(0).unwrap().is_empty());
    }

    #[test]
    fn test_clear_week_keeps_the_catalog() {
        let planner = Planner::open_in_memory().unwrap();
        planner
            .save_meal(create(0, "Oatmeal", vec![ingredient("Oats", 1)]))
            .unwrap();
        planner.add_item("Milk", 1).unwrap();

        planner.clear_week().unwrap();

        assert!(planner.meals().unwrap().is_empty());
        assert!(planner.shopping_list().unwrap().is_empty());
        // suggestion history survives the wipe
        assert_eq!(planner.suggest("oats").unwrap(), vec!["Oats".to_string()]);
        assert_eq!(planner.suggest("milk").unwrap(), vec!["Milk".to_string()]);
    }

    #[test]
    fn test_direct_add_merges_with_meal_sourced_items() {
        let planner = Planner::open_in_memory().unwrap();
        planner
            .save_meal(create(0, "Oatmeal", vec![ingredient("Milk", 1)]))
            .unwrap();
        let item = planner.add_item("MILK", 2).unwrap();
        assert_eq!(item.quantity, 3);
        assert_eq!(planner.shopping_list().unwrap().len(), 1);
    }

    #[test]
    fn test_shopping_item_lifecycle() {
        let planner = Planner::open_in_memory().unwrap();
        let item = planner.add_item("Eggs", 6).unwrap();

        let checked = planner.set_bought(&item.id, true).unwrap();
        assert!(checked.bought);

        let adjusted = planner.adjust_quantity(&item.id, -10).unwrap();
        assert_eq!(adjusted.quantity, 1);

        planner.remove_item(&item.id).unwrap();
        assert!(planner.shopping_list().unwrap().is_empty());

        let err = planner.set_bought(&item.id, false).unwrap_err();
        assert!(
            err.downcast_ref::<PlannerError>()
                .unwrap()
                .is_not_found()
        );
    }

    #[test]
    fn test_suggest_threshold_end_to_end() {
        let planner = Planner::open_in_memory().unwrap();
        planner.add_item("Milk", 1).unwrap();
        assert!(planner.suggest("mi").unwrap().is_empty());
        assert_eq!(planner.suggest("mil").unwrap(), vec!["Milk".to_string()]);
    }

    #[test]
    fn test_planner_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mealweek.db");

        {
            let planner = Planner::open(&path).unwrap();
            planner
                .save_meal(create(6, "Roast", vec![ingredient("Potatoes", 4)]))
                .unwrap();
        }

        let planner = Planner::open(&path).unwrap();
        let meals = planner.meals_for_day(6).unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].name, "Roast");
        assert_eq!(planner.shopping_list().unwrap()[0].name, "Potatoes");
    }
}
