//! Per-day meal sequences and the reorder algorithm behind drag-and-drop.
//!
//! Every mutation takes the current collection and returns a new one.
//! Ordering contract: after a move, both affected days are contiguous
//! (`0..n-1`); a bare delete leaves a gap, which display tolerates by
//! sorting on `order` ascending. Days untouched by an operation are never
//! renumbered.

use std::collections::HashMap;

use crate::error::PlannerError;
use crate::models::{Meal, MealIngredient, new_id, validate_day, validate_name};

/// Append a new meal to `day`, ranked after everything already there.
pub fn add_meal(
    meals: &[Meal],
    day: u8,
    name: &str,
    ingredients: Vec<MealIngredient>,
) -> Result<(Vec<Meal>, Meal), PlannerError> {
    validate_day(day)?;
    let name = validate_name(name)?;
    let order = meals
        .iter()
        .filter(|meal| meal.day == day)
        .map(|meal| meal.order)
        .max()
        .map_or(0, |highest| highest + 1);
    let meal = Meal {
        id: new_id(),
        day,
        name,
        ingredients,
        order,
    };
    let mut next = meals.to_vec();
    next.push(meal.clone());
    Ok((next, meal))
}

/// Replace a meal's name and ingredient list. A day change detaches the
/// meal from its old sequence (which keeps its gaps until the next move
/// touches it) and appends it to the new day.
pub fn edit_meal(
    meals: &[Meal],
    id: &str,
    day: u8,
    name: &str,
    ingredients: Vec<MealIngredient>,
) -> Result<(Vec<Meal>, Meal), PlannerError> {
    validate_day(day)?;
    let name = validate_name(name)?;
    let mut next = meals.to_vec();
    let Some(meal) = next.iter_mut().find(|meal| meal.id == id) else {
        return Err(PlannerError::MealNotFound(id.to_string()));
    };
    if meal.day != day {
        let destination_count = meals.iter().filter(|other| other.day == day).count();
        meal.day = day;
        meal.order = destination_count as i64;
    }
    meal.name = name;
    meal.ingredients = ingredients;
    let updated = meal.clone();
    Ok((next, updated))
}

/// Remove a meal without renumbering the rest of its day.
pub fn delete_meal(meals: &[Meal], id: &str) -> Result<Vec<Meal>, PlannerError> {
    if !meals.iter().any(|meal| meal.id == id) {
        return Err(PlannerError::MealNotFound(id.to_string()));
    }
    Ok(meals
        .iter()
        .filter(|meal| meal.id != id)
        .cloned()
        .collect())
}

/// The drag-and-drop primitive.
///
/// The meal is spliced into `target_day`'s sequence immediately before
/// `before` when that id is on the target day, at the end otherwise (a
/// drop on the day card rather than on a row). The destination sequence
/// is renumbered to `0..n-1`, and so is the source day when the move
/// crossed days. Applying the same move twice yields the same ordering
/// as applying it once.
pub fn move_meal(
    meals: &[Meal],
    id: &str,
    target_day: u8,
    before: Option<&str>,
) -> Result<Vec<Meal>, PlannerError> {
    validate_day(target_day)?;
    let moved = meals
        .iter()
        .find(|meal| meal.id == id)
        .ok_or_else(|| PlannerError::MealNotFound(id.to_string()))?;
    let source_day = moved.day;

    let mut destination: Vec<Meal> = meals
        .iter()
        .filter(|meal| meal.day == target_day && meal.id != id)
        .cloned()
        .collect();
    destination.sort_by_key(|meal| meal.order);

    let insert_at = before
        .and_then(|before_id| destination.iter().position(|meal| meal.id == before_id))
        .unwrap_or(destination.len());

    let mut relocated = moved.clone();
    relocated.day = target_day;
    destination.insert(insert_at, relocated);

    let mut renumbered: HashMap<String, Meal> = HashMap::new();
    for (position, meal) in destination.iter_mut().enumerate() {
        meal.order = position as i64;
        renumbered.insert(meal.id.clone(), meal.clone());
    }

    if source_day != target_day {
        let mut remaining: Vec<Meal> = meals
            .iter()
            .filter(|meal| meal.day == source_day && meal.id != id)
            .cloned()
            .collect();
        remaining.sort_by_key(|meal| meal.order);
        for (position, meal) in remaining.iter_mut().enumerate() {
            meal.order = position as i64;
            renumbered.insert(meal.id.clone(), meal.clone());
        }
    }

    Ok(meals
        .iter()
        .map(|meal| renumbered.remove(&meal.id).unwrap_or_else(|| meal.clone()))
        .collect())
}

/// Display projection for one day: its meals sorted by rank.
#[must_use]
pub fn meals_for_day(meals: &[Meal], day: u8) -> Vec<Meal> {
    let mut sequence: Vec<Meal> = meals
        .iter()
        .filter(|meal| meal.day == day)
        .cloned()
        .collect();
    sequence.sort_by_key(|meal| meal.order);
    sequence
}
