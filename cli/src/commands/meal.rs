use anyhow::Result;

use mealweek_core::drag::DragSession;
use mealweek_core::models::day_label;
use mealweek_core::planner::{Planner, SaveMealRequest};

use super::helpers::{
    confirm, fail_not_found, is_not_found, json_error, parse_day, parse_ingredient,
    resolve_id, short_id,
};

pub(crate) fn cmd_add(
    planner: &Planner,
    day: &str,
    name: &str,
    ingredients: &[String],
    json: bool,
) -> Result<()> {
    let day = parse_day(day)?;
    let ingredients = ingredients
        .iter()
        .map(|raw| parse_ingredient(raw))
        .collect::<Result<Vec<_>>>()?;

    let meal = planner.save_meal(SaveMealRequest::Create {
        day,
        name: name.to_string(),
        ingredients,
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&meal)?);
    } else {
        let label = day_label(meal.day);
        let id = short_id(&meal.id);
        let count = meal.ingredients.len();
        let name = &meal.name;
        println!("Planned {name} for {label} (meal {id}, {count} ingredient(s))");
    }
    Ok(())
}

pub(crate) fn cmd_edit(
    planner: &Planner,
    id: &str,
    day: &str,
    name: &str,
    ingredients: &[String],
    json: bool,
) -> Result<()> {
    let day = parse_day(day)?;
    let ingredients = ingredients
        .iter()
        .map(|raw| parse_ingredient(raw))
        .collect::<Result<Vec<_>>>()?;

    let meals = planner.meals()?;
    let ids: Vec<&str> = meals.iter().map(|meal| meal.id.as_str()).collect();
    let meal_id = resolve_id(&ids, id)?;

    match planner.save_meal(SaveMealRequest::Update {
        id: meal_id,
        day,
        name: name.to_string(),
        ingredients,
    }) {
        Ok(meal) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&meal)?);
            } else {
                let label = day_label(meal.day);
                let meal_name = &meal.name;
                println!("Updated {meal_name} on {label}");
            }
            Ok(())
        }
        Err(e) if is_not_found(&e) => fail_not_found(&format!("Meal {id} not found"), json),
        Err(e) => Err(e),
    }
}

pub(crate) fn cmd_move(
    planner: &Planner,
    id: &str,
    day: &str,
    before: Option<&str>,
    json: bool,
) -> Result<()> {
    let target_day = parse_day(day)?;

    let meals = planner.meals()?;
    let ids: Vec<&str> = meals.iter().map(|meal| meal.id.as_str()).collect();
    let meal_id = resolve_id(&ids, id)?;
    let Some(current) = meals.iter().find(|meal| meal.id == meal_id) else {
        fail_not_found(&format!("Meal {id} not found"), json);
    };
    let before_id = before.map(|b| resolve_id(&ids, b)).transpose()?;

    let mut session = DragSession::new();
    session.begin(&current.id, current.day);
    let Some(intent) = session.drop_on(target_day, before_id.as_deref()) else {
        // gesture cancelled: no move occurred
        return Ok(());
    };

    match planner.move_meal(&intent) {
        Ok(()) => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "moved": intent.meal_id, "day": target_day })
                );
            } else {
                let label = day_label(target_day);
                let name = &current.name;
                println!("Moved {name} to {label}");
            }
            Ok(())
        }
        Err(e) if is_not_found(&e) => fail_not_found(&format!("Meal {id} not found"), json),
        Err(e) => Err(e),
    }
}

pub(crate) fn cmd_delete(planner: &Planner, id: &str, json: bool) -> Result<()> {
    let meals = planner.meals()?;
    let ids: Vec<&str> = meals.iter().map(|meal| meal.id.as_str()).collect();
    let meal_id = resolve_id(&ids, id)?;

    match planner.delete_meal(&meal_id) {
        Ok(()) => {
            if json {
                println!("{}", serde_json::json!({ "deleted": meal_id }));
            } else {
                let id = short_id(&meal_id);
                println!("Deleted meal {id}");
            }
            Ok(())
        }
        Err(e) if is_not_found(&e) => fail_not_found(&format!("Meal {id} not found"), json),
        Err(e) => Err(e),
    }
}

pub(crate) fn cmd_clear(planner: &Planner, yes: bool, json: bool) -> Result<()> {
    if !yes && !confirm("Clear all planned meals and the shopping list?")? {
        if json {
            println!("{}", json_error("Aborted"));
        } else {
            eprintln!("Aborted");
        }
        return Ok(());
    }

    planner.clear_week()?;

    if json {
        println!("{}", serde_json::json!({ "cleared": true }));
    } else {
        println!("Week cleared. Shopping list emptied; suggestions kept.");
    }
    Ok(())
}
