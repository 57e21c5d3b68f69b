use anyhow::Result;
use std::process;

use mealweek_core::models::{Meal, day_label};
use mealweek_core::planner::Planner;
use mealweek_core::schedule::meals_for_day;

use super::helpers::{parse_day, short_id};

fn ingredient_summary(meal: &Meal) -> String {
    meal.ingredients
        .iter()
        .map(|ing| {
            if ing.quantity > 1 {
                let name = &ing.name;
                let quantity = ing.quantity;
                format!("{name} x{quantity}")
            } else {
                ing.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn cmd_week(planner: &Planner, day: Option<&str>, json: bool) -> Result<()> {
    let meals = planner.meals()?;
    let days: Vec<u8> = match day {
        Some(day) => vec![parse_day(day)?],
        None => (0..7).collect(),
    };

    if json {
        let grouped: Vec<serde_json::Value> = days
            .iter()
            .map(|&day| {
                serde_json::json!({
                    "day": day,
                    "label": day_label(day),
                    "meals": meals_for_day(&meals, day),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&grouped)?);
        return Ok(());
    }

    let planned: usize = days.iter().map(|&day| meals_for_day(&meals, day).len()).sum();
    if planned == 0 {
        if day.is_some() {
            eprintln!("Nothing planned for that day");
        } else {
            eprintln!("Nothing planned yet. Use `mealweek add <day> <name>` to plan a meal.");
        }
        process::exit(2);
    }

    for &day in &days {
        let sequence = meals_for_day(&meals, day);
        if sequence.is_empty() {
            continue;
        }
        let label = day_label(day);
        println!("=== {label} ===");
        for meal in &sequence {
            let id = short_id(&meal.id);
            let name = &meal.name;
            if meal.ingredients.is_empty() {
                println!("  [{id}] {name}");
            } else {
                let ingredients = ingredient_summary(meal);
                println!("  [{id}] {name} — {ingredients}");
            }
        }
        println!();
    }

    Ok(())
}
