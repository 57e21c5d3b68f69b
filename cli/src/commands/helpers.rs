use anyhow::{Context, Result, bail};
use chrono::Datelike;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::process;

use mealweek_core::error::PlannerError;
use mealweek_core::models::MealIngredient;

/// Parse a day argument: `monday`..`sunday`, `mon`..`sun`, `0`..`6`,
/// or `today`.
pub(crate) fn parse_day(day: &str) -> Result<u8> {
    let lower = day.trim().to_lowercase();

    if let Ok(index) = lower.parse::<u8>() {
        if index <= 6 {
            return Ok(index);
        }
        bail!("Invalid day index {index}. Use 0 (Monday) through 6 (Sunday)");
    }

    match lower.as_str() {
        "monday" | "mon" => Ok(0),
        "tuesday" | "tue" => Ok(1),
        "wednesday" | "wed" => Ok(2),
        "thursday" | "thu" => Ok(3),
        "friday" | "fri" => Ok(4),
        "saturday" | "sat" => Ok(5),
        "sunday" | "sun" => Ok(6),
        "today" => Ok(chrono::Local::now()
            .date_naive()
            .weekday()
            .num_days_from_monday() as u8),
        _ => bail!("Invalid day: {day}. Use monday-sunday, mon-sun, 0-6, or today"),
    }
}

/// Parse an ingredient argument: `NAME` or `NAME:QTY` (quantity >= 1).
pub(crate) fn parse_ingredient(raw: &str) -> Result<MealIngredient> {
    let (name, quantity) = match raw.rsplit_once(':') {
        Some((name, qty)) => {
            let quantity: u32 = qty
                .trim()
                .parse()
                .with_context(|| format!("Invalid quantity in '{raw}'. Use NAME or NAME:QTY"))?;
            if quantity == 0 {
                bail!("Quantity must be at least 1 in '{raw}'");
            }
            (name, quantity)
        }
        None => (raw, 1),
    };

    let name = name.trim();
    if name.is_empty() {
        bail!("Ingredient name must not be empty in '{raw}'");
    }
    Ok(MealIngredient {
        name: name.to_string(),
        quantity,
    })
}

/// Expand a (possibly shortened) id against the known ids. Exact matches
/// win; otherwise a unique prefix resolves. An unknown id passes through
/// untouched so the engine reports it as not found.
pub(crate) fn resolve_id(ids: &[&str], given: &str) -> Result<String> {
    if given.is_empty() || ids.iter().any(|id| *id == given) {
        return Ok(given.to_string());
    }
    let matches: Vec<&str> = ids
        .iter()
        .copied()
        .filter(|id| id.starts_with(given))
        .collect();
    match matches.as_slice() {
        [only] => Ok((*only).to_string()),
        [] => Ok(given.to_string()),
        _ => bail!(
            "Id prefix '{given}' is ambiguous ({} matches)",
            matches.len()
        ),
    }
}

pub(crate) fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

pub(crate) fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<PlannerError>()
        .is_some_and(PlannerError::is_not_found)
}

/// Report a stale/missing id and exit with the not-found status.
pub(crate) fn fail_not_found(message: &str, json: bool) -> ! {
    if json {
        println!("{}", json_error(message));
    } else {
        eprintln!("{message}");
    }
    process::exit(2);
}

pub(crate) fn confirm(question: &str) -> Result<bool> {
    eprint!("{question} [y/N]: ");
    io::stderr().flush()?;
    let stdin = io::stdin();
    let line = stdin.lock().lines().next().context("No input")??;
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

pub(crate) fn json_error(message: &str) -> String {
    #[derive(Serialize)]
    struct CliError<'a> {
        error: &'a str,
    }
    serde_json::to_string(&CliError { error: message })
        .unwrap_or_else(|_| format!("{{\"error\":\"{message}\"}}"))
}

pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let end = s.char_indices().nth(max - 3).map_or(s.len(), |(i, _)| i);
        format!("{}...", &s[..end])
    }
}
