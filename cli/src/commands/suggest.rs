use anyhow::Result;

use mealweek_core::catalog::MIN_QUERY_CHARS;
use mealweek_core::planner::Planner;

pub(crate) fn cmd_suggest(planner: &Planner, query: &str, json: bool) -> Result<()> {
    let suggestions = planner.suggest(query)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    if suggestions.is_empty() {
        if query.trim().chars().count() < MIN_QUERY_CHARS {
            eprintln!("Type at least {MIN_QUERY_CHARS} characters to get suggestions");
        } else {
            eprintln!("No suggestions for '{query}'");
        }
        return Ok(());
    }

    for name in &suggestions {
        println!("{name}");
    }
    Ok(())
}
