mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process;

use crate::commands::{
    cmd_add, cmd_clear, cmd_delete, cmd_edit, cmd_move, cmd_shop_add, cmd_shop_adjust,
    cmd_shop_list, cmd_shop_remove, cmd_shop_set_bought, cmd_suggest, cmd_week,
};
use crate::config::Config;
use mealweek_core::planner::Planner;

#[derive(Parser)]
#[command(
    name = "mealweek",
    version,
    about = "A weekly meal planner with a derived shopping list",
    long_about = "Plan named meals on the days of the week; every saved meal's \
ingredients are merged into a persistent shopping list you check off while \
shopping. Ingredient names you have typed before come back as suggestions."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a meal for a day of the week
    Add {
        /// Day: monday-sunday, mon-sun, 0-6, or today
        day: String,
        /// Meal name
        name: String,
        /// Ingredient as NAME or NAME:QTY (repeatable)
        #[arg(short, long = "ingredient", value_name = "NAME[:QTY]")]
        ingredient: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit a meal; name, day, and the ingredient list are replaced
    Edit {
        /// Meal id (or unique prefix)
        id: String,
        /// Day: monday-sunday, mon-sun, 0-6, or today
        day: String,
        /// Meal name
        name: String,
        /// Ingredient as NAME or NAME:QTY (repeatable)
        #[arg(short, long = "ingredient", value_name = "NAME[:QTY]")]
        ingredient: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Move a meal to a day, optionally before another meal
    Move {
        /// Meal id (or unique prefix)
        id: String,
        /// Destination day: monday-sunday, mon-sun, 0-6, or today
        day: String,
        /// Drop the meal immediately before this meal id
        #[arg(long, value_name = "MEAL_ID")]
        before: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a planned meal
    Delete {
        /// Meal id (or unique prefix)
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the planned week
    Week {
        /// Only show one day
        #[arg(long, value_name = "DAY")]
        day: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Clear the whole week and the shopping list (suggestions are kept)
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage the shopping list
    Shop {
        #[command(subcommand)]
        command: ShopCommands,
    },
    /// Suggest ingredient names from everything typed before
    Suggest {
        /// At least 3 characters
        query: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum ShopCommands {
    /// Add an item, or increase its quantity if already listed
    Add {
        /// Item name
        name: String,
        /// Quantity to add
        #[arg(default_value = "1")]
        quantity: u32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the shopping list, unbought items first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check an item off
    Check {
        /// Item id (or unique prefix)
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Put a checked-off item back on the list
    Uncheck {
        /// Item id (or unique prefix)
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Adjust an item's quantity (never below 1)
    Adjust {
        /// Item id (or unique prefix)
        id: String,
        /// Signed amount, e.g. 2 or -1
        #[arg(allow_hyphen_values = true)]
        delta: i64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove an item entirely
    Remove {
        /// Item id (or unique prefix)
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let planner = Planner::open(&config.db_path)?;

    match cli.command {
        Commands::Add {
            day,
            name,
            ingredient,
            json,
        } => cmd_add(&planner, &day, &name, &ingredient, json),
        Commands::Edit {
            id,
            day,
            name,
            ingredient,
            json,
        } => cmd_edit(&planner, &id, &day, &name, &ingredient, json),
        Commands::Move {
            id,
            day,
            before,
            json,
        } => cmd_move(&planner, &id, &day, before.as_deref(), json),
        Commands::Delete { id, json } => cmd_delete(&planner, &id, json),
        Commands::Week { day, json } => cmd_week(&planner, day.as_deref(), json),
        Commands::Clear { yes, json } => cmd_clear(&planner, yes, json),
        Commands::Shop { command } => match command {
            ShopCommands::Add {
                name,
                quantity,
                json,
            } => cmd_shop_add(&planner, &name, quantity, json),
            ShopCommands::List { json } => cmd_shop_list(&planner, json),
            ShopCommands::Check { id, json } => cmd_shop_set_bought(&planner, &id, true, json),
            ShopCommands::Uncheck { id, json } => cmd_shop_set_bought(&planner, &id, false, json),
            ShopCommands::Adjust { id, delta, json } => {
                cmd_shop_adjust(&planner, &id, delta, json)
            }
            ShopCommands::Remove { id, json } => cmd_shop_remove(&planner, &id, json),
        },
        Commands::Suggest { query, json } => cmd_suggest(&planner, &query, json),
    }
}
