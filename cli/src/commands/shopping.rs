use anyhow::Result;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

use mealweek_core::planner::Planner;

use super::helpers::{fail_not_found, is_not_found, resolve_id, short_id, truncate};

fn resolve_item_id(planner: &Planner, given: &str) -> Result<String> {
    let items = planner.shopping_list()?;
    let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
    resolve_id(&ids, given)
}

pub(crate) fn cmd_shop_add(planner: &Planner, name: &str, quantity: u32, json: bool) -> Result<()> {
    let item = planner.add_item(name, quantity)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&item)?);
    } else {
        let id = short_id(&item.id);
        let name = &item.name;
        let total = item.quantity;
        println!("{name} — quantity {total} (item {id})");
    }
    Ok(())
}

pub(crate) fn cmd_shop_list(planner: &Planner, json: bool) -> Result<()> {
    let items = planner.shopping_list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        eprintln!("Shopping list is empty");
        return Ok(());
    }

    #[derive(Tabled)]
    struct ItemRow {
        #[tabled(rename = "ID")]
        id: String,
        #[tabled(rename = "Item")]
        name: String,
        #[tabled(rename = "Qty")]
        quantity: u32,
        #[tabled(rename = "Status")]
        status: &'static str,
    }

    let rows: Vec<ItemRow> = items
        .iter()
        .map(|item| ItemRow {
            id: short_id(&item.id).to_string(),
            name: truncate(&item.name, 35),
            quantity: item.quantity,
            status: if item.bought { "bought" } else { "" },
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..3)).with(Alignment::right()))
        .to_string();
    println!("{table}");

    Ok(())
}

pub(crate) fn cmd_shop_set_bought(
    planner: &Planner,
    id: &str,
    bought: bool,
    json: bool,
) -> Result<()> {
    let item_id = resolve_item_id(planner, id)?;
    match planner.set_bought(&item_id, bought) {
        Ok(item) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&item)?);
            } else {
                let name = &item.name;
                if bought {
                    println!("Checked off {name}");
                } else {
                    println!("Back on the list: {name}");
                }
            }
            Ok(())
        }
        Err(e) if is_not_found(&e) => fail_not_found(&format!("Item {id} not found"), json),
        Err(e) => Err(e),
    }
}

pub(crate) fn cmd_shop_adjust(planner: &Planner, id: &str, delta: i64, json: bool) -> Result<()> {
    let item_id = resolve_item_id(planner, id)?;
    match planner.adjust_quantity(&item_id, delta) {
        Ok(item) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&item)?);
            } else {
                let name = &item.name;
                let quantity = item.quantity;
                println!("{name} — quantity {quantity}");
            }
            Ok(())
        }
        Err(e) if is_not_found(&e) => fail_not_found(&format!("Item {id} not found"), json),
        Err(e) => Err(e),
    }
}

pub(crate) fn cmd_shop_remove(planner: &Planner, id: &str, json: bool) -> Result<()> {
    let item_id = resolve_item_id(planner, id)?;
    match planner.remove_item(&item_id) {
        Ok(()) => {
            if json {
                println!("{}", serde_json::json!({ "removed": item_id }));
            } else {
                let id = short_id(&item_id);
                println!("Removed item {id}");
            }
            Ok(())
        }
        Err(e) if is_not_found(&e) => fail_not_found(&format!("Item {id} not found"), json),
        Err(e) => Err(e),
    }
}
