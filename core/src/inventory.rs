//! The shopping list: deduplicated, quantity-bearing, purchase-tracked.
//!
//! All operations take the current collection and return a new one; callers
//! own persisting the result. The dedup key is the normalized name, so
//! "Milk" and "  milk " are the same item.

use crate::error::PlannerError;
use crate::models::{InventoryItem, normalize};

/// Merge `quantity` of `name` into the list: increment the existing item
/// with the same normalized name, or insert a fresh unbought item at the
/// front. Returns the new list and the affected item.
pub fn add_or_increment(
    items: &[InventoryItem],
    name: &str,
    quantity: u32,
) -> Result<(Vec<InventoryItem>, InventoryItem), PlannerError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(PlannerError::EmptyName);
    }
    let quantity = quantity.max(1);
    let key = normalize(trimmed);

    let mut next = items.to_vec();
    if let Some(existing) = next.iter_mut().find(|item| normalize(&item.name) == key) {
        existing.quantity = existing.quantity.saturating_add(quantity);
        let affected = existing.clone();
        return Ok((next, affected));
    }

    let item = InventoryItem::new(trimmed, quantity);
    next.insert(0, item.clone());
    Ok((next, item))
}

pub fn set_bought(
    items: &[InventoryItem],
    id: &str,
    bought: bool,
) -> Result<(Vec<InventoryItem>, InventoryItem), PlannerError> {
    let mut next = items.to_vec();
    let item = next
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or_else(|| PlannerError::ItemNotFound(id.to_string()))?;
    item.bought = bought;
    let affected = item.clone();
    Ok((next, affected))
}

/// Apply `delta` to an item's quantity, clamped to a minimum of 1.
/// Decrementing a quantity of 1 is a no-op, not a deletion; removing an
/// item is a separate explicit operation.
pub fn adjust_quantity(
    items: &[InventoryItem],
    id: &str,
    delta: i64,
) -> Result<(Vec<InventoryItem>, InventoryItem), PlannerError> {
    let mut next = items.to_vec();
    let item = next
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or_else(|| PlannerError::ItemNotFound(id.to_string()))?;
    let adjusted = i64::from(item.quantity)
        .saturating_add(delta)
        .clamp(1, i64::from(u32::MAX));
    item.quantity = adjusted as u32;
    let affected = item.clone();
    Ok((next, affected))
}

pub fn remove(items: &[InventoryItem], id: &str) -> Result<Vec<InventoryItem>, PlannerError> {
    if !items.iter().any(|item| item.id == id) {
        return Err(PlannerError::ItemNotFound(id.to_string()));
    }
    Ok(items
        .iter()
        .filter(|item| item.id != id)
        .cloned()
        .collect())
}

/// Display projection: unbought items first, bought items last, storage
/// order preserved within each group. A stable partition, not a sort.
#[must_use]
pub fn list_for_display(items: &[InventoryItem]) -> Vec<InventoryItem> {
    let (unbought, bought): (Vec<InventoryItem>, Vec<InventoryItem>) =
        items.iter().cloned().partition(|item| !item.bought);
    unbought.into_iter().chain(bought).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_increment_merges_by_normalized_name() {
        let (items, first) = add_or_increment(&[], "Milk", 1).unwrap();
        let (items, second) = add_or_increment(&items, "  milk ", 1).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(first.id, second.id);
        assert_eq!(items[0].quantity, 2);
        // first-seen casing wins for display
        assert_eq!(items[0].name, "Milk");
        assert!(!items[0].bought);
    }

    #[test]
    fn test_add_prepends_new_items() {
        let (items, _) = add_or_increment(&[], "Milk", 1).unwrap();
        let (items, _) = add_or_increment(&items, "Oats", 2).unwrap();
        assert_eq!(items[0].name, "Oats");
        assert_eq!(items[1].name, "Milk");
    }

    #[test]
    fn test_add_rejects_empty_name() {
        assert!(matches!(
            add_or_increment(&[], "   ", 1),
            Err(PlannerError::EmptyName)
        ));
    }

    #[test]
    fn test_add_clamps_zero_quantity_to_one() {
        let (items, item) = add_or_increment(&[], "Eggs", 0).unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(items[0].quantity, 1);
    }

    #[test]
    fn test_set_bought_round_trip() {
        let (items, item) = add_or_increment(&[], "Milk", 1).unwrap();
        let (items, checked) = set_bought(&items, &item.id, true).unwrap();
        assert!(checked.bought);
        let (items, unchecked) = set_bought(&items, &item.id, false).unwrap();
        assert!(!unchecked.bought);
        assert!(!items[0].bought);
    }

    #[test]
    fn test_set_bought_unknown_id() {
        let result = set_bought(&[], "missing", true);
        assert!(matches!(result, Err(PlannerError::ItemNotFound(_))));
    }

    #[test]
    fn test_adjust_quantity_clamps_at_one() {
        let (items, item) = add_or_increment(&[], "Milk", 1).unwrap();
        let (items, adjusted) = adjust_quantity(&items, &item.id, -5).unwrap();
        assert_eq!(adjusted.quantity, 1);
        let (items, adjusted) = adjust_quantity(&items, &item.id, 3).unwrap();
        assert_eq!(adjusted.quantity, 4);
        let (_, adjusted) = adjust_quantity(&items, &item.id, -1).unwrap();
        assert_eq!(adjusted.quantity, 3);
    }

    #[test]
    fn test_adjust_quantity_unknown_id() {
        assert!(matches!(
            adjust_quantity(&[], "missing", 1),
            Err(PlannerError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_remove_deletes_regardless_of_state() {
        let (items, item) = add_or_increment(&[], "Milk", 1).unwrap();
        let (items, _) = set_bought(&items, &item.id, true).unwrap();
        let items = remove(&items, &item.id).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_remove_unknown_id() {
        assert!(matches!(
            remove(&[], "missing"),
            Err(PlannerError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_list_for_display_is_a_stable_partition() {
        let (items, _) = add_or_increment(&[], "Milk", 1).unwrap();
        let (items, _) = add_or_increment(&items, "Oats", 1).unwrap();
        let (items, _) = add_or_increment(&items, "Eggs", 1).unwrap();
        let (items, _) = add_or_increment(&items, "Flour", 1).unwrap();
        // storage order: Flour, Eggs, Oats, Milk
        let oats_id = items[2].id.clone();
        let flour_id = items[0].id.clone();
        let (items, _) = set_bought(&items, &oats_id, true).unwrap();
        let (items, _) = set_bought(&items, &flour_id, true).unwrap();

        let display: Vec<String> = list_for_display(&items)
            .iter()
            .map(|item| item.name.clone())
            .collect();
        assert_eq!(display, vec!["Eggs", "Milk", "Flour", "Oats"]);
    }
}
