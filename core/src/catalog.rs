//! Ingredient name history used for autocomplete.
//!
//! The catalog is a superset of everything ever typed into an ingredient
//! input. It only ever grows; deleting shopping items or clearing the week
//! leaves it untouched.

use crate::models::normalize;

/// Suggestions only activate once this many characters have been typed.
pub const MIN_QUERY_CHARS: usize = 3;

pub const SUGGESTION_LIMIT: usize = 6;

/// Record `name` as a known ingredient. New names are prepended, so the
/// catalog reads most-recently-registered first. Names already present
/// (by normalized key) and empty input leave the catalog unchanged.
#[must_use]
pub fn register(catalog: &[String], name: &str) -> Vec<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return catalog.to_vec();
    }
    let key = normalize(trimmed);
    if catalog.iter().any(|entry| normalize(entry) == key) {
        return catalog.to_vec();
    }
    let mut next = Vec::with_capacity(catalog.len() + 1);
    next.push(trimmed.to_string());
    next.extend(catalog.iter().cloned());
    next
}

/// Candidates whose normalized form contains the normalized query, in
/// catalog storage order, truncated to `limit`. Matches are not ranked:
/// a prefix match does not beat a mid-string one.
#[must_use]
pub fn suggest(catalog: &[String], query: &str, limit: usize) -> Vec<String> {
    let needle = normalize(query);
    if needle.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }
    catalog
        .iter()
        .filter(|entry| normalize(entry).contains(&needle))
        .take(limit)
        .cloned()
        .collect()
}
