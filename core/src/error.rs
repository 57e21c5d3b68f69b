use thiserror::Error;

/// Failures an engine operation can report back to the caller.
///
/// Storage read problems never appear here — a missing or unreadable
/// collection is replaced by an empty one at the store layer, so the
/// worst case is an empty list, not an error.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Day must be between 0 (Monday) and 6 (Sunday), got {0}")]
    InvalidDay(u8),

    #[error("Meal {0} not found")]
    MealNotFound(String),

    #[error("Shopping item {0} not found")]
    ItemNotFound(String),
}

impl PlannerError {
    /// True when the operation referenced a stale or deleted id.
    /// These must never silently create a replacement record.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MealNotFound(_) | Self::ItemNotFound(_))
    }
}
