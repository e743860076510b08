use crate::error::Result;

/// Record holding the favorites list
pub const FAVORITES_KEY: &str = "favorites";
/// Record holding the de-duplicated, most-recent-first search history
pub const SEARCH_HISTORY_KEY: &str = "searchHistory";
/// Record holding the date-keyed meal plan
pub const MEAL_PLAN_KEY: &str = "mealPlan";
/// Record holding the append-only search log that backs analytics
pub const SEARCH_LOG_KEY: &str = "searchLog";

/// Durable key-value storage for serialized records
///
/// Values are opaque strings; the repositories own the serialization format.
/// Implementations report failures as errors and never panic, the repository
/// layer decides how to degrade.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`, `None` if nothing is stored
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value stored under `key`. Removing a missing key succeeds.
    fn remove(&self, key: &str) -> Result<()>;
}
