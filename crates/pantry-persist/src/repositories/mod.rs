mod favorites;
mod meal_plan;
mod search_history;

pub use favorites::FavoritesRepository;
pub use meal_plan::MealPlanRepository;
pub use search_history::{SearchHistoryRepository, DEFAULT_HISTORY_LIMIT, DEFAULT_SEARCH_LOG_LIMIT};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::store::KeyValueStore;

/// Read and decode a record. Missing records decode as `None`.
fn load_record<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Read a record, degrading to the empty value on any failure
fn read_or_default<T: DeserializeOwned + Default>(store: &dyn KeyValueStore, key: &str) -> T {
    match load_record(store, key) {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "unreadable record, treating as empty");
            T::default()
        }
    }
}

fn write_record<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Log and swallow a failed mutation
fn absorb<T>(key: &str, operation: &str, result: Result<T>) {
    if let Err(e) = result {
        tracing::error!(key, operation, error = %e, "failed to persist record");
    }
}
