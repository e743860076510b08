pub mod client;
pub mod builder;
pub mod dbs;
pub mod error;
pub mod repositories;
pub mod store;

pub use builder::PantryStoreBuilder;
pub use client::PantryStore;
pub use dbs::{JsonFileStore, MemoryStore};
pub use error::{PersistError, Result};
pub use repositories::{
    FavoritesRepository, MealPlanRepository, SearchHistoryRepository,
    DEFAULT_HISTORY_LIMIT, DEFAULT_SEARCH_LOG_LIMIT,
};
pub use store::{KeyValueStore, FAVORITES_KEY, MEAL_PLAN_KEY, SEARCH_HISTORY_KEY, SEARCH_LOG_KEY};
