//! # Pantry
//!
//! Recipe discovery with local, single-user state: search a recipe API by
//! ingredient, keep favorites, remember recent searches, plan meals by date
//! and summarize how the app is used.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pantry::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let api = MealDbClient::new()?;
//!     let store = PantryStore::builder().data_dir("/tmp/pantry").build()?;
//!
//!     store.history().add("chicken");
//!     let results = api.search_by_ingredients("chicken").await?;
//!     let results = SearchFilters::new().sort(SortOrder::Name).apply(results);
//!
//!     if let Some(first) = results.first() {
//!         store.favorites().add(first.clone());
//!         store.meal_plan().add_recipe(first.clone(), parse_date_key("2024-03-07")?);
//!     }
//!
//!     let stats = snapshot(&store);
//!     println!("{} favorites, {} searches", stats.total_favorites, stats.total_searches);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`pantry-types`**: recipe summaries and details, the meal plan map, date keys
//! - **`pantry-client`**: `RecipeSource` trait and the TheMealDB client
//! - **`pantry-persist`**: key-value stores and the favorites, history and meal plan repositories
//! - **`pantry-insights`**: analytics snapshot and search result filtering
//!
//! Reads from the store never fail: a missing or unreadable record is an
//! empty collection. Writes are best effort and log on failure; every
//! mutating operation has a `try_*` variant that returns the error instead.

pub mod prelude;

pub use async_trait::async_trait;

pub use pantry_types::{
    date_key, parse_date_key, week_of, IngredientLine, MealPlan, RecipeDetail, RecipeSummary,
    WeekStart, DATE_KEY_FORMAT, MAX_INGREDIENTS,
};

pub use pantry_client::{ApiError, ClientConfig, MealDbClient, RecipeSource, DEFAULT_BASE_URL};

pub use pantry_persist::{
    FavoritesRepository, JsonFileStore, KeyValueStore, MealPlanRepository, MemoryStore,
    PantryStore, PantryStoreBuilder, PersistError, SearchHistoryRepository,
};

pub use pantry_insights::{
    compute_snapshot, snapshot, DerivedAnalyticsSnapshot, Dietary, FrequencyEntry, SearchFilters,
    SortOrder,
};
