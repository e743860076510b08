//! Prelude module for convenient imports
//!
//! ```rust
//! use pantry::prelude::*;
//! ```

pub use crate::{
    parse_date_key, RecipeDetail, RecipeSummary, MealPlan, WeekStart,
    RecipeSource, MealDbClient, ClientConfig,
    PantryStore, KeyValueStore, JsonFileStore, MemoryStore,
    snapshot, compute_snapshot, DerivedAnalyticsSnapshot, SearchFilters, SortOrder, Dietary,
};
