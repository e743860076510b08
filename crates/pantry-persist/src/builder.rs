use std::path::PathBuf;
use std::sync::Arc;

use pantry_types::WeekStart;

use crate::dbs::{JsonFileStore, MemoryStore};
use crate::error::{PersistError, Result};
use crate::repositories::{
    FavoritesRepository, MealPlanRepository, SearchHistoryRepository, DEFAULT_HISTORY_LIMIT,
    DEFAULT_SEARCH_LOG_LIMIT,
};
use crate::store::KeyValueStore;
use crate::PantryStore;

enum Backend {
    Store(Arc<dyn KeyValueStore>),
    DataDir(PathBuf),
    Memory,
}

pub struct PantryStoreBuilder {
    backend: Option<Backend>,
    history_limit: usize,
    search_log_limit: usize,
    week_start: WeekStart,
}

impl PantryStoreBuilder {
    pub fn new() -> Self {
        Self {
            backend: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
            search_log_limit: DEFAULT_SEARCH_LOG_LIMIT,
            week_start: WeekStart::default(),
        }
    }

    /// Use an already constructed store
    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.backend = Some(Backend::Store(store));
        self
    }

    /// Persist records as JSON files under `dir`
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.backend = Some(Backend::DataDir(dir.into()));
        self
    }

    /// Keep records in memory only
    pub fn in_memory(mut self) -> Self {
        self.backend = Some(Backend::Memory);
        self
    }

    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn search_log_limit(mut self, limit: usize) -> Self {
        self.search_log_limit = limit;
        self
    }

    pub fn week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn build(self) -> Result<PantryStore> {
        let store: Arc<dyn KeyValueStore> = match self.backend {
            Some(Backend::Store(store)) => store,
            Some(Backend::DataDir(dir)) => {
                tracing::debug!(dir = %dir.display(), "using JSON file store");
                Arc::new(JsonFileStore::new(dir))
            }
            Some(Backend::Memory) => Arc::new(MemoryStore::new()),
            None => {
                return Err(PersistError::Internal(
                    "a store, data_dir or in_memory backend is required".to_string(),
                ))
            }
        };

        Ok(PantryStore::from_repositories(
            FavoritesRepository::new(store.clone()),
            SearchHistoryRepository::new(store.clone())
                .with_max_items(self.history_limit)
                .with_log_limit(self.search_log_limit),
            MealPlanRepository::new(store).with_week_start(self.week_start),
        ))
    }
}

impl Default for PantryStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
