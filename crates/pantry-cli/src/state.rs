use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use pantry_client::{ClientConfig, MealDbClient, RecipeSource};
use pantry_persist::PantryStore;

use crate::config::Config;

/// Everything a command needs: settings, local records and the recipe API
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<PantryStore>,
    pub source: Arc<dyn RecipeSource>,
}

impl AppState {
    pub fn new(config: Config, store: PantryStore, source: Arc<dyn RecipeSource>) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            source,
        }
    }

    /// Open the JSON store and the TheMealDB client described by `config`.
    /// `data_dir` overrides the configured storage directory.
    pub fn from_config(config: Config, data_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => config.storage.resolved_data_dir()?,
        };
        tracing::info!(data_dir = %data_dir.display(), "opening pantry store");

        let store = PantryStore::builder()
            .data_dir(data_dir)
            .history_limit(config.storage.history_limit)
            .search_log_limit(config.storage.search_log_limit)
            .week_start(config.planner.week_start)
            .build()
            .context("failed to open pantry store")?;

        let source = MealDbClient::with_config(ClientConfig::from(&config.api))
            .context("failed to create recipe API client")?;

        Ok(Self::new(config, store, Arc::new(source)))
    }
}
