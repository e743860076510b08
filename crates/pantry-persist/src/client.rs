use std::sync::Arc;

use crate::builder::PantryStoreBuilder;
use crate::repositories::{FavoritesRepository, MealPlanRepository, SearchHistoryRepository};
use crate::store::KeyValueStore;

/// Entry point to the three repositories, all sharing one key-value store
#[derive(Clone)]
pub struct PantryStore {
    favorites: FavoritesRepository,
    history: SearchHistoryRepository,
    meal_plan: MealPlanRepository,
}

impl PantryStore {
    /// Repositories over `store` with default limits
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::from_repositories(
            FavoritesRepository::new(store.clone()),
            SearchHistoryRepository::new(store.clone()),
            MealPlanRepository::new(store),
        )
    }

    pub fn builder() -> PantryStoreBuilder {
        PantryStoreBuilder::new()
    }

    pub(crate) fn from_repositories(
        favorites: FavoritesRepository,
        history: SearchHistoryRepository,
        meal_plan: MealPlanRepository,
    ) -> Self {
        Self {
            favorites,
            history,
            meal_plan,
        }
    }

    pub fn favorites(&self) -> &FavoritesRepository {
        &self.favorites
    }

    pub fn history(&self) -> &SearchHistoryRepository {
        &self.history
    }

    pub fn meal_plan(&self) -> &MealPlanRepository {
        &self.meal_plan
    }
}
