use std::collections::HashSet;
use std::sync::Arc;

use pantry_types::RecipeSummary;

use super::{absorb, read_or_default, write_record};
use crate::error::Result;
use crate::store::{KeyValueStore, FAVORITES_KEY};

/// Favorite recipes in insertion order, unique by recipe id
#[derive(Clone)]
pub struct FavoritesRepository {
    store: Arc<dyn KeyValueStore>,
}

impl FavoritesRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored favorites, empty if none are stored or the record is unreadable.
    /// A hand-edited record with repeated ids keeps only the first entry.
    pub fn list(&self) -> Vec<RecipeSummary> {
        let mut favorites: Vec<RecipeSummary> = read_or_default(self.store.as_ref(), FAVORITES_KEY);
        let mut seen = HashSet::new();
        favorites.retain(|fav| seen.insert(fav.id.clone()));
        favorites
    }

    pub fn contains(&self, id: &str) -> bool {
        self.list().iter().any(|fav| fav.id == id)
    }

    /// Append `recipe` unless a favorite with the same id exists
    pub fn add(&self, recipe: RecipeSummary) {
        absorb(FAVORITES_KEY, "add", self.try_add(recipe));
    }

    /// Like [`add`](Self::add), reporting whether the recipe was inserted
    pub fn try_add(&self, recipe: RecipeSummary) -> Result<bool> {
        let mut favorites = self.list();
        if favorites.iter().any(|fav| fav.id == recipe.id) {
            tracing::debug!(id = %recipe.id, "recipe already a favorite");
            return Ok(false);
        }

        favorites.push(recipe);
        write_record(self.store.as_ref(), FAVORITES_KEY, &favorites)?;
        Ok(true)
    }

    /// Drop every favorite with this id. Missing ids are a no-op.
    pub fn remove(&self, id: &str) {
        absorb(FAVORITES_KEY, "remove", self.try_remove(id));
    }

    /// Like [`remove`](Self::remove), reporting whether anything was removed
    pub fn try_remove(&self, id: &str) -> Result<bool> {
        let mut favorites = self.list();
        let before = favorites.len();
        favorites.retain(|fav| fav.id != id);

        if favorites.len() == before {
            return Ok(false);
        }
        write_record(self.store.as_ref(), FAVORITES_KEY, &favorites)?;
        Ok(true)
    }

    pub fn clear(&self) {
        absorb(FAVORITES_KEY, "clear", self.try_clear());
    }

    pub fn try_clear(&self) -> Result<()> {
        self.store.remove(FAVORITES_KEY)
    }
}
