use async_trait::async_trait;
use pantry_types::{RecipeDetail, RecipeSummary};

use crate::error::Result;

/// Read-only source of recipes
///
/// Searches return an empty vector when nothing matches; only transport and
/// decoding problems are errors.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Recipes using the main (first comma-separated) ingredient
    async fn search_by_ingredients(&self, ingredients: &str) -> Result<Vec<RecipeSummary>>;

    /// Recipes whose name matches `name`
    async fn search_by_name(&self, name: &str) -> Result<Vec<RecipeSummary>>;

    /// Full record for one recipe, `ApiError::RecipeNotFound` if unknown
    async fn recipe_details(&self, id: &str) -> Result<RecipeDetail>;

    /// Up to `count` random recipes. Individual failed draws are skipped.
    async fn random_recipes(&self, count: usize) -> Result<Vec<RecipeSummary>>;
}

/// The ingredient an ingredient search is keyed on: the first
/// comma-separated entry, trimmed
pub fn main_ingredient(ingredients: &str) -> &str {
    ingredients.split(',').next().unwrap_or_default().trim()
}
