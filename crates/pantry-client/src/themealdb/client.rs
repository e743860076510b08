use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use pantry_types::{RecipeDetail, RecipeSummary};
use reqwest::Url;

use super::models::{MealRecord, MealsEnvelope};
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::traits::{main_ingredient, RecipeSource};

/// Random draws in flight at once
pub const RANDOM_DRAW_CONCURRENCY: usize = 8;

/// TheMealDB client (plain HTTP + JSON)
#[derive(Clone)]
pub struct MealDbClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl MealDbClient {
    /// Client for the public TheMealDB endpoint
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_meals(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Vec<MealRecord>> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!(%url, ?query, "fetching meals");

        let response = self.http_client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        let body = response.text().await?;
        let envelope: MealsEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.meals.unwrap_or_default())
    }

    async fn fetch_summaries(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Vec<RecipeSummary>> {
        let meals = self.fetch_meals(endpoint, query).await?;
        Ok(meals.into_iter().map(MealRecord::into_summary).collect())
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn search_by_ingredients(&self, ingredients: &str) -> Result<Vec<RecipeSummary>> {
        let ingredient = main_ingredient(ingredients);
        if ingredient.is_empty() {
            tracing::debug!("empty ingredient search, skipping request");
            return Ok(Vec::new());
        }
        self.fetch_summaries("filter.php", &[("i", ingredient)]).await
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<RecipeSummary>> {
        self.fetch_summaries("search.php", &[("s", name.trim())]).await
    }

    async fn recipe_details(&self, id: &str) -> Result<RecipeDetail> {
        let meals = self.fetch_meals("lookup.php", &[("i", id)]).await?;
        meals
            .into_iter()
            .next()
            .map(MealRecord::into_detail)
            .ok_or_else(|| ApiError::RecipeNotFound(id.to_string()))
    }

    async fn random_recipes(&self, count: usize) -> Result<Vec<RecipeSummary>> {
        let draws: Vec<Result<Vec<MealRecord>>> = stream::iter(0..count)
            .map(|_| self.fetch_meals("random.php", &[]))
            .buffer_unordered(RANDOM_DRAW_CONCURRENCY)
            .collect()
            .await;

        let recipes = draws
            .into_iter()
            .filter_map(|draw| match draw {
                Ok(meals) => meals.into_iter().next().map(MealRecord::into_summary),
                Err(e) => {
                    tracing::warn!(error = %e, "random recipe draw failed");
                    None
                }
            })
            .collect();
        Ok(recipes)
    }
}
