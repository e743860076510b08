use std::str::FromStr;

use pantry_types::RecipeSummary;
use serde::{Deserialize, Serialize};

use crate::dietary::Dietary;

/// Order of displayed search results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Title, A to Z, ignoring case
    #[default]
    Name,
    /// Shortest instructions first, a rough cooking-time proxy
    Time,
    /// Order returned by the recipe API
    Relevance,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortOrder::Name),
            "time" => Ok(SortOrder::Time),
            "relevance" | "popularity" => Ok(SortOrder::Relevance),
            other => Err(format!("unknown sort order: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub cuisine: Option<String>,
    pub dietary: Option<Dietary>,
    pub sort: SortOrder,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn dietary(mut self, dietary: Dietary) -> Self {
        self.dietary = Some(dietary);
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn is_active(&self) -> bool {
        self.cuisine.is_some() || self.dietary.is_some()
    }

    fn keep(&self, recipe: &RecipeSummary) -> bool {
        if let Some(cuisine) = &self.cuisine {
            let matches = recipe
                .cuisine
                .as_deref()
                .is_some_and(|c| c.trim().eq_ignore_ascii_case(cuisine.trim()));
            if !matches {
                return false;
            }
        }
        self.dietary.map_or(true, |dietary| dietary.matches(recipe))
    }

    /// Filter then stably sort `recipes`
    pub fn apply(&self, recipes: Vec<RecipeSummary>) -> Vec<RecipeSummary> {
        let mut kept: Vec<RecipeSummary> = recipes.into_iter().filter(|r| self.keep(r)).collect();

        match self.sort {
            SortOrder::Name => kept.sort_by_cached_key(|r| r.title.to_lowercase()),
            SortOrder::Time => {
                kept.sort_by_key(|r| r.instructions_text.as_ref().map_or(0, String::len))
            }
            SortOrder::Relevance => {}
        }
        kept
    }
}
