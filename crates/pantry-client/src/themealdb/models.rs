// Wire format of TheMealDB responses

use std::collections::HashMap;

use pantry_types::{IngredientLine, RecipeDetail, RecipeSummary, MAX_INGREDIENTS};
use serde::Deserialize;
use serde_json::Value;

/// Every endpoint wraps its results as `{"meals": [...] | null}`
#[derive(Debug, Deserialize)]
pub(crate) struct MealsEnvelope {
    #[serde(default)]
    pub meals: Option<Vec<MealRecord>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MealRecord {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal", default)]
    pub name: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strSource", default)]
    pub source: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
    /// `strIngredientN` / `strMeasureN` and anything else we don't model
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl MealRecord {
    fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }

    /// Numbered ingredient slots 1..=20, skipping blank ingredients
    pub fn ingredient_lines(&self) -> Vec<IngredientLine> {
        (1..=MAX_INGREDIENTS)
            .filter_map(|n| {
                let ingredient = self
                    .extra_str(&format!("strIngredient{}", n))
                    .map(str::trim)
                    .filter(|s| !s.is_empty())?;
                let measure = self
                    .extra_str(&format!("strMeasure{}", n))
                    .map(str::trim)
                    .unwrap_or_default();
                Some(IngredientLine::new(ingredient, measure))
            })
            .collect()
    }

    pub fn into_summary(self) -> RecipeSummary {
        RecipeSummary {
            id: self.id,
            title: self.name.unwrap_or_default(),
            thumbnail_url: self.thumbnail.unwrap_or_default(),
            cuisine: non_blank(self.area),
            instructions_text: non_blank(self.instructions),
        }
    }

    pub fn into_detail(self) -> RecipeDetail {
        let ingredients = self.ingredient_lines();
        RecipeDetail {
            id: self.id,
            title: self.name.unwrap_or_default(),
            thumbnail_url: self.thumbnail.unwrap_or_default(),
            instructions: self.instructions.unwrap_or_default(),
            cuisine: non_blank(self.area),
            category: non_blank(self.category),
            source_url: non_blank(self.source),
            video_url: non_blank(self.youtube),
            ingredients,
        }
    }
}
