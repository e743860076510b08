//! Value types shared by every Pantry crate.
//!
//! Recipes are copied by value into the persistence layer, so everything here
//! is plain data: cloneable, comparable and serde-friendly.

pub mod plan;
pub mod recipe;

pub use plan::{date_key, parse_date_key, week_of, MealPlan, WeekStart, DATE_KEY_FORMAT};
pub use recipe::{IngredientLine, RecipeDetail, RecipeSummary, MAX_INGREDIENTS};
