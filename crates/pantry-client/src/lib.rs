pub mod config;
pub mod error;
pub mod themealdb;
pub mod traits;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, Result};
pub use themealdb::{MealDbClient, RANDOM_DRAW_CONCURRENCY};
pub use traits::{main_ingredient, RecipeSource};
