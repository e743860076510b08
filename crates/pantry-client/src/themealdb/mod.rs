mod client;
mod models;

pub use client::{MealDbClient, RANDOM_DRAW_CONCURRENCY};
