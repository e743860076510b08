use std::collections::HashMap;

use pantry_persist::PantryStore;
use pantry_types::{MealPlan, RecipeSummary};
use serde::Serialize;

/// How many entries the top-cuisine and search-trend lists keep
pub const TOP_N: usize = 5;

/// Bucket for favorites without a cuisine
pub const UNKNOWN_CUISINE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    pub label: String,
    pub count: usize,
}

/// Aggregate statistics over favorites, searches and the meal plan.
/// Recomputed from scratch on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedAnalyticsSnapshot {
    pub total_favorites: usize,
    pub total_searches: usize,
    pub top_cuisines: Vec<FrequencyEntry>,
    pub search_trends: Vec<FrequencyEntry>,
    pub total_planned_meals: usize,
    pub days_with_meals: usize,
}

/// Count labels, most frequent first. Ties keep first-seen order.
fn top_frequencies<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<FrequencyEntry> {
    let mut entries: Vec<FrequencyEntry> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();

    for label in labels {
        match positions.get(label) {
            Some(&idx) => entries[idx].count += 1,
            None => {
                positions.insert(label, entries.len());
                entries.push(FrequencyEntry {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    // stable, so equal counts stay in first-seen order
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(TOP_N);
    entries
}

fn cuisine_label(recipe: &RecipeSummary) -> &str {
    recipe
        .cuisine
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(UNKNOWN_CUISINE)
}

/// Pure aggregation over in-memory snapshots. `searches` is the search log
/// newest first; repeated terms count once per search, and terms searched
/// equally often rank most recent first.
pub fn compute_snapshot(
    favorites: &[RecipeSummary],
    searches: &[String],
    meal_plan: &MealPlan,
) -> DerivedAnalyticsSnapshot {
    DerivedAnalyticsSnapshot {
        total_favorites: favorites.len(),
        total_searches: searches.len(),
        top_cuisines: top_frequencies(favorites.iter().map(cuisine_label)),
        search_trends: top_frequencies(searches.iter().map(String::as_str)),
        total_planned_meals: meal_plan.values().map(Vec::len).sum(),
        days_with_meals: meal_plan.values().filter(|meals| !meals.is_empty()).count(),
    }
}

/// Snapshot of everything currently in `store`
pub fn snapshot(store: &PantryStore) -> DerivedAnalyticsSnapshot {
    let favorites = store.favorites().list();
    let mut searches = store.history().log();
    searches.reverse();
    let meal_plan = store.meal_plan().plan();

    let snapshot = compute_snapshot(&favorites, &searches, &meal_plan);
    tracing::debug!(
        favorites = snapshot.total_favorites,
        searches = snapshot.total_searches,
        planned = snapshot.total_planned_meals,
        "computed analytics snapshot"
    );
    snapshot
}
