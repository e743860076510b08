use chrono::NaiveDate;
use pantry_insights::{compute_snapshot, snapshot, FrequencyEntry, UNKNOWN_CUISINE};
use pantry_persist::PantryStore;
use pantry_types::{MealPlan, RecipeSummary};
use pretty_assertions::assert_eq;

fn recipe(id: &str, cuisine: Option<&str>) -> RecipeSummary {
    let recipe = RecipeSummary::new(id, format!("Recipe {}", id), "");
    match cuisine {
        Some(c) => recipe.with_cuisine(c),
        None => recipe,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn entry(label: &str, count: usize) -> FrequencyEntry {
    FrequencyEntry {
        label: label.to_string(),
        count,
    }
}

#[test]
fn test_empty_inputs() {
    let snapshot = compute_snapshot(&[], &[], &MealPlan::new());

    assert_eq!(snapshot.total_favorites, 0);
    assert_eq!(snapshot.total_searches, 0);
    assert!(snapshot.top_cuisines.is_empty());
    assert!(snapshot.search_trends.is_empty());
    assert_eq!(snapshot.total_planned_meals, 0);
    assert_eq!(snapshot.days_with_meals, 0);
}

#[test]
fn test_top_cuisine_ordering() {
    let favorites: Vec<RecipeSummary> = ["A", "B", "A", "C", "B", "A"]
        .iter()
        .enumerate()
        .map(|(i, c)| recipe(&i.to_string(), Some(c)))
        .collect();

    let snapshot = compute_snapshot(&favorites, &[], &MealPlan::new());

    assert_eq!(snapshot.total_favorites, 6);
    assert_eq!(
        snapshot.top_cuisines,
        vec![entry("A", 3), entry("B", 2), entry("C", 1)]
    );
}

#[test]
fn test_ties_keep_first_seen_order_and_top_five() {
    let favorites: Vec<RecipeSummary> = ["F", "E", "D", "C", "B", "A", "A"]
        .iter()
        .enumerate()
        .map(|(i, c)| recipe(&i.to_string(), Some(c)))
        .collect();

    let snapshot = compute_snapshot(&favorites, &[], &MealPlan::new());

    assert_eq!(
        snapshot.top_cuisines,
        vec![
            entry("A", 2),
            entry("F", 1),
            entry("E", 1),
            entry("D", 1),
            entry("C", 1),
        ]
    );
}

#[test]
fn test_missing_cuisine_goes_to_unknown_bucket() {
    let favorites = vec![
        recipe("1", None),
        recipe("2", Some("")),
        recipe("3", Some("Thai")),
        recipe("4", Some("  ")),
    ];

    let snapshot = compute_snapshot(&favorites, &[], &MealPlan::new());

    assert_eq!(
        snapshot.top_cuisines,
        vec![entry(UNKNOWN_CUISINE, 3), entry("Thai", 1)]
    );
}

#[test]
fn test_search_trends_count_repeats() {
    let searches: Vec<String> = ["rice", "chicken", "rice", "beef", "chicken", "rice"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let snapshot = compute_snapshot(&[], &searches, &MealPlan::new());

    assert_eq!(snapshot.total_searches, 6);
    assert_eq!(
        snapshot.search_trends,
        vec![entry("rice", 3), entry("chicken", 2), entry("beef", 1)]
    );
}

#[test]
fn test_meal_plan_totals() {
    let mut plan = MealPlan::new();
    plan.insert(
        date(2024, 3, 7),
        vec![recipe("r1", None), recipe("r2", None)],
    );
    plan.insert(date(2024, 3, 8), vec![]);

    let snapshot = compute_snapshot(&[], &[], &plan);

    assert_eq!(snapshot.total_planned_meals, 2);
    assert_eq!(snapshot.days_with_meals, 1);
}

#[test]
fn test_deterministic() {
    let favorites = vec![recipe("1", Some("Thai")), recipe("2", Some("Greek"))];
    let searches = vec!["noodles".to_string(), "feta".to_string()];
    let mut plan = MealPlan::new();
    plan.insert(date(2024, 3, 7), favorites.clone());

    let first = compute_snapshot(&favorites, &searches, &plan);
    let second = compute_snapshot(&favorites, &searches, &plan);

    assert_eq!(first, second);
}

#[test]
fn test_snapshot_reads_from_store() {
    let pantry = PantryStore::builder().in_memory().build().unwrap();
    pantry.favorites().add(recipe("1", Some("Italian")));
    pantry.favorites().add(recipe("2", Some("Italian")));
    pantry.history().add("pasta");
    pantry.history().add("pizza");
    pantry.history().add("pasta");
    pantry
        .meal_plan()
        .add_recipe(recipe("1", Some("Italian")), date(2024, 3, 7));

    let snapshot = snapshot(&pantry);

    assert_eq!(snapshot.total_favorites, 2);
    assert_eq!(snapshot.top_cuisines, vec![entry("Italian", 2)]);
    // history holds two distinct terms, the log keeps all three searches
    assert_eq!(pantry.history().list().len(), 2);
    assert_eq!(snapshot.total_searches, 3);
    assert_eq!(snapshot.search_trends, vec![entry("pasta", 2), entry("pizza", 1)]);
    assert_eq!(snapshot.total_planned_meals, 1);
    assert_eq!(snapshot.days_with_meals, 1);
}

#[test]
fn test_snapshot_serializes_for_display() {
    let snapshot = compute_snapshot(&[recipe("1", None)], &[], &MealPlan::new());
    let json = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(json["total_favorites"], 1);
    assert_eq!(json["top_cuisines"][0]["label"], UNKNOWN_CUISINE);
}

#[test]
fn test_tied_search_trends_rank_most_recent_first() {
    let pantry = PantryStore::builder().in_memory().build().unwrap();
    for term in ["a", "b", "c", "d", "e", "f"] {
        pantry.history().add(term);
    }

    let snapshot = snapshot(&pantry);
    let trends: Vec<&str> = snapshot.search_trends.iter().map(|e| e.label.as_str()).collect();

    assert_eq!(pantry.history().list(), vec!["f", "e", "d", "c", "b"]);
    assert_eq!(trends, vec!["f", "e", "d", "c", "b"]);
    assert_eq!(snapshot.total_searches, 6);
}

#[test]
fn test_frequent_old_search_outranks_recent_ones() {
    let pantry = PantryStore::builder().in_memory().build().unwrap();
    for term in ["soup", "soup", "tacos", "curry"] {
        pantry.history().add(term);
    }

    let snapshot = snapshot(&pantry);

    assert_eq!(
        snapshot.search_trends,
        vec![entry("soup", 2), entry("curry", 1), entry("tacos", 1)]
    );
}
