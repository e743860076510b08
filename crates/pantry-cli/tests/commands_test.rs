use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use pantry_cli::cli::{Command, FavoritesCommand, HistoryCommand, PlanCommand, SearchArgs};
use pantry_cli::{commands, AppState, Config};
use pantry_client::{ApiError, RecipeSource};
use pantry_insights::SortOrder;
use pantry_persist::PantryStore;
use pantry_types::{week_of, IngredientLine, RecipeDetail, RecipeSummary, WeekStart};
use pretty_assertions::assert_eq;

/// Canned recipe source that records the queries it receives
#[derive(Default)]
struct FakeSource {
    queries: Mutex<Vec<String>>,
}

fn detail(id: &str, title: &str, cuisine: &str) -> RecipeDetail {
    RecipeDetail {
        id: id.to_string(),
        title: title.to_string(),
        thumbnail_url: format!("https://img.example/{}.jpg", id),
        instructions: "Boil water.\r\n\r\nCook pasta.".to_string(),
        cuisine: Some(cuisine.to_string()),
        category: Some("Pasta".to_string()),
        source_url: None,
        video_url: None,
        ingredients: vec![
            IngredientLine::new("Spaghetti", "200g"),
            IngredientLine::new("Salt", ""),
        ],
    }
}

fn catalog() -> Vec<RecipeDetail> {
    vec![
        detail("1", "Spaghetti Carbonara", "Italian"),
        detail("2", "Pad Thai", "Thai"),
        detail("3", "Arrabiata", "Italian"),
    ]
}

#[async_trait]
impl RecipeSource for FakeSource {
    async fn search_by_ingredients(&self, ingredients: &str) -> pantry_client::Result<Vec<RecipeSummary>> {
        self.queries.lock().unwrap().push(ingredients.to_string());
        Ok(catalog().iter().map(RecipeDetail::summary).collect())
    }

    async fn search_by_name(&self, name: &str) -> pantry_client::Result<Vec<RecipeSummary>> {
        self.queries.lock().unwrap().push(name.to_string());
        Ok(catalog()
            .iter()
            .filter(|d| d.title.to_lowercase().contains(&name.to_lowercase()))
            .map(RecipeDetail::summary)
            .collect())
    }

    async fn recipe_details(&self, id: &str) -> pantry_client::Result<RecipeDetail> {
        catalog()
            .into_iter()
            .find(|d| d.id == id)
            .ok_or_else(|| ApiError::RecipeNotFound(id.to_string()))
    }

    async fn random_recipes(&self, count: usize) -> pantry_client::Result<Vec<RecipeSummary>> {
        Ok(catalog().iter().take(count).map(RecipeDetail::summary).collect())
    }
}

fn test_state() -> (AppState, Arc<FakeSource>) {
    let source = Arc::new(FakeSource::default());
    let store = PantryStore::builder().in_memory().build().unwrap();
    let state = AppState::new(Config::default(), store, source.clone());
    (state, source)
}

async fn run(command: Command, state: &AppState) -> String {
    let mut out = Vec::new();
    commands::execute(command, state, &mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

fn search_args(query: &str) -> SearchArgs {
    SearchArgs {
        query: query.to_string(),
        name: false,
        cuisine: None,
        diet: None,
        sort: SortOrder::Name,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_search_records_history_and_sorts() {
    let (state, source) = test_state();

    let output = run(Command::Search(search_args("  pasta, salt ")), &state).await;

    let titles: Vec<&str> = output.lines().collect();
    assert_eq!(titles.len(), 3);
    assert!(titles[0].contains("Arrabiata"));
    assert!(titles[1].contains("Pad Thai"));
    assert!(titles[2].contains("Spaghetti Carbonara"));

    assert_eq!(state.store.history().list(), vec!["pasta, salt".to_string()]);
    assert_eq!(source.queries.lock().unwrap().clone(), vec!["pasta, salt".to_string()]);
}

#[tokio::test]
async fn test_search_with_cuisine_filter_and_no_match() {
    let (state, _) = test_state();

    let mut args = search_args("pasta");
    args.cuisine = Some("thai".to_string());
    let output = run(Command::Search(args), &state).await;
    assert_eq!(output.lines().count(), 1);
    assert!(output.contains("Pad Thai"));

    let mut args = search_args("pasta");
    args.cuisine = Some("Mexican".to_string());
    let output = run(Command::Search(args), &state).await;
    assert_eq!(output, "No recipes found for 'pasta'.\n");
}

#[tokio::test]
async fn test_blank_search_is_rejected() {
    let (state, _) = test_state();
    let mut out = Vec::new();

    let result = commands::execute(Command::Search(search_args("   ")), &state, &mut out).await;

    assert!(result.is_err());
    assert!(state.store.history().list().is_empty());
}

#[tokio::test]
async fn test_favorites_add_list_remove() {
    let (state, _) = test_state();

    let output = run(Command::Favorites(FavoritesCommand::Add { id: "2".into() }), &state).await;
    assert_eq!(output, "Added 'Pad Thai' to favorites.\n");

    let output = run(Command::Favorites(FavoritesCommand::Add { id: "2".into() }), &state).await;
    assert_eq!(output, "2 is already a favorite.\n");
    assert_eq!(state.store.favorites().list().len(), 1);

    let output = run(Command::Favorites(FavoritesCommand::List), &state).await;
    assert!(output.starts_with('*'));
    assert!(output.contains("Pad Thai (Thai)"));

    let output = run(Command::Favorites(FavoritesCommand::Remove { id: "2".into() }), &state).await;
    assert_eq!(output, "Removed 2 from favorites.\n");

    let output = run(Command::Favorites(FavoritesCommand::List), &state).await;
    assert_eq!(output, "No favorites yet.\n");
}

#[tokio::test]
async fn test_favorite_unknown_recipe_fails() {
    let (state, _) = test_state();
    let mut out = Vec::new();

    let result = commands::execute(
        Command::Favorites(FavoritesCommand::Add { id: "999".into() }),
        &state,
        &mut out,
    )
    .await;

    assert!(result.is_err());
    assert!(state.store.favorites().list().is_empty());
}

#[tokio::test]
async fn test_history_list_and_clear() {
    let (state, _) = test_state();
    state.store.history().add("beef");
    state.store.history().add("rice");

    let output = run(Command::History(HistoryCommand::List), &state).await;
    assert_eq!(output, "1. rice\n2. beef\n");

    let output = run(Command::History(HistoryCommand::Clear), &state).await;
    assert_eq!(output, "Search history cleared.\n");
    assert!(state.store.history().list().is_empty());
}

#[tokio::test]
async fn test_plan_add_week_remove() {
    let (state, _) = test_state();
    let thursday = date(2024, 3, 7);

    let output = run(
        Command::Plan(PlanCommand::Add { id: "1".into(), date: thursday }),
        &state,
    )
    .await;
    assert_eq!(output, "Planned 'Spaghetti Carbonara' for 2024-03-07.\n");

    let output = run(Command::Plan(PlanCommand::Week { date: Some(thursday) }), &state).await;
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Sun 2024-03-03");
    assert!(lines.contains(&"Thu 2024-03-07"));
    assert!(lines.contains(&"  - Spaghetti Carbonara [1]"));
    assert_eq!(lines.iter().filter(|l| **l == "  (nothing planned)").count(), 6);

    let output = run(
        Command::Plan(PlanCommand::Remove { id: "1".into(), date: thursday }),
        &state,
    )
    .await;
    assert_eq!(output, "Removed 1 from 2024-03-07.\n");
    assert!(state.store.meal_plan().plan().is_empty());
}

#[tokio::test]
async fn test_plan_week_rejects_partial_week() {
    let (state, _) = test_state();
    let mut out = Vec::new();

    let result = commands::execute(
        Command::Plan(PlanCommand::Week { date: Some(NaiveDate::MAX) }),
        &state,
        &mut out,
    )
    .await;

    let full_week = week_of(NaiveDate::MAX, WeekStart::Sunday).len() == 7;
    assert_eq!(result.is_err(), !full_week);
    if !full_week {
        assert!(out.is_empty());
    }
}

#[tokio::test]
async fn test_random_uses_configured_count() {
    let (state, _) = test_state();
    let output = run(Command::Random { count: Some(2) }, &state).await;
    assert_eq!(output.lines().count(), 2);
}

#[tokio::test]
async fn test_stats_json() {
    let (state, _) = test_state();
    run(Command::Favorites(FavoritesCommand::Add { id: "1".into() }), &state).await;
    run(Command::Favorites(FavoritesCommand::Add { id: "3".into() }), &state).await;
    run(Command::Search(search_args("pasta")), &state).await;

    let output = run(Command::Stats { json: true }, &state).await;
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["total_favorites"], 2);
    assert_eq!(value["total_searches"], 1);
    assert_eq!(value["top_cuisines"][0]["label"], "Italian");
    assert_eq!(value["top_cuisines"][0]["count"], 2);
}

#[tokio::test]
async fn test_show_prints_ingredients_and_steps() {
    let (state, _) = test_state();

    let output = run(Command::Show { id: "1".into() }, &state).await;

    assert!(output.starts_with("Spaghetti Carbonara\nPasta | Italian\n"));
    assert!(output.contains("  - 200g Spaghetti\n"));
    assert!(output.contains("  - Salt\n"));
    assert!(output.contains("  1. Boil water.\n  2. Cook pasta.\n"));
}
