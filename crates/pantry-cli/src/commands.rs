use std::io::Write;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use pantry_insights::{snapshot, DerivedAnalyticsSnapshot, FrequencyEntry, SearchFilters};
use pantry_types::{RecipeDetail, RecipeSummary};

use crate::cli::{Command, FavoritesCommand, HistoryCommand, PlanCommand, SearchArgs};
use crate::state::AppState;

/// Run one subcommand, writing user-facing output to `out`
pub async fn execute<W: Write>(command: Command, state: &AppState, out: &mut W) -> Result<()> {
    match command {
        Command::Search(args) => search(args, state, out).await,
        Command::Show { id } => show(&id, state, out).await,
        Command::Random { count } => random(count, state, out).await,
        Command::Favorites(cmd) => favorites(cmd, state, out).await,
        Command::History(cmd) => history(cmd, state, out),
        Command::Plan(cmd) => plan(cmd, state, out).await,
        Command::Stats { json } => stats(json, state, out),
    }
}

async fn search<W: Write>(args: SearchArgs, state: &AppState, out: &mut W) -> Result<()> {
    let query = args.query.trim();
    if query.is_empty() {
        bail!("nothing to search for");
    }

    state.store.history().add(query);

    let results = if args.name {
        state.source.search_by_name(query).await
    } else {
        state.source.search_by_ingredients(query).await
    }
    .with_context(|| format!("search for '{}' failed", query))?;

    let fetched = results.len();
    let filters = SearchFilters {
        cuisine: args.cuisine,
        dietary: args.diet,
        sort: args.sort,
    };
    let results = filters.apply(results);
    tracing::debug!(fetched, shown = results.len(), "search complete");

    if results.is_empty() {
        writeln!(out, "No recipes found for '{}'.", query)?;
        return Ok(());
    }
    write_summaries(out, &results, state)
}

async fn show<W: Write>(id: &str, state: &AppState, out: &mut W) -> Result<()> {
    let detail = fetch_detail(id, state).await?;
    let favorite = state.store.favorites().contains(&detail.id);

    writeln!(out, "{}{}", detail.title, if favorite { " *" } else { "" })?;
    let labels: Vec<&str> = [detail.category.as_deref(), detail.cuisine.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !labels.is_empty() {
        writeln!(out, "{}", labels.join(" | "))?;
    }

    writeln!(out, "\nIngredients:")?;
    for line in &detail.ingredients {
        if line.measure.is_empty() {
            writeln!(out, "  - {}", line.ingredient)?;
        } else {
            writeln!(out, "  - {} {}", line.measure, line.ingredient)?;
        }
    }

    writeln!(out, "\nInstructions:")?;
    for (idx, step) in detail.instruction_steps().iter().enumerate() {
        writeln!(out, "  {}. {}", idx + 1, step)?;
    }

    if let Some(url) = &detail.video_url {
        writeln!(out, "\nVideo: {}", url)?;
    }
    if let Some(url) = &detail.source_url {
        writeln!(out, "Source: {}", url)?;
    }
    Ok(())
}

async fn random<W: Write>(count: Option<usize>, state: &AppState, out: &mut W) -> Result<()> {
    let count = count.unwrap_or(state.config.api.random_count);
    let recipes = state
        .source
        .random_recipes(count)
        .await
        .context("failed to draw random recipes")?;

    if recipes.is_empty() {
        writeln!(out, "No recipes available right now.")?;
        return Ok(());
    }
    write_summaries(out, &recipes, state)
}

async fn favorites<W: Write>(cmd: FavoritesCommand, state: &AppState, out: &mut W) -> Result<()> {
    let favorites = state.store.favorites();
    match cmd {
        FavoritesCommand::List => {
            let list = favorites.list();
            if list.is_empty() {
                writeln!(out, "No favorites yet.")?;
                return Ok(());
            }
            write_summaries(out, &list, state)?;
        }
        FavoritesCommand::Add { id } => {
            if favorites.contains(&id) {
                writeln!(out, "{} is already a favorite.", id)?;
                return Ok(());
            }
            let summary = fetch_detail(&id, state).await?.summary();
            match favorites.try_add(summary.clone()) {
                Ok(true) => writeln!(out, "Added '{}' to favorites.", summary.title)?,
                Ok(false) => writeln!(out, "{} is already a favorite.", id)?,
                Err(e) => write_save_warning(out, "favorites", &e)?,
            }
        }
        FavoritesCommand::Remove { id } => match favorites.try_remove(&id) {
            Ok(true) => writeln!(out, "Removed {} from favorites.", id)?,
            Ok(false) => writeln!(out, "{} is not a favorite.", id)?,
            Err(e) => write_save_warning(out, "favorites", &e)?,
        },
        FavoritesCommand::Clear => match favorites.try_clear() {
            Ok(()) => writeln!(out, "Favorites cleared.")?,
            Err(e) => write_save_warning(out, "favorites", &e)?,
        },
    }
    Ok(())
}

fn history<W: Write>(cmd: HistoryCommand, state: &AppState, out: &mut W) -> Result<()> {
    let history = state.store.history();
    match cmd {
        HistoryCommand::List => {
            let terms = history.list();
            if terms.is_empty() {
                writeln!(out, "No recent searches.")?;
            }
            for (idx, term) in terms.iter().enumerate() {
                writeln!(out, "{}. {}", idx + 1, term)?;
            }
        }
        HistoryCommand::Clear => match history.try_clear() {
            Ok(()) => writeln!(out, "Search history cleared.")?,
            Err(e) => write_save_warning(out, "search history", &e)?,
        },
    }
    Ok(())
}

async fn plan<W: Write>(cmd: PlanCommand, state: &AppState, out: &mut W) -> Result<()> {
    let meal_plan = state.store.meal_plan();
    match cmd {
        PlanCommand::Week { date } => {
            let anchor = date.unwrap_or_else(today);
            let week = meal_plan.week(anchor);
            if week.len() < 7 {
                bail!("the week of {} falls outside the supported calendar", anchor);
            }
            for (day, recipes) in week {
                writeln!(out, "{}", day.format("%a %Y-%m-%d"))?;
                if recipes.is_empty() {
                    writeln!(out, "  (nothing planned)")?;
                }
                for recipe in &recipes {
                    writeln!(out, "  - {} [{}]", recipe.title, recipe.id)?;
                }
            }
        }
        PlanCommand::Add { id, date } => {
            let summary = fetch_detail(&id, state).await?.summary();
            match meal_plan.try_add_recipe(summary.clone(), date) {
                Ok(()) => writeln!(out, "Planned '{}' for {}.", summary.title, date)?,
                Err(e) => write_save_warning(out, "meal plan", &e)?,
            }
        }
        PlanCommand::Remove { id, date } => match meal_plan.try_remove_recipe(&id, date) {
            Ok(true) => writeln!(out, "Removed {} from {}.", id, date)?,
            Ok(false) => writeln!(out, "{} is not planned for {}.", id, date)?,
            Err(e) => write_save_warning(out, "meal plan", &e)?,
        },
    }
    Ok(())
}

fn stats<W: Write>(json: bool, state: &AppState, out: &mut W) -> Result<()> {
    let snapshot = snapshot(&state.store);
    if json {
        serde_json::to_writer_pretty(&mut *out, &snapshot)?;
        writeln!(out)?;
        return Ok(());
    }
    write_snapshot(out, &snapshot)
}

async fn fetch_detail(id: &str, state: &AppState) -> Result<RecipeDetail> {
    state
        .source
        .recipe_details(id)
        .await
        .with_context(|| format!("could not load recipe {}", id))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn write_summaries<W: Write>(out: &mut W, recipes: &[RecipeSummary], state: &AppState) -> Result<()> {
    let favorites = state.store.favorites();
    for recipe in recipes {
        let marker = if favorites.contains(&recipe.id) { '*' } else { ' ' };
        match recipe.cuisine.as_deref() {
            Some(cuisine) => writeln!(out, "{} {:>6}  {} ({})", marker, recipe.id, recipe.title, cuisine)?,
            None => writeln!(out, "{} {:>6}  {}", marker, recipe.id, recipe.title)?,
        }
    }
    Ok(())
}

fn write_save_warning<W: Write>(out: &mut W, what: &str, err: &pantry_persist::PersistError) -> Result<()> {
    tracing::warn!(error = %err, "could not save {}", what);
    writeln!(out, "warning: could not save {}: {}", what, err)?;
    Ok(())
}

fn write_frequencies<W: Write>(out: &mut W, heading: &str, entries: &[FrequencyEntry]) -> Result<()> {
    writeln!(out, "{}:", heading)?;
    if entries.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for entry in entries {
        writeln!(out, "  {:<20} {}", entry.label, entry.count)?;
    }
    Ok(())
}

fn write_snapshot<W: Write>(out: &mut W, snapshot: &DerivedAnalyticsSnapshot) -> Result<()> {
    writeln!(out, "Favorites:      {}", snapshot.total_favorites)?;
    writeln!(out, "Searches:       {}", snapshot.total_searches)?;
    writeln!(out, "Planned meals:  {}", snapshot.total_planned_meals)?;
    writeln!(out, "Days planned:   {}", snapshot.days_with_meals)?;
    write_frequencies(out, "Top cuisines", &snapshot.top_cuisines)?;
    write_frequencies(out, "Search trends", &snapshot.search_trends)
}
