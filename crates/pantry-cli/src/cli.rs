use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use pantry_insights::{Dietary, SortOrder};

#[derive(Debug, Parser)]
#[command(name = "pantry", version, about = "Find recipes by ingredient, keep favorites and plan your week")]
pub struct Cli {
    /// Extra configuration file layered over the defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding favorites, history and the meal plan
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search recipes by ingredients (only the first one is sent to the API)
    Search(SearchArgs),
    /// Show a recipe with its ingredients and steps
    Show { id: String },
    /// Draw random recipes
    Random {
        #[arg(long, short = 'n')]
        count: Option<usize>,
    },
    /// Manage favorite recipes
    #[command(subcommand)]
    Favorites(FavoritesCommand),
    /// Recent searches
    #[command(subcommand)]
    History(HistoryCommand),
    /// Weekly meal plan
    #[command(subcommand)]
    Plan(PlanCommand),
    /// Usage statistics
    Stats {
        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Comma-separated ingredients, or a recipe name with --name
    pub query: String,

    /// Search by recipe name instead of ingredient
    #[arg(long)]
    pub name: bool,

    #[arg(long)]
    pub cuisine: Option<String>,

    /// vegetarian, vegan or gluten-free
    #[arg(long)]
    pub diet: Option<Dietary>,

    /// name, time or relevance
    #[arg(long, default_value = "name")]
    pub sort: SortOrder,
}

#[derive(Debug, Subcommand)]
pub enum FavoritesCommand {
    List,
    Add { id: String },
    Remove { id: String },
    Clear,
}

#[derive(Debug, Subcommand)]
pub enum HistoryCommand {
    List,
    Clear,
}

#[derive(Debug, Subcommand)]
pub enum PlanCommand {
    /// Show the week containing --date (default today)
    Week {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    Add { id: String, date: NaiveDate },
    Remove { id: String, date: NaiveDate },
}
