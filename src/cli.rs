use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Pantry-aware recipe matching over the meal-planner stores", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rank recipes by how well the pantry covers their ingredients
    Suggest(SuggestArgs),
    /// Emit the ranked suggestions as a JSON report
    Report(ReportArgs),
    /// Find recipes by title, description, cuisine or ingredient text
    Search(SearchArgs),
    /// Draft a shopping list for one recipe against the pantry
    Shopping(ShoppingArgs),
}

/// Where the pantry and recipes come from: local export files, or the
/// remote store when a user id is given.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Path to a pantry CSV export (columns: name, quantity)
    #[arg(long)]
    pub pantry_csv: Option<PathBuf>,

    /// Path to a recipes JSON file (array of recipe objects)
    #[arg(long)]
    pub recipes_json: Option<PathBuf>,

    /// Path to a recipes CSV export (ingredients column holds JSON text)
    #[arg(long)]
    pub recipes_csv: Option<PathBuf>,

    /// Fetch this user's pantry and the recipe catalog from the store
    /// named by SMARTMEAL_API_URL instead of reading local files
    #[arg(long)]
    pub user_id: Option<String>,
}

#[derive(Args, Debug)]
pub struct SuggestArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// How many suggestions to print
    #[arg(long, default_value_t = 3)]
    pub top: usize,

    /// Only keep recipes at or above this match percentage
    #[arg(long)]
    pub min_match: Option<f32>,

    /// Only keep recipes the pantry covers completely
    #[arg(long, default_value_t = false)]
    pub can_make_only: bool,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// How many suggestions the report carries
    #[arg(long, default_value_t = 5)]
    pub top: usize,

    /// Write the JSON report to this file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Text to look for
    pub query: String,
}

#[derive(Args, Debug)]
pub struct ShoppingArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Recipe to shop for
    #[arg(long)]
    pub recipe_id: String,

    /// Only list the ingredients the pantry does not cover
    #[arg(long, default_value_t = false)]
    pub missing_only: bool,

    /// Print the draft as JSON instead of text
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
