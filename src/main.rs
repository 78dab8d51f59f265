use anyhow::{Context, Result};

use recipe_match::api_connection::StoreClient;
use recipe_match::cli::{
    parse_args, Command, ReportArgs, SearchArgs, ShoppingArgs, SourceArgs, SuggestArgs,
};
use recipe_match::data_loader::{load_pantry_csv, load_recipes_csv, load_recipes_json};
use recipe_match::recipe_matcher::{self, PantryEntry, Recipe};
use recipe_match::recipe_search::search_recipes;
use recipe_match::shopping_list::{draft_shopping_list, ShoppingItemStatus};
use recipe_match::suggestion_builder::build_suggestion_report;

// Environment variable naming the store's base URL, e.g.
// SMARTMEAL_API_URL=https://example.com/api
const STORE_URL_ENV_VAR: &str = "SMARTMEAL_API_URL";

// Conventional cutoff for flagging a suggestion as a high match.
const HIGH_MATCH_THRESHOLD: f32 = 80.0;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli_args = parse_args();
    match cli_args.command {
        Command::Suggest(args) => run_suggest(args).await,
        Command::Report(args) => run_report(args).await,
        Command::Search(args) => run_search(args).await,
        Command::Shopping(args) => run_shopping(args).await,
    }
}

async fn run_suggest(args: SuggestArgs) -> Result<()> {
    let (pantry, recipes) = load_inputs(&args.source).await?;

    let matches = recipe_matcher::match_recipes(&pantry, &recipes);
    let matches = match args.min_match {
        Some(threshold) => recipe_matcher::high_match_recipes(&matches, threshold),
        None => matches,
    };
    let matches = if args.can_make_only {
        recipe_matcher::makeable_recipes(&matches)
    } else {
        matches
    };
    let top = recipe_matcher::top_matches(&matches, args.top);

    if top.is_empty() {
        println!("No recipes to suggest.");
        return Ok(());
    }

    println!("\nTop {} suggestion(s):", top.len());
    for (rank, m) in top.iter().enumerate() {
        let badge = if m.can_make_now {
            " [can make now]"
        } else if m.match_percentage >= HIGH_MATCH_THRESHOLD {
            " [high match]"
        } else {
            ""
        };
        println!(
            "{}. {} - {:.0}% match{}",
            rank + 1,
            m.recipe.title,
            m.match_percentage,
            badge
        );
        println!("   Have: {}", join_or_dash(&m.available_ingredients));
        println!("   Need: {}", join_or_dash(&m.missing_ingredients));
    }
    Ok(())
}

async fn run_report(args: ReportArgs) -> Result<()> {
    let (pantry, recipes) = load_inputs(&args.source).await?;

    let report =
        build_suggestion_report(&pantry, &recipes, args.source.user_id.as_deref(), args.top);
    let payload = serde_json::to_string_pretty(&report)
        .context("Failed to serialize the suggestion report")?;

    match &args.out {
        Some(path) => {
            tokio::fs::write(path, &payload)
                .await
                .with_context(|| format!("Failed to write suggestion report to {:?}", path))?;
            println!(
                "Wrote {} suggestion(s) to {:?}.",
                report.suggestions_count, path
            );
        }
        None => println!("{}", payload),
    }
    Ok(())
}

async fn run_search(args: SearchArgs) -> Result<()> {
    let recipes = load_recipes_only(&args.source).await?;

    let hits = search_recipes(&recipes, &args.query);
    println!("Found {} recipe(s) matching '{}'.", hits.len(), args.query);
    for recipe in hits {
        let cuisine = recipe.cuisine.as_deref().unwrap_or("unknown cuisine");
        println!(
            "- {} ({}, {} ingredients)",
            recipe.title,
            cuisine,
            recipe.ingredients.len()
        );
    }
    Ok(())
}

async fn run_shopping(args: ShoppingArgs) -> Result<()> {
    let (pantry, recipes) = load_inputs(&args.source).await?;

    let recipe = recipes
        .iter()
        .find(|r| r.id == args.recipe_id)
        .with_context(|| format!("No recipe with id '{}' in the loaded catalog", args.recipe_id))?;

    if args.missing_only {
        let missing = recipe_matcher::missing_ingredients_for_recipe(recipe, &pantry);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&missing)?);
            return Ok(());
        }
        println!("Missing for '{}':", recipe.title);
        if missing.is_empty() {
            println!("  nothing, the pantry covers the whole recipe");
        }
        for ingredient in &missing {
            println!("  - {} ({})", ingredient.name, ingredient.quantity);
        }
        return Ok(());
    }

    let draft = draft_shopping_list(recipe, &pantry);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&draft)?);
        return Ok(());
    }
    println!("Shopping draft for '{}':", recipe.title);
    for item in &draft {
        match item.status {
            ShoppingItemStatus::NeedToBuy => {
                println!("  [buy]  {} ({})", item.name, item.quantity);
            }
            ShoppingItemStatus::HaveSome => {
                println!(
                    "  [have] {} ({}), pantry has {}",
                    item.name,
                    item.quantity,
                    item.pantry_quantity.as_deref().unwrap_or("an unknown amount")
                );
            }
        }
    }
    Ok(())
}

/// Resolves both inputs from one source selection. A user id switches to
/// the remote store; otherwise both come from local export files.
async fn load_inputs(source: &SourceArgs) -> Result<(Vec<PantryEntry>, Vec<Recipe>)> {
    if let Some(user_id) = &source.user_id {
        println!("Fetching pantry and recipes from the store for user {}...", user_id);
        let client = StoreClient::from_env(STORE_URL_ENV_VAR)
            .with_context(|| format!("Set {} to the store's base URL", STORE_URL_ENV_VAR))?;
        let pantry = client
            .get_pantry_items(user_id)
            .await
            .context("Failed to fetch pantry items")?;
        let recipes = client
            .get_all_recipes()
            .await
            .context("Failed to fetch recipes")?;
        println!("Fetched {} pantry item(s) and {} recipe(s).", pantry.len(), recipes.len());
        return Ok((pantry, recipes));
    }

    let pantry_path = source
        .pantry_csv
        .as_ref()
        .context("Provide --pantry-csv, or --user-id to use the remote store")?;
    let pantry = load_pantry_csv(pantry_path)?;
    let recipes = load_local_recipes(source)?;
    println!("Loaded {} pantry item(s) and {} recipe(s).", pantry.len(), recipes.len());
    Ok((pantry, recipes))
}

/// Recipes only; search has no use for the pantry.
async fn load_recipes_only(source: &SourceArgs) -> Result<Vec<Recipe>> {
    if source.user_id.is_some() {
        let client = StoreClient::from_env(STORE_URL_ENV_VAR)
            .with_context(|| format!("Set {} to the store's base URL", STORE_URL_ENV_VAR))?;
        let recipes = client
            .get_all_recipes()
            .await
            .context("Failed to fetch recipes")?;
        println!("Fetched {} recipe(s) from the store.", recipes.len());
        return Ok(recipes);
    }
    load_local_recipes(source)
}

fn load_local_recipes(source: &SourceArgs) -> Result<Vec<Recipe>> {
    match (&source.recipes_json, &source.recipes_csv) {
        (Some(path), None) => load_recipes_json(path),
        (None, Some(path)) => load_recipes_csv(path),
        (Some(_), Some(_)) => {
            anyhow::bail!("Use either --recipes-json or --recipes-csv, not both")
        }
        (None, None) => {
            anyhow::bail!("Provide --recipes-json or --recipes-csv, or --user-id to use the remote store")
        }
    }
}

fn join_or_dash(names: &[String]) -> String {
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}
