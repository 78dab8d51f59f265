use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::path::Path;

use crate::ingredient_parser::parse_ingredient_list;
use crate::recipe_matcher::{PantryEntry, Recipe};

// Expected column headers, matching the store's export format.
const PANTRY_NAME_COL: &str = "name";
const PANTRY_QUANTITY_COL: &str = "quantity";

const RECIPE_ID_COL: &str = "recipe_id";
const RECIPE_TITLE_COL: &str = "title";
const RECIPE_DESCRIPTION_COL: &str = "description";
const RECIPE_CUISINE_COL: &str = "cuisine";
const RECIPE_INGREDIENTS_COL: &str = "ingredients";

/// Loads a pantry snapshot from a CSV export. Rows with a blank name are
/// skipped since they can never match anything. A headers-only file loads
/// as an empty pantry, which is a legitimate state.
pub fn load_pantry_csv(csv_path: &Path) -> Result<Vec<PantryEntry>> {
    if !csv_path.exists() {
        return Err(anyhow::anyhow!("Pantry CSV file not found at: {:?}", csv_path));
    }

    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open pantry CSV file at {:?}", csv_path))?;
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = rdr.headers()?.clone();
    let name_idx = headers
        .iter()
        .position(|h| h == PANTRY_NAME_COL)
        .ok_or_else(|| anyhow::anyhow!("Column '{}' not found", PANTRY_NAME_COL))?;
    let quantity_idx = headers
        .iter()
        .position(|h| h == PANTRY_QUANTITY_COL)
        .ok_or_else(|| anyhow::anyhow!("Column '{}' not found", PANTRY_QUANTITY_COL))?;

    let mut entries = Vec::new();
    for (row_index, result) in rdr.records().enumerate() {
        let record = result
            .with_context(|| format!("Failed to read record at row index {}", row_index))?;

        let name = record
            .get(name_idx)
            .ok_or_else(|| anyhow::anyhow!("Missing name at row {}", row_index))?
            .trim()
            .to_string();
        if name.is_empty() {
            continue;
        }

        let quantity = record.get(quantity_idx).unwrap_or("").trim().to_string();
        entries.push(PantryEntry { name, quantity });
    }

    Ok(entries)
}

/// Loads a recipe catalog stored as a JSON array of recipes, the same
/// shape `recipes.php` returns inside its `data` field.
pub fn load_recipes_json(json_path: &Path) -> Result<Vec<Recipe>> {
    if !json_path.exists() {
        return Err(anyhow::anyhow!("Recipes JSON file not found at: {:?}", json_path));
    }

    let raw = std::fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read recipes JSON file at {:?}", json_path))?;
    let recipes: Vec<Recipe> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse recipes JSON at {:?}", json_path))?;
    Ok(recipes)
}

/// Loads a recipe catalog from a CSV export where the `ingredients`
/// column holds the stored JSON array text. A row whose ingredient text
/// is not valid JSON fails the whole load; there is no lenient rereading
/// of malformed rows.
pub fn load_recipes_csv(csv_path: &Path) -> Result<Vec<Recipe>> {
    if !csv_path.exists() {
        return Err(anyhow::anyhow!("Recipes CSV file not found at: {:?}", csv_path));
    }

    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open recipes CSV file at {:?}", csv_path))?;
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = rdr.headers()?.clone();
    let id_idx = headers
        .iter()
        .position(|h| h == RECIPE_ID_COL)
        .ok_or_else(|| anyhow::anyhow!("Column '{}' not found", RECIPE_ID_COL))?;
    let title_idx = headers
        .iter()
        .position(|h| h == RECIPE_TITLE_COL)
        .ok_or_else(|| anyhow::anyhow!("Column '{}' not found", RECIPE_TITLE_COL))?;
    let ingredients_idx = headers
        .iter()
        .position(|h| h == RECIPE_INGREDIENTS_COL)
        .ok_or_else(|| anyhow::anyhow!("Column '{}' not found", RECIPE_INGREDIENTS_COL))?;
    // Optional columns; older exports do not carry them.
    let description_idx = headers.iter().position(|h| h == RECIPE_DESCRIPTION_COL);
    let cuisine_idx = headers.iter().position(|h| h == RECIPE_CUISINE_COL);

    let mut recipes = Vec::new();
    for (row_index, result) in rdr.records().enumerate() {
        let record = result
            .with_context(|| format!("Failed to read record at row index {}", row_index))?;

        let id = record
            .get(id_idx)
            .ok_or_else(|| anyhow::anyhow!("Missing recipe_id at row {}", row_index))?
            .trim()
            .to_string();
        let title = record
            .get(title_idx)
            .ok_or_else(|| anyhow::anyhow!("Missing title at row {}", row_index))?
            .trim()
            .to_string();
        if id.is_empty() || title.is_empty() {
            continue;
        }

        let raw_ingredients = record
            .get(ingredients_idx)
            .ok_or_else(|| anyhow::anyhow!("Missing ingredients at row {}", row_index))?;
        let ingredients = parse_ingredient_list(raw_ingredients).with_context(|| {
            format!(
                "Invalid ingredient list for recipe '{}' at row index {}",
                title, row_index
            )
        })?;

        recipes.push(Recipe {
            id,
            title,
            description: description_idx.and_then(|idx| optional_text(record.get(idx))),
            cuisine: cuisine_idx.and_then(|idx| optional_text(record.get(idx))),
            ingredients,
        });
    }

    Ok(recipes)
}

fn optional_text(field: Option<&str>) -> Option<String> {
    field
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
