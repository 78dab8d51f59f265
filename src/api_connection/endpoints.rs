use serde::{Deserialize, Serialize};

use crate::ingredient_parser::RecipeIngredient;
use crate::recipe_matcher::{PantryEntry, Recipe};

/// Row shape of `pantry.php?user_id=...` responses. Only the fields the
/// matcher cares about are kept; extra columns are ignored on decode.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PantryItemRecord {
    #[serde(default)]
    pub item_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PantryListResponse {
    pub success: bool,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub total_items: Option<usize>,
    #[serde(default)]
    pub data: Vec<PantryItemRecord>,
}

/// Row shape of `recipes.php` responses. The ingredient list arrives
/// already expanded as a JSON array, not as the raw stored text.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RecipeRecord {
    pub recipe_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub ingredient_count: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecipeListResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub data: Vec<RecipeRecord>,
}

impl From<PantryItemRecord> for PantryEntry {
    fn from(record: PantryItemRecord) -> Self {
        PantryEntry {
            name: record.name,
            quantity: record.quantity,
        }
    }
}

impl From<RecipeRecord> for Recipe {
    fn from(record: RecipeRecord) -> Self {
        Recipe {
            id: record.recipe_id,
            title: record.title,
            description: record.description,
            cuisine: record.cuisine,
            ingredients: record.ingredients,
        }
    }
}
