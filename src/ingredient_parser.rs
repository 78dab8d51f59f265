use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// One ingredient line of a recipe: a free-text name plus a free-text
/// quantity ("2 cups", "a pinch", ""). The list order is display order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RecipeIngredient {
    pub name: String,
    #[serde(default)]
    pub quantity: String,
}

#[derive(Debug)]
pub enum IngredientParseError {
    InvalidJson(serde_json::Error),
    BlankName { index: usize },
}

impl fmt::Display for IngredientParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngredientParseError::InvalidJson(err) => {
                write!(f, "Ingredient list is not a valid JSON array: {}", err)
            }
            IngredientParseError::BlankName { index } => {
                write!(f, "Ingredient at index {} has a blank name", index)
            }
        }
    }
}

impl Error for IngredientParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            IngredientParseError::InvalidJson(err) => Some(err),
            IngredientParseError::BlankName { .. } => None,
        }
    }
}

impl From<serde_json::Error> for IngredientParseError {
    fn from(err: serde_json::Error) -> Self {
        IngredientParseError::InvalidJson(err)
    }
}

/// Parses the stored ingredient-list text, e.g.
/// `[{"name": "egg", "quantity": "2"}, ...]`.
///
/// The input must be a JSON array of ingredient objects; anything else is
/// an error for the caller to report. There is deliberately no fallback
/// that reinterprets malformed text as a comma-separated flat list.
/// Unknown per-ingredient fields (unit, availability flags from older
/// exports) are ignored; a missing quantity becomes the empty string.
pub fn parse_ingredient_list(raw: &str) -> Result<Vec<RecipeIngredient>, IngredientParseError> {
    let ingredients: Vec<RecipeIngredient> = serde_json::from_str(raw)?;
    for (index, ingredient) in ingredients.iter().enumerate() {
        if ingredient.name.trim().is_empty() {
            return Err(IngredientParseError::BlankName { index });
        }
    }
    Ok(ingredients)
}
