use serde::{Deserialize, Serialize};

use crate::recipe_matcher::{covering_pantry_entry, PantryEntry, Recipe};

/// Whether the shopper starts from zero or already has some at home.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ShoppingItemStatus {
    NeedToBuy,
    HaveSome,
}

/// One line of a draft shopping list for a recipe. `quantity` is what the
/// recipe calls for; `pantry_quantity` is what the matching pantry entry
/// says is already at home, when there is one.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ShoppingDraftItem {
    pub name: String,
    pub quantity: String,
    pub status: ShoppingItemStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pantry_quantity: Option<String>,
}

/// Turns a recipe's ingredient list into a draft shopping list against the
/// current pantry. Every ingredient appears once, in recipe order; the
/// pantry decides its status. The first pantry entry that matches an
/// ingredient supplies the at-home quantity.
pub fn draft_shopping_list(recipe: &Recipe, pantry: &[PantryEntry]) -> Vec<ShoppingDraftItem> {
    recipe
        .ingredients
        .iter()
        .map(
            |ingredient| match covering_pantry_entry(pantry, &ingredient.name) {
                Some(entry) => ShoppingDraftItem {
                    name: ingredient.name.clone(),
                    quantity: ingredient.quantity.clone(),
                    status: ShoppingItemStatus::HaveSome,
                    pantry_quantity: Some(entry.quantity.clone()),
                },
                None => ShoppingDraftItem {
                    name: ingredient.name.clone(),
                    quantity: ingredient.quantity.clone(),
                    status: ShoppingItemStatus::NeedToBuy,
                    pantry_quantity: None,
                },
            },
        )
        .collect()
}
