use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::recipe_matcher::{self, PantryEntry, Recipe, RecipeMatch};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MissingIngredient {
    pub name: String,
    pub quantity: String,
}

/// One ranked suggestion, flattened for transport: counts and the missing
/// list travel with the recipe id so the client needs no second lookup.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RecipeSuggestion {
    pub recipe_id: String,
    pub title: String,
    pub total_ingredients: usize,
    pub matched_ingredients: usize,
    pub missing_ingredients_count: usize,
    pub missing_ingredients: Vec<MissingIngredient>,
    pub match_percentage: f32,
    pub can_make_now: bool,
}

/// Envelope around a batch of suggestions, with enough context to display
/// a header ("5 suggestions from your 12 pantry items").
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SuggestionReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub pantry_items_count: usize,
    pub suggestions_count: usize,
    pub suggestions: Vec<RecipeSuggestion>,
}

/// Ranks `recipes` against `pantry` and packages the best `limit` of them
/// as a serializable report.
pub fn build_suggestion_report(
    pantry: &[PantryEntry],
    recipes: &[Recipe],
    user_id: Option<&str>,
    limit: usize,
) -> SuggestionReport {
    let matches = recipe_matcher::match_recipes(pantry, recipes);
    let suggestions: Vec<RecipeSuggestion> = recipe_matcher::top_matches(&matches, limit)
        .iter()
        .map(suggestion_from_match)
        .collect();

    SuggestionReport {
        user_id: user_id.map(str::to_string),
        pantry_items_count: pantry.len(),
        suggestions_count: suggestions.len(),
        suggestions,
    }
}

fn suggestion_from_match(m: &RecipeMatch<'_>) -> RecipeSuggestion {
    RecipeSuggestion {
        recipe_id: m.recipe.id.clone(),
        title: m.recipe.title.clone(),
        total_ingredients: m.total_ingredients(),
        matched_ingredients: m.matched_count(),
        missing_ingredients_count: m.missing_count(),
        missing_ingredients: missing_with_quantities(m),
        match_percentage: m.match_percentage,
        can_make_now: m.can_make_now,
    }
}

/// Joins the match's missing names back to the recipe's ingredient lines
/// so each missing entry carries its quantity.
fn missing_with_quantities(m: &RecipeMatch<'_>) -> Vec<MissingIngredient> {
    let missing: HashSet<&str> = m
        .missing_ingredients
        .iter()
        .map(String::as_str)
        .collect();
    m.recipe
        .ingredients
        .iter()
        .filter(|ingredient| missing.contains(ingredient.name.as_str()))
        .map(|ingredient| MissingIngredient {
            name: ingredient.name.clone(),
            quantity: ingredient.quantity.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient_parser::RecipeIngredient;

    fn recipe(id: &str, title: &str, ingredients: &[(&str, &str)]) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            cuisine: None,
            ingredients: ingredients
                .iter()
                .map(|(name, quantity)| RecipeIngredient {
                    name: name.to_string(),
                    quantity: quantity.to_string(),
                })
                .collect(),
        }
    }

    fn pantry(names: &[&str]) -> Vec<PantryEntry> {
        names
            .iter()
            .map(|name| PantryEntry {
                name: name.to_string(),
                quantity: "some".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_report_counts_and_ranking() {
        let pantry = pantry(&["egg", "milk"]);
        let recipes = vec![
            recipe("r1", "Pancakes", &[("egg", "2"), ("milk", "1 cup"), ("sugar", "2 tbsp")]),
            recipe("r2", "Scrambled Eggs", &[("egg", "3")]),
        ];

        let report = build_suggestion_report(&pantry, &recipes, Some("user-7"), 5);
        assert_eq!(report.user_id.as_deref(), Some("user-7"));
        assert_eq!(report.pantry_items_count, 2);
        assert_eq!(report.suggestions_count, 2);

        let first = &report.suggestions[0];
        assert_eq!(first.recipe_id, "r2");
        assert_eq!(first.match_percentage, 100.0);
        assert!(first.can_make_now);
        assert!(first.missing_ingredients.is_empty());

        let second = &report.suggestions[1];
        assert_eq!(second.recipe_id, "r1");
        assert_eq!(second.total_ingredients, 3);
        assert_eq!(second.matched_ingredients, 2);
        assert_eq!(second.missing_ingredients_count, 1);
        assert_eq!(second.missing_ingredients[0].name, "sugar");
        assert_eq!(second.missing_ingredients[0].quantity, "2 tbsp");
    }

    #[test]
    fn test_limit_caps_the_suggestion_list() {
        let pantry = pantry(&["egg"]);
        let recipes: Vec<Recipe> = (0..10)
            .map(|i| recipe(&format!("r{}", i), "Egg Dish", &[("egg", "1")]))
            .collect();

        let report = build_suggestion_report(&pantry, &recipes, None, 3);
        assert_eq!(report.suggestions_count, 3);
        assert_eq!(report.suggestions.len(), 3);
    }

    #[test]
    fn test_empty_pantry_report() {
        let recipes = vec![recipe("r1", "Toast", &[("bread", "2 slices")])];
        let report = build_suggestion_report(&[], &recipes, None, 5);

        assert_eq!(report.pantry_items_count, 0);
        let s = &report.suggestions[0];
        assert_eq!(s.match_percentage, 0.0);
        assert_eq!(s.missing_ingredients_count, 1);
        assert!(!s.can_make_now);
    }

    #[test]
    fn test_wire_field_names() {
        let pantry = pantry(&["egg"]);
        let recipes = vec![recipe("r1", "Omelette", &[("egg", "3"), ("chives", "a few")])];
        let report = build_suggestion_report(&pantry, &recipes, None, 1);

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("user_id").is_none());
        assert_eq!(json["pantry_items_count"], 1);
        assert_eq!(json["suggestions_count"], 1);

        let s = &json["suggestions"][0];
        assert_eq!(s["recipe_id"], "r1");
        assert_eq!(s["total_ingredients"], 2);
        assert_eq!(s["matched_ingredients"], 1);
        assert_eq!(s["missing_ingredients_count"], 1);
        assert_eq!(s["missing_ingredients"][0]["name"], "chives");
        assert_eq!(s["match_percentage"], 50.0);
        assert_eq!(s["can_make_now"], false);
    }
}
