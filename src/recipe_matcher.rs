use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::ingredient_parser::RecipeIngredient;

/// One item the user currently has on hand. Quantity is free text and
/// plays no part in matching.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PantryEntry {
    pub name: String,
    #[serde(default)]
    pub quantity: String,
}

/// A recipe as read from the recipe store. The matcher never mutates it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

/// Outcome of matching one recipe against one pantry snapshot.
///
/// `available_ingredients` and `missing_ingredients` partition the
/// recipe's ingredient names and both keep the recipe's declared order.
#[derive(Debug, Clone)]
pub struct RecipeMatch<'a> {
    pub recipe: &'a Recipe,
    pub match_percentage: f32,
    pub available_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
    pub can_make_now: bool,
}

impl<'a> RecipeMatch<'a> {
    pub fn matched_count(&self) -> usize {
        self.available_ingredients.len()
    }

    pub fn missing_count(&self) -> usize {
        self.missing_ingredients.len()
    }

    pub fn total_ingredients(&self) -> usize {
        self.available_ingredients.len() + self.missing_ingredients.len()
    }
}

/// Scores every recipe against the pantry and returns the results ranked
/// best-first.
///
/// An ingredient counts as available when some pantry item name matches it
/// (case-insensitive substring either way, or a shared significant
/// keyword). The percentage is `100 * available / total` over the recipe's
/// full ingredient list.
///
/// Recipes with no ingredients at all are left out of the result; they
/// describe nothing cookable and would otherwise divide by zero.
///
/// Ordering: descending match percentage, then ascending total ingredient
/// count, preserving store order for full ties.
pub fn match_recipes<'a>(pantry: &[PantryEntry], recipes: &'a [Recipe]) -> Vec<RecipeMatch<'a>> {
    let pantry_names: HashSet<String> = pantry
        .iter()
        .map(|entry| normalize(&entry.name))
        .filter(|name| !name.is_empty())
        .collect();

    let mut matches: Vec<RecipeMatch<'a>> = if pantry_names.is_empty() {
        // Nothing usable on hand: every recipe scores zero with its whole
        // ingredient list missing. No predicate work needed.
        recipes
            .iter()
            .filter(|recipe| !recipe.ingredients.is_empty())
            .map(|recipe| RecipeMatch {
                recipe,
                match_percentage: 0.0,
                available_ingredients: Vec::new(),
                missing_ingredients: recipe
                    .ingredients
                    .iter()
                    .map(|ingredient| ingredient.name.clone())
                    .collect(),
                can_make_now: false,
            })
            .collect()
    } else {
        recipes
            .iter()
            .filter(|recipe| !recipe.ingredients.is_empty())
            .map(|recipe| match_one(&pantry_names, recipe))
            .collect()
    };

    sort_matches(&mut matches);
    matches
}

/// The first `count` entries of an already ranked match list.
pub fn top_matches<'a>(matches: &[RecipeMatch<'a>], count: usize) -> Vec<RecipeMatch<'a>> {
    matches.iter().take(count).cloned().collect()
}

/// Matches at or above `threshold_percent`, keeping their rank order.
pub fn high_match_recipes<'a>(
    matches: &[RecipeMatch<'a>],
    threshold_percent: f32,
) -> Vec<RecipeMatch<'a>> {
    matches
        .iter()
        .filter(|m| m.match_percentage >= threshold_percent)
        .cloned()
        .collect()
}

/// Matches the pantry covers completely, keeping their rank order.
pub fn makeable_recipes<'a>(matches: &[RecipeMatch<'a>]) -> Vec<RecipeMatch<'a>> {
    matches.iter().filter(|m| m.can_make_now).cloned().collect()
}

/// The recipe's ingredients the pantry does not cover, in recipe order and
/// with their quantities. Seed data for a shopping list.
pub fn missing_ingredients_for_recipe(
    recipe: &Recipe,
    pantry: &[PantryEntry],
) -> Vec<RecipeIngredient> {
    recipe
        .ingredients
        .iter()
        .filter(|ingredient| covering_pantry_entry(pantry, &ingredient.name).is_none())
        .cloned()
        .collect()
}

/// First pantry entry whose name matches the ingredient, in pantry order.
/// Exposes the one matching rule to callers that need the entry itself
/// (e.g. to report how much of the ingredient is already at home).
pub fn covering_pantry_entry<'p>(
    pantry: &'p [PantryEntry],
    ingredient_name: &str,
) -> Option<&'p PantryEntry> {
    let ingredient_name = normalize(ingredient_name);
    pantry
        .iter()
        .find(|entry| names_match(&normalize(&entry.name), &ingredient_name))
}

fn match_one<'a>(pantry_names: &HashSet<String>, recipe: &'a Recipe) -> RecipeMatch<'a> {
    let mut available = Vec::new();
    let mut missing = Vec::new();

    for ingredient in &recipe.ingredients {
        let ingredient_name = normalize(&ingredient.name);
        let is_available = pantry_names
            .iter()
            .any(|pantry_name| names_match(pantry_name, &ingredient_name));
        if is_available {
            available.push(ingredient.name.clone());
        } else {
            missing.push(ingredient.name.clone());
        }
    }

    let total = recipe.ingredients.len();
    let match_percentage = (available.len() as f32 / total as f32) * 100.0;
    let can_make_now = missing.is_empty();

    RecipeMatch {
        recipe,
        match_percentage,
        available_ingredients: available,
        missing_ingredients: missing,
        can_make_now,
    }
}

fn sort_matches(matches: &mut [RecipeMatch<'_>]) {
    // Stable sort keeps store order for recipes that tie on both keys.
    matches.sort_by(|a, b| {
        b.match_percentage
            .total_cmp(&a.match_percentage)
            .then(a.total_ingredients().cmp(&b.total_ingredients()))
    });
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Whether a pantry item name and an ingredient name refer to the same
/// thing. Both inputs must already be normalized. A name that is empty
/// after trimming matches nothing.
///
/// The rule is intentionally loose: full-name substring containment in
/// either direction ("chicken" covers "chicken breast" and vice versa),
/// or any shared significant keyword ("tomato paste" covers
/// "crushed tomatoes" through "tomato"/"tomatoes" containment).
fn names_match(pantry_name: &str, ingredient_name: &str) -> bool {
    if pantry_name.is_empty() || ingredient_name.is_empty() {
        return false;
    }
    pantry_name.contains(ingredient_name)
        || ingredient_name.contains(pantry_name)
        || has_common_keyword(pantry_name, ingredient_name)
}

/// Tokens longer than three characters, split on spaces, hyphens and
/// underscores. Short filler words ("de", "oil", "red") never count as
/// evidence on their own.
fn significant_keywords(name: &str) -> Vec<&str> {
    name.split(|c: char| c == ' ' || c == '-' || c == '_')
        .filter(|token| token.chars().count() > 3)
        .collect()
}

fn has_common_keyword(a: &str, b: &str) -> bool {
    let keywords_a = significant_keywords(a);
    let keywords_b = significant_keywords(b);
    keywords_a.iter().copied().any(|ka| {
        keywords_b
            .iter()
            .copied()
            .any(|kb| ka.contains(kb) || kb.contains(ka))
    })
}
