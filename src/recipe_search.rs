use crate::recipe_matcher::Recipe;

/// Case-insensitive free-text lookup over title, description, cuisine and
/// ingredient names. A blank query matches everything. Results keep store
/// order; search does not consult the pantry.
pub fn search_recipes<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return recipes.iter().collect();
    }
    recipes
        .iter()
        .filter(|recipe| recipe_matches_query(recipe, &query))
        .collect()
}

fn recipe_matches_query(recipe: &Recipe, query: &str) -> bool {
    if recipe.title.to_lowercase().contains(query) {
        return true;
    }
    if recipe
        .description
        .as_deref()
        .map_or(false, |text| text.to_lowercase().contains(query))
    {
        return true;
    }
    if recipe
        .cuisine
        .as_deref()
        .map_or(false, |text| text.to_lowercase().contains(query))
    {
        return true;
    }
    recipe
        .ingredients
        .iter()
        .any(|ingredient| ingredient.name.to_lowercase().contains(query))
}
