use recipe_match::api_connection::{
    connection::{StoreApiError, StoreClient},
    endpoints::{PantryItemRecord, PantryListResponse, RecipeListResponse, RecipeRecord},
};
use recipe_match::recipe_matcher::{PantryEntry, Recipe};

use dotenv::dotenv;
use std::env;

const TEST_STORE_URL_ENV_VAR: &str = "SMARTMEAL_API_URL";

fn setup_test_environment() {
    dotenv().ok();
}

#[tokio::test]
async fn test_missing_base_url_error() {
    setup_test_environment();
    let result = StoreClient::from_env("THIS_URL_SHOULD_NOT_EXIST_IN_ENV_ABXYZ");
    assert!(matches!(result, Err(StoreApiError::MissingBaseUrl(_))));
    if let Err(StoreApiError::MissingBaseUrl(var_name)) = result {
        assert_eq!(var_name, "THIS_URL_SHOULD_NOT_EXIST_IN_ENV_ABXYZ");
    }
}

#[tokio::test]
async fn test_network_error_on_unreachable_store() {
    // Port 1 needs root to bind, so nothing answers there.
    let client = StoreClient::new("http://127.0.0.1:1");
    let result = client.get_pantry_items("1").await;
    assert!(
        matches!(result, Err(StoreApiError::NetworkError(_))),
        "Expected NetworkError, got {:?}",
        result.map(|p| p.len())
    );
}

#[test]
fn test_pantry_response_decodes_store_shape() {
    // Extra fields like expiry_date and grouped_by_category come back from
    // the store but are not part of the matching domain.
    let raw = r#"{
        "success": true,
        "user_id": "42",
        "total_items": 2,
        "data": [
            {"item_id": "p1", "name": "Eggs", "quantity": "6", "category": "Dairy", "expiry_date": 1735689600000},
            {"item_id": "p2", "name": "Flour", "quantity": "1 kg"}
        ],
        "grouped_by_category": {"Dairy": 1, "Other": 1}
    }"#;

    let payload: PantryListResponse = serde_json::from_str(raw).unwrap();
    assert!(payload.success);
    assert_eq!(payload.user_id.as_deref(), Some("42"));
    assert_eq!(payload.total_items, Some(2));
    assert_eq!(payload.data.len(), 2);
    assert_eq!(payload.data[0].name, "Eggs");
    assert_eq!(payload.data[0].category.as_deref(), Some("Dairy"));
    assert!(payload.data[1].category.is_none());
}

#[test]
fn test_recipe_response_decodes_store_shape() {
    let raw = r#"{
        "success": true,
        "count": 1,
        "data": [
            {
                "recipe_id": "r1",
                "title": "Pancakes",
                "description": "Fluffy breakfast stack",
                "cuisine": "French",
                "prep_time": 20,
                "image_url": "https://example.com/pancakes.jpg",
                "ingredients": [
                    {"name": "egg", "quantity": "2"},
                    {"name": "milk", "quantity": "1 cup"}
                ],
                "ingredient_count": 2
            }
        ]
    }"#;

    let payload: RecipeListResponse = serde_json::from_str(raw).unwrap();
    assert!(payload.success);
    assert_eq!(payload.count, Some(1));
    let record = &payload.data[0];
    assert_eq!(record.recipe_id, "r1");
    assert_eq!(record.ingredients.len(), 2);
    assert_eq!(record.ingredient_count, Some(2));
}

#[test]
fn test_error_envelope_decodes_without_data() {
    let raw = r#"{"success": false, "message": "Database connection failed"}"#;

    let pantry: PantryListResponse = serde_json::from_str(raw).unwrap();
    assert!(!pantry.success);
    assert_eq!(pantry.message.as_deref(), Some("Database connection failed"));
    assert!(pantry.data.is_empty());

    let recipes: RecipeListResponse = serde_json::from_str(raw).unwrap();
    assert!(!recipes.success);
    assert!(recipes.data.is_empty());
}

#[test]
fn test_records_convert_to_domain_types() {
    let record: PantryItemRecord = serde_json::from_str(
        r#"{"item_id": "p1", "name": "Eggs", "quantity": "6", "category": "Dairy"}"#,
    )
    .unwrap();
    let entry = PantryEntry::from(record);
    assert_eq!(entry.name, "Eggs");
    assert_eq!(entry.quantity, "6");

    let record: RecipeRecord = serde_json::from_str(
        r#"{"recipe_id": "r1", "title": "Pancakes", "ingredients": [{"name": "egg", "quantity": "2"}]}"#,
    )
    .unwrap();
    let recipe = Recipe::from(record);
    assert_eq!(recipe.id, "r1");
    assert_eq!(recipe.title, "Pancakes");
    assert!(recipe.description.is_none());
    assert_eq!(recipe.ingredients[0].name, "egg");
}

#[tokio::test]
#[ignore]
async fn test_live_pantry_fetch() {
    setup_test_environment();
    if env::var(TEST_STORE_URL_ENV_VAR).is_err() {
        println!("Skipping test_live_pantry_fetch: {} not set.", TEST_STORE_URL_ENV_VAR);
        return;
    }

    let client = StoreClient::from_env(TEST_STORE_URL_ENV_VAR).unwrap();
    let result = client.get_pantry_items("1").await;
    assert!(result.is_ok(), "Pantry fetch failed: {:?}", result.err());
    for entry in result.unwrap() {
        assert!(!entry.name.trim().is_empty());
    }
}

#[tokio::test]
#[ignore]
async fn test_live_recipe_fetch() {
    setup_test_environment();
    if env::var(TEST_STORE_URL_ENV_VAR).is_err() {
        println!("Skipping test_live_recipe_fetch: {} not set.", TEST_STORE_URL_ENV_VAR);
        return;
    }

    let client = StoreClient::from_env(TEST_STORE_URL_ENV_VAR).unwrap();
    let result = client.get_all_recipes().await;
    assert!(result.is_ok(), "Recipe fetch failed: {:?}", result.err());
    for recipe in result.unwrap() {
        assert!(!recipe.id.is_empty());
        assert!(!recipe.title.is_empty());
    }
}
