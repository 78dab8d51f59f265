use dotenv::dotenv;
use reqwest::Client;
use std::env;
use std::error::Error;
use std::fmt;

use super::endpoints::{PantryListResponse, RecipeListResponse};
use crate::recipe_matcher::{PantryEntry, Recipe};

#[derive(Debug)]
pub enum StoreApiError {
    MissingBaseUrl(String),
    NetworkError(reqwest::Error),
    ApiError {
        status: reqwest::StatusCode,
        error_body: String,
    },
    Rejected(String),
}

impl fmt::Display for StoreApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreApiError::MissingBaseUrl(var_name) => {
                write!(f, "Store base URL not found in environment: {}", var_name)
            }
            StoreApiError::NetworkError(err) => write!(f, "Network error: {}", err),
            StoreApiError::ApiError { status, error_body } => {
                write!(f, "Store API error {}: {}", status, error_body)
            }
            StoreApiError::Rejected(message) => {
                write!(f, "Store rejected the request: {}", message)
            }
        }
    }
}

impl Error for StoreApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StoreApiError::NetworkError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for StoreApiError {
    fn from(err: reqwest::Error) -> Self {
        StoreApiError::NetworkError(err)
    }
}

/// HTTP client for the pantry and recipe store endpoints.
pub struct StoreClient {
    client: Client,
    base_url: String,
}

impl StoreClient {
    /// Builds a client from the base URL held in the named environment
    /// variable. A `.env` file is honored if present.
    pub fn from_env(base_url_env_var_name: &str) -> Result<Self, StoreApiError> {
        dotenv().ok();
        let base_url = env::var(base_url_env_var_name)
            .map_err(|_| StoreApiError::MissingBaseUrl(base_url_env_var_name.to_string()))?;
        Ok(Self::new(base_url))
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetches the pantry snapshot for one user. The store scopes pantry
    /// rows per user, so the caller must always say whose pantry it wants.
    pub async fn get_pantry_items(&self, user_id: &str) -> Result<Vec<PantryEntry>, StoreApiError> {
        let url = format!("{}/pantry.php", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("user_id", user_id)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(StoreApiError::ApiError { status, error_body });
        }

        let payload = response.json::<PantryListResponse>().await?;
        if !payload.success {
            return Err(StoreApiError::Rejected(
                payload
                    .message
                    .unwrap_or_else(|| "pantry request failed".to_string()),
            ));
        }
        Ok(payload.data.into_iter().map(PantryEntry::from).collect())
    }

    /// Fetches the full recipe catalog. Recipes are shared across users.
    pub async fn get_all_recipes(&self) -> Result<Vec<Recipe>, StoreApiError> {
        let url = format!("{}/recipes.php", self.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(StoreApiError::ApiError { status, error_body });
        }

        let payload = response.json::<RecipeListResponse>().await?;
        if !payload.success {
            return Err(StoreApiError::Rejected(
                payload
                    .message
                    .unwrap_or_else(|| "recipe request failed".to_string()),
            ));
        }
        Ok(payload.data.into_iter().map(Recipe::from).collect())
    }
}
