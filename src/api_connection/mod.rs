pub mod connection;
pub mod endpoints;

pub use connection::{StoreApiError, StoreClient};
pub use endpoints::{PantryItemRecord, PantryListResponse, RecipeListResponse, RecipeRecord};
