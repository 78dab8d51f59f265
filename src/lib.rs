pub mod api_connection;
pub mod cli;
pub mod data_loader;
pub mod ingredient_parser;
pub mod recipe_matcher;
pub mod recipe_search;
pub mod shopping_list;
pub mod suggestion_builder;
