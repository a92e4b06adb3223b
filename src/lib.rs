pub mod api_connection;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod models;
pub mod new_ingredient;
pub mod recipe_aggregator;
pub mod report;
pub mod session;
