pub mod data_loader;
pub mod search;

pub use data_loader::parse_ingredient_csv;
pub use search::{find_ingredient, search_catalog};
