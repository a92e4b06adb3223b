pub mod connection;
pub mod endpoints;

pub use connection::{IngredientSource, SubmissionError, UnavailableError};
