use serde::{Deserialize, Serialize};
use crate::api_connection::SubmissionError;
use crate::models::IngredientRecord;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Name and calories are required";

/// Raw text of the "new ingredient" form, exactly as typed.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct NewIngredientForm {
    pub name: String,
    pub calories: String,
    pub proteins: String,
    pub fats: String,
    pub carbs: String,
}

fn coerce_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

impl NewIngredientForm {
    pub fn new(name: impl Into<String>, calories: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calories: calories.into(),
            ..Self::default()
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Checks that name and calories were filled in, then coerces every numeric field.
    ///
    /// Calories only has to be present: a non-numeric value still coerces to 0, as do the
    /// optional macros when blank or malformed.
    pub fn validate(&self) -> Result<IngredientRecord, SubmissionError> {
        let name = self.name.trim();
        if name.is_empty() || self.calories.trim().is_empty() {
            return Err(SubmissionError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        }

        Ok(IngredientRecord {
            name: name.to_string(),
            calories: coerce_number(&self.calories),
            proteins: coerce_number(&self.proteins),
            fats: coerce_number(&self.fats),
            carbs: coerce_number(&self.carbs),
        })
    }
}
