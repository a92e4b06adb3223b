use serde::{Deserialize, Serialize};

/// A named food item with nutrition values per 100 g.
///
/// Field names double as the JSON keys the submission endpoint expects.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct IngredientRecord {
    pub name: String,
    pub calories: f64,
    pub proteins: f64,
    pub fats: f64,
    pub carbs: f64,
}

impl IngredientRecord {
    pub fn new(name: impl Into<String>, calories: f64, proteins: f64, fats: f64, carbs: f64) -> Self {
        Self {
            name: name.into(),
            calories,
            proteins,
            fats,
            carbs,
        }
    }
}

/// Gram quantity typed into a selection. `None` while the input field is empty.
pub type Grams = Option<f64>;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SelectedIngredient {
    pub ingredient: IngredientRecord,
    pub grams: Grams,
}

impl SelectedIngredient {
    /// Fresh selections start at 0 g, not unset.
    pub fn new(ingredient: IngredientRecord) -> Self {
        Self {
            ingredient,
            grams: Some(0.0),
        }
    }

    pub fn with_grams(ingredient: IngredientRecord, grams: Grams) -> Self {
        Self { ingredient, grams }
    }

    /// Grams with the unset sentinel treated as zero.
    pub fn effective_grams(&self) -> f64 {
        self.grams.unwrap_or(0.0)
    }
}
