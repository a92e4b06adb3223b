use std::fmt::Write;

use crate::models::{IngredientRecord, SelectedIngredient};
use crate::recipe_aggregator::DishTotals;

/// Catalog listing, one ingredient per line with its per-100 g values.
pub fn render_catalog(ingredients: &[&IngredientRecord]) -> String {
    if ingredients.is_empty() {
        return "No ingredients found.\n".to_string();
    }

    let width = ingredients.iter().map(|i| i.name.chars().count()).max().unwrap_or(10);
    let mut out = String::new();
    for ingredient in ingredients {
        let pad = width - ingredient.name.chars().count();
        let _ = writeln!(
            out,
            "{}{}  {:>6.1} kcal | P {:>5.1} g | F {:>5.1} g | C {:>5.1} g  (per 100 g)",
            ingredient.name,
            " ".repeat(pad),
            ingredient.calories,
            ingredient.proteins,
            ingredient.fats,
            ingredient.carbs,
        );
    }
    out
}

/// Dish summary. Values are rounded to one decimal place here and nowhere else.
pub fn render_dish(dish_name: &str, selected: &[SelectedIngredient], totals: &DishTotals) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}:", dish_name);

    for entry in selected {
        match entry.grams {
            Some(grams) => {
                let _ = writeln!(out, "  - {} ({:.1} g)", entry.ingredient.name, grams);
            }
            None => {
                let _ = writeln!(out, "  - {} (unset)", entry.ingredient.name);
            }
        }
    }

    let _ = writeln!(out, "Total weight: {:.1} g", totals.total_grams);
    let _ = writeln!(out, "Calories: {:.1} kcal", totals.calories);
    let _ = writeln!(out, "Proteins: {:.1} g", totals.proteins);
    let _ = writeln!(out, "Fats: {:.1} g", totals.fats);
    let _ = writeln!(out, "Carbs: {:.1} g", totals.carbs);

    if let Some(per_100g) = totals.per_100g() {
        let _ = writeln!(
            out,
            "Per 100 g: {:.1} kcal | P {:.1} g | F {:.1} g | C {:.1} g",
            per_100g.calories, per_100g.proteins, per_100g.fats, per_100g.carbs
        );
    }
    out
}
