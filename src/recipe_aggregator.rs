use serde::{Deserialize, Serialize};
use crate::models::SelectedIngredient;

/// Dish-level totals. Always derived from the current selection, never stored on its own.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct DishTotals {
    pub total_grams: f64,
    pub calories: f64,
    pub proteins: f64,
    pub fats: f64,
    pub carbs: f64,
}

// Same four macros, normalized to 100 g of the finished dish
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct Per100g {
    pub calories: f64,
    pub proteins: f64,
    pub fats: f64,
    pub carbs: f64,
}

impl DishTotals {
    /// Returns `None` when the dish has no mass to normalize against.
    pub fn per_100g(&self) -> Option<Per100g> {
        if self.total_grams <= 0.0 {
            return None;
        }
        let scale_factor = 100.0 / self.total_grams;
        Some(Per100g {
            calories: self.calories * scale_factor,
            proteins: self.proteins * scale_factor,
            fats: self.fats * scale_factor,
            carbs: self.carbs * scale_factor,
        })
    }
}

/// Folds the selection into dish totals.
///
/// Unset grams count as zero. Negative grams are accepted as-is and no rounding is applied;
/// both belong to the caller.
pub fn aggregate(selection: &[SelectedIngredient]) -> DishTotals {
    selection.iter().fold(DishTotals::default(), |acc, selected| {
        let grams = selected.effective_grams();
        let multiplier = grams / 100.0;
        let ingredient = &selected.ingredient;
        DishTotals {
            total_grams: acc.total_grams + grams,
            calories: acc.calories + ingredient.calories * multiplier,
            proteins: acc.proteins + ingredient.proteins * multiplier,
            fats: acc.fats + ingredient.fats * multiplier,
            carbs: acc.carbs + ingredient.carbs * multiplier,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IngredientRecord;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    const TOLERANCE: f64 = 1e-9;

    fn selected(name: &str, calories: f64, proteins: f64, fats: f64, carbs: f64, grams: Option<f64>) -> SelectedIngredient {
        SelectedIngredient::with_grams(IngredientRecord::new(name, calories, proteins, fats, carbs), grams)
    }

    fn assert_close(a: &DishTotals, b: &DishTotals) {
        assert!((a.total_grams - b.total_grams).abs() < TOLERANCE, "{:?} vs {:?}", a, b);
        assert!((a.calories - b.calories).abs() < TOLERANCE, "{:?} vs {:?}", a, b);
        assert!((a.proteins - b.proteins).abs() < TOLERANCE, "{:?} vs {:?}", a, b);
        assert!((a.fats - b.fats).abs() < TOLERANCE, "{:?} vs {:?}", a, b);
        assert!((a.carbs - b.carbs).abs() < TOLERANCE, "{:?} vs {:?}", a, b);
    }

    #[test]
    fn test_empty_selection_is_all_zero() {
        let totals = aggregate(&[]);
        assert_eq!(totals, DishTotals::default());
        assert_eq!(totals.total_grams, 0.0);
        assert_eq!(totals.calories, 0.0);
        assert!(totals.per_100g().is_none());
    }

    #[test]
    fn test_half_portion_scales_calories() {
        let totals = aggregate(&[selected("Sugar", 200.0, 0.0, 0.0, 100.0, Some(50.0))]);
        assert_eq!(totals.calories, 100.0);
        assert_eq!(totals.carbs, 50.0);
        assert_eq!(totals.total_grams, 50.0);
    }

    #[test]
    fn test_unset_grams_count_as_zero() {
        let selection = vec![
            selected("Apple", 52.0, 0.3, 0.2, 14.0, None),
            selected("Banana", 89.0, 1.1, 0.3, 22.8, Some(200.0)),
        ];
        let totals = aggregate(&selection);
        assert_eq!(totals.total_grams, 200.0);
        assert!((totals.calories - 178.0).abs() < TOLERANCE);
        assert!((totals.proteins - 2.2).abs() < TOLERANCE);
    }

    #[test]
    fn test_total_grams_is_sum_of_entries() {
        let selection = vec![
            selected("A", 10.0, 1.0, 1.0, 1.0, Some(12.5)),
            selected("B", 20.0, 2.0, 2.0, 2.0, Some(87.5)),
            selected("C", 30.0, 3.0, 3.0, 3.0, None),
            selected("A", 10.0, 1.0, 1.0, 1.0, Some(100.0)),
        ];
        let expected: f64 = selection.iter().map(|s| s.grams.unwrap_or(0.0)).sum();
        assert_eq!(aggregate(&selection).total_grams, expected);
    }

    #[test]
    fn test_negative_grams_pass_through() {
        let totals = aggregate(&[selected("Odd", 100.0, 0.0, 0.0, 0.0, Some(-50.0))]);
        assert_eq!(totals.total_grams, -50.0);
        assert_eq!(totals.calories, -50.0);
        assert!(totals.per_100g().is_none());
    }

    #[test]
    fn test_order_does_not_change_totals() {
        let mut selection = vec![
            selected("Rye flour", 298.0, 9.0, 1.7, 61.5, Some(500.0)),
            selected("Water", 0.0, 0.0, 0.0, 0.0, Some(350.0)),
            selected("Salt", 0.0, 0.0, 0.0, 0.0, Some(10.0)),
            selected("Butter", 717.0, 0.85, 81.1, 0.06, Some(33.3)),
            selected("Honey", 304.0, 0.3, 0.0, 82.4, None),
            selected("Seeds", 584.0, 20.8, 51.5, 20.0, Some(42.0)),
        ];
        let baseline = aggregate(&selection);

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            selection.shuffle(&mut rng);
            assert_close(&aggregate(&selection), &baseline);
        }
    }

    #[test]
    fn test_per_100g_normalizes_by_dish_mass() {
        let selection = vec![
            selected("Oats", 380.0, 13.0, 7.0, 60.0, Some(50.0)),
            selected("Milk", 60.0, 3.0, 3.0, 5.0, Some(150.0)),
        ];
        let totals = aggregate(&selection);
        let per_100g = totals.per_100g().unwrap();
        // (190 + 90) kcal over 200 g
        assert!((per_100g.calories - 140.0).abs() < TOLERANCE);
        assert!((per_100g.proteins - 5.5).abs() < TOLERANCE);
    }
}
