use crate::models::IngredientRecord;

/// Case-insensitive substring match on ingredient names, preserving catalog order.
/// The term is trimmed first, so surrounding spaces never narrow the results and a
/// whitespace-only term matches everything.
pub fn search_catalog<'a>(catalog: &'a [IngredientRecord], term: &str) -> Vec<&'a IngredientRecord> {
    let needle = term.trim().to_lowercase();
    catalog
        .iter()
        .filter(|ingredient| ingredient.name.to_lowercase().contains(&needle))
        .collect()
}

/// Resolves a typed name to one catalog entry: an exact case-insensitive match wins,
/// otherwise the first substring match.
pub fn find_ingredient<'a>(catalog: &'a [IngredientRecord], name: &str) -> Option<&'a IngredientRecord> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    catalog
        .iter()
        .find(|ingredient| ingredient.name.to_lowercase() == needle)
        .or_else(|| search_catalog(catalog, &needle).into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<IngredientRecord> {
        vec![
            IngredientRecord::new("Яблоко", 52.0, 0.3, 0.2, 14.0),
            IngredientRecord::new("Rye flour", 298.0, 9.0, 1.7, 61.5),
            IngredientRecord::new("Wheat flour", 364.0, 10.0, 1.0, 76.0),
            IngredientRecord::new("Flour", 350.0, 10.0, 1.0, 73.0),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = catalog();
        let hits = search_catalog(&catalog, "FLOUR");
        let names: Vec<&str> = hits.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Rye flour", "Wheat flour", "Flour"]);

        // Cyrillic lowercasing works too
        assert_eq!(search_catalog(&catalog, "ЯБЛ").len(), 1);
    }

    #[test]
    fn test_empty_term_matches_all() {
        let catalog = catalog();
        assert_eq!(search_catalog(&catalog, "").len(), catalog.len());
        assert_eq!(search_catalog(&catalog, "   ").len(), catalog.len());
        assert_eq!(search_catalog(&catalog, "  rye ").len(), 1);
    }

    #[test]
    fn test_find_prefers_exact_match() {
        let catalog = catalog();
        assert_eq!(find_ingredient(&catalog, "flour").unwrap().name, "Flour");
        assert_eq!(find_ingredient(&catalog, "rye").unwrap().name, "Rye flour");
        assert!(find_ingredient(&catalog, "butter").is_none());
        assert!(find_ingredient(&catalog, "").is_none());
    }
}
