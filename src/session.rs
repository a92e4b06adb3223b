use crate::catalog::search::{find_ingredient, search_catalog};
use crate::models::{Grams, IngredientRecord, SelectedIngredient};
use crate::recipe_aggregator::{aggregate, DishTotals};

pub const DEFAULT_DISH_NAME: &str = "New dish";

/// Handed out when a catalog refresh starts; only a ticket from the current generation
/// may apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogTicket {
    generation: u64,
}

/// State of one recipe-editing session.
///
/// Totals are not cached: [`RecipeSession::totals`] recomputes them from the selection.
#[derive(Debug, Clone, Default)]
pub struct RecipeSession {
    recipe_name: String,
    catalog: Vec<IngredientRecord>,
    selected: Vec<SelectedIngredient>,
    generation: u64,
    disposed: bool,
}

impl RecipeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Vec<IngredientRecord>) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    pub fn set_recipe_name(&mut self, name: impl Into<String>) {
        self.recipe_name = name.into();
    }

    pub fn recipe_name(&self) -> &str {
        &self.recipe_name
    }

    /// Recipe name for display, or the placeholder while it is blank.
    pub fn display_name(&self) -> &str {
        let trimmed = self.recipe_name.trim();
        if trimmed.is_empty() {
            DEFAULT_DISH_NAME
        } else {
            trimmed
        }
    }

    pub fn catalog(&self) -> &[IngredientRecord] {
        &self.catalog
    }

    pub fn search(&self, term: &str) -> Vec<&IngredientRecord> {
        search_catalog(&self.catalog, term)
    }

    pub fn replace_catalog(&mut self, catalog: Vec<IngredientRecord>) {
        self.catalog = catalog;
    }

    pub fn begin_catalog_refresh(&self) -> CatalogTicket {
        CatalogTicket {
            generation: self.generation,
        }
    }

    /// Installs a fetched catalog unless the session was reset or disposed since the ticket
    /// was issued. Returns whether the catalog was applied.
    pub fn apply_catalog_refresh(&mut self, ticket: CatalogTicket, catalog: Vec<IngredientRecord>) -> bool {
        if self.disposed || ticket.generation != self.generation {
            return false;
        }
        self.catalog = catalog;
        true
    }

    pub fn selected(&self) -> &[SelectedIngredient] {
        &self.selected
    }

    /// Adds an ingredient at 0 g. The same ingredient may be selected more than once.
    pub fn select(&mut self, ingredient: IngredientRecord) -> usize {
        self.selected.push(SelectedIngredient::new(ingredient));
        self.selected.len() - 1
    }

    /// Selects the catalog entry matching `name`, returning its index in the selection.
    pub fn select_by_name(&mut self, name: &str) -> Option<usize> {
        let ingredient = find_ingredient(&self.catalog, name)?.clone();
        Some(self.select(ingredient))
    }

    /// Returns false if `index` is out of range.
    pub fn set_grams(&mut self, index: usize, grams: Grams) -> bool {
        match self.selected.get_mut(index) {
            Some(entry) => {
                entry.grams = grams;
                true
            }
            None => false,
        }
    }

    /// Applies raw text from a gram field: blank or non-numeric input leaves the entry unset.
    pub fn set_grams_input(&mut self, index: usize, raw: &str) -> bool {
        let grams = raw.trim().parse::<f64>().ok().filter(|g| g.is_finite());
        self.set_grams(index, grams)
    }

    pub fn remove(&mut self, index: usize) -> Option<SelectedIngredient> {
        if index < self.selected.len() {
            Some(self.selected.remove(index))
        } else {
            None
        }
    }

    /// Clears the recipe and invalidates any catalog refresh still in flight.
    pub fn reset(&mut self) {
        self.recipe_name.clear();
        self.selected.clear();
        self.generation += 1;
    }

    /// Marks the session as torn down; late refresh results are dropped.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.generation += 1;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn totals(&self) -> DishTotals {
        aggregate(&self.selected)
    }
}
