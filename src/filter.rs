//! Recipe filtering used by the page and the CLI listing
//!
//! The visible recipe list is a pure projection of three inputs: the catalog,
//! the search term and the selected category. A recipe is visible when its
//! name contains the search term (case-insensitive) and the category choice
//! admits its category. Catalog order is preserved.
//!
//! # Iterator Adapters
//!
//! [`RecipeFilterExt`] adds the same predicates to any iterator of `&Recipe`:
//!
//! ```
//! use ninja_nutrition::{Catalog, Category};
//! use ninja_nutrition::filter::RecipeFilterExt;
//!
//! let catalog = Catalog::sample();
//! let lunch: Vec<_> = catalog
//!     .iter()
//!     .in_category(Category::Lunch)
//!     .matching_search("пицца")
//!     .collect();
//! assert_eq!(lunch.len(), 1);
//! ```

use crate::catalog::Recipe;
use crate::category::Category;
use clap::ValueEnum;

/// Case-insensitive substring test against an already lowercased needle
fn name_contains(name: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || name.to_lowercase().contains(needle_lower)
}

/// Recipes visible for a search term and category, in catalog order
///
/// The search term is matched literally after lowercasing; it is not
/// trimmed. An empty term matches every name.
#[must_use]
pub fn derive_visible<'c>(
    recipes: &'c [Recipe],
    search_term: &str,
    category: Category,
) -> Vec<&'c Recipe> {
    recipes.iter().visible_for(search_term, category).collect()
}

/// Live filter inputs of the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text search over recipe names
    pub search_term: String,
    /// Selected category, `Category::All` when unrestricted
    pub category: Category,
}

impl FilterState {
    #[must_use]
    pub fn new(search_term: impl Into<String>, category: Category) -> Self {
        Self {
            search_term: search_term.into(),
            category,
        }
    }

    /// Whether a single recipe passes both predicates
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.category.admits(&recipe.category)
            && name_contains(&recipe.name, &self.search_term.to_lowercase())
    }

    /// Project a recipe slice through this filter
    #[must_use]
    pub fn apply<'c>(&self, recipes: &'c [Recipe]) -> Vec<&'c Recipe> {
        derive_visible(recipes, &self.search_term, self.category)
    }

    /// True when neither input restricts the catalog
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.search_term.is_empty() && self.category.is_all()
    }
}

/// Extension trait adding recipe predicates to iterators of `&Recipe`
pub trait RecipeFilterExt<'a>: Iterator<Item = &'a Recipe> + Sized {
    /// Keep recipes whose name contains `term`, ignoring case
    fn matching_search(self, term: &str) -> impl Iterator<Item = &'a Recipe> {
        let needle = term.to_lowercase();
        self.filter(move |recipe| name_contains(&recipe.name, &needle))
    }

    /// Keep recipes admitted by `category`
    fn in_category(self, category: Category) -> impl Iterator<Item = &'a Recipe> {
        self.filter(move |recipe| category.admits(&recipe.category))
    }

    /// Both predicates at once
    fn visible_for(self, term: &str, category: Category) -> impl Iterator<Item = &'a Recipe> {
        let needle = term.to_lowercase();
        self.filter(move |recipe| {
            category.admits(&recipe.category) && name_contains(&recipe.name, &needle)
        })
    }
}

impl<'a, I> RecipeFilterExt<'a> for I where I: Iterator<Item = &'a Recipe> {}

/// Ordering applied to a filtered list before display in the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Keep catalog order
    #[default]
    Catalog,
    /// Alphabetical by name, ignoring case
    Name,
}

impl SortOrder {
    /// Reorder a filtered list in place
    pub fn sort(self, recipes: &mut [&Recipe]) {
        match self {
            Self::Catalog => {}
            Self::Name => recipes.sort_by_cached_key(|r| (r.name.to_lowercase(), r.id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::testing::{ids, mixed_catalog, recipe};

    fn is_subsequence(result: &[&Recipe], catalog: &[Recipe]) -> bool {
        let mut remaining = catalog.iter();
        result
            .iter()
            .all(|wanted| remaining.any(|candidate| candidate.id == wanted.id))
    }

    #[test]
    fn test_identity_when_unrestricted() {
        let catalog = Catalog::sample();
        let visible = derive_visible(catalog.recipes(), "", Category::All);
        assert_eq!(ids(&visible), vec![1, 2, 3]);
    }

    #[test]
    fn test_search_scenario() {
        let catalog = Catalog::sample();
        let visible = derive_visible(catalog.recipes(), "ниндзя", Category::All);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Ниндзя салат");
    }

    #[test]
    fn test_category_scenario() {
        let catalog = Catalog::sample();
        let visible = derive_visible(catalog.recipes(), "", Category::Lunch);
        assert_eq!(ids(&visible), vec![2]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let catalog = Catalog::sample();
        assert!(derive_visible(catalog.recipes(), "xyz", Category::All).is_empty());
        assert!(derive_visible(catalog.recipes(), "", Category::Snack).is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        assert!(derive_visible(&[], "", Category::All).is_empty());
        assert!(derive_visible(&[], "смузи", Category::Breakfast).is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let catalog = mixed_catalog();
        for category in Category::ALL {
            let upper = derive_visible(catalog.recipes(), "СМУЗИ", category);
            let lower = derive_visible(catalog.recipes(), "смузи", category);
            assert_eq!(ids(&upper), ids(&lower));
        }
        let all = derive_visible(catalog.recipes(), "сМуЗи", Category::All);
        assert_eq!(ids(&all), vec![10, 12, 14]);
    }

    #[test]
    fn test_category_exclusivity() {
        let catalog = mixed_catalog();
        for category in Category::ALL.into_iter().filter(|c| !c.is_all()) {
            for recipe in derive_visible(catalog.recipes(), "", category) {
                assert_eq!(recipe.category, category.label());
            }
        }
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        // bypasses catalog validation on purpose
        let recipes = vec![recipe(1, "Суп", "обед"), recipe(2, "Борщ", "Обед")];
        let visible = derive_visible(&recipes, "", Category::Lunch);
        assert_eq!(ids(&visible), vec![2]);
    }

    #[test]
    fn test_subsequence_and_idempotent() {
        let catalog = mixed_catalog();
        let terms = ["", "с", "смузи", "ниндзя", " ", "zzz"];
        for term in terms {
            for category in Category::ALL {
                let first = derive_visible(catalog.recipes(), term, category);
                assert!(is_subsequence(&first, catalog.recipes()));

                let owned: Vec<Recipe> = first.iter().map(|r| (*r).clone()).collect();
                let second = derive_visible(&owned, term, category);
                assert_eq!(ids(&first), ids(&second));
                assert_eq!(
                    ids(&first),
                    ids(&derive_visible(catalog.recipes(), term, category))
                );
            }
        }
    }

    #[test]
    fn test_whitespace_matched_literally() {
        let recipes = vec![recipe(1, "Суп", "Обед"), recipe(2, "Рыба на пару", "Ужин")];
        assert_eq!(ids(&derive_visible(&recipes, " ", Category::All)), vec![2]);
        assert!(derive_visible(&recipes, " суп", Category::All).is_empty());
    }

    #[test]
    fn test_filter_state() {
        let catalog = Catalog::sample();
        let state = FilterState::default();
        assert!(state.is_unrestricted());
        assert_eq!(state.apply(catalog.recipes()).len(), 3);

        let state = FilterState::new("ПИЦЦА", Category::Lunch);
        assert!(!state.is_unrestricted());
        assert!(state.matches(&catalog.recipes()[1]));
        assert!(!state.matches(&catalog.recipes()[0]));
        assert_eq!(ids(&state.apply(catalog.recipes())), vec![2]);
    }

    #[test]
    fn test_iterator_adapters() {
        let catalog = mixed_catalog();
        let breakfast: Vec<&Recipe> = catalog
            .iter()
            .in_category(Category::Breakfast)
            .matching_search("протеин")
            .collect();
        assert_eq!(ids(&breakfast), vec![14]);

        let combined: Vec<&Recipe> = catalog.iter().visible_for("смузи", Category::Snack).collect();
        assert_eq!(ids(&combined), vec![12]);
    }

    #[test]
    fn test_sort_order() {
        let catalog = Catalog::sample();
        let mut visible = derive_visible(catalog.recipes(), "", Category::All);
        SortOrder::Catalog.sort(&mut visible);
        assert_eq!(ids(&visible), vec![1, 2, 3]);

        SortOrder::Name.sort(&mut visible);
        // Ниндзя < Супергеройский < Черепашка
        assert_eq!(ids(&visible), vec![3, 1, 2]);
    }
}
