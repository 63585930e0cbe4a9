//! Landing page view model
//!
//! [`LandingPage`] owns the three pieces of live state the page has (search
//! term, selected category, opened recipe) and borrows the catalog. Every
//! user interaction arrives as a [`PageEvent`] and is applied synchronously;
//! the visible list is recomputed from scratch whenever it is asked for.
//!
//! Rendering lives elsewhere (see [`crate::ui`]); this module is headless.

pub mod content;

use crate::catalog::{Catalog, Recipe};
use crate::category::Category;
use crate::filter::{FilterState, derive_visible};
use crate::selection::{DetailView, Surface};

/// A discrete user interaction with the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent<'a> {
    /// Search input changed to this text
    SearchChanged(String),
    /// A category chip was chosen
    CategorySelected(Category),
    /// "View recipe" on a catalog entry
    ViewRecipe(&'a Recipe),
    /// Close button of the detail view
    CloseDetail,
    /// Pointer interaction while the detail view may be open
    Click(Surface),
}

/// State of one landing page view
#[derive(Debug, Clone)]
pub struct LandingPage<'a> {
    catalog: &'a Catalog,
    filter: FilterState,
    detail: DetailView<'a>,
}

impl<'a> LandingPage<'a> {
    /// Fresh view: empty search, all categories, detail closed
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_filter(catalog, FilterState::default())
    }

    /// View with pre-seeded filter inputs
    #[must_use]
    pub fn with_filter(catalog: &'a Catalog, filter: FilterState) -> Self {
        Self {
            catalog,
            filter,
            detail: DetailView::Closed,
        }
    }

    /// Apply one interaction
    pub fn handle(&mut self, event: PageEvent<'a>) {
        match event {
            PageEvent::SearchChanged(term) => {
                tracing::trace!(term = %term, "search changed");
                self.filter.search_term = term;
            }
            PageEvent::CategorySelected(category) => {
                tracing::debug!(category = %category, "category selected");
                self.filter.category = category;
            }
            PageEvent::ViewRecipe(recipe) => self.detail.open(recipe),
            PageEvent::CloseDetail => self.detail.close(),
            PageEvent::Click(surface) => self.detail.click(surface),
        }
    }

    /// Apply a sequence of interactions in order
    pub fn handle_all(&mut self, events: impl IntoIterator<Item = PageEvent<'a>>) {
        for event in events {
            self.handle(event);
        }
    }

    /// Recipes currently shown in the grid
    #[must_use]
    pub fn visible(&self) -> Vec<&'a Recipe> {
        derive_visible(
            self.catalog.recipes(),
            &self.filter.search_term,
            self.filter.category,
        )
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.filter.search_term
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.filter.category
    }

    #[must_use]
    pub const fn detail(&self) -> DetailView<'a> {
        self.detail
    }

    /// Recipe shown in the detail view
    #[must_use]
    pub const fn selected(&self) -> Option<&'a Recipe> {
        self.detail.selected()
    }
}
