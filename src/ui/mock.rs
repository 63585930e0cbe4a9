//! Mock page browser for testing

use super::error::{Result, UiError};
use super::traits::PageBrowser;
use super::types::{BrowseConfig, BrowseResult};
use crate::catalog::Catalog;
use crate::category::Category;
use crate::page::{LandingPage, PageEvent};
use crate::selection::Surface;

/// One scripted user interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockAction {
    Search(String),
    Category(Category),
    /// Open the recipe with this id
    View(u32),
    Close,
    Click(Surface),
}

/// Page browser that replays a fixed script against the headless page
///
/// Useful for testing without requiring user interaction
#[derive(Debug, Clone, Default)]
pub struct MockBrowser {
    pub script: Vec<MockAction>,
}

impl MockBrowser {
    #[must_use]
    pub const fn new(script: Vec<MockAction>) -> Self {
        Self { script }
    }
}

impl PageBrowser for MockBrowser {
    fn run(&self, catalog: &Catalog, config: BrowseConfig) -> Result<BrowseResult> {
        let mut page = LandingPage::with_filter(catalog, config.filter);
        let mut last_viewed = None;

        for action in &self.script {
            let event = match action {
                MockAction::Search(term) => PageEvent::SearchChanged(term.clone()),
                MockAction::Category(category) => PageEvent::CategorySelected(*category),
                MockAction::View(id) => {
                    let recipe = catalog.find(*id).ok_or(UiError::UnknownRecipe(*id))?;
                    last_viewed = Some(recipe.id);
                    PageEvent::ViewRecipe(recipe)
                }
                MockAction::Close => PageEvent::CloseDetail,
                MockAction::Click(surface) => PageEvent::Click(*surface),
            };
            page.handle(event);
        }

        Ok(BrowseResult {
            filter: page.filter().clone(),
            last_viewed,
        })
    }
}
