//! Core traits for UI abstraction layer

use super::error::Result;
use super::types::{BrowseConfig, BrowseResult};
use crate::catalog::Catalog;

/// Interactive front end for the landing page
///
/// Implemented by the terminal UI and by [`MockBrowser`](super::mock::MockBrowser)
/// for tests.
pub trait PageBrowser {
    /// Show the page for `catalog` until the user leaves
    ///
    /// # Errors
    ///
    /// Returns an error if the front end fails to draw or read input.
    fn run(&self, catalog: &Catalog, config: BrowseConfig) -> Result<BrowseResult>;
}
