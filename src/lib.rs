//! Ninja Nutrition - landing page and recipe catalog for the terminal
//!
//! The library is split into a headless core and the adapters around it:
//!
//! - [`catalog`], [`category`], [`filter`], [`selection`] and [`page`] hold the
//!   behaviour: a read-only recipe catalog, a pure filter over it and the
//!   detail-view state machine, combined by the [`page::LandingPage`] view model.
//! - [`ui`] draws the page with ratatui and maps terminal input to page events.
//! - [`cli`], [`config`], [`output`], [`logging`] and [`completions`] make up
//!   the command-line surface.

use thiserror::Error;

pub mod catalog;
pub mod category;
pub mod cli;
pub mod completions;
pub mod config;
pub mod filter;
pub mod icons;
pub mod logging;
pub mod output;
pub mod page;
pub mod selection;
pub mod ui;

#[cfg(test)]
pub mod testing;

pub use catalog::{Catalog, CatalogError, Recipe};
pub use category::Category;
pub use filter::{FilterState, derive_visible};
pub use page::{LandingPage, PageEvent};
pub use selection::{DetailView, Surface};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum NinjaError {
    /// Catalog could not be loaded or failed validation
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Unknown category label
    #[error(transparent)]
    CategoryError(#[from] category::ParseCategoryError),
    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// CSV serialization error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// No recipe with the requested id
    #[error("Recipe not found: {0}")]
    RecipeNotFound(u32),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
