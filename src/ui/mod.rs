//! UI abstraction layer
//!
//! This module provides a backend-agnostic interface for showing the landing
//! page interactively and for printing status messages on the command line.
//!
//! # Core Traits
//!
//! - **`PageBrowser`** - Interactive landing page session
//! - **`OutputWriter`** - Status messages with severity levels
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Page Logic Layer                   │
//! │   (catalog, filter, selection, page)    │
//! └────────────────┬────────────────────────┘
//!                  │ Driven by
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      UI Trait Abstraction               │
//! │     (PageBrowser, OutputWriter)         │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ Test Adapters │  │ TUI Adapter       │
//! │ - MockBrowser │  │ - LandingApp      │
//! │ - Stdout      │  │                   │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Browsing the Page
//!
//! ```no_run
//! use ninja_nutrition::Catalog;
//! use ninja_nutrition::filter::FilterState;
//! use ninja_nutrition::ui::{BrowseConfig, PageBrowser};
//! use ninja_nutrition::ui::ratatui_adapter::LandingApp;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::sample();
//! let result = LandingApp::new().run(&catalog, BrowseConfig::new(FilterState::default()))?;
//! println!("Last viewed: {:?}", result.last_viewed);
//! # Ok(())
//! # }
//! ```
//!
//! ## Output Messages
//!
//! ```
//! use ninja_nutrition::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new();
//! output.success("Operation completed!");
//! output.error("Something went wrong");
//! output.warning("Be careful");
//! output.info("Additional info");
//! ```

mod error;
mod traits;
mod types;

pub mod mock;
pub mod output;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use output::{OutputWriter, StdoutWriter};
pub use traits::PageBrowser;
pub use types::{BrowseConfig, BrowseResult};

pub use ratatui_adapter::LandingApp;
