//! Ratatui widgets for the landing page TUI
//!
//! Custom widgets for the page sections, the recipe browser and overlays.

mod category_bar;
mod details_modal;
mod help_bar;
mod help_overlay;
mod recipe_list;
mod search_bar;
mod sections;

pub use category_bar::CategoryBar;
pub use details_modal::DetailsModal;
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use recipe_list::RecipeList;
pub use search_bar::SearchBar;
pub use sections::{CallToAction, Footer, Header, Hero, Services};
