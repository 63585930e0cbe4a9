//! Ratatui-based landing page adapter
//!
//! Implements the [`PageBrowser`](crate::ui::PageBrowser) trait using ratatui
//! for drawing and crossterm for terminal events.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              LandingApp                     │
//! │      (implements PageBrowser trait)         │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │ LandingPage│ │  Ratatui  │ │ Crossterm │
//! │  (state)   │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! Mouse clicks are classified against the regions recorded during the
//! last draw, so a click outside the open recipe panel closes it while a
//! click on the panel does not.

mod app;
mod events;
mod layout;
mod state;
mod theme;
pub mod widgets;

pub use app::LandingApp;
pub use events::{EventResult, handle_event};
pub use layout::PageLayout;
pub use state::{AppState, HitAreas, Mode};
pub use theme::Theme;
