//! Application state for the ratatui TUI
//!
//! Wraps the headless [`LandingPage`] with what only the terminal needs: the
//! text cursor inside the search input, the highlighted row of the recipe
//! list, scroll offsets and the screen regions recorded during the last draw
//! (used to classify mouse clicks).

use crate::catalog::{Catalog, Recipe};
use crate::category::Category;
use crate::filter::FilterState;
use crate::page::{LandingPage, PageEvent};
use crate::selection::Surface;
use crate::ui::ratatui_adapter::widgets::KeyHint;
use ratatui::layout::{Position, Rect};

/// Lines scrolled per page key inside the detail panel
const DETAIL_PAGE: u16 = 5;

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
}

/// Screen regions from the last draw
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitAreas {
    /// Category chips
    pub categories: Vec<(Rect, Category)>,
    /// Recipe rows, paired with their index in the visible list
    pub recipe_rows: Vec<(Rect, usize)>,
    /// The open detail panel
    pub detail_panel: Option<Rect>,
    /// Close button of the detail panel
    pub detail_close: Option<Rect>,
}

impl HitAreas {
    /// Category chip under `pos`
    #[must_use]
    pub fn category_at(&self, pos: Position) -> Option<Category> {
        self.categories
            .iter()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, category)| *category)
    }

    /// Visible-list index of the recipe row under `pos`
    #[must_use]
    pub fn recipe_at(&self, pos: Position) -> Option<usize> {
        self.recipe_rows
            .iter()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, idx)| *idx)
    }

    /// Whether `pos` hits the detail close button
    #[must_use]
    pub fn is_close_button(&self, pos: Position) -> bool {
        self.detail_close.is_some_and(|area| area.contains(pos))
    }

    /// Classify `pos` against the detail panel boundary
    #[must_use]
    pub fn surface_at(&self, pos: Position) -> Surface {
        match self.detail_panel {
            Some(panel) if panel.contains(pos) => Surface::Panel,
            _ => Surface::Backdrop,
        }
    }
}

/// Application state for the landing page
#[derive(Debug)]
pub struct AppState<'a> {
    /// Headless page state (filter + selection)
    pub page: LandingPage<'a>,
    /// Byte offset of the text cursor within the search term
    pub query_cursor: usize,
    /// Highlighted row in the visible recipe list
    pub cursor: usize,
    /// Scroll offset for the recipe list
    pub scroll_offset: usize,
    /// Scroll offset for the detail panel body
    pub detail_scroll: u16,
    /// Largest scroll offset that still shows body text (set during render)
    pub detail_max_scroll: u16,
    /// Height of the visible recipe list area (set during render)
    pub visible_height: usize,
    /// Current UI mode
    pub mode: Mode,
    /// Whether the app should exit
    pub should_exit: bool,
    /// Clickable regions from the last draw
    pub hit_areas: HitAreas,
    /// Keybind hints shown in the help bar
    pub hints: Vec<KeyHint>,
}

impl<'a> AppState<'a> {
    /// Create new application state for a catalog and initial filter
    #[must_use]
    pub fn new(catalog: &'a Catalog, filter: FilterState, hints: Vec<KeyHint>) -> Self {
        let query_cursor = filter.search_term.len();
        Self {
            page: LandingPage::with_filter(catalog, filter),
            query_cursor,
            cursor: 0,
            scroll_offset: 0,
            detail_scroll: 0,
            detail_max_scroll: u16::MAX, // updated during render
            visible_height: 10, // updated during render
            mode: Mode::Normal,
            should_exit: false,
            hit_areas: HitAreas::default(),
            hints,
        }
    }

    /// Recipes in the grid right now
    #[must_use]
    pub fn visible(&self) -> Vec<&'a Recipe> {
        self.page.visible()
    }

    /// Recipe under the list cursor
    #[must_use]
    pub fn current_recipe(&self) -> Option<&'a Recipe> {
        self.visible().get(self.cursor).copied()
    }

    #[must_use]
    pub const fn detail_open(&self) -> bool {
        self.page.detail().is_open()
    }

    // --- search input -------------------------------------------------

    fn set_query(&mut self, query: String, cursor: usize) {
        self.page.handle(PageEvent::SearchChanged(query));
        self.query_cursor = cursor;
        self.clamp_cursor();
    }

    /// Insert a character at the text cursor
    pub fn query_push(&mut self, c: char) {
        let mut query = self.page.search_term().to_string();
        query.insert(self.query_cursor, c);
        let cursor = self.query_cursor + c.len_utf8();
        self.set_query(query, cursor);
    }

    /// Remove the character before the text cursor
    pub fn query_backspace(&mut self) {
        if self.query_cursor == 0 {
            return;
        }
        let mut query = self.page.search_term().to_string();
        let prev_char_boundary = query[..self.query_cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        query.remove(prev_char_boundary);
        self.set_query(query, prev_char_boundary);
    }

    /// Delete the character under the text cursor
    pub fn query_delete(&mut self) {
        if self.query_cursor >= self.page.search_term().len() {
            return;
        }
        let mut query = self.page.search_term().to_string();
        query.remove(self.query_cursor);
        let cursor = self.query_cursor;
        self.set_query(query, cursor);
    }

    /// Delete the word before the text cursor
    pub fn query_delete_word(&mut self) {
        let mut query = self.page.search_term().to_string();
        let trimmed = query[..self.query_cursor].trim_end();
        let start = trimmed.rfind(' ').map_or(0, |i| i + 1);
        query.drain(start..self.query_cursor);
        self.set_query(query, start);
    }

    /// Clear the search term
    pub fn query_clear(&mut self) {
        self.set_query(String::new(), 0);
    }

    /// Move the text cursor one character left
    pub fn query_cursor_left(&mut self) {
        let query = self.page.search_term();
        if self.query_cursor > 0 {
            self.query_cursor = query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move the text cursor one character right
    pub fn query_cursor_right(&mut self) {
        let query = self.page.search_term();
        if self.query_cursor < query.len() {
            self.query_cursor = query[self.query_cursor..]
                .char_indices()
                .nth(1)
                .map_or(query.len(), |(i, _)| self.query_cursor + i);
        }
    }

    // --- category selector --------------------------------------------

    pub fn select_category(&mut self, category: Category) {
        self.page.handle(PageEvent::CategorySelected(category));
        self.clamp_cursor();
    }

    pub fn next_category(&mut self) {
        self.select_category(self.page.category().next());
    }

    pub fn prev_category(&mut self) {
        self.select_category(self.page.category().prev());
    }

    // --- recipe list --------------------------------------------------

    /// Move cursor up
    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor down
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.visible().len() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor up by one page
    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.visible_height.max(1));
        self.adjust_scroll();
    }

    /// Move cursor down by one page
    pub fn page_down(&mut self) {
        let max_cursor = self.visible().len().saturating_sub(1);
        self.cursor = (self.cursor + self.visible_height.max(1)).min(max_cursor);
        self.adjust_scroll();
    }

    /// Jump to first recipe
    pub fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    /// Jump to last recipe
    pub fn jump_to_end(&mut self) {
        self.cursor = self.visible().len().saturating_sub(1);
        self.adjust_scroll();
    }

    /// Keep the cursor inside the visible list after a filter change
    pub fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
        self.scroll_offset = self.scroll_offset.min(self.cursor);
        self.adjust_scroll();
    }

    /// Adjust scroll offset to keep cursor visible
    fn adjust_scroll(&mut self) {
        let height = self.visible_height.max(1);
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }

    // --- detail view --------------------------------------------------

    /// Open the detail view for the highlighted recipe
    pub fn view_current(&mut self) {
        if let Some(recipe) = self.current_recipe() {
            self.page.handle(PageEvent::ViewRecipe(recipe));
            self.detail_scroll = 0;
        }
    }

    /// Highlight a visible row and open it
    pub fn view_at(&mut self, visible_idx: usize) {
        if visible_idx < self.visible().len() {
            self.cursor = visible_idx;
            self.adjust_scroll();
            self.view_current();
        }
    }

    pub fn close_detail(&mut self) {
        self.page.handle(PageEvent::CloseDetail);
    }

    /// Pointer interaction while the detail view is up
    pub fn click(&mut self, surface: Surface) {
        self.page.handle(PageEvent::Click(surface));
    }

    pub const fn detail_scroll_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    pub fn detail_scroll_down(&mut self) {
        self.detail_scroll_by(1);
    }

    pub const fn detail_page_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(DETAIL_PAGE);
    }

    pub fn detail_page_down(&mut self) {
        self.detail_scroll_by(DETAIL_PAGE);
    }

    fn detail_scroll_by(&mut self, lines: u16) {
        self.detail_scroll = self
            .detail_scroll
            .saturating_add(lines)
            .min(self.detail_max_scroll);
    }
}
