//! Search bar widget for the recipe search input

use crate::icons::IconRenderer;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the search term with cursor
pub struct SearchBar<'a> {
    /// Current search term
    query: &'a str,
    /// Byte offset of the cursor in the query
    cursor: usize,
    /// Placeholder shown while the query is empty
    placeholder: &'a str,
    /// Theme for styling
    theme: &'a Theme,
    icons: &'a dyn IconRenderer,
    /// Whether the widget has focus
    focused: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub fn new(
        query: &'a str,
        cursor: usize,
        placeholder: &'a str,
        theme: &'a Theme,
        icons: &'a dyn IconRenderer,
    ) -> Self {
        Self {
            query,
            cursor,
            placeholder,
            theme,
            icons,
            focused: true,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        let caret = Span::styled(
            "│",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        );
        let mut spans = vec![self.icons.render_icon("Search", 20), Span::raw(" ")];

        if self.query.is_empty() {
            if self.focused {
                spans.push(caret);
            }
            spans.push(Span::styled(self.placeholder, self.theme.dimmed_style()));
        } else {
            let cursor = self.cursor.min(self.query.len());
            let (before, after) = self.query.split_at(cursor);
            spans.push(Span::raw(before));
            if self.focused {
                spans.push(caret);
            }
            spans.push(Span::raw(after));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
