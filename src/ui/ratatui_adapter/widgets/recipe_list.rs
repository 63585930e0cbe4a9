//! Recipe list widget for the filtered catalog

use crate::catalog::Recipe;
use crate::icons::IconRenderer;
use crate::page::content;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Recipe list widget showing one card line per visible recipe
pub struct RecipeList<'a> {
    visible: &'a [&'a Recipe],
    total: usize,
    cursor: usize,
    scroll_offset: usize,
    theme: &'a Theme,
    icons: &'a dyn IconRenderer,
}

impl<'a> RecipeList<'a> {
    /// Create a new recipe list widget
    #[must_use]
    pub fn new(
        visible: &'a [&'a Recipe],
        total: usize,
        theme: &'a Theme,
        icons: &'a dyn IconRenderer,
    ) -> Self {
        Self {
            visible,
            total,
            cursor: 0,
            scroll_offset: 0,
            theme,
            icons,
        }
    }

    /// Set highlighted row and scroll position
    #[must_use]
    pub const fn position(mut self, cursor: usize, scroll_offset: usize) -> Self {
        self.cursor = cursor;
        self.scroll_offset = scroll_offset;
        self
    }

    fn block(&self) -> Block<'static> {
        let shown = self.visible.len();
        let total = self.total;
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(format!(" {} ({shown}/{total}) ", content::RECIPES_HEADING))
    }

    /// Screen area of each drawn row, paired with its visible-list index
    #[must_use]
    pub fn row_areas(area: Rect, visible_len: usize, scroll_offset: usize) -> Vec<(Rect, usize)> {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let end = (scroll_offset + inner.height as usize).min(visible_len);
        (scroll_offset..end)
            .zip(inner.y..inner.bottom())
            .map(|(idx, y)| (Rect::new(inner.x, y, inner.width, 1), idx))
            .collect()
    }

    /// Render a single recipe card line
    fn render_item(&self, recipe: &Recipe, is_cursor: bool) -> ListItem<'static> {
        let cursor_char = if is_cursor { ">" } else { " " };

        let name_style = if is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };

        let spans = vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(recipe.name.clone(), name_style),
            Span::raw("  "),
            Span::styled(format!("[{}]", recipe.category), self.theme.badge_style()),
            Span::raw("  "),
            self.icons.render_icon("Clock", 16),
            Span::raw(format!(" {}", recipe.cook_time)),
            Span::raw("  "),
            Span::styled(recipe.calories.to_string(), self.theme.calories_style()),
            Span::styled(format!(" {}", content::detail::CALORIES), self.theme.dimmed_style()),
            Span::raw("  "),
            Span::styled(
                format!("Б{} Ж{} У{}", recipe.protein, recipe.fat, recipe.carbs),
                self.theme.macros_style(),
            ),
            Span::raw("   "),
            self.icons.render_icon("Eye", 16),
            Span::styled(format!(" {}", content::VIEW_RECIPE_LABEL), self.theme.button_style()),
        ];

        ListItem::new(Line::from(spans))
    }
}

impl Widget for RecipeList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let end = (self.scroll_offset + inner.height as usize).min(self.visible.len());
        let items: Vec<ListItem> = (self.scroll_offset..end)
            .filter_map(|idx| {
                let recipe = self.visible.get(idx)?;
                Some(self.render_item(recipe, idx == self.cursor))
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::icons::AsciiIcons;

    fn row_text(buf: &Buffer, y: u16) -> String {
        let area = buf.area;
        (area.x..area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_row_areas() {
        let area = Rect::new(0, 10, 60, 5);
        let rows = RecipeList::row_areas(area, 10, 4);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], (Rect::new(1, 11, 58, 1), 4));
        assert_eq!(rows[2].1, 6);

        assert_eq!(RecipeList::row_areas(area, 2, 0).len(), 2);
        assert!(RecipeList::row_areas(area, 0, 0).is_empty());
    }

    #[test]
    fn test_render_cards() {
        let catalog = Catalog::sample();
        let visible: Vec<&Recipe> = catalog.iter().collect();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 120, 5);
        let mut buf = Buffer::empty(area);

        RecipeList::new(&visible, catalog.len(), &theme, &AsciiIcons)
            .position(1, 0)
            .render(area, &mut buf);

        let title = row_text(&buf, 0);
        assert!(title.contains("(3/3)"));
        let first = row_text(&buf, 1);
        assert!(first.contains("Супергеройский смузи"));
        assert!(first.contains("250"));
        assert!(first.contains("Б15 Ж8 У35"));
        let second = row_text(&buf, 2);
        assert!(second.starts_with("│>"));
        assert!(second.contains("[Обед]"));
    }

    #[test]
    fn test_render_empty_is_well_formed() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 4);
        let mut buf = Buffer::empty(area);
        RecipeList::new(&[], 3, &theme, &AsciiIcons).render(area, &mut buf);
        assert!(row_text(&buf, 0).contains("(0/3)"));
        assert_eq!(row_text(&buf, 1).trim_matches(|c| c == '│' || c == ' '), "");
    }
}
