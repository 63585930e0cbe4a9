//! Details modal widget for displaying a single recipe

use crate::catalog::Recipe;
use crate::icons::IconRenderer;
use crate::page::content::detail;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Modal width as a percentage of the screen
const WIDTH_PERCENT: u16 = 70;
/// Modal height as a percentage of the screen
const HEIGHT_PERCENT: u16 = 80;

/// Details modal widget that displays a recipe above a dimmed backdrop
pub struct DetailsModal<'a> {
    recipe: &'a Recipe,
    theme: &'a Theme,
    icons: &'a dyn IconRenderer,
    /// Vertical scroll of the body
    scroll: u16,
}

impl<'a> DetailsModal<'a> {
    /// Create a new details modal
    #[must_use]
    pub fn new(recipe: &'a Recipe, theme: &'a Theme, icons: &'a dyn IconRenderer) -> Self {
        Self {
            recipe,
            theme,
            icons,
            scroll: 0,
        }
    }

    #[must_use]
    pub const fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    /// Calculate centered area for the modal
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height.min(90)) / 2),
            Constraint::Percentage(height.min(90)),
            Constraint::Percentage((100 - height.min(90)) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width.min(90)) / 2),
            Constraint::Percentage(width.min(90)),
            Constraint::Percentage((100 - width.min(90)) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    /// Panel area when the modal is drawn over `area`
    #[must_use]
    pub fn panel_area(area: Rect) -> Rect {
        Self::centered_rect(WIDTH_PERCENT, HEIGHT_PERCENT, area)
    }

    /// Close button in the top border of `panel`
    #[must_use]
    pub fn close_button_area(panel: Rect) -> Rect {
        let width = 3.min(panel.width);
        Rect::new(
            panel.right().saturating_sub(width + 1),
            panel.y,
            width,
            1.min(panel.height),
        )
    }

    /// Largest useful scroll offset when the body is drawn inside `panel`
    ///
    /// Wrapped lines are counted at the panel's inner width.
    #[must_use]
    pub fn max_scroll(&self, panel: Rect) -> u16 {
        let inner_width = usize::from(panel.width.saturating_sub(2)).max(1);
        let inner_height = usize::from(panel.height.saturating_sub(2));
        let content_height: usize = self
            .build_content()
            .iter()
            .map(|line| line.width().div_ceil(inner_width).max(1))
            .sum();
        u16::try_from(content_height.saturating_sub(inner_height)).unwrap_or(u16::MAX)
    }

    fn stat(&self, value: String, label: &'static str) -> Vec<Span<'static>> {
        vec![
            Span::styled(value, self.theme.calories_style()),
            Span::raw(" "),
            Span::styled(label, self.theme.dimmed_style()),
        ]
    }

    /// Build content lines for the modal
    fn build_content(&self) -> Vec<Line<'static>> {
        let recipe = self.recipe;
        let section = self.theme.heading_style().add_modifier(Modifier::UNDERLINED);

        let mut lines = vec![Line::from(vec![
            Span::styled(recipe.name.clone(), self.theme.heading_style()),
            Span::raw("  "),
            Span::styled(format!("[{}]", recipe.category), self.theme.badge_style()),
        ])];
        lines.push(Line::from(vec![
            self.icons.render_icon("Clock", 16),
            Span::raw(format!(" {}", recipe.cook_time)),
        ]));
        lines.push(Line::default());

        let mut stats = self.stat(recipe.calories.to_string(), detail::CALORIES);
        for (value, label) in [
            (recipe.protein, detail::PROTEIN),
            (recipe.carbs, detail::CARBS),
            (recipe.fat, detail::FAT),
        ] {
            stats.push(Span::styled("  │  ", self.theme.border_style()));
            stats.extend(self.stat(format!("{value}{}", detail::GRAMS), label));
        }
        lines.push(Line::from(stats));
        lines.push(Line::default());

        lines.push(Line::styled(detail::INGREDIENTS, section));
        for ingredient in &recipe.ingredients {
            lines.push(Line::from(vec![
                Span::styled("  • ", self.theme.macros_style()),
                Span::raw(ingredient.clone()),
            ]));
        }
        lines.push(Line::default());

        lines.push(Line::styled(detail::INSTRUCTIONS, section));
        for (step, instruction) in recipe.instructions.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}. ", step + 1), self.theme.macros_style()),
                Span::raw(instruction.clone()),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Esc, Enter или клик вне окна: закрыть",
            self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
        )));

        lines
    }
}

impl Widget for DetailsModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Dim everything behind the panel
        buf.set_style(area, self.theme.backdrop_style());

        let popup_area = Self::panel_area(area);
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Рецепт ")
            .title_alignment(Alignment::Center);

        let content = self.build_content();
        Paragraph::new(content)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(popup_area, buf);

        let close = Self::close_button_area(popup_area);
        if close.width > 0 && close.height > 0 {
            let mut spans = vec![Span::raw("[")];
            spans.push(self.icons.render_icon("X", 16));
            spans.push(Span::raw("]"));
            buf.set_line(close.x, close.y, &Line::from(spans), close.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::icons::AsciiIcons;

    fn screen_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut text = String::new();
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_panel_is_inside_screen() {
        let area = Rect::new(0, 0, 100, 40);
        let panel = DetailsModal::panel_area(area);
        assert!(panel.width > 0 && panel.height > 0);
        assert!(panel.x > 0 && panel.y > 0);
        assert!(panel.right() < area.right());
        assert!(panel.bottom() < area.bottom());

        let close = DetailsModal::close_button_area(panel);
        assert_eq!(close.y, panel.y);
        assert!(close.right() < panel.right());
    }

    #[test]
    fn test_render_recipe_details() {
        let catalog = Catalog::sample();
        let recipe = catalog.find(2).unwrap();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);

        DetailsModal::new(recipe, &theme, &AsciiIcons).render(area, &mut buf);
        let text = screen_text(&buf);

        assert!(text.contains("Черепашка пицца"));
        assert!(text.contains("320 ккал"));
        assert!(text.contains("18г белки"));
        assert!(text.contains("28г углеводы"));
        assert!(text.contains("12г жиры"));
        assert!(text.contains("• Моцарелла"));
        assert!(text.contains("3. Запечь 15 минут"));
        assert!(text.contains("[x]"));

        // ingredients keep their order
        let base = text.find("Цельнозерновая основа").unwrap();
        let basil = text.find("Базилик").unwrap();
        assert!(base < basil);
    }

    #[test]
    fn test_max_scroll_stops_at_last_line() {
        let catalog = Catalog::sample();
        let recipe = catalog.find(2).unwrap();
        let theme = Theme::default();
        let modal = DetailsModal::new(recipe, &theme, &AsciiIcons);

        // 17 body lines in an 8-row interior
        assert_eq!(modal.max_scroll(Rect::new(0, 0, 60, 10)), 9);
        assert_eq!(modal.max_scroll(Rect::new(0, 0, 60, 40)), 0);
        // a narrow panel wraps and can scroll further
        assert!(modal.max_scroll(Rect::new(0, 0, 20, 10)) > 9);
    }
}
