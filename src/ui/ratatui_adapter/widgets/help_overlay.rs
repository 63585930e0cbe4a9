//! Help overlay widget for displaying full keybind reference

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
    /// Whether mouse bindings are active
    mouse: bool,
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme, mouse: true }
    }

    /// List mouse bindings only when mouse capture is on
    #[must_use]
    pub const fn mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn section(&self, title: &'static str) -> Line<'static> {
        Line::styled(
            title,
            self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
        )
    }

    /// Build help content lines
    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::default(),
            self.section("  Поиск"),
            Line::default(),
            Self::help_line("  Ввод текста", "Искать по названию"),
            Self::help_line("  Backspace/Del", "Удалить символ"),
            Self::help_line("  ←/→", "Курсор в строке поиска"),
            Self::help_line("  Ctrl+U", "Очистить поиск"),
            Self::help_line("  Ctrl+W", "Удалить слово"),
            Self::help_line("  Tab/Shift+Tab", "Следующая/предыдущая категория"),
            Line::default(),
            self.section("  Рецепты"),
            Line::default(),
            Self::help_line("  ↑/↓", "Переместить курсор"),
            Self::help_line("  PgUp/PgDn", "Страница вверх/вниз"),
            Self::help_line("  Home/End", "В начало/конец"),
            Self::help_line("  Enter", "Посмотреть рецепт"),
            Self::help_line("  Esc", "Закрыть рецепт / выход"),
            Self::help_line("  Ctrl+C", "Выход"),
        ];

        if self.mouse {
            lines.push(Line::default());
            lines.push(self.section("  Мышь"));
            lines.push(Line::default());
            lines.push(Self::help_line("  Клик по чипу", "Выбрать категорию"));
            lines.push(Self::help_line("  Клик по рецепту", "Открыть рецепт"));
            lines.push(Self::help_line("  Клик вне окна", "Закрыть рецепт"));
        }

        lines.push(Line::default());
        lines.push(Line::styled(
            "  Нажмите любую клавишу, чтобы закрыть",
            self.theme.dimmed_style(),
        ));
        lines.push(Line::default());

        lines
    }

    /// Create a help line with key and description
    fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{key:<20}"), Style::default().fg(Color::Cyan)),
            Span::raw(desc),
        ])
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 80, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Помощь ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}
