//! Static landing page sections drawn around the recipe browser

use crate::icons::IconRenderer;
use crate::page::content::{self, Action};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

fn action_spans(action: &Action, icons: &dyn IconRenderer, style: Style) -> Vec<Span<'static>> {
    vec![
        Span::styled("[ ", style),
        icons.render_icon(action.icon, 20),
        Span::styled(format!(" {} ]", action.label), style),
    ]
}

/// Brand, navigation and menu button
pub struct Header<'a> {
    theme: &'a Theme,
    icons: &'a dyn IconRenderer,
}

impl<'a> Header<'a> {
    pub const HEIGHT: u16 = 3;

    #[must_use]
    pub fn new(theme: &'a Theme, icons: &'a dyn IconRenderer) -> Self {
        Self { theme, icons }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(self.theme.green));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![
            Span::raw(format!("{} ", content::BRAND_BADGE)),
            Span::styled(content::BRAND, self.theme.heading_style()),
            Span::raw("   "),
        ];
        for (i, item) in content::NAV_ITEMS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", self.theme.dimmed_style()));
            }
            spans.push(Span::raw(*item));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);

        // Menu button pinned to the right edge
        Paragraph::new(Line::from(self.icons.render_icon("Menu", 24)))
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}

/// Hero banner with headline and call-to-action buttons
pub struct Hero<'a> {
    theme: &'a Theme,
    icons: &'a dyn IconRenderer,
}

impl<'a> Hero<'a> {
    pub const HEIGHT: u16 = 7;

    #[must_use]
    pub fn new(theme: &'a Theme, icons: &'a dyn IconRenderer) -> Self {
        Self { theme, icons }
    }
}

impl Widget for Hero<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut actions = Vec::new();
        for (i, action) in content::HERO_ACTIONS.iter().enumerate() {
            if i > 0 {
                actions.push(Span::raw("   "));
            }
            let style = if i == 0 {
                self.theme.chip_active_style()
            } else {
                self.theme.button_style()
            };
            actions.extend(action_spans(action, self.icons, style));
        }

        let lines = vec![
            Line::styled(
                content::HERO_HEADLINE,
                self.theme.heading_style().add_modifier(Modifier::ITALIC),
            ),
            Line::styled(content::HERO_SUBTITLE, self.theme.badge_style()),
            Line::default(),
            Line::raw(content::HERO_PITCH),
            Line::default(),
            Line::from(actions),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

/// Three service preview cards
pub struct Services<'a> {
    theme: &'a Theme,
    icons: &'a dyn IconRenderer,
}

impl<'a> Services<'a> {
    pub const HEIGHT: u16 = 6;

    #[must_use]
    pub fn new(theme: &'a Theme, icons: &'a dyn IconRenderer) -> Self {
        Self { theme, icons }
    }
}

impl Widget for Services<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [heading, cards] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        Paragraph::new(Line::styled(
            content::SERVICES_HEADING,
            self.theme.heading_style(),
        ))
        .alignment(Alignment::Center)
        .render(heading, buf);

        let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(cards);
        for (service, column) in content::SERVICES.iter().zip(columns.iter()) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border_style());
            let lines = vec![
                Line::from(vec![
                    self.icons.render_icon(service.icon, 24),
                    Span::raw(" "),
                    Span::styled(service.title, self.theme.badge_style()),
                ]),
                Line::styled(service.description, self.theme.dimmed_style()),
            ];
            Paragraph::new(lines)
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(*column, buf);
        }
    }
}

/// Closing call-to-action block
pub struct CallToAction<'a> {
    theme: &'a Theme,
    icons: &'a dyn IconRenderer,
}

impl<'a> CallToAction<'a> {
    pub const HEIGHT: u16 = 5;

    #[must_use]
    pub fn new(theme: &'a Theme, icons: &'a dyn IconRenderer) -> Self {
        Self { theme, icons }
    }
}

impl Widget for CallToAction<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base = Style::default().bg(self.theme.dark).fg(Color::White);
        let button = Style::default()
            .bg(self.theme.orange)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let lines = vec![
            Line::styled(content::CTA_HEADING, base.add_modifier(Modifier::BOLD)),
            Line::raw(content::CTA_TEXT),
            Line::default(),
            Line::from(action_spans(&content::CTA_ACTION, self.icons, button)),
        ];

        Paragraph::new(lines)
            .style(base)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

/// Brand line, tagline and social icons
pub struct Footer<'a> {
    theme: &'a Theme,
    icons: &'a dyn IconRenderer,
}

impl<'a> Footer<'a> {
    pub const HEIGHT: u16 = 1;

    #[must_use]
    pub fn new(theme: &'a Theme, icons: &'a dyn IconRenderer) -> Self {
        Self { theme, icons }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(content::BRAND, self.theme.heading_style()),
            Span::styled(" | ", self.theme.dimmed_style()),
            Span::styled(content::FOOTER_TAGLINE, self.theme.dimmed_style()),
            Span::raw("  "),
        ];
        for name in content::SOCIAL_ICONS {
            spans.push(Span::raw(" "));
            spans.push(self.icons.render_icon(name, 24));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(self.theme.dark))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn test_header_shows_brand_and_menu() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 140, Header::HEIGHT);
        let mut buf = Buffer::empty(area);
        Header::new(&theme, &AsciiIcons).render(area, &mut buf);

        let text = screen_text(&buf);
        assert!(text.contains(content::BRAND));
        assert!(text.contains("Рецепты"));
        let first_row: String = text.lines().next().unwrap_or_default().to_string();
        assert!(first_row.trim_end().ends_with('='));
    }

    #[test]
    fn test_services_render_all_cards() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 120, Services::HEIGHT);
        let mut buf = Buffer::empty(area);
        Services::new(&theme, &AsciiIcons).render(area, &mut buf);

        let text = screen_text(&buf);
        assert!(text.contains(content::SERVICES_HEADING));
        for service in content::SERVICES {
            assert!(text.contains(service.description), "{}", service.title);
        }
    }

    #[test]
    fn test_cta_and_footer() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 100, CallToAction::HEIGHT + Footer::HEIGHT);
        let mut buf = Buffer::empty(area);
        let [cta, footer] = Layout::vertical([
            Constraint::Length(CallToAction::HEIGHT),
            Constraint::Length(Footer::HEIGHT),
        ])
        .areas(area);
        CallToAction::new(&theme, &AsciiIcons).render(cta, &mut buf);
        Footer::new(&theme, &AsciiIcons).render(footer, &mut buf);

        let text = screen_text(&buf);
        assert!(text.contains("ПОЕХАЛИ!"));
        assert!(text.contains("ig fb msg"));
    }
}
