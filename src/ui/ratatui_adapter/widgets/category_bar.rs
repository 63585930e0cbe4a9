//! Category selector widget

use crate::category::Category;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Widget},
};

/// Gap between chips
const CHIP_GAP: u16 = 1;

fn chip_text(category: Category) -> String {
    format!(" {} ", category.label())
}

/// Row of mutually exclusive category chips
pub struct CategoryBar<'a> {
    selected: Category,
    theme: &'a Theme,
}

impl<'a> CategoryBar<'a> {
    #[must_use]
    pub const fn new(selected: Category, theme: &'a Theme) -> Self {
        Self { selected, theme }
    }

    /// Screen area of each chip when the bar is drawn into `area`
    ///
    /// Chips that do not fit are left out.
    #[must_use]
    pub fn chip_areas(area: Rect) -> Vec<(Rect, Category)> {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        if inner.height == 0 {
            return Vec::new();
        }

        let mut x = inner.x;
        let mut chips = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            #[allow(clippy::cast_possible_truncation)]
            let width = Span::raw(chip_text(category)).width() as u16;
            if x + width > inner.right() {
                break;
            }
            chips.push((Rect::new(x, inner.y, width, 1), category));
            x += width + CHIP_GAP;
        }
        chips
    }
}

impl Widget for CategoryBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Категории ");
        block.render(area, buf);

        for (chip, category) in Self::chip_areas(area) {
            let style = if category == self.selected {
                self.theme.chip_active_style()
            } else {
                self.theme.chip_style()
            };
            buf.set_string(chip.x, chip.y, chip_text(category), style);
        }
    }
}
