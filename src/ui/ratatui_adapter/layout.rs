//! Screen layout for the landing page
//!
//! The recipe browser always gets a place on screen. The hero banner, the
//! service cards and the call-to-action only appear on tall terminals.

use super::widgets::{CallToAction, Footer, Header, Hero, Services};
use ratatui::layout::{Constraint, Layout, Rect};

/// Minimum terminal height that fits every section
pub const FULL_PAGE_HEIGHT: u16 = 40;

const SEARCH_HEIGHT: u16 = 3;
const CATEGORY_HEIGHT: u16 = 3;
const MIN_LIST_HEIGHT: u16 = 5;

/// Areas of every page section for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub header: Rect,
    pub hero: Option<Rect>,
    pub subheading: Rect,
    pub search: Rect,
    pub categories: Rect,
    pub recipes: Rect,
    pub services: Option<Rect>,
    pub cta: Option<Rect>,
    pub footer: Rect,
    pub help_bar: Rect,
}

impl PageLayout {
    #[must_use]
    pub fn compute(area: Rect) -> Self {
        if area.height >= FULL_PAGE_HEIGHT {
            let [
                header,
                hero,
                subheading,
                search,
                categories,
                recipes,
                services,
                cta,
                footer,
                help_bar,
            ] = Layout::vertical([
                Constraint::Length(Header::HEIGHT),
                Constraint::Length(Hero::HEIGHT),
                Constraint::Length(1),
                Constraint::Length(SEARCH_HEIGHT),
                Constraint::Length(CATEGORY_HEIGHT),
                Constraint::Min(MIN_LIST_HEIGHT),
                Constraint::Length(Services::HEIGHT),
                Constraint::Length(CallToAction::HEIGHT),
                Constraint::Length(Footer::HEIGHT),
                Constraint::Length(1),
            ])
            .areas(area);
            Self {
                header,
                hero: Some(hero),
                subheading,
                search,
                categories,
                recipes,
                services: Some(services),
                cta: Some(cta),
                footer,
                help_bar,
            }
        } else {
            let [header, subheading, search, categories, recipes, footer, help_bar] =
                Layout::vertical([
                    Constraint::Length(Header::HEIGHT),
                    Constraint::Length(1),
                    Constraint::Length(SEARCH_HEIGHT),
                    Constraint::Length(CATEGORY_HEIGHT),
                    Constraint::Min(MIN_LIST_HEIGHT),
                    Constraint::Length(Footer::HEIGHT),
                    Constraint::Length(1),
                ])
                .areas(area);
            Self {
                header,
                hero: None,
                subheading,
                search,
                categories,
                recipes,
                services: None,
                cta: None,
                footer,
                help_bar,
            }
        }
    }

    /// Number of recipe rows that fit in the list
    #[must_use]
    pub fn list_rows(&self) -> usize {
        self.recipes.height.saturating_sub(2) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_layout() {
        let layout = PageLayout::compute(Rect::new(0, 0, 100, 30));
        assert!(layout.hero.is_none());
        assert!(layout.services.is_none());
        assert!(layout.cta.is_none());
        assert_eq!(layout.header.y, 0);
        assert_eq!(layout.help_bar.bottom(), 30);
        assert_eq!(layout.recipes.height, 30 - 3 - 1 - 3 - 3 - 1 - 1);
        assert_eq!(layout.list_rows(), layout.recipes.height as usize - 2);
    }

    #[test]
    fn test_full_layout() {
        let layout = PageLayout::compute(Rect::new(0, 0, 120, 50));
        let hero = layout.hero.unwrap();
        let services = layout.services.unwrap();
        assert!(hero.y < layout.search.y);
        assert!(layout.recipes.bottom() <= services.y);
        assert!(layout.cta.unwrap().bottom() <= layout.footer.y);
        assert!(layout.recipes.height >= MIN_LIST_HEIGHT);
    }
}
