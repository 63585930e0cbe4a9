//! Detail view state machine
//!
//! The page shows at most one recipe in detail. [`DetailView`] is either
//! `Closed` or `Open` with a reference to a recipe owned by the catalog, which
//! outlives the view. Selecting another recipe while open replaces the
//! reference directly.
//!
//! Pointer interaction is classified by [`Surface`]: a click on the dimmed
//! backdrop closes the view, a click on the panel itself never does.

/// Where a pointer interaction landed relative to the detail panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Outside the panel
    Backdrop,
    /// Inside the panel
    Panel,
}

/// Which recipe, if any, is opened for detailed display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailView<'a> {
    #[default]
    Closed,
    Open(&'a crate::Recipe),
}

impl<'a> DetailView<'a> {
    /// Show `recipe`, replacing any recipe already open
    pub fn open(&mut self, recipe: &'a crate::Recipe) {
        tracing::debug!(id = recipe.id, name = %recipe.name, "detail view opened");
        *self = Self::Open(recipe);
    }

    /// Close the view; closing a closed view does nothing
    pub fn close(&mut self) {
        if let Self::Open(recipe) = *self {
            tracing::debug!(id = recipe.id, "detail view closed");
        }
        *self = Self::Closed;
    }

    /// Apply a pointer interaction
    pub fn click(&mut self, surface: Surface) {
        match surface {
            Surface::Backdrop => self.close(),
            Surface::Panel => {}
        }
    }

    /// The open recipe
    #[must_use]
    pub const fn selected(&self) -> Option<&'a crate::Recipe> {
        match *self {
            Self::Open(recipe) => Some(recipe),
            Self::Closed => None,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_initially_closed() {
        let view = DetailView::default();
        assert!(!view.is_open());
        assert!(view.selected().is_none());
    }

    #[test]
    fn test_open_then_replace() {
        let catalog = Catalog::sample();
        let second = catalog.find(2).unwrap();
        let third = catalog.find(3).unwrap();

        let mut view = DetailView::default();
        view.open(second);
        assert_eq!(view.selected().map(|r| r.id), Some(2));

        view.open(third);
        assert!(view.is_open());
        assert_eq!(view.selected().map(|r| r.id), Some(3));
        assert!(std::ptr::eq(view.selected().unwrap(), third));
    }

    #[test]
    fn test_close_from_closed_is_noop() {
        let mut view = DetailView::default();
        view.close();
        assert_eq!(view, DetailView::Closed);
        view.click(Surface::Backdrop);
        assert_eq!(view, DetailView::Closed);
        view.click(Surface::Panel);
        assert_eq!(view, DetailView::Closed);
    }

    #[test]
    fn test_backdrop_closes_panel_does_not() {
        let catalog = Catalog::sample();
        let mut view = DetailView::default();
        view.open(&catalog.recipes()[0]);

        view.click(Surface::Panel);
        assert_eq!(view.selected().map(|r| r.id), Some(1));

        view.click(Surface::Backdrop);
        assert!(!view.is_open());
    }

    #[test]
    fn test_explicit_close() {
        let catalog = Catalog::sample();
        let mut view = DetailView::default();
        view.open(&catalog.recipes()[1]);
        view.close();
        assert!(view.selected().is_none());
    }
}
