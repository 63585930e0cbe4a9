//! Common types used by the UI layer

use crate::filter::FilterState;

/// Options for an interactive browse session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseConfig {
    /// Filter the page opens with
    pub filter: FilterState,
    /// Capture mouse clicks and scrolling
    pub mouse: bool,
}

impl BrowseConfig {
    #[must_use]
    pub const fn new(filter: FilterState) -> Self {
        Self {
            filter,
            mouse: true,
        }
    }

    #[must_use]
    pub const fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }
}

/// How a browse session ended
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseResult {
    /// Filter in effect when the page was closed
    pub filter: FilterState,
    /// Id of the last recipe opened in the detail view
    pub last_viewed: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    #[test]
    fn test_browse_config_builder() {
        let config = BrowseConfig::new(FilterState::new("суп", Category::Lunch)).with_mouse(false);
        assert_eq!(config.filter.search_term, "суп");
        assert!(!config.mouse);
        assert!(BrowseConfig::new(FilterState::default()).mouse);
    }
}
