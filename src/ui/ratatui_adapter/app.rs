//! Ratatui landing page application
//!
//! Implements the [`PageBrowser`] trait: draws the page, feeds terminal events
//! into [`AppState`] and records clickable regions after every draw.

use super::events::{EventResult, poll_and_handle};
use super::layout::PageLayout;
use super::state::{AppState, Mode};
use super::theme::Theme;
use super::widgets::{
    CallToAction, CategoryBar, DetailsModal, Footer, Header, HelpBar, HelpOverlay, Hero,
    RecipeList, SearchBar, Services,
};
use crate::catalog::Catalog;
use crate::icons::{IconRenderer, IconStyle};
use crate::page::content;
use crate::ui::error::Result;
use crate::ui::traits::PageBrowser;
use crate::ui::types::{BrowseConfig, BrowseResult};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::Alignment,
    text::Line,
    widgets::Paragraph,
};
use std::io::{self, Stdout};
use std::time::Duration;

/// Terminal landing page
pub struct LandingApp {
    theme: Theme,
    icons: IconStyle,
}

impl LandingApp {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            icons: IconStyle::default(),
        }
    }

    /// Set custom theme
    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub const fn with_icons(mut self, icons: IconStyle) -> Self {
        self.icons = icons;
        self
    }

    /// Setup terminal for TUI
    fn setup_terminal(mouse: bool) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal(mouse: bool) -> Result<()> {
        disable_raw_mode()?;
        if mouse {
            execute!(io::stdout(), DisableMouseCapture)?;
        }
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Draw one frame and remember where the clickable parts landed
    pub fn render(
        frame: &mut Frame,
        state: &mut AppState,
        theme: &Theme,
        icons: &dyn IconRenderer,
        mouse: bool,
    ) {
        let area = frame.area();
        let layout = PageLayout::compute(area);

        state.visible_height = layout.list_rows();
        state.clamp_cursor();
        let visible = state.visible();

        frame.render_widget(Header::new(theme, icons), layout.header);
        if let Some(hero) = layout.hero {
            frame.render_widget(Hero::new(theme, icons), hero);
        }

        frame.render_widget(
            Paragraph::new(Line::styled(content::RECIPES_SUBHEADING, theme.dimmed_style()))
                .alignment(Alignment::Center),
            layout.subheading,
        );

        let search = SearchBar::new(
            state.page.search_term(),
            state.query_cursor,
            content::SEARCH_PLACEHOLDER,
            theme,
            icons,
        )
        .focused(!state.detail_open());
        frame.render_widget(search, layout.search);

        frame.render_widget(CategoryBar::new(state.page.category(), theme), layout.categories);

        let list = RecipeList::new(&visible, state.page.catalog().len(), theme, icons)
            .position(state.cursor, state.scroll_offset);
        frame.render_widget(list, layout.recipes);

        if let Some(services) = layout.services {
            frame.render_widget(Services::new(theme, icons), services);
        }
        if let Some(cta) = layout.cta {
            frame.render_widget(CallToAction::new(theme, icons), cta);
        }
        frame.render_widget(Footer::new(theme, icons), layout.footer);

        state.hit_areas.categories = CategoryBar::chip_areas(layout.categories);
        state.hit_areas.recipe_rows =
            RecipeList::row_areas(layout.recipes, visible.len(), state.scroll_offset);

        let detail_hints;
        let hints = if state.detail_open() {
            detail_hints = HelpBar::detail_hints();
            &detail_hints
        } else {
            &state.hints
        };
        frame.render_widget(HelpBar::new(hints, theme), layout.help_bar);

        if let Some(recipe) = state.page.selected() {
            let panel = DetailsModal::panel_area(area);
            let modal = DetailsModal::new(recipe, theme, icons);
            state.detail_max_scroll = modal.max_scroll(panel);
            state.detail_scroll = state.detail_scroll.min(state.detail_max_scroll);
            frame.render_widget(modal.scroll(state.detail_scroll), area);
            state.hit_areas.detail_panel = Some(panel);
            state.hit_areas.detail_close = Some(DetailsModal::close_button_area(panel));
        } else {
            state.hit_areas.detail_panel = None;
            state.hit_areas.detail_close = None;
        }

        if state.mode == Mode::Help {
            frame.render_widget(HelpOverlay::new(theme).mouse(mouse), area);
        }
    }

    /// Run the page event loop
    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        catalog: &Catalog,
        config: &BrowseConfig,
    ) -> Result<BrowseResult> {
        let icons = self.icons.renderer();
        let mut state = AppState::new(catalog, config.filter.clone(), HelpBar::default_hints());
        let mut last_viewed = None;

        while !state.should_exit {
            terminal.draw(|frame| {
                Self::render(frame, &mut state, &self.theme, icons.as_ref(), config.mouse);
            })?;

            match poll_and_handle(&mut state, Duration::from_millis(50))? {
                EventResult::Exit => state.should_exit = true,
                EventResult::FilterChanged => {
                    tracing::debug!(
                        search = state.page.search_term(),
                        category = %state.page.category(),
                        visible = state.visible().len(),
                        "filter changed"
                    );
                }
                EventResult::Continue | EventResult::Ignored => {}
            }

            if let Some(recipe) = state.page.selected() {
                last_viewed = Some(recipe.id);
            }
        }

        Ok(BrowseResult {
            filter: state.page.filter().clone(),
            last_viewed,
        })
    }
}

impl Default for LandingApp {
    fn default() -> Self {
        Self::new()
    }
}

impl PageBrowser for LandingApp {
    fn run(&self, catalog: &Catalog, config: BrowseConfig) -> Result<BrowseResult> {
        let mut terminal = Self::setup_terminal(config.mouse)?;

        // Run the event loop, ensuring cleanup happens
        let result = self.run_loop(&mut terminal, catalog, &config);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal(config.mouse) {
            tracing::warn!("terminal cleanup failed: {e}");
        }

        result
    }
}
