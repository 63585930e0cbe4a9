//! Color theme definitions for the ratatui TUI
//!
//! The "turtle" palette: green, orange, yellow and a dark accent.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Brand green (header, calories, active chips)
    pub green: Color,
    /// Accent orange (category badges, macros, CTA button)
    pub orange: Color,
    /// Accent yellow (view buttons, hero badge)
    pub yellow: Color,
    /// Dark accent (CTA block, footer)
    pub dark: Color,
    /// Background color for the highlighted row
    pub selection_bg: Color,
    /// Foreground color for the highlighted row
    pub selection_fg: Color,
    /// Color for the cursor indicator and focused borders
    pub cursor: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::turtle()
    }
}

impl Theme {
    /// Turtle palette (default)
    #[must_use]
    pub const fn turtle() -> Self {
        Self {
            green: Color::Rgb(76, 175, 80),
            orange: Color::Rgb(255, 152, 0),
            yellow: Color::Rgb(255, 235, 59),
            dark: Color::Rgb(38, 50, 56),
            selection_bg: Color::Rgb(76, 175, 80),
            selection_fg: Color::White,
            cursor: Color::Rgb(255, 235, 59),
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
        }
    }

    /// Plain ANSI colors for terminals without true color
    #[must_use]
    pub const fn basic() -> Self {
        Self {
            green: Color::Green,
            orange: Color::LightRed,
            yellow: Color::Yellow,
            dark: Color::Black,
            selection_bg: Color::Green,
            selection_fg: Color::Black,
            cursor: Color::Yellow,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
        }
    }

    /// Style for the highlighted recipe row
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unselected items
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the cursor indicator (>) and focused borders
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Big section headings
    #[must_use]
    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.green)
            .add_modifier(Modifier::BOLD)
    }

    /// Active category chip
    #[must_use]
    pub fn chip_active_style(&self) -> Style {
        Style::default()
            .bg(self.green)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive category chip
    #[must_use]
    pub fn chip_style(&self) -> Style {
        Style::default().fg(self.green)
    }

    /// Category badge on a recipe card
    #[must_use]
    pub fn badge_style(&self) -> Style {
        Style::default().fg(self.orange).add_modifier(Modifier::BOLD)
    }

    /// Calorie figure
    #[must_use]
    pub fn calories_style(&self) -> Style {
        Style::default().fg(self.green).add_modifier(Modifier::BOLD)
    }

    /// Protein/fat/carb figures
    #[must_use]
    pub fn macros_style(&self) -> Style {
        Style::default().fg(self.orange)
    }

    /// Button label
    #[must_use]
    pub fn button_style(&self) -> Style {
        Style::default()
            .fg(self.yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Backdrop applied behind the detail panel
    #[must_use]
    pub fn backdrop_style(&self) -> Style {
        Style::default()
            .fg(self.dimmed)
            .add_modifier(Modifier::DIM)
    }
}
