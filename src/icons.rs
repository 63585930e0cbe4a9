//! Icon rendering by symbolic name
//!
//! The page refers to icons by name ("Search", "Clock", "Zap", ...). An
//! [`IconRenderer`] turns a name and a size hint into a styled span. Terminals
//! cannot scale glyphs, so sizes of 24 and up render bold instead.

use clap::ValueEnum;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use serde::{Deserialize, Serialize};

/// Size from which icons are emphasised
const LARGE_ICON: u16 = 24;

/// Render an icon by symbolic name at a given size
pub trait IconRenderer {
    /// Glyph for `name`, or `None` if the set has no such icon
    fn glyph(&self, name: &str) -> Option<&'static str>;

    /// Styled span for `name`; unknown names render a neutral bullet
    fn render_icon(&self, name: &str, size: u16) -> Span<'static> {
        let glyph = self.glyph(name).unwrap_or("•");
        if size >= LARGE_ICON {
            Span::styled(glyph, Style::default().add_modifier(Modifier::BOLD))
        } else {
            Span::raw(glyph)
        }
    }
}

/// Unicode/emoji icon set
#[derive(Debug, Clone, Copy, Default)]
pub struct EmojiIcons;

impl IconRenderer for EmojiIcons {
    fn glyph(&self, name: &str) -> Option<&'static str> {
        let glyph = match name {
            "Menu" => "☰",
            "Calendar" => "📅",
            "BookOpen" => "📖",
            "Search" => "🔍",
            "Clock" => "⏱",
            "Eye" => "👁",
            "UserCheck" => "🧑‍⚕️",
            "BarChart3" => "📊",
            "Trophy" => "🏆",
            "Zap" => "⚡",
            "X" => "✕",
            "Instagram" => "📷",
            "Facebook" => "📘",
            "MessageCircle" => "💬",
            _ => return None,
        };
        Some(glyph)
    }
}

/// Plain ASCII icon set for terminals without emoji fonts
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiIcons;

impl IconRenderer for AsciiIcons {
    fn glyph(&self, name: &str) -> Option<&'static str> {
        let glyph = match name {
            "Menu" => "=",
            "Calendar" => "[cal]",
            "BookOpen" => "[book]",
            "Search" => "/",
            "Clock" => "@",
            "Eye" => "o",
            "UserCheck" => "[user]",
            "BarChart3" => "[chart]",
            "Trophy" => "[cup]",
            "Zap" => "!",
            "X" => "x",
            "Instagram" => "ig",
            "Facebook" => "fb",
            "MessageCircle" => "msg",
            _ => return None,
        };
        Some(glyph)
    }
}

/// Icon set selectable from configuration
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    #[default]
    Emoji,
    Ascii,
}

impl IconStyle {
    /// Name used in configuration files
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Emoji => "emoji",
            Self::Ascii => "ascii",
        }
    }

    /// Renderer for this style
    #[must_use]
    pub fn renderer(self) -> Box<dyn IconRenderer> {
        match self {
            Self::Emoji => Box::new(EmojiIcons),
            Self::Ascii => Box::new(AsciiIcons),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_ICONS: [&str; 14] = [
        "Menu",
        "Calendar",
        "BookOpen",
        "Search",
        "Clock",
        "Eye",
        "UserCheck",
        "BarChart3",
        "Trophy",
        "Zap",
        "X",
        "Instagram",
        "Facebook",
        "MessageCircle",
    ];

    #[test]
    fn test_every_page_icon_has_a_glyph() {
        for name in PAGE_ICONS {
            assert!(EmojiIcons.glyph(name).is_some(), "emoji missing {name}");
            assert!(AsciiIcons.glyph(name).is_some(), "ascii missing {name}");
        }
    }

    #[test]
    fn test_unknown_icon_renders_bullet() {
        let span = EmojiIcons.render_icon("Rocket", 16);
        assert_eq!(span.content, "•");
    }

    #[test]
    fn test_large_icons_are_bold() {
        let small = AsciiIcons.render_icon("Zap", 16);
        let large = AsciiIcons.render_icon("Zap", 24);
        assert!(!small.style.add_modifier.contains(Modifier::BOLD));
        assert!(large.style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(large.content, "!");
    }

    #[test]
    fn test_style_selects_renderer() {
        let renderer = IconStyle::Ascii.renderer();
        assert_eq!(renderer.render_icon("Search", 20).content, "/");
        assert_eq!(IconStyle::default(), IconStyle::Emoji);
    }
}
