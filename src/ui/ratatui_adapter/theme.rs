//! Color theme definitions for the palette
//!
//! Renderers receive a [`Theme`] explicitly; nothing reads styles globally.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Title and search box accent
    pub accent: Color,
    /// Table header color
    pub header: Color,
    /// Background of the cursor row
    pub selection_bg: Color,
    /// Foreground of the cursor row
    pub selection_fg: Color,
    /// Color for query text
    pub input: Color,
    /// Color for unselected rows
    pub text: Color,
    /// Color for dimmed/secondary text
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default), using the 256-color palette
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            accent: Color::Indexed(205),
            header: Color::Indexed(39),
            selection_bg: Color::Indexed(57),
            selection_fg: Color::Indexed(229),
            input: Color::Indexed(255),
            text: Color::Indexed(252),
            dimmed: Color::Indexed(241),
        }
    }

    /// Style for the title line
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for the search box border
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for the typed query
    #[must_use]
    pub fn input_style(&self) -> Style {
        Style::default().fg(self.input)
    }

    /// Style for the table header
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default().fg(self.header).add_modifier(Modifier::BOLD)
    }

    /// Style for the row under the cursor
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unselected rows
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }
}
