//! Help bar widget for displaying keybind hints

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "↑/↓", "ctrl+u/d")
    pub key: &'static str,
    /// Action description (e.g., "navigate")
    pub action: &'static str,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Hints shown under the palette
pub const DEFAULT_HINTS: &[KeyHint] = &[
    KeyHint::new("↑/↓", "navigate"),
    KeyHint::new("enter", "copy & exit"),
    KeyHint::new("ctrl+u/d", "page"),
    KeyHint::new("esc", "clear/quit"),
];

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.theme.dimmed_style();
        let mut spans = vec![Span::styled("  ", style)];

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", style));
            }
            spans.push(Span::styled(format!("{}: {}", hint.key, hint.action), style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
