//! Search bar widget for query input

use crate::session::QueryInput;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Widget},
};

/// Text shown while the query is empty
pub const PLACEHOLDER: &str = "Type to search...";

/// Search bar widget that displays the query with its caret
pub struct SearchBar<'a> {
    query: &'a QueryInput,
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a QueryInput, theme: &'a Theme) -> Self {
        Self { query, theme }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        block.render(area, buf);

        let caret = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));

        let spans = if self.query.is_empty() {
            vec![caret, Span::styled(PLACEHOLDER, self.theme.dimmed_style())]
        } else {
            let (before, after) = self.query.as_str().split_at(self.query.caret());
            vec![
                Span::styled(before, self.theme.input_style()),
                caret,
                Span::styled(after, self.theme.input_style()),
            ]
        };

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
