//! Result table widget
//!
//! Renders the visible window of results as Command/Usage/Tags columns with
//! a `> ` pointer on the cursor row. When the area is shorter than the
//! viewport, rows are dropped from the end farthest from the cursor so the
//! pointer stays on screen.

use crate::models::CommandRecord;
use crate::ui::Frame;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::borrow::Cow;

/// Shown in place of rows when nothing matches
pub const EMPTY_MESSAGE: &str = "No matching commands";

/// Lines taken by the column header and its separator
pub const HEADER_ROWS: u16 = 2;

/// Narrowest width the table lays itself out for
const MIN_TABLE_WIDTH: u16 = 60;

/// Column widths for the result table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub command: usize,
    pub usage: usize,
    pub tags: usize,
}

impl ColumnWidths {
    /// Widths for `available` columns of terminal space
    #[must_use]
    pub const fn for_width(available: u16) -> Self {
        let (command, usage, tags) = match available {
            120.. => (45, 40, 25),
            100..=119 => (40, 35, 20),
            80..=99 => (35, 30, 15),
            _ => (30, 25, 10),
        };
        Self { command, usage, tags }
    }

    /// Width of a full row, including pointer and gutters
    #[must_use]
    pub const fn total(&self) -> usize {
        self.command + self.usage + self.tags + 10
    }
}

/// Shorten `s` to at most `max` characters, ending in `...` when cut
#[must_use]
pub fn truncate(s: &str, max: usize) -> Cow<'_, str> {
    if s.chars().count() <= max {
        return Cow::Borrowed(s);
    }
    if max <= 3 {
        return Cow::Owned(s.chars().take(max).collect());
    }
    let mut cut: String = s.chars().take(max - 3).collect();
    cut.push_str("...");
    Cow::Owned(cut)
}

/// Table of the visible results
pub struct ResultTable<'a> {
    frame: &'a Frame<'a>,
    theme: &'a Theme,
}

impl<'a> ResultTable<'a> {
    /// Create a new result table widget
    #[must_use]
    pub const fn new(frame: &'a Frame<'a>, theme: &'a Theme) -> Self {
        Self { frame, theme }
    }

    fn format_row(record: &CommandRecord, widths: ColumnWidths) -> String {
        let tags = record.tags.join(", ");
        format!(
            "{:<cw$}  {:<uw$}  {:<tw$}",
            truncate(&record.command, widths.command),
            truncate(&record.usage, widths.usage),
            truncate(&tags, widths.tags),
            cw = widths.command,
            uw = widths.usage,
            tw = widths.tags,
        )
    }

    fn lines(&self, widths: ColumnWidths, rows: usize) -> Vec<Line<'static>> {
        let header = format!(
            "  {:<cw$}  {:<uw$}  Tags",
            "Command",
            "Usage",
            cw = widths.command,
            uw = widths.usage,
        );
        let separator = format!("  {}", "─".repeat(widths.total()));

        let mut lines = vec![
            Line::from(Span::styled(header, self.theme.header_style())),
            Line::from(Span::styled(separator, self.theme.dimmed_style())),
        ];

        if self.frame.selection.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  {EMPTY_MESSAGE}"),
                self.theme.dimmed_style(),
            )));
            return lines;
        }

        let cursor = self.frame.selection.cursor();
        let visible: Vec<_> = self.frame.visible_records().collect();
        let skip = visible
            .iter()
            .position(|(pos, _)| *pos == cursor)
            .map_or(0, |at| (at + 1).saturating_sub(rows));

        for (pos, record) in visible.into_iter().skip(skip).take(rows) {
            let row = Self::format_row(record, widths);
            let line = if pos == cursor {
                Line::from(Span::styled(format!("> {row}"), self.theme.selected_style()))
            } else {
                Line::from(Span::styled(format!("  {row}"), self.theme.normal_style()))
            };
            lines.push(line);
        }

        lines
    }
}

impl Widget for ResultTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let available = area.width.saturating_sub(4).max(MIN_TABLE_WIDTH);
        let widths = ColumnWidths::for_width(available);
        let rows = usize::from(area.height.saturating_sub(HEADER_ROWS));
        Paragraph::new(self.lines(widths, rows)).render(area, buf);
    }
}
