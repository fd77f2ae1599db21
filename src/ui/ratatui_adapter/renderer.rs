//! Ratatui-based palette renderer
//!
//! Owns the terminal for the lifetime of the session: raw mode and the
//! alternate screen are entered on construction and left on [`TerminalRenderer::restore`]
//! or drop, whichever comes first.

use super::theme::Theme;
use super::widgets::{DEFAULT_HINTS, HelpBar, ResultTable, SearchBar};
use crate::search::SelectionState;
use crate::ui::error::Result;
use crate::ui::{Frame, Renderer};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame as TuiFrame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::Span,
    widgets::Paragraph,
};
use std::io::{self, Stdout};

/// Title line at the top of the palette
pub const TITLE: &str = "[>] imperium";

/// Full-screen terminal renderer
pub struct TerminalRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    active: bool,
}

impl TerminalRenderer {
    /// Take over the terminal
    ///
    /// # Errors
    ///
    /// Returns `UiError` if raw mode or the alternate screen cannot be entered.
    pub fn new(theme: Theme) -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        Ok(Self {
            terminal,
            theme,
            active: true,
        })
    }

    /// Current terminal height in rows
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the terminal size cannot be queried.
    pub fn height(&self) -> Result<u16> {
        Ok(self.terminal.size()?.height)
    }

    /// Hand the terminal back to the shell
    ///
    /// # Errors
    ///
    /// Returns `UiError` if leaving raw mode or the alternate screen fails.
    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        Self::cleanup_terminal()?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::warn!(error = %e, "failed to restore terminal");
        }
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()> {
        let theme = &self.theme;
        self.terminal.draw(|f| draw(f, frame, theme))?;
        Ok(())
    }
}

fn draw(f: &mut TuiFrame<'_>, frame: &Frame<'_>, theme: &Theme) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1),
            Constraint::Length(3), // Search bar
            Constraint::Length(1), // Count
            Constraint::Length(1),
            Constraint::Min(3),    // Table
            Constraint::Length(1), // Scroll indicator
            Constraint::Length(1),
            Constraint::Length(1), // Help bar
        ])
        .split(f.area());

    f.render_widget(
        Paragraph::new(Span::styled(TITLE, theme.title_style())),
        layout[0],
    );
    f.render_widget(SearchBar::new(frame.query, theme), layout[2]);
    f.render_widget(
        Paragraph::new(Span::styled(count_line(frame), theme.dimmed_style())),
        layout[3],
    );
    f.render_widget(ResultTable::new(frame, theme), layout[5]);
    if let Some(indicator) = scroll_indicator(frame.selection) {
        f.render_widget(
            Paragraph::new(Span::styled(indicator, theme.dimmed_style())),
            layout[6],
        );
    }
    f.render_widget(HelpBar::new(DEFAULT_HINTS, theme), layout[8]);
}

fn count_line(frame: &Frame<'_>) -> String {
    format!("  {}/{} commands", frame.selection.len(), frame.corpus.len())
}

/// `[start-end of total]`, only when results overflow the viewport
fn scroll_indicator(selection: &SelectionState) -> Option<String> {
    if selection.len() <= selection.viewport_size() {
        return None;
    }
    let range = selection.visible_range();
    Some(format!(
        "  [{}-{} of {}]",
        range.start + 1,
        range.end,
        selection.len()
    ))
}
