//! Interactive search session
//!
//! A [`Session`] is a small state machine over the loaded corpus:
//!
//! ```text
//!            ┌──────── navigation / edits / clear / resize ───────┐
//!            ▼                                                    │
//!        Editing ─────────────────────────────────────────────────┘
//!        │     │
//! Confirm│     │Quit (empty query) / Interrupt / input exhausted
//!        ▼     ▼
//!   Selected  Cancelled
//! ```
//!
//! Each action is handled to completion, including the match pass it
//! triggers, before the next one is read. Once a terminal state is reached
//! further actions are ignored.
//!
//! Side effects of a selection (clipboard copy, `last_used` stamp) are not
//! part of the loop: [`Outcome::deliver`] runs them afterwards, and their
//! failures are logged and reported through [`Delivery`] only.

pub mod action;
pub mod query;

pub use action::Action;
pub use query::{QUERY_CHAR_LIMIT, QueryInput};

use crate::models::CommandRecord;
use crate::search::{SearchIndex, SelectionState};
use crate::store::Store;
use crate::ui::{Clipboard, Frame, InputSource, Renderer};

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting input
    Editing,
    /// A record was picked; holds its corpus index
    Selected(usize),
    /// The user left without picking anything
    Cancelled,
}

impl SessionState {
    /// Whether the session has finished
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Editing)
    }
}

/// Tunables for navigation and viewport sizing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Rows moved by page up/down
    pub page_size: usize,
    /// Fewest result rows shown
    pub min_rows: usize,
    /// Most result rows shown
    pub max_rows: usize,
    /// Terminal rows taken by everything except the result rows, including
    /// the table header
    pub reserved_rows: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            page_size: 5,
            min_rows: 5,
            max_rows: 20,
            // 10 layout rows around the table plus its 2 header lines
            reserved_rows: 12,
        }
    }
}

impl SessionOptions {
    /// Result rows for a terminal of `height` rows
    #[must_use]
    pub fn visible_rows(&self, height: u16) -> usize {
        let min = self.min_rows.max(1);
        let max = self.max_rows.max(min);
        usize::from(height)
            .saturating_sub(self.reserved_rows)
            .clamp(min, max)
    }

    fn page_delta(&self) -> isize {
        isize::try_from(self.page_size.max(1)).unwrap_or(isize::MAX)
    }
}

/// How a finished session ended
///
/// Whether the copy and the use stamp succeeded is not known until
/// [`Outcome::deliver`] runs; see [`Delivery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// The user picked this record
    Selected(&'a CommandRecord),
    /// Nothing was picked
    Cancelled,
}

/// Which selection side effects succeeded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Delivery {
    /// The command text reached the clipboard
    pub copied: bool,
    /// The store recorded the use
    pub marked: bool,
}

impl<'a> Outcome<'a> {
    /// The selected record, if any
    #[must_use]
    pub const fn record(&self) -> Option<&'a CommandRecord> {
        match self {
            Self::Selected(record) => Some(*record),
            Self::Cancelled => None,
        }
    }

    /// Copy the selected command and stamp it as used
    ///
    /// Both effects are attempted independently; a failure is logged and
    /// shows up only as a `false` flag in the returned [`Delivery`].
    pub fn deliver(&self, clipboard: &mut dyn Clipboard, store: &dyn Store) -> Delivery {
        let Self::Selected(record) = self else {
            return Delivery::default();
        };

        let copied = match clipboard.write_text(&record.command) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "failed to copy command to clipboard");
                false
            }
        };

        let marked = match store.mark_used(&record.command) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "failed to record command use");
                false
            }
        };

        Delivery { copied, marked }
    }
}

/// Search session over one corpus load
pub struct Session<'a> {
    index: SearchIndex<'a>,
    query: QueryInput,
    selection: SelectionState,
    state: SessionState,
    options: SessionOptions,
}

impl<'a> Session<'a> {
    /// Start a session with an optional pre-filled query on a terminal of
    /// `height` rows
    #[must_use]
    pub fn new(
        corpus: &'a [CommandRecord],
        initial_query: &str,
        options: SessionOptions,
        height: u16,
    ) -> Self {
        let query = QueryInput::new(initial_query);
        let mut index = SearchIndex::new(corpus);
        let results = index.search(query.as_str());
        let selection = SelectionState::new(results, options.visible_rows(height));

        Self {
            index,
            query,
            selection,
            state: SessionState::Editing,
            options,
        }
    }

    /// Apply one action and return the resulting state
    pub fn handle(&mut self, action: Action) -> SessionState {
        if self.state.is_terminal() {
            return self.state;
        }

        match action {
            Action::Up => self.selection.on_navigate(-1),
            Action::Down => self.selection.on_navigate(1),
            Action::PageUp => self.selection.on_navigate(-self.options.page_delta()),
            Action::PageDown => self.selection.on_navigate(self.options.page_delta()),
            Action::Home => self.selection.on_navigate(isize::MIN),
            Action::End => self.selection.on_navigate(isize::MAX),
            Action::Insert(c) => self.edit(|query| query.push(c)),
            Action::Backspace => self.edit(QueryInput::backspace),
            Action::Delete => self.edit(QueryInput::delete),
            Action::DeleteWord => self.edit(QueryInput::delete_word),
            Action::Left => self.query.left(),
            Action::Right => self.query.right(),
            Action::Clear => self.clear_query(),
            Action::Confirm => {
                if let Some(idx) = self.selection.selected() {
                    self.state = SessionState::Selected(idx);
                }
            }
            Action::Quit => {
                if self.query.is_empty() {
                    self.state = SessionState::Cancelled;
                } else {
                    self.clear_query();
                }
            }
            Action::Interrupt => self.state = SessionState::Cancelled,
            Action::Resize { height } => {
                self.selection.on_resize(self.options.visible_rows(height));
            }
        }

        self.state
    }

    fn edit(&mut self, op: impl FnOnce(&mut QueryInput) -> bool) {
        if op(&mut self.query) {
            self.refilter();
        }
    }

    fn clear_query(&mut self) {
        self.query.clear();
        self.refilter();
    }

    fn refilter(&mut self) {
        let results = self.index.search(self.query.as_str());
        tracing::debug!(query = self.query.as_str(), results = results.len(), "refiltered");
        self.selection.on_results_changed(results);
        self.selection.reset_cursor();
    }

    /// Drive the session until it reaches a terminal state
    ///
    /// Renders a frame before every read. An exhausted or failing input
    /// source ends the session as cancelled. Render failures are logged once
    /// and otherwise ignored.
    pub fn run<I, R>(mut self, input: &mut I, renderer: &mut R) -> Outcome<'a>
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        let mut render_failed = false;

        while !self.state.is_terminal() {
            if let Err(e) = renderer.render(&self.frame())
                && !render_failed
            {
                tracing::warn!(error = %e, "failed to render frame");
                render_failed = true;
            }

            match input.next_action() {
                Ok(Some(action)) => {
                    self.handle(action);
                }
                Ok(None) => {
                    tracing::debug!("input exhausted, cancelling session");
                    self.state = SessionState::Cancelled;
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to read input, cancelling session");
                    self.state = SessionState::Cancelled;
                }
            }
        }

        self.outcome()
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Outcome for the current state; `Cancelled` while still editing
    #[must_use]
    pub fn outcome(&self) -> Outcome<'a> {
        match self.state {
            SessionState::Selected(idx) => self
                .index
                .corpus()
                .get(idx)
                .map_or(Outcome::Cancelled, Outcome::Selected),
            SessionState::Editing | SessionState::Cancelled => Outcome::Cancelled,
        }
    }

    /// Current query
    #[must_use]
    pub const fn query(&self) -> &QueryInput {
        &self.query
    }

    /// Current results, cursor and viewport
    #[must_use]
    pub const fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The session corpus
    #[must_use]
    pub const fn corpus(&self) -> &'a [CommandRecord] {
        self.index.corpus()
    }

    /// Snapshot for rendering
    #[must_use]
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            corpus: self.corpus(),
            selection: &self.selection,
            query: &self.query,
        }
    }
}
