//! Cursor and viewport state for the result list
//!
//! [`SelectionState`] owns the current [`ResultSet`] together with the cursor
//! and the visible window into it. Every mutation goes through one of the
//! `on_*` operations, each of which is total: out-of-range deltas, zero sizes
//! and empty result sets saturate instead of failing.
//!
//! After any operation:
//! - `cursor < len` when the result set is non-empty, otherwise `cursor == 0`
//! - `viewport_start <= cursor < viewport_start + viewport_size`
//! - `viewport_size >= 1`
//!
//! The window only moves when it has to, and then by the smallest amount that
//! brings the cursor back into view. The one exception is the tail: the window
//! never hangs past the last result when the results could fill it.

use super::ResultSet;
use std::ops::Range;

/// Cursor, viewport and filtered results of a search session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    results: ResultSet,
    cursor: usize,
    viewport_start: usize,
    viewport_size: usize,
}

impl SelectionState {
    /// Create a selection over `results` with the cursor on the first row
    #[must_use]
    pub fn new(results: ResultSet, viewport_size: usize) -> Self {
        let mut state = Self {
            results,
            cursor: 0,
            viewport_start: 0,
            viewport_size,
        };
        state.settle();
        state
    }

    /// Replace the result set
    ///
    /// The cursor is clamped to the new length and the viewport is kept where
    /// it is whenever the cursor is still inside it.
    pub fn on_results_changed(&mut self, results: ResultSet) {
        self.results = results;
        self.settle();
    }

    /// Move the cursor by `delta` rows, saturating at both ends
    pub fn on_navigate(&mut self, delta: isize) {
        self.cursor = self.cursor.saturating_add_signed(delta);
        self.settle();
    }

    /// Change the number of visible rows; zero is treated as one
    pub fn on_resize(&mut self, viewport_size: usize) {
        self.viewport_size = viewport_size;
        self.settle();
    }

    /// Put the cursor back on the first row
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
        self.settle();
    }

    /// Re-establish the invariants with minimal viewport movement
    fn settle(&mut self) {
        let len = self.results.len();
        self.viewport_size = self.viewport_size.max(1);
        self.cursor = self.cursor.min(len.saturating_sub(1));

        if self.cursor < self.viewport_start {
            self.viewport_start = self.cursor;
        } else if self.cursor >= self.viewport_start.saturating_add(self.viewport_size) {
            self.viewport_start = self.cursor + 1 - self.viewport_size;
        }

        // cursor >= viewport_start > max_start here, so it stays visible
        let max_start = len.saturating_sub(self.viewport_size);
        if self.viewport_start > max_start {
            self.viewport_start = max_start;
        }
    }

    /// Current results
    #[must_use]
    pub const fn results(&self) -> &ResultSet {
        &self.results
    }

    /// Cursor position within the results
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// First visible row
    #[must_use]
    pub const fn viewport_start(&self) -> usize {
        self.viewport_start
    }

    /// Number of visible rows
    #[must_use]
    pub const fn viewport_size(&self) -> usize {
        self.viewport_size
    }

    /// Number of results
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether there are no results
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Corpus index of the record under the cursor
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.results.get(self.cursor)
    }

    /// Result positions that are currently on screen
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        let end = self
            .viewport_start
            .saturating_add(self.viewport_size)
            .min(self.results.len());
        self.viewport_start.min(end)..end
    }
}
