//! Collaborator traits for the interactive session
//!
//! The session core only talks to the terminal through these seams, so it can
//! be driven by scripted input and a recording renderer in tests.

use super::error::Result;
use crate::models::CommandRecord;
use crate::search::SelectionState;
use crate::session::{Action, QueryInput};

/// Everything a renderer needs to draw one frame
///
/// A pure projection of session state; renderers never mutate it.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// The full corpus
    pub corpus: &'a [CommandRecord],
    /// Current results, cursor and viewport
    pub selection: &'a SelectionState,
    /// Current query line
    pub query: &'a QueryInput,
}

impl<'a> Frame<'a> {
    /// Records in the visible window, with their result position
    pub fn visible_records(&self) -> impl Iterator<Item = (usize, &'a CommandRecord)> + 'a {
        let selection = self.selection;
        let corpus = self.corpus;
        selection.visible_range().filter_map(move |pos| {
            selection
                .results()
                .get(pos)
                .and_then(|idx| corpus.get(idx))
                .map(|record| (pos, record))
        })
    }
}

/// Draws session frames
pub trait Renderer {
    /// Draw one frame
    ///
    /// # Errors
    ///
    /// Returns `UiError` if drawing to the output fails.
    fn render(&mut self, frame: &Frame<'_>) -> Result<()>;
}

/// Produces classified input events one at a time
pub trait InputSource {
    /// Block until the next action is available
    ///
    /// `Ok(None)` means the source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading input fails.
    fn next_action(&mut self) -> std::io::Result<Option<Action>>;
}
