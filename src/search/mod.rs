//! Fuzzy search, relevance ranking and selection state
//!
//! - [`matcher`]: nucleo-backed fuzzy matching of a query against the corpus
//! - [`ranker`]: relevance order used when the query is empty
//! - [`selection`]: cursor/viewport state machine over the current results

pub mod matcher;
pub mod ranker;
pub mod selection;

pub use matcher::{SearchIndex, search};
pub use ranker::{compare_relevance, rank_all};
pub use selection::SelectionState;

use crate::models::CommandRecord;

/// Ordered matches for the current query
///
/// Holds positions into the session corpus rather than the records
/// themselves. The order is the matcher's (or ranker's) output and is never
/// re-sorted downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet(Vec<usize>);

impl ResultSet {
    /// Wrap corpus indices in match order
    #[must_use]
    pub const fn from_indices(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// Corpus indices in match order
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Number of matches
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Corpus index at a result position
    #[must_use]
    pub fn get(&self, position: usize) -> Option<usize> {
        self.0.get(position).copied()
    }

    /// Resolve the matches against their corpus
    pub fn records<'a>(
        &'a self,
        corpus: &'a [CommandRecord],
    ) -> impl Iterator<Item = &'a CommandRecord> + 'a {
        self.0.iter().filter_map(|&idx| corpus.get(idx))
    }
}
