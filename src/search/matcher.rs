//! Fuzzy matching over the command corpus
//!
//! Scoring is delegated to nucleo's synchronous [`Matcher`]. The whole query is
//! compiled into a single fuzzy [`Atom`], so a record is a candidate exactly
//! when every query character appears in its searchable text in order.
//! Nucleo's score rewards contiguous runs, matches at word boundaries and near
//! the start of the haystack, and penalizes gaps.

use super::ResultSet;
use super::ranker::rank_all;
use crate::models::CommandRecord;
use nucleo::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo::{Config, Matcher, Utf32String};

/// Matcher bound to one corpus load
///
/// Searchable text is built once per corpus and reused for every keystroke.
pub struct SearchIndex<'a> {
    corpus: &'a [CommandRecord],
    haystacks: Vec<Utf32String>,
    matcher: Matcher,
}

impl<'a> SearchIndex<'a> {
    /// Build the index for a corpus
    #[must_use]
    pub fn new(corpus: &'a [CommandRecord]) -> Self {
        let haystacks = corpus
            .iter()
            .map(|record| Utf32String::from(record.searchable_text()))
            .collect();

        Self {
            corpus,
            haystacks,
            matcher: Matcher::new(Config::DEFAULT),
        }
    }

    /// The corpus this index was built from
    #[must_use]
    pub const fn corpus(&self) -> &'a [CommandRecord] {
        self.corpus
    }

    /// Run a query against the corpus
    ///
    /// An empty query returns the whole corpus in relevance order (see
    /// [`rank_all`]). Otherwise the result holds the matching records by
    /// descending score; equal scores keep corpus order.
    pub fn search(&mut self, query: &str) -> ResultSet {
        if query.is_empty() {
            return rank_all(self.corpus);
        }

        let atom = Atom::new(
            query,
            CaseMatching::Smart,
            Normalization::Smart,
            AtomKind::Fuzzy,
            false,
        );

        let mut scored: Vec<(usize, u16)> = self
            .haystacks
            .iter()
            .enumerate()
            .filter_map(|(idx, haystack)| {
                atom.score(haystack.slice(..), &mut self.matcher)
                    .map(|score| (idx, score))
            })
            .collect();

        // Stable: ties stay in corpus order
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        tracing::trace!(query, matches = scored.len(), "fuzzy match pass");

        ResultSet::from_indices(scored.into_iter().map(|(idx, _)| idx).collect())
    }
}

/// One-shot search without keeping an index around
#[must_use]
pub fn search(query: &str, corpus: &[CommandRecord]) -> ResultSet {
    SearchIndex::new(corpus).search(query)
}
