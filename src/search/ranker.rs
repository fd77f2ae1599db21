//! Relevance ordering for the empty query
//!
//! With nothing typed the palette shows the whole corpus ordered by
//! usefulness rather than by match score.

use super::ResultSet;
use crate::models::CommandRecord;
use std::cmp::Ordering;

/// Order the full corpus by relevance
///
/// Composite stable sort:
/// 1. favorites first
/// 2. records with a `last_used` timestamp before those without, most recent first
/// 3. most recently created first
///
/// Records equal on all three keys keep their corpus order.
#[must_use]
pub fn rank_all(corpus: &[CommandRecord]) -> ResultSet {
    let mut indices: Vec<usize> = (0..corpus.len()).collect();
    // sort_by is stable
    indices.sort_by(|&a, &b| compare_relevance(&corpus[a], &corpus[b]));
    ResultSet::from_indices(indices)
}

/// Total order used by [`rank_all`]; `Less` means `a` ranks higher
#[must_use]
pub fn compare_relevance(a: &CommandRecord, b: &CommandRecord) -> Ordering {
    b.favorite
        .cmp(&a.favorite)
        .then_with(|| match (a.last_used, b.last_used) {
            (Some(a_used), Some(b_used)) => b_used.cmp(&a_used),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| b.created_at.cmp(&a.created_at))
}
