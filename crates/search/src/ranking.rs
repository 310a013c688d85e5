//! Top-K selection
//!
//! Results are ordered by relevance, highest first. Relevances closer than
//! [`RELEVANCE_EPSILON`] count as equal and are ordered by rating, highest
//! first. The order of results equal on both keys is unspecified.
//!
//! Epsilon-equality is not transitive, so it cannot drive a comparison sort
//! directly. Results are first sorted by exact relevance and each run within
//! epsilon of its first element is re-sorted by rating. A final pass of
//! adjacent swaps then lifts any result above a neighbour within epsilon that
//! has a lower rating, which covers chains that straddle run boundaries.

use quarry_core::{Document, ExecutionPolicy, MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON};
use rayon::prelude::*;

/// Sort documents into ranking order.
pub fn sort_by_relevance(documents: &mut [Document], policy: ExecutionPolicy) {
    let by_relevance = |a: &Document, b: &Document| b.relevance.total_cmp(&a.relevance);
    match policy {
        ExecutionPolicy::Sequential => documents.sort_by(by_relevance),
        ExecutionPolicy::Parallel => documents.par_sort_by(by_relevance),
    }

    let mut start = 0;
    while start < documents.len() {
        let anchor = documents[start].relevance;
        let end = documents[start..]
            .iter()
            .position(|d| (anchor - d.relevance).abs() >= RELEVANCE_EPSILON)
            .map_or(documents.len(), |offset| start + offset);
        documents[start..end].sort_by(|a, b| b.rating.cmp(&a.rating));
        start = end;
    }

    for i in 1..documents.len() {
        let mut j = i;
        while j > 0 && outranked_by_rating(&documents[j - 1], &documents[j]) {
            documents.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// `upper` sits above `lower` only because of float noise
fn outranked_by_rating(upper: &Document, lower: &Document) -> bool {
    (upper.relevance - lower.relevance).abs() < RELEVANCE_EPSILON && upper.rating < lower.rating
}

/// Rank documents and keep the best [`MAX_RESULT_DOCUMENT_COUNT`].
pub fn select_top(mut documents: Vec<Document>, policy: ExecutionPolicy) -> Vec<Document> {
    sort_by_relevance(&mut documents, policy);
    documents.truncate(MAX_RESULT_DOCUMENT_COUNT);
    documents
}
