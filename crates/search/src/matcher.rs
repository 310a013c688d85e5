//! Per-document query matching

use crate::index::InvertedIndex;
use crate::query::Query;
use quarry_core::{DocumentId, DocumentStatus, ExecutionPolicy, MatchedDocument};
use rayon::prelude::*;

/// Match a parsed query against one document.
///
/// Any minus-term with a posting in the document short-circuits to an empty
/// term list. Otherwise the plus-terms present in the document are returned
/// sorted and deduplicated, under either policy.
pub fn match_document(
    index: &InvertedIndex,
    query: &Query<'_>,
    id: DocumentId,
    status: DocumentStatus,
    policy: ExecutionPolicy,
) -> MatchedDocument {
    let terms = match policy {
        ExecutionPolicy::Sequential => {
            if query.minus_terms.iter().any(|term| index.has_posting(term, id)) {
                Vec::new()
            } else {
                query
                    .plus_terms
                    .iter()
                    .filter(|term| index.has_posting(term, id))
                    .map(|term| term.to_string())
                    .collect()
            }
        }
        ExecutionPolicy::Parallel => {
            if query
                .minus_terms
                .par_iter()
                .any(|term| index.has_posting(term, id))
            {
                Vec::new()
            } else {
                let mut matched: Vec<String> = query
                    .plus_terms
                    .par_iter()
                    .filter(|term| index.has_posting(term, id))
                    .map(|term| term.to_string())
                    .collect();
                matched.par_sort_unstable();
                matched.dedup();
                matched
            }
        }
    };
    MatchedDocument { terms, status }
}
