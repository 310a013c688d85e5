//! Batch query runner
//!
//! Queries run in parallel on the rayon pool; results come back in query
//! order. A malformed query fails on its own without affecting the rest of
//! the batch.

use quarry_core::{Document, Result};
use quarry_search::SearchEngine;
use rayon::prelude::*;
use tracing::warn;

/// Run every query with the default `Actual` status filter.
///
/// `results[i]` corresponds to `queries[i]`.
///
/// # Example
///
/// ```
/// use quarry_core::DocumentStatus;
/// use quarry_executor::process_queries;
/// use quarry_search::SearchEngine;
///
/// let mut engine = SearchEngine::new("")?;
/// engine.add_document(1, "curly cat", DocumentStatus::Actual, &[1])?;
///
/// let results = process_queries(&engine, &["cat", "--bad", "dog"]);
/// assert_eq!(results[0].as_ref().unwrap().len(), 1);
/// assert!(results[1].is_err());
/// assert!(results[2].as_ref().unwrap().is_empty());
/// # Ok::<(), quarry_core::Error>(())
/// ```
pub fn process_queries<S>(engine: &SearchEngine, queries: &[S]) -> Vec<Result<Vec<Document>>>
where
    S: AsRef<str> + Sync,
{
    queries
        .par_iter()
        .map(|query| engine.find_top_documents(query.as_ref()))
        .collect()
}

/// Run every query and concatenate the results, preserving query order.
///
/// Failed queries are logged and skipped.
pub fn process_queries_joined<S>(engine: &SearchEngine, queries: &[S]) -> Vec<Document>
where
    S: AsRef<str> + Sync,
{
    process_queries(engine, queries)
        .into_iter()
        .zip(queries)
        .filter_map(|(result, query)| match result {
            Ok(documents) => Some(documents),
            Err(e) => {
                warn!(
                    target: "quarry::executor",
                    query = query.as_ref(),
                    error = %e,
                    "Query skipped"
                );
                None
            }
        })
        .flatten()
        .collect()
}
