//! Duplicate document detection
//!
//! Two documents are duplicates when they contain the same set of distinct
//! terms, regardless of term counts or order. The document with the lowest id
//! is kept; every later one with the same set is a duplicate.

use quarry_core::DocumentId;
use quarry_search::SearchEngine;
use rustc_hash::FxHashSet;
use tracing::info;

/// Ids of documents whose term set already appeared under a lower id.
///
/// Returned in ascending order.
pub fn find_duplicates(engine: &SearchEngine) -> Vec<DocumentId> {
    let mut seen: FxHashSet<Vec<String>> = FxHashSet::default();
    engine
        .document_ids()
        .filter(|&id| {
            // BTreeMap keys are sorted, so the key list is a canonical set signature
            let signature: Vec<String> = engine.word_frequencies(id).into_keys().collect();
            !seen.insert(signature)
        })
        .collect()
}

/// Remove every duplicate document and return the removed ids, ascending.
pub fn remove_duplicates(engine: &mut SearchEngine) -> Vec<DocumentId> {
    let duplicates = find_duplicates(engine);
    for &id in &duplicates {
        info!(target: "quarry::executor", document_id = id, "Found duplicate document id");
        engine.remove_document(id);
    }
    duplicates
}
