//! Batch queries and deduplication over a shared corpus

use crate::common::*;
use quarry::{process_queries, process_queries_joined, remove_duplicates, ExecutionPolicy};

#[test]
fn dedup_then_batch_query() {
    let mut engine = pet_engine();
    let removed = remove_duplicates(&mut engine);
    assert_eq!(removed, vec![3, 4, 5, 7]);

    let queries = ["nasty rat -not", "not very funny nasty pet", "curly hair"];
    let results = process_queries(&engine, &queries);
    let counts: Vec<usize> = results.iter().map(|r| r.as_ref().unwrap().len()).collect();
    // Remaining docs: 1, 2, 6, 8, 9
    assert_eq!(counts, vec![3, 5, 2]);

    let joined = process_queries_joined(&engine, &queries);
    assert_eq!(joined.len(), 10);
}

#[test]
fn batch_matches_individual_queries_under_both_policies() {
    let engine = pet_engine();
    let queries = ["funny", "rat -hair", "curly", "very nasty"];
    let batch = process_queries(&engine, &queries);
    for (query, result) in queries.iter().zip(batch) {
        let seq = engine
            .find_top_documents_with_policy(ExecutionPolicy::Sequential, query, |_, _, _| true)
            .unwrap();
        let ids: Vec<i32> = result.unwrap().iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), seq.len());
        for id in ids {
            assert!(seq.iter().any(|d| d.id == id));
        }
    }
}

#[test]
fn removal_under_parallel_policy_after_dedup() {
    let mut engine = pet_engine();
    remove_duplicates(&mut engine);
    engine.remove_document_with_policy(ExecutionPolicy::Parallel, 9);
    assert!(engine.find_top_documents("hair").unwrap().iter().all(|d| d.id == 2));
    assert!(engine.word_frequencies(9).is_empty());
}
