//! Search Engine Scenario Tests
//!
//! End-to-end behaviour of the public engine surface: stop words, minus
//! terms, ranking order, id validation and removal.

use quarry_core::{DocumentStatus, ExecutionPolicy, MAX_RESULT_DOCUMENT_COUNT};
use quarry_search::SearchEngine;

const POLICIES: [ExecutionPolicy; 2] = [ExecutionPolicy::Sequential, ExecutionPolicy::Parallel];

fn actual(_: i32, status: DocumentStatus, _: i32) -> bool {
    status == DocumentStatus::Actual
}

// ============================================================================
// Query Semantics
// ============================================================================

/// A query made only of stop words has no plus-terms and finds nothing
#[test]
fn test_stop_word_query_is_empty() {
    let mut engine = SearchEngine::new("in the").unwrap();
    engine
        .add_document(42, "cat in the city", DocumentStatus::Actual, &[1, 2, 3])
        .unwrap();

    for policy in POLICIES {
        let found = engine
            .find_top_documents_with_policy(policy, "in", actual)
            .unwrap();
        assert!(found.is_empty());
    }

    let found = engine.find_top_documents("cat").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 42);
    assert_eq!(found[0].rating, 2);
}

/// A minus-term present in every candidate empties the result
#[test]
fn test_minus_term_excludes_all() {
    let mut engine = SearchEngine::new("").unwrap();
    engine
        .add_document(0, "cat in the city", DocumentStatus::Actual, &[1])
        .unwrap();
    engine
        .add_document(1, "catomaran in the city", DocumentStatus::Actual, &[1])
        .unwrap();

    for policy in POLICIES {
        let found = engine
            .find_top_documents_with_policy(policy, "in -the", actual)
            .unwrap();
        assert!(found.is_empty(), "{:?}", policy);
    }
}

/// Ranking follows relevance, then rating for equal relevance
#[test]
fn test_ranking_order() {
    let mut engine = SearchEngine::new("").unwrap();
    engine
        .add_document(0, "white cat and collar", DocumentStatus::Actual, &[8, -3])
        .unwrap();
    engine
        .add_document(1, "fluffy cat fluffy tail", DocumentStatus::Actual, &[7, 2, 7])
        .unwrap();
    engine
        .add_document(
            2,
            "groomed dog expressive eyes",
            DocumentStatus::Actual,
            &[5, -12, 2, 1],
        )
        .unwrap();
    // Filtered out by status, but still counts towards N and df("groomed")
    engine
        .add_document(3, "groomed starling evgeny", DocumentStatus::Banned, &[9])
        .unwrap();

    for policy in POLICIES {
        let found = engine
            .find_top_documents_with_policy(policy, "fluffy groomed cat", actual)
            .unwrap();
        let ids: Vec<_> = found.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 0, 2], "{:?}", policy);
        assert!(found.windows(2).all(|w| w[0].relevance >= w[1].relevance));
        assert_eq!(found[0].rating, 5);
        assert_eq!(found[1].rating, 2);
        assert_eq!(found[2].rating, -1);
        // Documents 0 and 2 tie on relevance; rating decides
        assert!((found[1].relevance - found[2].relevance).abs() < 1e-6);
        assert!((found[0].relevance - (0.5 * 4f64.ln() + 0.25 * 2f64.ln())).abs() < 1e-9);
    }
}

/// Equal relevance falls back to rating
#[test]
fn test_equal_relevance_ordered_by_rating() {
    let mut engine = SearchEngine::new("").unwrap();
    engine
        .add_document(0, "cat dog", DocumentStatus::Actual, &[1])
        .unwrap();
    engine
        .add_document(1, "cat dog", DocumentStatus::Actual, &[9])
        .unwrap();
    engine
        .add_document(2, "cat dog", DocumentStatus::Actual, &[5])
        .unwrap();
    engine
        .add_document(3, "bird", DocumentStatus::Actual, &[0])
        .unwrap();

    for policy in POLICIES {
        let found = engine
            .find_top_documents_with_policy(policy, "cat", actual)
            .unwrap();
        let ids: Vec<_> = found.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 0]);
    }
}

/// Never more than five results
#[test]
fn test_result_limit() {
    let mut engine = SearchEngine::new("").unwrap();
    for id in 0..20 {
        engine
            .add_document(id, "common word", DocumentStatus::Actual, &[id])
            .unwrap();
    }
    engine
        .add_document(20, "other", DocumentStatus::Actual, &[])
        .unwrap();

    for policy in POLICIES {
        let found = engine
            .find_top_documents_with_policy(policy, "common", actual)
            .unwrap();
        assert_eq!(found.len(), MAX_RESULT_DOCUMENT_COUNT);
        // Same relevance everywhere, so the best ratings win
        let ids: Vec<_> = found.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![19, 18, 17, 16, 15]);
    }
}

/// The default status filter is Actual
#[test]
fn test_default_status_filter() {
    let mut engine = SearchEngine::new("").unwrap();
    engine
        .add_document(0, "cat", DocumentStatus::Banned, &[])
        .unwrap();
    engine
        .add_document(1, "cat", DocumentStatus::Removed, &[])
        .unwrap();
    engine
        .add_document(2, "cat", DocumentStatus::Removed, &[])
        .unwrap();

    assert!(engine.find_top_documents("cat").unwrap().is_empty());
    assert_eq!(
        engine
            .find_top_documents_by_status("cat", DocumentStatus::Removed)
            .unwrap()
            .len(),
        2
    );
    assert!(engine
        .find_top_documents_by_status("cat", DocumentStatus::Irrelevant)
        .unwrap()
        .is_empty());
}

// ============================================================================
// Document Validation
// ============================================================================

/// Negative and duplicate ids are rejected; the original stays intact
#[test]
fn test_invalid_ids_rejected() {
    let mut engine = SearchEngine::new("").unwrap();
    assert!(engine
        .add_document(-1, "cat", DocumentStatus::Actual, &[1])
        .unwrap_err()
        .is_invalid_argument());

    engine
        .add_document(0, "white cat", DocumentStatus::Actual, &[4])
        .unwrap();
    let before = engine.word_frequencies(0);

    assert!(engine
        .add_document(0, "black dog", DocumentStatus::Banned, &[1])
        .unwrap_err()
        .is_invalid_argument());

    assert_eq!(engine.document_count(), 1);
    assert_eq!(engine.word_frequencies(0), before);
    let matched = engine.match_document("white dog", 0).unwrap();
    assert_eq!(matched.terms, vec!["white"]);
    assert_eq!(matched.status, DocumentStatus::Actual);
    assert_eq!(engine.find_top_documents("cat").unwrap()[0].rating, 4);
}

/// Control characters in stop words fail construction
#[test]
fn test_invalid_stop_word() {
    assert!(SearchEngine::new("in th\u{3}e")
        .unwrap_err()
        .is_invalid_argument());
    assert!(SearchEngine::from_stop_words(vec!["ok", "", "ok"]).is_ok());
}

// ============================================================================
// Matching
// ============================================================================

/// A matching minus-term empties the match even when plus-terms match
#[test]
fn test_match_minus_term_wins() {
    let mut engine = SearchEngine::new("").unwrap();
    engine
        .add_document(5, "fluffy cat fluffy tail", DocumentStatus::Irrelevant, &[])
        .unwrap();

    for policy in POLICIES {
        let matched = engine
            .match_document_with_policy(policy, "fluffy cat -tail", 5)
            .unwrap();
        assert!(matched.terms.is_empty());
        assert_eq!(matched.status, DocumentStatus::Irrelevant);

        let matched = engine
            .match_document_with_policy(policy, "tail fluffy fluffy -dog", 5)
            .unwrap();
        assert_eq!(matched.terms, vec!["fluffy", "tail"]);
    }
}

// ============================================================================
// Removal
// ============================================================================

/// Removed documents never come back from any query
#[test]
fn test_removed_document_invisible() {
    for policy in POLICIES {
        let mut engine = SearchEngine::new("").unwrap();
        engine
            .add_document(0, "alpha beta", DocumentStatus::Actual, &[])
            .unwrap();
        engine
            .add_document(1, "alpha gamma", DocumentStatus::Actual, &[])
            .unwrap();
        engine
            .add_document(2, "delta", DocumentStatus::Actual, &[])
            .unwrap();

        engine.remove_document_with_policy(policy, 0);

        for query in ["alpha", "beta", "alpha beta gamma", "alpha -gamma"] {
            let found = engine.find_top_documents(query).unwrap();
            assert!(found.iter().all(|d| d.id != 0), "{:?} {}", policy, query);
        }
        assert!(engine.match_document("alpha", 0).unwrap_err().is_out_of_range());
        // The query is checked before the id
        assert!(engine.match_document("alpha --beta", 0).unwrap_err().is_invalid_argument());
        assert!(engine.word_frequencies(0).is_empty());
        assert_eq!(engine.document_ids().collect::<Vec<_>>(), vec![1, 2]);

        // "beta" lived only in document 0
        assert!(engine.find_top_documents("beta").unwrap().is_empty());
    }
}

/// IDF reflects the live document count after removal
#[test]
fn test_idf_after_removal() {
    let mut engine = SearchEngine::new("").unwrap();
    engine
        .add_document(0, "cat", DocumentStatus::Actual, &[])
        .unwrap();
    engine
        .add_document(1, "dog", DocumentStatus::Actual, &[])
        .unwrap();
    engine
        .add_document(2, "dog", DocumentStatus::Actual, &[])
        .unwrap();

    let before = engine.find_top_documents("cat").unwrap()[0].relevance;
    assert!((before - 3f64.ln()).abs() < 1e-9);

    engine.remove_document(2);
    let after = engine.find_top_documents("cat").unwrap()[0].relevance;
    assert!((after - 2f64.ln()).abs() < 1e-9);
}

/// Unknown ids yield empty frequencies and no-op removals
#[test]
fn test_unknown_id_behaviour() {
    let mut engine = SearchEngine::new("").unwrap();
    assert!(engine.word_frequencies(3).is_empty());
    engine.remove_document(3);
    engine.remove_document_with_policy(ExecutionPolicy::Parallel, 3);
    assert_eq!(engine.document_count(), 0);
}

/// A malformed query is reported even when the id is also unknown
#[test]
fn test_match_query_error_takes_precedence() {
    let mut engine = SearchEngine::new("").unwrap();
    engine
        .add_document(1, "cat dog", DocumentStatus::Actual, &[1])
        .unwrap();
    for policy in [ExecutionPolicy::Sequential, ExecutionPolicy::Parallel] {
        let err = engine
            .match_document_with_policy(policy, "cat --dog", 99)
            .unwrap_err();
        assert!(err.is_invalid_argument(), "{:?}", policy);
        assert!(engine
            .match_document_with_policy(policy, "cat dog", 99)
            .unwrap_err()
            .is_out_of_range());
    }
    assert!(engine.match_document("cat --dog", 99).unwrap_err().is_invalid_argument());
}
