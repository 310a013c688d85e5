//! Configuration file to running engine

use quarry::{DocumentStatus, Error, QuarryConfig, RequestQueue, SearchEngine};
use std::fs;
use tempfile::TempDir;

#[test]
fn engine_from_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quarry.toml");
    fs::write(
        &path,
        r#"
stop_words = ["in", "the"]
accumulator_shards = 4
request_window = 2
"#,
    )
    .unwrap();

    let config = QuarryConfig::from_file(&path).unwrap();
    let mut engine = SearchEngine::with_config(&config).unwrap();
    assert_eq!(engine.accumulator_shards(), 4);
    assert_eq!(engine.stop_words().len(), 2);

    engine
        .add_document(42, "cat in the city", DocumentStatus::Actual, &[1, 2, 3])
        .unwrap();
    assert!(engine.find_top_documents("in").unwrap().is_empty());
    let hits = engine.find_top_documents("cat").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 42);
    assert_eq!(hits[0].rating, 2);

    let mut queue = RequestQueue::from_config(&engine, &config).unwrap();
    queue.add_find_request("dog").unwrap();
    queue.add_find_request("dog").unwrap();
    queue.add_find_request("cat").unwrap();
    assert_eq!(queue.capacity(), 2);
    assert_eq!(queue.no_result_requests(), 1);
}

#[test]
fn default_config_text_parses() {
    let config = QuarryConfig::from_toml_str(QuarryConfig::default_toml()).unwrap();
    assert!(config.validate().is_ok());
    let engine = SearchEngine::with_config(&config).unwrap();
    assert_eq!(engine.document_count(), 0);
}

#[test]
fn invalid_config_is_rejected() {
    let err = QuarryConfig::from_toml_str("accumulator_shards = 0").unwrap_err();
    assert!(matches!(err, Error::Config(_)));

    let config = QuarryConfig::default().with_accumulator_shards(0);
    let err = SearchEngine::with_config(&config).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}
