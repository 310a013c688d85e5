//! Quarry - embeddable TF-IDF full-text search index
//!
//! Quarry indexes short text documents, each with a status and an average
//! rating, and answers keyword queries with plus and minus terms. Results are
//! ranked by TF-IDF relevance with rating as the tie-break. Every query,
//! match and removal operation has a sequential and a parallel form that
//! produce the same results.
//!
//! # Quick Start
//!
//! ```
//! use quarry::{DocumentStatus, SearchEngine};
//!
//! let mut engine = SearchEngine::new("and in on")?;
//! engine.add_document(1, "white cat and fancy collar", DocumentStatus::Actual, &[8, -3])?;
//! engine.add_document(2, "fluffy cat fluffy tail", DocumentStatus::Actual, &[7, 2, 7])?;
//!
//! let hits = engine.find_top_documents("fluffy cat -collar")?;
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].id, 2);
//! # Ok::<(), quarry::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `quarry-core`: identifiers, statuses, result records, errors, configuration
//! - `quarry-concurrency`: the sharded accumulator used by parallel queries
//! - `quarry-search`: tokenizer, query parser, inverted index and the engine
//! - `quarry-executor`: batch queries, duplicate removal, request statistics

pub use quarry_concurrency::{ShardKey, ShardedMap};
pub use quarry_core::{
    Document, DocumentId, DocumentStatus, Error, ExecutionPolicy, MatchedDocument, QuarryConfig,
    Result, MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON,
};
pub use quarry_executor::{
    find_duplicates, process_queries, process_queries_joined, remove_duplicates, RequestQueue,
};
pub use quarry_search::{SearchEngine, StopWords};
