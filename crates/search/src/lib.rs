//! Full-text search for Quarry
//!
//! This crate provides:
//! - Whitespace tokenizer and stop-word set
//! - Query parser (plus-terms, minus-terms)
//! - Document store and inverted index with a reverse per-document index
//! - TF-IDF relevance, sequential and parallel
//! - Top-K selection and per-document matching
//! - SearchEngine facade tying it all together
//!
//! # Usage
//!
//! ```
//! use quarry_core::{DocumentStatus, ExecutionPolicy};
//! use quarry_search::SearchEngine;
//!
//! let mut engine = SearchEngine::new("in the")?;
//! engine.add_document(42, "cat in the city", DocumentStatus::Actual, &[1, 2, 3])?;
//!
//! let hits = engine.find_top_documents_with_policy(
//!     ExecutionPolicy::Parallel,
//!     "city -dog",
//!     |_, status, _| status == DocumentStatus::Actual,
//! )?;
//! assert_eq!(hits[0].id, 42);
//! # Ok::<(), quarry_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod index;
pub mod matcher;
pub mod query;
pub mod ranking;
pub mod relevance;
pub mod store;
pub mod tokenizer;

// Re-export commonly used types
pub use engine::SearchEngine;
pub use index::{InvertedIndex, PostingList, TermFrequencies};
pub use query::{parse_query, Query};
pub use ranking::select_top;
pub use store::{DocumentData, DocumentIds, DocumentStore};
pub use tokenizer::{is_valid_term, split_into_terms, StopWords};
