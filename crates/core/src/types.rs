//! Shared search types
//!
//! ## Design
//!
//! - `DocumentId`: caller-supplied signed id; negative values are rejected at add time
//! - `DocumentStatus`: immutable classification tag, used only as a filter value
//! - `Document`: a ranked hit returned by top-K queries
//! - `MatchedDocument`: matched query terms plus the document's status
//! - `ExecutionPolicy`: selects the sequential or the parallel algorithm

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-supplied document identifier
///
/// Signed so that callers can pass negative ids and get `InvalidArgument`
/// back instead of a silent wrap-around.
pub type DocumentId = i32;

/// Maximum number of documents returned by a top-K query
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Two relevance values closer than this are considered equal when ranking
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// Classification tag attached to a document when it is added
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum DocumentStatus {
    /// Current, searchable content (the default filter)
    #[default]
    Actual,
    /// Content that no longer matters
    Irrelevant,
    /// Content blocked by moderation
    Banned,
    /// Content marked as removed by the caller
    Removed,
}

impl DocumentStatus {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Actual => "Actual",
            DocumentStatus::Irrelevant => "Irrelevant",
            DocumentStatus::Banned => "Banned",
            DocumentStatus::Removed => "Removed",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A ranked search result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier
    pub id: DocumentId,
    /// TF-IDF relevance for the query that produced this hit
    pub relevance: f64,
    /// Average rating recorded when the document was added
    pub rating: i32,
}

impl Document {
    /// Create a new ranked document
    pub fn new(id: DocumentId, relevance: f64, rating: i32) -> Self {
        Document {
            id,
            relevance,
            rating,
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id, self.relevance, self.rating
        )
    }
}

/// Outcome of matching a query against a single document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedDocument {
    /// Plus-terms of the query found in the document, sorted and deduplicated.
    /// Empty when any minus-term occurs in the document.
    pub terms: Vec<String>,
    /// Status of the matched document
    pub status: DocumentStatus,
}

/// Selects how an operation distributes its work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExecutionPolicy {
    /// Single-threaded evaluation on the calling thread
    #[default]
    Sequential,
    /// Fork-join evaluation on the rayon worker pool; the call blocks until done
    Parallel,
}

impl ExecutionPolicy {
    /// Check if this is the parallel policy
    pub fn is_parallel(&self) -> bool {
        matches!(self, ExecutionPolicy::Parallel)
    }
}
