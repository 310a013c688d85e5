//! Core types for Quarry
//!
//! This crate defines the foundational types used throughout the system:
//! - DocumentId / DocumentStatus: identity and classification of indexed documents
//! - Document: a ranked search hit (id, relevance, rating)
//! - MatchedDocument: the outcome of matching a query against one document
//! - ExecutionPolicy: sequential vs parallel evaluation
//! - Error: Error type hierarchy
//! - QuarryConfig: engine configuration loaded from TOML

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod types;

pub use config::QuarryConfig;
pub use error::{Error, Result};
pub use types::{
    Document, DocumentId, DocumentStatus, ExecutionPolicy, MatchedDocument,
    MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON,
};
