//! Concurrency primitives for Quarry
//!
//! This crate provides the sharded accumulator used by parallel query
//! evaluation:
//! - ShardedMap: fixed number of independently locked ordered maps
//! - ShardKey: deterministic key-to-shard partitioning for integer keys
//!
//! The accumulator protects only its own contents. It never guards the
//! inverted index or the document store.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod sharded;

pub use sharded::{Access, ShardKey, ShardedMap};
