//! # Quarry Executor
//!
//! Workloads built purely on the public [`SearchEngine`] surface:
//! - [`process_queries`] / [`process_queries_joined`] - batch query runner
//! - [`find_duplicates`] / [`remove_duplicates`] - duplicate document detector
//! - [`RequestQueue`] - sliding-window statistics of empty results
//!
//! [`SearchEngine`]: quarry_search::SearchEngine

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod dedup;
pub mod request_queue;

pub use batch::{process_queries, process_queries_joined};
pub use dedup::{find_duplicates, remove_duplicates};
pub use request_queue::RequestQueue;
