//! Request statistics
//!
//! Wraps queries against an engine and remembers, for the most recent
//! requests, whether each one came back empty. The window holds at most
//! `capacity` requests; the oldest is evicted on overflow.

use quarry_core::config::DEFAULT_REQUEST_WINDOW;
use quarry_core::{Document, DocumentId, DocumentStatus, QuarryConfig, Result};
use quarry_search::SearchEngine;
use std::collections::VecDeque;

/// Sliding window of "returned nothing" flags over recent requests
#[derive(Debug)]
pub struct RequestQueue<'a> {
    engine: &'a SearchEngine,
    requests: VecDeque<bool>,
    capacity: usize,
    no_result: usize,
}

impl<'a> RequestQueue<'a> {
    /// Create a tracker with the default window of 1440 requests.
    pub fn new(engine: &'a SearchEngine) -> Self {
        Self::with_capacity(engine, DEFAULT_REQUEST_WINDOW)
    }

    /// Create a tracker with a custom window (at least one request).
    pub fn with_capacity(engine: &'a SearchEngine, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        RequestQueue {
            engine,
            requests: VecDeque::with_capacity(capacity),
            capacity,
            no_result: 0,
        }
    }

    /// Create a tracker sized by `config.request_window`.
    ///
    /// # Errors
    ///
    /// `Config` if the configuration fails validation.
    pub fn from_config(engine: &'a SearchEngine, config: &QuarryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_capacity(engine, config.request_window))
    }

    /// Query with the default `Actual` status filter and record the outcome.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the query is malformed; nothing is recorded.
    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        let result = self.engine.find_top_documents(raw_query)?;
        self.record(result.is_empty());
        Ok(result)
    }

    /// Query documents with `status` and record the outcome.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the query is malformed; nothing is recorded.
    pub fn add_find_request_by_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        let result = self.engine.find_top_documents_by_status(raw_query, status)?;
        self.record(result.is_empty());
        Ok(result)
    }

    /// Query documents accepted by `predicate` and record the outcome.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the query is malformed; nothing is recorded.
    pub fn add_find_request_with<P>(&mut self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
    {
        let result = self.engine.find_top_documents_with(raw_query, predicate)?;
        self.record(result.is_empty());
        Ok(result)
    }

    /// How many requests in the current window returned nothing
    pub fn no_result_requests(&self) -> usize {
        self.no_result
    }

    /// Number of requests currently in the window
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Check if no request has been recorded
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Window capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn record(&mut self, was_empty: bool) {
        if self.requests.len() == self.capacity {
            if let Some(true) = self.requests.pop_front() {
                self.no_result -= 1;
            }
        }
        self.requests.push_back(was_empty);
        if was_empty {
            self.no_result += 1;
        }
    }
}
