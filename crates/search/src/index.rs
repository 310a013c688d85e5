//! Inverted index with a per-document reverse index
//!
//! This module provides:
//! - Forward postings: term -> (document id -> term frequency)
//! - Reverse index: document id -> (term -> term frequency)
//! - Removal that touches only the terms of the removed document
//!
//! # Invariants
//!
//! - A term has a posting list iff at least one live document contains it;
//!   empty posting lists are dropped, never kept around.
//! - Forward and reverse entries for a document always hold the same values.
//! - Term frequency = occurrences of the term / total terms of the document,
//!   so the frequencies of one document sum to 1.0.
//!
//! # Thread Safety
//!
//! Reads take `&self` and may run concurrently. Mutation takes `&mut self`;
//! the index itself is never locked.

use quarry_core::{DocumentId, ExecutionPolicy};
use rayon::prelude::*;
use std::collections::BTreeMap;

// ============================================================================
// PostingList
// ============================================================================

/// Documents containing a term, with the term's frequency in each
pub type PostingList = BTreeMap<DocumentId, f64>;

/// Terms of one document, with their frequencies
pub type TermFrequencies = BTreeMap<String, f64>;

// ============================================================================
// InvertedIndex
// ============================================================================

/// Forward and reverse term index
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    /// Term -> PostingList mapping
    postings: BTreeMap<String, PostingList>,

    /// DocumentId -> terms of that document, for removal without a vocabulary scan
    doc_terms: BTreeMap<DocumentId, TermFrequencies>,
}

impl InvertedIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Number of distinct terms with at least one posting
    pub fn vocabulary_len(&self) -> usize {
        self.postings.len()
    }

    /// Number of documents known to the index
    pub fn document_len(&self) -> usize {
        self.doc_terms.len()
    }

    /// Number of documents with a posting for `term`
    pub fn doc_freq(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, PostingList::len)
    }

    /// IDF(t) = ln(N / df(t)).
    ///
    /// Only meaningful for terms that have postings; callers check first.
    pub fn inverse_document_freq(&self, term: &str, total_docs: usize) -> f64 {
        (total_docs as f64 / self.doc_freq(term) as f64).ln()
    }

    // ========================================================================
    // Index Updates
    // ========================================================================

    /// Index a document's terms (stop words already removed).
    ///
    /// The caller guarantees `id` is not yet indexed and every term is valid.
    /// A document without terms still gets an (empty) reverse entry.
    pub fn insert_document(&mut self, id: DocumentId, terms: &[&str]) {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for term in terms {
            *counts.entry(*term).or_insert(0) += 1;
        }

        let total = terms.len() as f64;
        let mut frequencies = TermFrequencies::new();
        for (term, count) in counts {
            let tf = count as f64 / total;
            self.postings
                .entry(term.to_string())
                .or_default()
                .insert(id, tf);
            frequencies.insert(term.to_string(), tf);
        }
        self.doc_terms.insert(id, frequencies);
    }

    /// Strip every posting of `id`.
    ///
    /// Uses the reverse index to visit only the document's own terms. Under
    /// [`ExecutionPolicy::Parallel`] the affected posting lists are detached
    /// from the vocabulary, erased from concurrently, and reattached.
    ///
    /// Returns false (and does nothing) if `id` is not indexed.
    pub fn remove_document(&mut self, id: DocumentId, policy: ExecutionPolicy) -> bool {
        let Some(terms) = self.doc_terms.remove(&id) else {
            return false;
        };

        match policy {
            ExecutionPolicy::Sequential => {
                for term in terms.keys() {
                    if let Some(list) = self.postings.get_mut(term) {
                        list.remove(&id);
                        if list.is_empty() {
                            self.postings.remove(term);
                        }
                    }
                }
            }
            ExecutionPolicy::Parallel => {
                let mut detached: Vec<(String, PostingList)> = terms
                    .keys()
                    .filter_map(|term| self.postings.remove_entry(term))
                    .collect();
                detached.par_iter_mut().for_each(|(_, list)| {
                    list.remove(&id);
                });
                self.postings
                    .extend(detached.into_iter().filter(|(_, list)| !list.is_empty()));
            }
        }
        true
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// Posting list of a term, or None if no live document contains it
    pub fn postings(&self, term: &str) -> Option<&PostingList> {
        self.postings.get(term)
    }

    /// Check whether `id` has a posting for `term`
    pub fn has_posting(&self, term: &str, id: DocumentId) -> bool {
        self.postings
            .get(term)
            .is_some_and(|list| list.contains_key(&id))
    }

    /// Terms of a document and their frequencies
    pub fn term_frequencies(&self, id: DocumentId) -> Option<&TermFrequencies> {
        self.doc_terms.get(&id)
    }

    /// All indexed terms in ascending order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }
}

// ============================================================================
// Tests
// ============================================================================
