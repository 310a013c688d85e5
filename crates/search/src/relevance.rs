//! TF-IDF relevance over the inverted index
//!
//! score(d) = sum over plus-terms t with a posting in d of TF(t, d) * IDF(t).
//! A document with a posting for any minus-term is dropped regardless of its
//! score or of the predicate.
//!
//! Both algorithms produce the same document set; scores agree up to
//! floating-point summation order.

use crate::index::InvertedIndex;
use crate::query::Query;
use crate::store::DocumentStore;
use quarry_concurrency::ShardedMap;
use quarry_core::{Document, DocumentId, DocumentStatus, ExecutionPolicy};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Inputs shared by both relevance algorithms
#[derive(Clone, Copy)]
pub struct RelevanceContext<'a> {
    /// Term postings
    pub index: &'a InvertedIndex,
    /// Document metadata, also the source of N for IDF
    pub store: &'a DocumentStore,
    /// Shard count of the parallel accumulator
    pub accumulator_shards: usize,
}

impl<'a> RelevanceContext<'a> {
    /// Score every document matching `query` and accepted by `predicate`.
    ///
    /// Output is ordered by ascending document id.
    pub fn find_all_documents<P>(
        &self,
        policy: ExecutionPolicy,
        query: &Query<'_>,
        predicate: &P,
    ) -> Vec<Document>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
    {
        match policy {
            ExecutionPolicy::Sequential => self.find_all_sequential(query, predicate),
            ExecutionPolicy::Parallel => self.find_all_parallel(query, predicate),
        }
    }

    fn find_all_sequential<P>(&self, query: &Query<'_>, predicate: &P) -> Vec<Document>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool,
    {
        let total_docs = self.store.len();
        let mut relevance: BTreeMap<DocumentId, f64> = BTreeMap::new();

        for term in &query.plus_terms {
            let Some(postings) = self.index.postings(term) else {
                continue;
            };
            let idf = self.index.inverse_document_freq(term, total_docs);
            for (&id, &tf) in postings {
                let Some(data) = self.store.get(id) else {
                    continue;
                };
                if predicate(id, data.status, data.rating) {
                    *relevance.entry(id).or_insert(0.0) += tf * idf;
                }
            }
        }

        for term in &query.minus_terms {
            let Some(postings) = self.index.postings(term) else {
                continue;
            };
            for id in postings.keys() {
                relevance.remove(id);
            }
        }

        relevance
            .into_iter()
            .filter_map(|(id, score)| self.to_document(id, score))
            .collect()
    }

    fn find_all_parallel<P>(&self, query: &Query<'_>, predicate: &P) -> Vec<Document>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
    {
        let total_docs = self.store.len();
        let relevance: ShardedMap<DocumentId, f64> = ShardedMap::new(self.accumulator_shards);

        // Plus-terms are deduplicated by the parser, so each term is scored once
        query.plus_terms.par_iter().for_each(|term| {
            let Some(postings) = self.index.postings(term) else {
                return;
            };
            let idf = self.index.inverse_document_freq(term, total_docs);
            postings.par_iter().for_each(|(&id, &tf)| {
                let Some(data) = self.store.get(id) else {
                    return;
                };
                if predicate(id, data.status, data.rating) {
                    *relevance.access(id) += tf * idf;
                }
            });
        });

        query.minus_terms.par_iter().for_each(|term| {
            if let Some(postings) = self.index.postings(term) {
                for &id in postings.keys() {
                    relevance.erase(id);
                }
            }
        });

        relevance
            .into_map()
            .into_par_iter()
            .filter_map(|(id, score)| self.to_document(id, score))
            .collect()
    }

    fn to_document(&self, id: DocumentId, relevance: f64) -> Option<Document> {
        self.store
            .get(id)
            .map(|data| Document::new(id, relevance, data.rating))
    }
}
