//! Document store: id -> immutable metadata

use quarry_core::{DocumentId, DocumentStatus};
use std::collections::btree_map::{self, BTreeMap};
use std::iter::Copied;

/// Metadata recorded for a document when it is added
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentData {
    /// Average of the supplied ratings
    pub rating: i32,
    /// Classification tag
    pub status: DocumentStatus,
}

/// Ascending iterator over live document ids
pub type DocumentIds<'a> = Copied<btree_map::Keys<'a, DocumentId, DocumentData>>;

/// Ordered map of live documents
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: BTreeMap<DocumentId, DocumentData>,
}

impl DocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert metadata for a new id. Returns false if the id was already present,
    /// in which case the existing entry is left untouched.
    pub fn insert(&mut self, id: DocumentId, data: DocumentData) -> bool {
        match self.documents.entry(id) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(data);
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    /// Look up a document
    #[inline]
    pub fn get(&self, id: DocumentId) -> Option<&DocumentData> {
        self.documents.get(&id)
    }

    /// Check if a document is live
    #[inline]
    pub fn contains(&self, id: DocumentId) -> bool {
        self.documents.contains_key(&id)
    }

    /// Remove a document, returning its metadata
    pub fn remove(&mut self, id: DocumentId) -> Option<DocumentData> {
        self.documents.remove(&id)
    }

    /// Number of live documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Live ids in ascending order
    pub fn ids(&self) -> DocumentIds<'_> {
        self.documents.keys().copied()
    }
}

/// Integer average of ratings, truncated toward zero; 0 when there are none.
pub fn average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    (sum / ratings.len() as i64) as i32
}
