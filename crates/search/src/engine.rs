//! Search engine facade
//!
//! Ties together the document store, the inverted index, the query parser,
//! relevance scoring, top-K selection and matching.
//!
//! # Concurrency contract
//!
//! Read operations (`find_top_documents*`, `match_document*`,
//! `word_frequencies`, iteration) take `&self` and may run concurrently from
//! many threads. `add_document` and `remove_document*` take `&mut self`, so
//! the borrow checker enforces a single writer with no overlapping readers.
//! Wrap the engine in an `RwLock` to share it between readers and a writer.
//!
//! # Predicates
//!
//! Filter predicates receive `(id, status, rating)`. They must be free of side
//! effects and safe to call from several threads at once: the parallel policy
//! invokes them concurrently from the rayon pool, which is why the bound
//! includes `Sync`. Results are unspecified for predicates that keep state.

use crate::index::InvertedIndex;
use crate::matcher;
use crate::query::parse_query;
use crate::ranking::select_top;
use crate::relevance::RelevanceContext;
use crate::store::{average_rating, DocumentData, DocumentIds, DocumentStore};
use crate::tokenizer::{is_valid_term, split_into_terms, StopWords};
use quarry_core::config::DEFAULT_ACCUMULATOR_SHARDS;
use quarry_core::{
    Document, DocumentId, DocumentStatus, Error, ExecutionPolicy, MatchedDocument, QuarryConfig,
    Result,
};
use std::collections::BTreeMap;
use tracing::debug;

/// In-memory TF-IDF search engine
///
/// # Example
///
/// ```
/// use quarry_core::DocumentStatus;
/// use quarry_search::SearchEngine;
///
/// let mut engine = SearchEngine::new("and in the")?;
/// engine.add_document(1, "fluffy cat fluffy tail", DocumentStatus::Actual, &[7, 2, 7])?;
/// engine.add_document(2, "white cat and collar", DocumentStatus::Actual, &[8, -3])?;
///
/// let top = engine.find_top_documents("fluffy cat")?;
/// assert_eq!(top[0].id, 1);
/// # Ok::<(), quarry_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SearchEngine {
    stop_words: StopWords,
    store: DocumentStore,
    index: InvertedIndex,
    accumulator_shards: usize,
}

impl SearchEngine {
    /// Create an engine from space-delimited stop-word text.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if a stop word contains a control character.
    pub fn new(stop_words_text: &str) -> Result<Self> {
        Ok(Self::with_stop_words(StopWords::from_text(stop_words_text)?))
    }

    /// Create an engine from a sequence of stop words.
    ///
    /// Empty and duplicate entries are ignored.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if a stop word contains a control character.
    pub fn from_stop_words<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::with_stop_words(StopWords::from_words(stop_words)?))
    }

    /// Create an engine from a configuration.
    ///
    /// # Errors
    ///
    /// `Config` if the configuration fails validation, `InvalidArgument` if a
    /// stop word contains a control character.
    pub fn with_config(config: &QuarryConfig) -> Result<Self> {
        config.validate()?;
        let mut engine = Self::with_stop_words(StopWords::from_words(&config.stop_words)?);
        engine.accumulator_shards = config.accumulator_shards;
        Ok(engine)
    }

    fn with_stop_words(stop_words: StopWords) -> Self {
        SearchEngine {
            stop_words,
            store: DocumentStore::new(),
            index: InvertedIndex::new(),
            accumulator_shards: DEFAULT_ACCUMULATOR_SHARDS,
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Add a document.
    ///
    /// Every term is validated before anything is written, so a failed call
    /// leaves the engine unchanged.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `id` is negative or already present, or if any
    /// term contains a control character.
    pub fn add_document(
        &mut self,
        id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        if id < 0 {
            return Err(Error::invalid_argument(format!(
                "document id {} is negative",
                id
            )));
        }
        if self.store.contains(id) {
            return Err(Error::invalid_argument(format!(
                "document id {} already exists",
                id
            )));
        }

        let raw_terms = split_into_terms(text);
        if let Some(bad) = raw_terms.iter().find(|term| !is_valid_term(term)) {
            return Err(Error::invalid_argument(format!(
                "word {:?} of document {} is invalid",
                bad, id
            )));
        }
        let terms: Vec<&str> = raw_terms
            .into_iter()
            .filter(|term| !self.stop_words.contains(term))
            .collect();

        let data = DocumentData {
            rating: average_rating(ratings),
            status,
        };
        self.index.insert_document(id, &terms);
        self.store.insert(id, data);

        debug!(
            target: "quarry::index",
            document_id = id,
            terms = terms.len(),
            rating = data.rating,
            status = %status,
            "Document added"
        );
        Ok(())
    }

    /// Remove a document (sequential). No-op for unknown ids.
    pub fn remove_document(&mut self, id: DocumentId) {
        self.remove_document_with_policy(ExecutionPolicy::Sequential, id);
    }

    /// Remove a document from the store, the postings and the reverse index.
    ///
    /// Only the document's own terms are visited. No-op for unknown ids.
    pub fn remove_document_with_policy(&mut self, policy: ExecutionPolicy, id: DocumentId) {
        if self.store.remove(id).is_none() {
            return;
        }
        self.index.remove_document(id, policy);
        debug!(target: "quarry::index", document_id = id, ?policy, "Document removed");
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// Top documents with status [`DocumentStatus::Actual`] (sequential).
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the query is malformed.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_by_status(raw_query, DocumentStatus::Actual)
    }

    /// Top documents with the given status (sequential).
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the query is malformed.
    pub fn find_top_documents_by_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_with(raw_query, move |_, document_status, _| {
            document_status == status
        })
    }

    /// Top documents accepted by `predicate` (sequential).
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the query is malformed.
    pub fn find_top_documents_with<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
    {
        self.find_top_documents_with_policy(ExecutionPolicy::Sequential, raw_query, predicate)
    }

    /// Top documents accepted by `predicate`, evaluated under `policy`.
    ///
    /// At most [`quarry_core::MAX_RESULT_DOCUMENT_COUNT`] documents are
    /// returned, by descending relevance, then descending rating for
    /// relevances within [`quarry_core::RELEVANCE_EPSILON`]. Documents equal
    /// on both keys come back in unspecified order.
    ///
    /// `predicate` must be pure and thread-safe; see the module docs.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the query is malformed.
    pub fn find_top_documents_with_policy<P>(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<Document>>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
    {
        let query = parse_query(raw_query, &self.stop_words, policy)?;
        let matched = self
            .relevance()
            .find_all_documents(policy, &query, &predicate);
        let candidates = matched.len();
        let top = select_top(matched, policy);

        debug!(
            target: "quarry::query",
            ?policy,
            plus_terms = query.plus_terms.len(),
            minus_terms = query.minus_terms.len(),
            candidates,
            returned = top.len(),
            "Query evaluated"
        );
        Ok(top)
    }

    /// Every document accepted by `predicate` that matches the query, with
    /// its relevance, ordered by ascending id and not truncated.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the query is malformed.
    pub fn find_all_documents_with_policy<P>(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<Document>>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
    {
        let query = parse_query(raw_query, &self.stop_words, policy)?;
        Ok(self
            .relevance()
            .find_all_documents(policy, &query, &predicate))
    }

    /// Match a query against one document (sequential).
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `id` is unknown, `InvalidArgument` if the query is
    /// malformed.
    pub fn match_document(&self, raw_query: &str, id: DocumentId) -> Result<MatchedDocument> {
        self.match_document_with_policy(ExecutionPolicy::Sequential, raw_query, id)
    }

    /// Match a query against one document under `policy`.
    ///
    /// Returns the plus-terms found in the document, sorted, or no terms at
    /// all if a minus-term occurs in it, together with the document's status.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the query is malformed, checked first;
    /// `OutOfRange` if `id` is unknown.
    pub fn match_document_with_policy(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        id: DocumentId,
    ) -> Result<MatchedDocument> {
        let query = parse_query(raw_query, &self.stop_words, policy)?;
        let data = self
            .store
            .get(id)
            .ok_or_else(|| Error::out_of_range(format!("document id {} not found", id)))?;
        Ok(matcher::match_document(
            &self.index,
            &query,
            id,
            data.status,
            policy,
        ))
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Number of live documents
    pub fn document_count(&self) -> usize {
        self.store.len()
    }

    /// Term frequencies of a document; empty for unknown ids.
    ///
    /// Each call returns a fresh map owned by the caller.
    pub fn word_frequencies(&self, id: DocumentId) -> BTreeMap<String, f64> {
        self.index
            .term_frequencies(id)
            .cloned()
            .unwrap_or_default()
    }

    /// Live document ids in ascending order
    pub fn document_ids(&self) -> DocumentIds<'_> {
        self.store.ids()
    }

    /// Stop words in effect
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Shard count used by parallel scoring
    pub fn accumulator_shards(&self) -> usize {
        self.accumulator_shards
    }

    fn relevance(&self) -> RelevanceContext<'_> {
        RelevanceContext {
            index: &self.index,
            store: &self.store,
            accumulator_shards: self.accumulator_shards,
        }
    }
}

impl<'a> IntoIterator for &'a SearchEngine {
    type Item = DocumentId;
    type IntoIter = DocumentIds<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.document_ids()
    }
}
