//! Query parsing
//!
//! Raw query text becomes a [`Query`] of plus-terms and minus-terms that
//! borrow from the text. A leading `-` marks a minus-term. Stop words are
//! dropped from both sides, so a query made only of stop words parses into an
//! empty query rather than an error.

use crate::tokenizer::{is_valid_term, split_into_terms, StopWords};
use quarry_core::{Error, ExecutionPolicy, Result};

/// Parsed query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query<'a> {
    /// Terms that contribute to relevance; sorted and deduplicated
    pub plus_terms: Vec<&'a str>,
    /// Terms that exclude a document. Sorted and deduplicated under the
    /// sequential policy; kept in query order under the parallel policy,
    /// where duplicates only cost a repeated existence check.
    pub minus_terms: Vec<&'a str>,
}

impl<'a> Query<'a> {
    /// Check if there are no plus-terms (the query can match nothing)
    pub fn is_empty(&self) -> bool {
        self.plus_terms.is_empty()
    }
}

struct QueryTerm<'a> {
    data: &'a str,
    is_minus: bool,
    is_stop: bool,
}

fn parse_query_term<'a>(text: &'a str, stop_words: &StopWords) -> Result<QueryTerm<'a>> {
    let (data, is_minus) = match text.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (text, false),
    };
    if data.is_empty() || data.starts_with('-') || !is_valid_term(data) {
        return Err(Error::invalid_argument(format!(
            "query word {:?} is invalid",
            text
        )));
    }
    Ok(QueryTerm {
        data,
        is_minus,
        is_stop: stop_words.contains(data),
    })
}

/// Parse raw query text.
///
/// Any malformed word aborts the whole parse: a word that is empty after
/// stripping the minus sign, starts with a second `-`, or contains a control
/// character.
///
/// Plus-terms are always sorted and deduplicated so no term is scored twice.
/// Minus-terms are deduplicated only under [`ExecutionPolicy::Sequential`].
pub fn parse_query<'a>(
    text: &'a str,
    stop_words: &StopWords,
    policy: ExecutionPolicy,
) -> Result<Query<'a>> {
    let mut query = Query::default();
    for word in split_into_terms(text) {
        let term = parse_query_term(word, stop_words)?;
        if term.is_stop {
            continue;
        }
        if term.is_minus {
            query.minus_terms.push(term.data);
        } else {
            query.plus_terms.push(term.data);
        }
    }

    query.plus_terms.sort_unstable();
    query.plus_terms.dedup();
    if !policy.is_parallel() {
        query.minus_terms.sort_unstable();
        query.minus_terms.dedup();
    }
    Ok(query)
}
