//! Whitespace tokenizer and stop-word set
//!
//! Terms are separated by single spaces. Runs of spaces collapse, and leading
//! or trailing spaces are ignored. Nothing else is a separator: a tab or a
//! newline is a control character and makes the term invalid.

use quarry_core::{Error, Result};
use std::collections::BTreeSet;

/// Split text into space-delimited terms.
///
/// # Example
///
/// ```
/// use quarry_search::tokenizer::split_into_terms;
///
/// assert_eq!(split_into_terms("  white cat  "), vec!["white", "cat"]);
/// assert!(split_into_terms("").is_empty());
/// ```
pub fn split_into_terms(text: &str) -> Vec<&str> {
    text.split(' ').filter(|term| !term.is_empty()).collect()
}

/// A term is valid when it contains no control character (code point < 0x20).
#[inline]
pub fn is_valid_term(term: &str) -> bool {
    !term.chars().any(|c| (c as u32) < 0x20)
}

/// Set of terms excluded from indexing and querying.
///
/// Empty entries and duplicates are dropped on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    /// Create an empty stop-word set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from space-delimited text.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if any stop word contains a control character.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_words(split_into_terms(text))
    }

    /// Build from any sequence of words.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if any stop word contains a control character.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            if !is_valid_term(word) {
                return Err(Error::invalid_argument(format!(
                    "stop word {:?} contains a control character",
                    word
                )));
            }
            set.insert(word.to_string());
        }
        Ok(Self { words: set })
    }

    /// Check if a term is a stop word
    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(term)
    }

    /// Number of distinct stop words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if there are no stop words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate stop words in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
