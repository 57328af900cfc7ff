//! The set of characters considered as possible delimiters.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{DelimscanError, Result};

/// Candidates registered on every new set.
pub const DEFAULT_CANDIDATES: &[char] = &[',', ';'];

/// Ordered, duplicate-free set of candidate delimiters.
///
/// Insertion order is kept so that candidates with equal counts are always
/// listed in the order they were registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateSet {
    chars: IndexSet<char>,
}

impl CandidateSet {
    /// Create a set holding the default candidates (comma, semicolon).
    pub fn new() -> Self {
        Self::from_chars(DEFAULT_CANDIDATES.iter().copied())
    }

    /// Create an empty set.
    pub fn empty() -> Self {
        Self {
            chars: IndexSet::new(),
        }
    }

    /// Create a set from characters, dropping duplicates.
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// Add a candidate given as a string.
    ///
    /// Fails with [`DelimscanError::InvalidDelimiter`] unless `value` is
    /// exactly one character. Returns `true` if the candidate was new.
    pub fn add(&mut self, value: &str) -> Result<bool> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(self.insert(ch)),
            _ => Err(DelimscanError::InvalidDelimiter(value.to_string())),
        }
    }

    /// Add a single character. Returns `true` if it was new.
    pub fn insert(&mut self, ch: char) -> bool {
        self.chars.insert(ch)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Position of a candidate in registration order.
    pub fn index_of(&self, ch: char) -> Option<usize> {
        self.chars.get_index_of(&ch)
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get_index(index).copied()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl Default for CandidateSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<char> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::from_chars(iter)
    }
}
