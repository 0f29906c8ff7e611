//! Token dictionary — the (search-key, replacement-value) pairs driving a
//! replace operation.
//!
//! A dictionary is just a slice of [`Token`]s owned by the caller. The engine
//! may sort it in place (see [`crate::engine::replace_tokens`]); nothing here
//! holds state between calls.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A single search-key/replacement-value pair.
///
/// Keys need not be unique across a dictionary; when duplicates exist, the
/// first entry reached by the active search strategy wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The literal text to search for.
    pub key: String,
    /// The text spliced in where the key matches.
    pub value: String,
}

impl Token {
    /// Create a token pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Key length in characters (code points), not bytes.
    pub fn key_len(&self) -> usize {
        self.key.chars().count()
    }
}

/// Sort a dictionary in place by key, using ordinal (code-point) order.
///
/// This is the order the sorted-mode binary search assumes.
pub fn sort_by_key(dict: &mut [Token]) {
    dict.sort_by(|a, b| a.key.cmp(&b.key));
}

/// Sort a dictionary in place by key with a caller-supplied comparator.
///
/// The same comparator must be passed to the sorted-mode search functions,
/// otherwise the binary search's ordering assumption is violated.
pub fn sort_by_key_with(dict: &mut [Token], mut cmp: impl FnMut(&str, &str) -> Ordering) {
    dict.sort_by(|a, b| cmp(&a.key, &b.key));
}

/// Key accessor usable as the `key_of` argument to [`probe_search`].
pub fn token_key(token: &Token) -> &str {
    &token.key
}

/// Binary search over sorted entries, parameterized by key extraction and
/// ordering.
///
/// Returns `Ok(index)` of an entry whose key compares equal to `probe`, or
/// `Err(insertion_point)` — the index where an entry with that key would sit
/// to keep the slice sorted.
pub fn probe_search<T>(
    entries: &[T],
    probe: &str,
    key_of: fn(&T) -> &str,
    mut cmp: impl FnMut(&str, &str) -> Ordering,
) -> Result<usize, usize> {
    entries.binary_search_by(|entry| cmp(key_of(entry), probe))
}
