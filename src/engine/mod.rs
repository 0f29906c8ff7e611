//! Greedy longest-match token replacement engine.
//!
//! # Architecture
//!
//! [`replace_tokens`] orchestrates one pass over a mutable buffer:
//!
//! 1. Sort the dictionary by key unless the caller forbids it or it already
//!    is sorted (the sort mutates the caller's slice — a documented side
//!    effect).
//! 2. Compute the prefix shared by every key via
//!    [`commonality::common_prefix`].
//! 3. With a non-empty shared prefix, jump between its literal occurrences
//!    with [`EditBuffer::index_of`]; without one, probe every position. At
//!    each candidate, [`compare::closest_match_by`] picks the entry with the
//!    longest equal-run, and the buffer is spliced in place.
//!
//! ```text
//! replace_tokens → common_prefix (once)
//!                → closest_match per candidate position
//!                → EditBuffer::splice
//! ```
//!
//! Everything is synchronous and call-local; no state survives a call.

pub mod commonality;
pub mod compare;

use std::cmp::Ordering;

use tracing::debug;

use crate::buffer::EditBuffer;
use crate::dict::{self, Token};
use crate::error::{ReplaceError, ReplaceResult};

/// Rewrite `buf` in place, splicing every closest-match occurrence of a
/// dictionary key with its value. Returns the number of splices performed.
///
/// `is_sorted` declares that `dict` is already in non-decreasing ordinal key
/// order; declaring it falsely yields silently wrong matches (the binary
/// search trusts it — that is the point of skipping the sort). When neither
/// `is_sorted` nor `preserve_order` is set, `dict` is sorted in place first,
/// a caller-visible side effect.
pub fn replace_tokens(
    dict: &mut [Token],
    is_sorted: bool,
    preserve_order: bool,
    buf: &mut EditBuffer,
) -> usize {
    replace_tokens_with(dict, is_sorted, preserve_order, buf, str::cmp)
}

/// [`replace_tokens`] under a caller-supplied key comparator.
///
/// The comparator drives both the optional in-place sort and the sorted-mode
/// binary search, so the two always agree on key order.
pub fn replace_tokens_with(
    dict: &mut [Token],
    mut is_sorted: bool,
    preserve_order: bool,
    buf: &mut EditBuffer,
    mut cmp: impl FnMut(&str, &str) -> Ordering,
) -> usize {
    if dict.is_empty() {
        return 0;
    }

    if !preserve_order && !is_sorted {
        dict::sort_by_key_with(dict, &mut cmp);
        is_sorted = true;
    }

    let keys: Vec<&str> = dict.iter().map(|t| t.key.as_str()).collect();
    let prefix = commonality::common_prefix(&keys, 0);

    let mut replaced = 0usize;
    if prefix.is_empty() {
        debug!(entries = dict.len(), "keys share no prefix, probing every position");
        let mut index = 0usize;
        while index < buf.len() {
            match compare::closest_match_by(buf.as_chars(), index, dict, is_sorted, &mut cmp) {
                Some(token) => {
                    index = splice_match(buf, index, token, &mut replaced);
                }
                None => index += 1,
            }
        }
    } else {
        debug!(prefix = %prefix, "scanning for shared key prefix");
        let mut from = 0usize;
        while let Some(index) = buf.index_of(&prefix, from) {
            match compare::closest_match_by(buf.as_chars(), index, dict, is_sorted, &mut cmp) {
                Some(token) => {
                    from = splice_match(buf, index, token, &mut replaced);
                }
                // The prefix matched but no key did; step one character so
                // overlapping prefix occurrences cannot loop forever.
                None => from = index + 1,
            }
        }
    }

    debug!(replaced, "token replacement complete");
    replaced
}

/// Splice `token`'s value over its key span at `index` and return the scan
/// position just past the inserted value.
///
/// The span end is capped at the buffer length: a match may have been
/// produced by the source running out mid-key.
fn splice_match(buf: &mut EditBuffer, index: usize, token: &Token, replaced: &mut usize) -> usize {
    let end = (index + token.key_len()).min(buf.len());
    debug!(key = %token.key, at = index, "splicing replacement");
    buf.splice(index, end, &token.value);
    *replaced += 1;
    index + token.value.chars().count()
}

/// Replace every literal occurrence of `search` in `buf` with `replacement`,
/// scanning left to right and resuming after each inserted value. Returns
/// the occurrence count. An empty search string never matches.
pub fn replace_all(buf: &mut EditBuffer, search: &str, replacement: &str) -> usize {
    if search.is_empty() {
        return 0;
    }
    let search_len = search.chars().count();
    let value_len = replacement.chars().count();

    let mut count = 0usize;
    let mut from = 0usize;
    while let Some(index) = buf.index_of(search, from) {
        buf.splice(index, index + search_len, replacement);
        from = index + value_len;
        count += 1;
    }
    count
}

/// Apply [`replace_all`] for each search/replacement pair in order. Returns
/// the total occurrence count.
///
/// # Errors
///
/// `PairLengthMismatch` when the two lists differ in length; the buffer is
/// untouched in that case.
pub fn replace_each(
    buf: &mut EditBuffer,
    searches: &[&str],
    replacements: &[&str],
) -> ReplaceResult<usize> {
    if searches.len() != replacements.len() {
        return Err(ReplaceError::PairLengthMismatch {
            searches: searches.len(),
            replacements: replacements.len(),
        });
    }

    let mut count = 0usize;
    for (search, replacement) in searches.iter().zip(replacements) {
        count += replace_all(buf, search, replacement);
    }
    Ok(count)
}
