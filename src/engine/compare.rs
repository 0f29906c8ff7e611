//! Equal-run counting and closest-match location.
//!
//! The equal-run counter reports how many leading characters two sequences
//! share from given offsets. The closest-match locator builds on it to find
//! the dictionary entry whose key shares the longest run with the source text
//! at a given position, either by linear scan (unsorted dictionaries) or by
//! an incremental probe-widening binary search (sorted dictionaries).

use std::cmp::Ordering;

use crate::buffer::EditBuffer;
use crate::dict::{self, Token};

/// An indexable character sequence.
///
/// One generic comparison implementation serves every concrete container;
/// adapters for char slices and [`EditBuffer`] live below.
pub trait CharSeq {
    /// Number of characters in the sequence.
    fn len(&self) -> usize;

    /// Character at `index`. Callers must pass `index < self.len()`.
    fn at(&self, index: usize) -> char;

    /// Whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CharSeq for [char] {
    fn len(&self) -> usize {
        <[char]>::len(self)
    }

    fn at(&self, index: usize) -> char {
        self[index]
    }
}

impl CharSeq for EditBuffer {
    fn len(&self) -> usize {
        EditBuffer::len(self)
    }

    fn at(&self, index: usize) -> char {
        self.as_chars()[index]
    }
}

/// Count the leading characters that are pairwise equal between `a` starting
/// at `off_a` and `b` starting at `off_b`.
///
/// Counting stops at the first mismatch, at `max_len` characters, or when
/// either sequence runs out, whichever comes first. `max_len = None` defaults
/// to the shorter remaining length. Offsets at or beyond a sequence's end
/// yield 0.
pub fn equal_count<A, B>(a: &A, off_a: usize, b: &B, off_b: usize, max_len: Option<usize>) -> usize
where
    A: CharSeq + ?Sized,
    B: CharSeq + ?Sized,
{
    if off_a >= a.len() || off_b >= b.len() {
        return 0;
    }
    let available = (a.len() - off_a).min(b.len() - off_b);
    let limit = max_len.map_or(available, |m| m.min(available));

    let mut count = 0;
    while count < limit && a.at(off_a + count) == b.at(off_b + count) {
        count += 1;
    }
    count
}

/// Equal-run length between `source` at `offset` and the whole of `key`.
pub(crate) fn key_run(source: &[char], offset: usize, key: &str) -> usize {
    if offset >= source.len() {
        return 0;
    }
    source[offset..]
        .iter()
        .zip(key.chars())
        .take_while(|(s, k)| **s == *k)
        .count()
}

/// Find the dictionary entry whose key is the longest match to `source`
/// starting at `offset`, under ordinal key order.
///
/// Returns `None` for an empty dictionary, an offset at or beyond the source
/// end, or when no key matches even a single leading character. Ties at equal
/// run length keep the first entry reached.
pub fn closest_match<'d>(
    source: &[char],
    offset: usize,
    dict: &'d [Token],
    is_sorted: bool,
) -> Option<&'d Token> {
    closest_match_by(source, offset, dict, is_sorted, str::cmp)
}

/// [`closest_match`] with a caller-supplied key comparator.
///
/// When `is_sorted` is true the dictionary must be sorted under the same
/// comparator; a misordered dictionary produces silently wrong matches, not
/// an error.
pub fn closest_match_by<'d>(
    source: &[char],
    offset: usize,
    dict: &'d [Token],
    is_sorted: bool,
    mut cmp: impl FnMut(&str, &str) -> Ordering,
) -> Option<&'d Token> {
    if dict.is_empty() || offset >= source.len() {
        return None;
    }

    if is_sorted {
        closest_match_sorted(source, offset, dict, &mut cmp)
    } else {
        closest_match_linear(source, offset, dict)
    }
}

/// Linear scan: every entry is probed and the greatest equal-run wins.
///
/// A run that exhausts the source returns immediately since no entry can
/// match more characters. A run that merely exhausts its own key is recorded
/// like any other: a longer key sharing the same stem can still beat it,
/// which keeps this scan agreeing with the sorted-mode search.
fn closest_match_linear<'d>(source: &[char], offset: usize, dict: &'d [Token]) -> Option<&'d Token> {
    let remaining = source.len() - offset;
    let mut best: Option<usize> = None;
    let mut best_run = 0usize;

    for (index, token) in dict.iter().enumerate() {
        let run = key_run(source, offset, &token.key);
        if run == 0 {
            continue;
        }
        if run == remaining {
            return Some(token);
        }
        if run > best_run {
            best_run = run;
            best = Some(index);
        }
    }

    best.map(|index| &dict[index])
}

/// Incremental probe-widening binary search over a sorted dictionary.
///
/// The probe starts one character long. Each iteration binary-searches for
/// the source substring of the current probe length; the entry at the
/// resulting index (exact hit or insertion point) is scored with the equal-run
/// counter. A run that reaches the probe length widens the next probe to
/// `run + 1`, so confirmed characters are never re-searched; a shorter run
/// means no entry can improve and the best recorded candidate is returned.
fn closest_match_sorted<'d>(
    source: &[char],
    offset: usize,
    dict: &'d [Token],
    mut cmp: impl FnMut(&str, &str) -> Ordering,
) -> Option<&'d Token> {
    let remaining = source.len() - offset;
    let mut best: Option<usize> = None;
    let mut best_run = 0usize;
    let mut probe_len = 1usize;

    loop {
        let clamped = probe_len.min(remaining);
        let probe: String = source[offset..offset + clamped].iter().collect();

        let index = match dict::probe_search(dict, &probe, dict::token_key, &mut cmp) {
            Ok(index) | Err(index) => index,
        };
        if index >= dict.len() {
            // Probe sorts past every key; earlier iterations hold the answer.
            break;
        }

        let run = key_run(source, offset, &dict[index].key);
        if run > best_run {
            best_run = run;
            best = Some(index);
        }
        if run == remaining {
            // Source exhausted; no longer match is possible.
            return Some(&dict[index]);
        }
        if run >= probe_len {
            probe_len = run + 1;
        } else {
            break;
        }
    }

    best.map(|index| &dict[index])
}
