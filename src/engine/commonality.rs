//! Common affix discovery across string groups.
//!
//! Finds the longest run of characters that every string in a collection
//! shares at a given position — the shared prefix of all dictionary keys is
//! what lets the replacer skip over non-candidate text. The generalized
//! [`common_run`] scans forward or backward from absolute or end-relative
//! offsets within optional index bounds; [`common_prefix`] and
//! [`common_suffix`] are the two configurations callers actually want.

use crate::error::{ReplaceError, ReplaceResult};

/// Length of the longest run of characters identical across every string.
///
/// `start_offset` selects where the run begins: an absolute index into each
/// string, or — when `start_at_end` is true — a distance back from each
/// string's final character. `forward` selects the scan direction from that
/// starting position. `min_index` and `max_index` (exclusive) bound the
/// absolute indices the scan may visit.
///
/// An empty collection yields 0. A single-element collection yields the full
/// span available to it. Any string too short for the starting position caps
/// the run at 0.
///
/// # Errors
///
/// `StartBelowMin` when `start_offset < min_index`; `MaxBelowStart` when
/// `max_index < start_offset`. Bounds are validated before any scanning.
pub fn common_run<S: AsRef<str>>(
    min_index: usize,
    max_index: usize,
    start_offset: usize,
    strings: &[S],
    forward: bool,
    start_at_end: bool,
) -> ReplaceResult<usize> {
    if start_offset < min_index {
        return Err(ReplaceError::StartBelowMin {
            start: start_offset,
            min: min_index,
        });
    }
    if max_index < start_offset {
        return Err(ReplaceError::MaxBelowStart {
            max: max_index,
            start: start_offset,
        });
    }
    if strings.is_empty() {
        return Ok(0);
    }

    let seqs: Vec<Vec<char>> = strings
        .iter()
        .map(|s| s.as_ref().chars().collect())
        .collect();

    // Absolute index of the run's n-th character within a string of `len`
    // characters, or None when the walk leaves the string.
    let position = |len: usize, n: usize| -> Option<usize> {
        let base = if start_at_end {
            len.checked_sub(1 + start_offset)?
        } else {
            start_offset
        };
        let pos = if forward {
            base.checked_add(n)?
        } else {
            base.checked_sub(n)?
        };
        (pos >= min_index && pos < max_index && pos < len).then_some(pos)
    };

    let first = &seqs[0];
    let mut run = 0usize;
    'grow: loop {
        let Some(pos) = position(first.len(), run) else {
            break;
        };
        let expected = first[pos];
        for seq in &seqs[1..] {
            match position(seq.len(), run) {
                Some(pos) if seq[pos] == expected => {}
                _ => break 'grow,
            }
        }
        run += 1;
    }
    Ok(run)
}

/// The longest substring shared by every string starting at `start_offset`.
///
/// Materialized from the first string, which by definition contains it. An
/// empty collection, or an offset past any member, yields the empty string.
pub fn common_prefix<S: AsRef<str>>(strings: &[S], start_offset: usize) -> String {
    let run = common_run(0, usize::MAX, start_offset, strings, true, false).unwrap_or(0);
    if run == 0 {
        return String::new();
    }
    let first: Vec<char> = strings[0].as_ref().chars().collect();
    first[start_offset..start_offset + run].iter().collect()
}

/// The longest substring every string ends with, `start_offset` characters
/// back from each string's end.
///
/// `common_suffix(strings, 0)` compares from the very last character of each
/// string backward. Materialized from the first string.
pub fn common_suffix<S: AsRef<str>>(strings: &[S], start_offset: usize) -> String {
    let run = common_run(0, usize::MAX, start_offset, strings, false, true).unwrap_or(0);
    if run == 0 {
        return String::new();
    }
    let first: Vec<char> = strings[0].as_ref().chars().collect();
    let end = first.len() - start_offset;
    first[end - run..end].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_prefix() {
        let strings = ["alpha, beta, gamma", "alphabet", "alpine"];
        assert_eq!(common_prefix(&strings, 0), "alp");
        // Offset 2 aligns comparison to the third character onward.
        assert_eq!(common_prefix(&strings, 2), "p");
    }

    #[test]
    fn test_common_suffix() {
        let strings = ["sing", "alphabetizing", "-ing"];
        assert_eq!(common_suffix(&strings, 0), "ing");
    }

    #[test]
    fn test_common_suffix_offset_from_end() {
        // One character back from the end: "ing" loses the trailing g.
        let strings = ["swing", "ring", "analyzing"];
        assert_eq!(common_suffix(&strings, 1), "in");
    }

    #[test]
    fn test_single_element_spans_whole_string() {
        assert_eq!(common_prefix(&["alone"], 0), "alone");
        assert_eq!(common_prefix(&["alone"], 3), "ne");
        assert_eq!(common_suffix(&["alone"], 0), "alone");
    }

    #[test]
    fn test_empty_collection() {
        let strings: [&str; 0] = [];
        assert_eq!(common_prefix(&strings, 0), "");
        assert_eq!(common_suffix(&strings, 0), "");
    }

    #[test]
    fn test_offset_beyond_member_length() {
        let strings = ["abcdef", "ab"];
        assert_eq!(common_prefix(&strings, 3), "");
        assert_eq!(common_prefix(&["abc"], 10), "");
    }

    #[test]
    fn test_disagreement_on_first_char() {
        assert_eq!(common_prefix(&["apple", "banana"], 0), "");
    }

    #[test]
    fn test_common_run_bounds_validation() {
        let strings = ["abc", "abd"];
        assert_eq!(
            common_run(5, 10, 2, &strings, true, false),
            Err(ReplaceError::StartBelowMin { start: 2, min: 5 })
        );
        assert_eq!(
            common_run(0, 1, 2, &strings, true, false),
            Err(ReplaceError::MaxBelowStart { max: 1, start: 2 })
        );
    }

    #[test]
    fn test_common_run_max_index_caps_run() {
        let strings = ["abcdef", "abcdxx"];
        // Positions 0..2 only: run cannot reach the natural length of 4.
        assert_eq!(common_run(0, 2, 0, &strings, true, false), Ok(2));
        assert_eq!(common_run(0, usize::MAX, 0, &strings, true, false), Ok(4));
    }

    #[test]
    fn test_common_run_backward_absolute_offset() {
        // Compare backward from absolute index 2 in each string.
        let strings = ["abcx", "abcy"];
        assert_eq!(common_run(0, usize::MAX, 2, &strings, false, false), Ok(3));
    }

    #[test]
    fn test_prefix_with_supplementary_chars() {
        let strings = ["\u{1D11E}ab", "\u{1D11E}ac"];
        assert_eq!(common_prefix(&strings, 0), "\u{1D11E}a");
    }
}
