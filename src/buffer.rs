//! Owned, growable character buffer with in-place splicing.
//!
//! [`EditBuffer`] is the mutable text the replacement engine rewrites. It is
//! backed by a `Vec<char>` so every index addresses one code point —
//! supplementary-plane characters count as a single position and a splice can
//! never land inside an encoded sequence.

use std::fmt;

/// A mutable character buffer supporting indexed access, substring search,
/// and range replacement.
///
/// Ownership is exclusive to the calling scope for the duration of a replace
/// operation; the engine mutates it directly rather than copying.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    chars: Vec<char>,
}

impl EditBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of characters (code points) in the buffer.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the buffer contains no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `index`, or `None` past the end.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// The buffer contents as a character slice.
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Index of the first occurrence of `needle` at or after `from`.
    ///
    /// An empty needle matches at `from` (clamped to the buffer length),
    /// mirroring `str::find` semantics. Returns `None` when the needle does
    /// not occur.
    pub fn index_of(&self, needle: &str, from: usize) -> Option<usize> {
        let needle: Vec<char> = needle.chars().collect();
        if needle.is_empty() {
            return (from <= self.chars.len()).then_some(from);
        }
        if from >= self.chars.len() {
            return None;
        }
        self.chars[from..]
            .windows(needle.len())
            .position(|w| w == needle.as_slice())
            .map(|pos| from + pos)
    }

    /// Replace the span `[start, end)` with `text`, shrinking or growing the
    /// buffer in place and shifting subsequent content.
    ///
    /// `end` is clamped to the buffer length.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` (after clamping) — callers are expected to
    /// pass a span produced by a successful match.
    pub fn splice(&mut self, start: usize, end: usize, text: &str) {
        let end = end.min(self.chars.len());
        self.chars.splice(start..end, text.chars());
    }

    /// Append `text` to the end of the buffer.
    pub fn push_str(&mut self, text: &str) {
        self.chars.extend(text.chars());
    }
}

impl From<&str> for EditBuffer {
    fn from(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }
}

impl From<String> for EditBuffer {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl fmt::Display for EditBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl PartialEq<&str> for EditBuffer {
    fn eq(&self, other: &&str) -> bool {
        self.chars.iter().copied().eq(other.chars())
    }
}
