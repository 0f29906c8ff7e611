//! `tokrep` — greedy longest-match token replacement.
//!
//! Rewrites a mutable character buffer using a dictionary of
//! (search-key, replacement-value) pairs: at each candidate position the
//! entry whose key shares the longest run of leading characters with the
//! source wins, and its value is spliced in place of the key span.
//!
//! # Architecture
//!
//! ```text
//! replace_tokens → common_prefix of all keys (once, as a scan shortcut)
//!                → closest_match at each candidate position
//!                      sorted dict:   probe-widening binary search
//!                      unsorted dict: linear equal-run scan
//!                → EditBuffer::splice (in-place mutation)
//! ```
//!
//! All operations are synchronous, stateless free functions; the only side
//! effects are the buffer splices and the optional in-place dictionary sort,
//! both on caller-owned data.

pub mod buffer;
pub mod dict;
pub mod engine;
pub mod error;

pub use buffer::EditBuffer;
pub use dict::{sort_by_key, sort_by_key_with, Token};
pub use engine::commonality::{common_prefix, common_run, common_suffix};
pub use engine::compare::{closest_match, closest_match_by, equal_count, CharSeq};
pub use engine::{replace_all, replace_each, replace_tokens, replace_tokens_with};
pub use error::{ReplaceError, ReplaceResult};
