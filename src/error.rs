//! Error types for the tokrep crate.

/// Replacement-engine error types.
///
/// Every variant is detected by up-front argument validation, before any
/// buffer or dictionary mutation begins.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReplaceError {
    /// The scan start offset lies below the minimum index bound.
    #[error("start offset {start} is below the minimum index {min}")]
    StartBelowMin { start: usize, min: usize },

    /// The maximum index bound lies below the scan start offset.
    #[error("maximum index {max} is below the start offset {start}")]
    MaxBelowStart { max: usize, start: usize },

    /// Paired search/replacement lists have different lengths.
    #[error("search/replacement length mismatch: {searches} searches, {replacements} replacements")]
    PairLengthMismatch {
        searches: usize,
        replacements: usize,
    },
}

/// Convenience result type for tokrep operations.
pub type ReplaceResult<T> = Result<T, ReplaceError>;
