//! Input validation errors.

use thiserror::Error;

/// Reasons a candidate table is rejected before any metric runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The table does not have exactly 256 entries.
    #[error("S-box must have exactly 256 entries, found {found}")]
    Length {
        /// Number of entries supplied.
        found: usize,
    },
    /// An entry lies outside `0..=255`.
    #[error("S-box entry {index} is {value}, outside the range 0..=255")]
    OutOfRange {
        /// Position of the offending entry.
        index: usize,
        /// The offending value.
        value: i64,
    },
}
