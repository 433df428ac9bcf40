//! Error types for chronolist operations.

use thiserror::Error;

/// Errors returned by [`ChronoList`](crate::ChronoList) operations.
///
/// Only two things can go wrong: addressing a position outside the live
/// sequence, or handing the reconstruction query a string that does not match
/// the configured time format. Every mutating operation on valid inputs is
/// total.
#[derive(Error, Debug)]
pub enum ChronoListError {
    /// The requested position is outside the live sequence.
    ///
    /// The container is left untouched: a failed bounds check never retires
    /// or moves a slot.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The reconstruction query input did not match the configured format.
    ///
    /// No fallback timestamp is substituted and no partial result is
    /// returned.
    #[error("timestamp did not match the configured format: {0}")]
    TimestampParse(#[from] chrono::format::ParseError),
}

/// Result type for chronolist operations.
pub type Result<T> = std::result::Result<T, ChronoListError>;
