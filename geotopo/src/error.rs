//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    /// First and last coordinates of a ring are not the same.
    #[error("ring is not closed")]
    RingNotClosed,
    /// A sequence has fewer coordinates than the operation requires.
    #[error("expected at least {expected} coordinates, got {actual}")]
    TooFewPoints {
        /// Minimum number of coordinates.
        expected: usize,
        /// Number of coordinates given.
        actual: usize,
    },
    /// Result of a computation cannot be represented as a finite number.
    #[error("computed value is not representable")]
    NotRepresentable,
}
