//! Error type shared by the Torus crates

use thiserror::Error;

/// Result alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating sparse structures or shift descriptors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Parallel arrays that must share a length do not
    #[error("length mismatch: {what}")]
    LengthMismatch {
        /// Which arrays disagree
        what: &'static str,
    },

    /// Compressed pointer array is malformed
    #[error("invalid indptr: {reason}")]
    InvalidIndptr {
        /// What is wrong with it
        reason: &'static str,
    },

    /// A stored coordinate lies outside the matrix
    #[error("{axis} index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// "row" or "column"
        axis: &'static str,
        /// Offending index
        index: i64,
        /// Dimension size
        size: usize,
    },

    /// Minor indices are not strictly increasing inside one major slice
    #[error("{axis} indices must be strictly increasing within each {major}")]
    UnsortedIndices {
        /// Minor axis name
        axis: &'static str,
        /// Major axis name
        major: &'static str,
    },

    /// Size arithmetic overflowed
    #[error("overflow: {what}")]
    Overflow {
        /// What overflowed
        what: &'static str,
    },

    /// Integer axis code is neither 0 (rows) nor 1 (columns)
    #[error("invalid axis {0}: expected 0 (rows) or 1 (columns)")]
    InvalidAxis(i64),

    /// Shift amount needs more than one wrap along the axis
    #[error("shift {shift} out of range for axis of size {size}: |shift| must not exceed size")]
    ShiftOutOfRange {
        /// Requested shift
        shift: i64,
        /// Axis size
        size: usize,
    },
}
