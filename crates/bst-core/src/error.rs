//! Error type shared by the tree engine, search dispatch and input parsing.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BstError>;

/// Errors surfaced by fallible core operations.
///
/// Duplicate insertion, searching an empty tree and searching while a
/// reveal is in progress are not errors; they are silently ignored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BstError {
    /// The algorithm identifier does not name one of the four disciplines.
    #[error("unknown search algorithm: {0}")]
    UnknownAlgorithm(String),

    /// More distinct values were requested than the range can hold.
    #[error("cannot draw {count} distinct values from [{min}, {max}]")]
    RangeTooSmall {
        /// Requested number of distinct values
        count: usize,
        /// Inclusive lower bound
        min: i32,
        /// Inclusive upper bound
        max: i32,
    },

    /// The lower bound of a range lies above its upper bound.
    #[error("invalid range: min {min} > max {max}")]
    InvalidRange {
        /// Inclusive lower bound
        min: i32,
        /// Inclusive upper bound
        max: i32,
    },

    /// A value list contained no usable integers.
    #[error("no valid values in input")]
    NoValidValues,

    /// A single value could not be parsed as an integer.
    #[error("invalid value: {0:?}")]
    InvalidValue(String),

    /// A single value parsed but lies outside the accepted range.
    #[error("value {value} outside [{min}, {max}]")]
    ValueOutOfRange {
        /// The parsed value
        value: i32,
        /// Inclusive lower bound
        min: i32,
        /// Inclusive upper bound
        max: i32,
    },
}
