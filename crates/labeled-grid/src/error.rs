//! Error types for labeled-grid

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when mutating a [`LabeledGrid`](crate::LabeledGrid)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A column label used as an insertion target does not exist
    #[error("Column label not found: {0:?}")]
    TargetNotFound(String),

    /// A row does not match the width of the matrix
    #[error("Row {row} has {actual} cells, expected {expected}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
