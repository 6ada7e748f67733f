//! Error types for dataset operations.

use thiserror::Error;

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while generating or handling datasets.
#[derive(Debug, Error)]
pub enum DataError {
    /// Invalid generator or split configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid categorical sampling weights
    #[error("Invalid categorical weights: {0}")]
    Weights(#[from] rand::distributions::WeightedError),

    /// Invalid continuous distribution parameters
    #[error("Invalid distribution: {0}")]
    Distribution(String),

    /// Table has no rows
    #[error("Table has no rows")]
    EmptyTable,

    /// Unknown feature column
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Dimension mismatch between columns, rows, and labels
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension
        actual: usize,
    },

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<statrs::StatsError> for DataError {
    fn from(err: statrs::StatsError) -> Self {
        Self::Distribution(err.to_string())
    }
}
