//! Error types for model fitting and inference.

use thiserror::Error;

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur during model fitting and inference.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Training data has no rows
    #[error("Training data has no rows")]
    EmptyDataset,

    /// Dimension mismatch between inputs
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension
        actual: usize,
    },

    /// All training labels belong to one class
    #[error("Training labels contain a single class; two are required")]
    SingleClass,

    /// Invalid hyperparameter configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Inference input does not match the training feature order
    #[error(
        "Feature names do not match the training order (expected {expected:?}, got {found:?})"
    )]
    FeatureMismatch {
        /// Feature names recorded at fit time, in order.
        expected: Vec<String>,
        /// Feature names supplied at inference, in order.
        found: Vec<String>,
    },
}
