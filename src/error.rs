//! Error types for graf.

use crate::ConfigError;

/// Errors that can occur during segmentation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid segmenter configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An embedding had a different dimension than the rest of the sequence.
    #[error("embedding dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// The dimension established by the first embedding.
        expected: usize,
        /// The dimension that disagreed.
        found: usize,
    },

    /// The sentence vectorizer failed to produce embeddings.
    ///
    /// The segmenter cannot proceed without vectors; the failure is
    /// propagated, never retried.
    #[error("embedding error: {0}")]
    Embedding(String),
}

/// Result type for graf operations.
pub type Result<T> = std::result::Result<T, Error>;
