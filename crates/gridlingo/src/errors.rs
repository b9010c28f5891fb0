//! # Error Types

use std::path::PathBuf;

/// Errors from gridlingo operations.
#[derive(Debug, thiserror::Error)]
pub enum GridlingoError {
    /// A novel token would grow the vocabulary past its capacity.
    #[error("maximum vocabulary capacity reached ({capacity})")]
    CapacityExceeded {
        /// The capacity of the vocabulary.
        capacity: usize,
    },

    /// A persisted vocabulary exists, but is not a valid token map.
    #[error("malformed vocabulary at {}: {reason}", path.display())]
    MalformedPersistedState {
        /// The path of the persisted vocabulary.
        path: PathBuf,

        /// What was wrong with it.
        reason: String,
    },

    /// An observation's grid payload has the wrong number of values.
    #[error("observation {position}: expected {expected} image values, found {actual}")]
    ShapeMismatch {
        /// The batch position of the offending observation.
        position: usize,

        /// The configured flattened image width.
        expected: usize,

        /// The flattened length of the payload.
        actual: usize,
    },

    /// A grid payload is ragged, or disagrees with its declared dims.
    #[error("invalid image grid: {0}")]
    InvalidGrid(String),

    /// Encoding was requested for an empty batch.
    #[error("cannot encode an empty observation batch")]
    EmptyBatch,

    /// A storage location could not be resolved.
    #[error("storage error: {0}")]
    Storage(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for gridlingo operations.
pub type GLResult<T> = core::result::Result<T, GridlingoError>;
