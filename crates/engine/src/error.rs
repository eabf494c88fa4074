//! Engine error types

use std::path::PathBuf;
use stockroom_storage::StorageError;
use thiserror::Error;

/// Errors that can stop the engine from opening.
///
/// Once a store is open, persistence failures are logged rather than
/// returned, so these only surface from setup paths.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Backend or medium could not be opened or read
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration file could not be read or parsed
    #[error("invalid config {path}: {reason}")]
    Config {
        /// File that failed
        path: PathBuf,
        /// Parser or I/O message
        reason: String,
    },
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
