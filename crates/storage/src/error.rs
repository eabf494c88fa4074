//! Storage error types

use thiserror::Error;

/// Errors raised by media and backends.
///
/// None of these are fatal to the store: write failures are logged and the
/// in-memory collection stays authoritative, and corrupt blobs are discarded.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error from a file-backed medium
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The medium refused a write because it would exceed its capacity
    #[error("quota exceeded: writing {requested} bytes would exceed the {limit}-byte limit")]
    QuotaExceeded {
        /// Configured capacity in bytes
        limit: usize,
        /// Total size the write would have produced
        requested: usize,
    },

    /// Key contains characters the medium cannot store
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// A persisted blob could not be decoded
    #[error("corrupt data under '{key}': {reason}")]
    Corrupt {
        /// Key or table the blob was read from
        key: String,
        /// Decoder message
        reason: String,
    },

    /// Serialization failure while encoding
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Relational engine failure
    #[error("sql error: {0}")]
    Sql(#[from] rusqlite::Error),
}

impl StorageError {
    /// Check if this error means the stored data is unreadable.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StorageError::Corrupt { .. })
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serialization(e.to_string())
    }
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
