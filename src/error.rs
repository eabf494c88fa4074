//! Unified error type for stockroom.
//!
//! Wraps the per-crate errors so callers deal with one type.

use stockroom_engine::{EngineError, ValidationErrors};
use stockroom_storage::StorageError;
use thiserror::Error;

/// All stockroom errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A new item was rejected; carries every field message
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Data directory, database or medium could not be opened or read
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration file could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for stockroom operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if the item was rejected only because its name is taken.
    pub fn is_duplicate_name(&self) -> bool {
        matches!(self, Error::Validation(v) if v.is_duplicate_name())
    }

    /// Check if this is a storage error.
    pub fn is_storage(&self) -> bool {
        matches!(self, Error::Storage(_))
    }

    /// Field messages, if this is a validation error.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Error::Validation(v) => Some(v),
            _ => None,
        }
    }
}

impl From<EngineError> for Error {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::Storage(e) => Error::Storage(e),
            EngineError::Config { path, reason } => {
                Error::Config(format!("{}: {}", path.display(), reason))
            }
        }
    }
}
