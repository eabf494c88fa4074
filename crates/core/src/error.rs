//! Error types for the core data model

use thiserror::Error;

/// Errors raised while parsing or constructing core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An item code did not match `PREFIX-NNNN`
    #[error("invalid item id: {0}")]
    InvalidId(String),

    /// A status string was not one of the known statuses
    #[error("unknown status: {0}")]
    UnknownStatus(String),

    /// A date was not in `YYYY-MM-DD` form
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
