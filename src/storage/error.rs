//! Storage errors

use super::item::ItemValidationError;

/// Result alias for store operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Failures reported by an `ItemStore` backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("validation failed: {0}")]
    Validation(#[from] ItemValidationError),

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("read failed: {0}")]
    Read(String),

    #[error("write failed: {0}")]
    Write(String),

    #[error("internal storage error: {0}")]
    Internal(String),
}

impl StorageError {
    /// Connection could not be established or was lost.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// A read query failed.
    pub fn read(msg: impl Into<String>) -> Self {
        Self::Read(msg.into())
    }

    /// A write query failed.
    pub fn write(msg: impl Into<String>) -> Self {
        Self::Write(msg.into())
    }

    /// Persisted data or schema is in an unexpected state.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
