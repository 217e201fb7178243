//! Resolution errors

use crate::storage::{InvalidItemId, ItemValidationError, StorageError};

/// Error code for missing or empty required input.
pub const ERROR_CODE_VALIDATION: &str = "VALIDATION_ERROR";

/// Error code for a malformed item identifier.
pub const ERROR_CODE_INVALID_ID: &str = "INVALID_ID";

/// Error code for an underlying store failure.
pub const ERROR_CODE_STORE: &str = "STORE_ERROR";

/// Result alias for resolver operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Failure of a named operation.
///
/// Absence is never an error here; `item` and `updateItem` return `None`,
/// `deleteItem` returns `false`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("{0}")]
    Validation(#[from] ItemValidationError),

    #[error("{0}")]
    InvalidId(#[from] InvalidItemId),

    #[error("{0}")]
    Store(StorageError),
}

impl ResolveError {
    /// Stable machine-readable code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => ERROR_CODE_VALIDATION,
            Self::InvalidId(_) => ERROR_CODE_INVALID_ID,
            Self::Store(_) => ERROR_CODE_STORE,
        }
    }

    /// True if the caller sent bad input, as opposed to a store failure.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Store(_))
    }
}

impl From<StorageError> for ResolveError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Validation(e) => Self::Validation(e),
            other => Self::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_validation_keeps_kind() {
        let err: ResolveError = StorageError::Validation(ItemValidationError::Empty("name")).into();
        assert_eq!(err, ResolveError::Validation(ItemValidationError::Empty("name")));
        assert_eq!(err.code(), ERROR_CODE_VALIDATION);
    }

    #[test]
    fn test_store_failure_message_is_verbatim() {
        let err: ResolveError = StorageError::read("connection reset").into();
        assert_eq!(err.code(), ERROR_CODE_STORE);
        assert_eq!(err.to_string(), "read failed: connection reset");
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_invalid_id_code() {
        let err: ResolveError = InvalidItemId("nope".to_string()).into();
        assert_eq!(err.code(), ERROR_CODE_INVALID_ID);
        assert_eq!(err.to_string(), "malformed item id: \"nope\"");
        assert!(err.is_client_error());
    }
}
