//! Named operations and the response envelope
//!
//! Wire shape of a request:
//!
//! ```json
//! {"operation": "updateItem", "arguments": {"id": "...", "description": "Updated"}}
//! ```
//!
//! and of a response:
//!
//! ```json
//! {"data": {...}}
//! {"data": null, "error": {"code": "INVALID_ID", "message": "..."}}
//! ```

use serde::{Deserialize, Serialize};

use super::error::{ResolveError, ResolveResult};
use crate::storage::Item;

// =============================================================================
// Operation
// =============================================================================

/// Operation names accepted on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
enum OperationName {
    Items,
    Item,
    AddItem,
    UpdateItem,
    DeleteItem,
}

/// Argument map; keys an operation does not use are ignored.
#[derive(Debug, Default, Deserialize)]
struct OperationArguments {
    id: Option<String>,
    name: Option<String>,
    description: Option<String>,
}

/// Raw request body. `arguments` may be omitted, null or empty.
#[derive(Debug, Deserialize)]
struct OperationRequest {
    operation: OperationName,
    #[serde(default)]
    arguments: Option<OperationArguments>,
}

/// A named operation with its arguments.
///
/// Required arguments are still `Option` here; presence is checked by the
/// resolver so that a missing field is a validation error, not a decode error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "OperationRequest")]
pub enum Operation {
    /// List every item
    Items,
    /// Fetch one item
    Item { id: Option<String> },
    /// Create an item
    AddItem {
        name: Option<String>,
        description: Option<String>,
    },
    /// Partially update an item
    UpdateItem {
        id: Option<String>,
        name: Option<String>,
        description: Option<String>,
    },
    /// Delete an item
    DeleteItem { id: Option<String> },
}

impl From<OperationRequest> for Operation {
    fn from(request: OperationRequest) -> Self {
        let OperationArguments {
            id,
            name,
            description,
        } = request.arguments.unwrap_or_default();

        match request.operation {
            OperationName::Items => Self::Items,
            OperationName::Item => Self::Item { id },
            OperationName::AddItem => Self::AddItem { name, description },
            OperationName::UpdateItem => Self::UpdateItem {
                id,
                name,
                description,
            },
            OperationName::DeleteItem => Self::DeleteItem { id },
        }
    }
}

impl Operation {
    /// Operation name as it appears on the wire.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Items => "items",
            Self::Item { .. } => "item",
            Self::AddItem { .. } => "addItem",
            Self::UpdateItem { .. } => "updateItem",
            Self::DeleteItem { .. } => "deleteItem",
        }
    }

    /// True for operations that modify the store.
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::AddItem { .. } | Self::UpdateItem { .. } | Self::DeleteItem { .. }
        )
    }
}

// =============================================================================
// Output
// =============================================================================

/// Declared result of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OperationOutput {
    /// `items`
    Items(Vec<Item>),
    /// `item`, `addItem`, `updateItem`; `None` when absent
    Item(Option<Item>),
    /// `deleteItem`
    Deleted(bool),
}

// =============================================================================
// Envelope
// =============================================================================

/// Error half of an `Envelope`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvelopeError {
    pub code: &'static str,
    pub message: String,
}

impl From<&ResolveError> for EnvelopeError {
    fn from(err: &ResolveError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

/// Uniform response for a named operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope {
    pub data: Option<OperationOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<EnvelopeError>,
}

impl Envelope {
    /// Successful response.
    #[must_use]
    pub fn ok(data: OperationOutput) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    /// Failed response.
    #[must_use]
    pub fn err(err: &ResolveError) -> Self {
        Self {
            data: None,
            error: Some(err.into()),
        }
    }
}

impl From<ResolveResult<OperationOutput>> for Envelope {
    fn from(result: ResolveResult<OperationOutput>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => Self::err(&err),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ItemValidationError;
    use serde_json::json;

    #[test]
    fn test_decode_unit_operation() {
        let op: Operation = serde_json::from_value(json!({"operation": "items"})).unwrap();
        assert_eq!(op, Operation::Items);
        assert!(!op.is_mutation());
    }

    #[test]
    fn test_decode_update_with_omitted_fields() {
        let op: Operation = serde_json::from_value(json!({
            "operation": "updateItem",
            "arguments": {"id": "abc", "description": "Updated"}
        }))
        .unwrap();

        assert_eq!(
            op,
            Operation::UpdateItem {
                id: Some("abc".to_string()),
                name: None,
                description: Some("Updated".to_string()),
            }
        );
        assert_eq!(op.name(), "updateItem");
        assert!(op.is_mutation());
    }

    #[test]
    fn test_decode_items_with_empty_arguments() {
        let op: Operation =
            serde_json::from_value(json!({"operation": "items", "arguments": {}})).unwrap();
        assert_eq!(op, Operation::Items);

        let op: Operation =
            serde_json::from_value(json!({"operation": "items", "arguments": null})).unwrap();
        assert_eq!(op, Operation::Items);
    }

    #[test]
    fn test_decode_missing_arguments_leaves_fields_unset() {
        let op: Operation = serde_json::from_value(json!({"operation": "deleteItem"})).unwrap();
        assert_eq!(op, Operation::DeleteItem { id: None });

        let op: Operation = serde_json::from_value(json!({"operation": "addItem"})).unwrap();
        assert_eq!(
            op,
            Operation::AddItem {
                name: None,
                description: None,
            }
        );
    }

    #[test]
    fn test_decode_ignores_unused_arguments() {
        let op: Operation = serde_json::from_value(json!({
            "operation": "item",
            "arguments": {"id": "abc", "name": "ignored", "extra": 1}
        }))
        .unwrap();
        assert_eq!(op, Operation::Item { id: Some("abc".to_string()) });
    }

    #[test]
    fn test_decode_unknown_operation_fails() {
        let result: Result<Operation, _> =
            serde_json::from_value(json!({"operation": "dropItems", "arguments": {}}));
        assert!(result.is_err());
    }

    #[test]
    fn test_envelope_shapes() {
        let ok = serde_json::to_value(Envelope::ok(OperationOutput::Deleted(true))).unwrap();
        assert_eq!(ok, json!({"data": true}));

        let absent = serde_json::to_value(Envelope::ok(OperationOutput::Item(None))).unwrap();
        assert_eq!(absent, json!({"data": null}));

        let err = ResolveError::Validation(ItemValidationError::Missing("name"));
        let failed = serde_json::to_value(Envelope::err(&err)).unwrap();
        assert_eq!(
            failed,
            json!({"data": null, "error": {"code": "VALIDATION_ERROR", "message": "name is required"}})
        );
    }
}
