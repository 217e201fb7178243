//! Item - The single entity held by the store
//!
//! TigerStyle: Explicit types, validation on every write path.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// TigerStyle Constants
// =============================================================================

/// Field name for `Item::name` as it appears on the wire.
pub const ITEM_FIELD_NAME: &str = "name";

/// Field name for `Item::description` as it appears on the wire.
pub const ITEM_FIELD_DESCRIPTION: &str = "description";

/// Field name for the item identifier as it appears on the wire.
pub const ITEM_FIELD_ID: &str = "id";

// =============================================================================
// Item Id
// =============================================================================

/// Store-assigned identifier of an item.
///
/// Only obtainable by generation or by parsing, so a malformed id never
/// reaches a store backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generate a fresh id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an id from its wire form, exactly as given.
    ///
    /// # Errors
    /// Returns `InvalidItemId` if `s` is not a well-formed id.
    pub fn parse(s: &str) -> Result<Self, InvalidItemId> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| InvalidItemId(s.to_string()))
    }
}

impl FromStr for ItemId {
    type Err = InvalidItemId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// A string that does not parse as an `ItemId`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed item id: {0:?}")]
pub struct InvalidItemId(pub String);

// =============================================================================
// Validation
// =============================================================================

/// Required-field violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ItemValidationError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Blank (empty or whitespace-only) text does not satisfy "required".
fn require_text(field: &'static str, value: &str) -> Result<(), ItemValidationError> {
    if value.trim().is_empty() {
        return Err(ItemValidationError::Empty(field));
    }
    Ok(())
}

// =============================================================================
// Item
// =============================================================================

/// A persisted item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier, immutable after creation
    pub id: ItemId,
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Materialize a new record from validated fields.
    ///
    /// # Panics
    /// Panics if `fields` does not validate; stores validate first.
    #[must_use]
    pub fn create(fields: NewItem, now: DateTime<Utc>) -> Self {
        assert!(fields.validate().is_ok(), "new item must be validated");

        Self {
            id: ItemId::generate(),
            name: fields.name,
            description: fields.description,
            created_at: now,
            updated_at: now,
        }
    }
}

// =============================================================================
// New Item
// =============================================================================

/// Fields for creating an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub description: String,
}

impl NewItem {
    /// Build from optional inputs, checking presence and non-emptiness.
    ///
    /// # Errors
    /// Returns the first violated field, `name` before `description`.
    pub fn from_parts(
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Self, ItemValidationError> {
        let name = name.ok_or(ItemValidationError::Missing(ITEM_FIELD_NAME))?;
        let description = description.ok_or(ItemValidationError::Missing(ITEM_FIELD_DESCRIPTION))?;
        let fields = Self { name, description };
        fields.validate()?;
        Ok(fields)
    }

    /// Check that both fields are non-empty.
    ///
    /// # Errors
    /// Returns `ItemValidationError::Empty` naming the first blank field.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        require_text(ITEM_FIELD_NAME, &self.name)?;
        require_text(ITEM_FIELD_DESCRIPTION, &self.description)
    }
}

// =============================================================================
// Item Patch
// =============================================================================

/// Partial update: `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ItemPatch {
    /// True if no field is supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }

    /// Supplied fields must still be non-empty.
    ///
    /// # Errors
    /// Returns `ItemValidationError::Empty` naming the first blank field.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if let Some(name) = &self.name {
            require_text(ITEM_FIELD_NAME, name)?;
        }
        if let Some(description) = &self.description {
            require_text(ITEM_FIELD_DESCRIPTION, description)?;
        }
        Ok(())
    }

    /// Overwrite the supplied fields on `item`.
    ///
    /// Returns whether anything was applied. `updated_at` moves only then.
    pub fn apply(self, item: &mut Item, now: DateTime<Utc>) -> bool {
        if self.is_empty() {
            return false;
        }
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        item.updated_at = now;
        true
    }
}

// =============================================================================
// Tests
// =============================================================================
