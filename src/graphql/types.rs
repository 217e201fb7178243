//! GraphQL object types

use async_graphql::{SimpleObject, ID};
use chrono::{DateTime, Utc};

use crate::storage::Item;

/// An item as exposed over GraphQL.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Item")]
pub struct ItemObject {
    /// Store-assigned identifier
    pub id: ID,
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Item> for ItemObject {
    fn from(item: Item) -> Self {
        Self {
            id: ID(item.id.to_string()),
            name: item.name,
            description: item.description,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
