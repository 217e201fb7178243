//! Resolver - Named operations over an item store
//!
//! TigerStyle: Validate at the boundary, delegate, never swallow store errors.
//!
//! Flow:
//! 1. Caller invokes a named operation with arguments
//! 2. Required arguments are checked here, ids are parsed here
//! 3. The store performs the document operation
//! 4. The result, or the store's error with its kind preserved, is returned

mod error;
mod operation;

pub use error::{
    ResolveError, ResolveResult, ERROR_CODE_INVALID_ID, ERROR_CODE_STORE, ERROR_CODE_VALIDATION,
};
pub use operation::{Envelope, EnvelopeError, Operation, OperationOutput};

use std::fmt;
use std::sync::Arc;

use crate::storage::{Item, ItemId, ItemPatch, ItemStore, ItemValidationError, NewItem, ITEM_FIELD_ID};

// =============================================================================
// ItemResolver
// =============================================================================

/// Resolution layer for the five item operations.
///
/// Holds the injected store handle; cloning is cheap and shares the store.
#[derive(Clone)]
pub struct ItemResolver {
    store: Arc<dyn ItemStore>,
}

impl fmt::Debug for ItemResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemResolver")
            .field("backend", &self.store.backend_name())
            .finish()
    }
}

impl ItemResolver {
    /// Create a resolver over `store`.
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// `items`: every item in store order.
    pub async fn items(&self) -> ResolveResult<Vec<Item>> {
        tracing::debug!(operation = "items", "resolving");
        let result = self.store.find_all().await.map_err(ResolveError::from);
        traced("items", result)
    }

    /// `item(id)`: the item, or `None` for a well-formed but unknown id.
    pub async fn item(&self, id: &str) -> ResolveResult<Option<Item>> {
        tracing::debug!(operation = "item", id, "resolving");
        let result = async {
            let id = ItemId::parse(id)?;
            Ok::<_, ResolveError>(self.store.find_by_id(&id).await?)
        }
        .await;
        traced("item", result)
    }

    /// `addItem(name, description)`: both fields required and non-empty.
    pub async fn add_item(
        &self,
        name: Option<String>,
        description: Option<String>,
    ) -> ResolveResult<Item> {
        tracing::debug!(operation = "addItem", "resolving");
        let result = async {
            let fields = NewItem::from_parts(name, description)?;
            let item = self.store.insert(fields).await?;
            tracing::info!(id = %item.id, "item created");
            Ok::<_, ResolveError>(item)
        }
        .await;
        traced("addItem", result)
    }

    /// `updateItem(id, name?, description?)`: partial update.
    ///
    /// Returns `None` if the id is well-formed but unknown.
    pub async fn update_item(&self, id: &str, patch: ItemPatch) -> ResolveResult<Option<Item>> {
        tracing::debug!(operation = "updateItem", id, "resolving");
        let result = async {
            let id = ItemId::parse(id)?;
            patch.validate()?;
            Ok::<_, ResolveError>(self.store.update_by_id(&id, patch).await?)
        }
        .await;
        traced("updateItem", result)
    }

    /// `deleteItem(id)`: `true` if a record was removed.
    pub async fn delete_item(&self, id: &str) -> ResolveResult<bool> {
        tracing::debug!(operation = "deleteItem", id, "resolving");
        let result = async {
            let id = ItemId::parse(id)?;
            let removed = self.store.delete_by_id(&id).await?;
            if removed {
                tracing::info!(%id, "item deleted");
            }
            Ok::<_, ResolveError>(removed)
        }
        .await;
        traced("deleteItem", result)
    }

    /// Dispatch a named operation.
    pub async fn execute(&self, operation: Operation) -> ResolveResult<OperationOutput> {
        match operation {
            Operation::Items => self.items().await.map(OperationOutput::Items),
            Operation::Item { id } => {
                let id = required_id(id)?;
                self.item(&id).await.map(OperationOutput::Item)
            }
            Operation::AddItem { name, description } => self
                .add_item(name, description)
                .await
                .map(|item| OperationOutput::Item(Some(item))),
            Operation::UpdateItem {
                id,
                name,
                description,
            } => {
                let id = required_id(id)?;
                self.update_item(&id, ItemPatch { name, description })
                    .await
                    .map(OperationOutput::Item)
            }
            Operation::DeleteItem { id } => {
                let id = required_id(id)?;
                self.delete_item(&id).await.map(OperationOutput::Deleted)
            }
        }
    }
}

fn required_id(id: Option<String>) -> ResolveResult<String> {
    id.ok_or(ResolveError::Validation(ItemValidationError::Missing(ITEM_FIELD_ID)))
}

/// Log failures once, at the layer boundary.
fn traced<T>(operation: &'static str, result: ResolveResult<T>) -> ResolveResult<T> {
    if let Err(err) = &result {
        if err.is_client_error() {
            tracing::debug!(operation, code = err.code(), error = %err, "operation rejected");
        } else {
            tracing::warn!(operation, code = err.code(), error = %err, "operation failed");
        }
    }
    result
}

// =============================================================================
// Tests
// =============================================================================
