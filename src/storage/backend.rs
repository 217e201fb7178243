//! ItemStore - Backend trait

use async_trait::async_trait;

use super::error::StorageResult;
use super::item::{Item, ItemId, ItemPatch, NewItem};

/// Capability set over one logical collection of items.
///
/// Implementations must be shareable across request tasks; the process holds
/// a single `Arc<dyn ItemStore>` for its whole lifetime.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All persisted items in store-native order.
    async fn find_all(&self) -> StorageResult<Vec<Item>>;

    /// The item with `id`, or `None` if absent.
    async fn find_by_id(&self, id: &ItemId) -> StorageResult<Option<Item>>;

    /// Persist a new item under a freshly assigned id.
    async fn insert(&self, fields: NewItem) -> StorageResult<Item>;

    /// Apply `patch` to the item with `id`.
    ///
    /// Returns the post-update record, or `None` if absent.
    async fn update_by_id(&self, id: &ItemId, patch: ItemPatch) -> StorageResult<Option<Item>>;

    /// Remove the item with `id`. Returns whether a record was removed.
    async fn delete_by_id(&self, id: &ItemId) -> StorageResult<bool>;

    /// Short backend name for logs.
    fn backend_name(&self) -> &'static str;

    /// Release backend resources.
    async fn close(&self) {}
}
