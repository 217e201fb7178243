//! MemoryItemStore - In-process storage
//!
//! TigerStyle: Deterministic ordering, explicit fault injection for tests.
//!
//! Items live in a map keyed by id plus an insertion-order index, so
//! `find_all` returns records in the order they were created.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::backend::ItemStore;
use super::error::{StorageError, StorageResult};
use super::item::{Item, ItemId, ItemPatch, NewItem};

// =============================================================================
// Faults
// =============================================================================

/// Failure modes that can be injected into a `MemoryItemStore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFault {
    /// `find_all` and `find_by_id` fail
    Read,
    /// `insert`, `update_by_id` and `delete_by_id` fail
    Write,
}

// =============================================================================
// State
// =============================================================================

#[derive(Debug, Default)]
struct Collection {
    /// Items by id
    items: HashMap<ItemId, Item>,
    /// Ids in insertion order
    order: Vec<ItemId>,
}

// =============================================================================
// MemoryItemStore
// =============================================================================

/// In-memory item store.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    collection: RwLock<Collection>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryItemStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation of the given kind fail.
    pub fn inject_fault(&self, fault: StoreFault) {
        tracing::debug!(?fault, "injecting store fault");
        match fault {
            StoreFault::Read => self.fail_reads.store(true, Ordering::SeqCst),
            StoreFault::Write => self.fail_writes.store(true, Ordering::SeqCst),
        }
    }

    /// Remove all injected faults.
    pub fn clear_faults(&self) {
        self.fail_reads.store(false, Ordering::SeqCst);
        self.fail_writes.store(false, Ordering::SeqCst);
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.collection.read().await.items.len()
    }

    /// True if no items are stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn check_read(&self) -> StorageResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::read("injected read fault"));
        }
        Ok(())
    }

    fn check_write(&self) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::write("injected write fault"));
        }
        Ok(())
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn find_all(&self) -> StorageResult<Vec<Item>> {
        self.check_read()?;

        let collection = self.collection.read().await;
        let items: Vec<Item> = collection
            .order
            .iter()
            .filter_map(|id| collection.items.get(id).cloned())
            .collect();

        // Postcondition
        assert_eq!(items.len(), collection.items.len(), "order index out of sync");

        Ok(items)
    }

    async fn find_by_id(&self, id: &ItemId) -> StorageResult<Option<Item>> {
        self.check_read()?;
        Ok(self.collection.read().await.items.get(id).cloned())
    }

    async fn insert(&self, fields: NewItem) -> StorageResult<Item> {
        self.check_write()?;
        fields.validate()?;

        let item = Item::create(fields, Utc::now());
        let mut collection = self.collection.write().await;

        // Precondition: generated ids never collide with live records
        assert!(!collection.items.contains_key(&item.id), "duplicate item id");

        collection.order.push(item.id);
        collection.items.insert(item.id, item.clone());

        Ok(item)
    }

    async fn update_by_id(&self, id: &ItemId, patch: ItemPatch) -> StorageResult<Option<Item>> {
        self.check_write()?;
        patch.validate()?;

        let mut collection = self.collection.write().await;
        let Some(item) = collection.items.get_mut(id) else {
            return Ok(None);
        };

        patch.apply(item, Utc::now());

        // Postcondition
        assert_eq!(&item.id, id, "update must not change id");

        Ok(Some(item.clone()))
    }

    async fn delete_by_id(&self, id: &ItemId) -> StorageResult<bool> {
        self.check_write()?;

        let mut collection = self.collection.write().await;
        if collection.items.remove(id).is_none() {
            return Ok(false);
        }
        collection.order.retain(|existing| existing != id);

        Ok(true)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

// =============================================================================
// Tests
// =============================================================================
