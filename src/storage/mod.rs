//! Storage - Item store trait and implementations
//!
//! TigerStyle: Abstract storage with an in-process backend for testing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ItemStore Trait                         │
//! └─────────────────────────────────────────────────────────────┘
//!          ↑                              ↑
//!          │                              │
//! ┌────────┴────────┐           ┌────────┴──────────┐
//! │ MemoryItemStore │           │ PostgresItemStore │
//! │ (dev/testing)   │           │   (production)    │
//! └─────────────────┘           └───────────────────┘
//! ```

mod backend;
mod error;
mod item;
mod memory;

#[cfg(feature = "postgres")]
mod postgres;

pub use backend::ItemStore;
pub use error::{StorageError, StorageResult};
pub use item::{
    InvalidItemId, Item, ItemId, ItemPatch, ItemValidationError, NewItem, ITEM_FIELD_DESCRIPTION,
    ITEM_FIELD_ID, ITEM_FIELD_NAME,
};
pub use memory::{MemoryItemStore, StoreFault};

#[cfg(feature = "postgres")]
pub use postgres::{PostgresItemStore, POOL_CONNECTIONS_COUNT_MAX};
