//! itemql - GraphQL CRUD service for items
//!
//! A typed CRUD resolution layer over a pluggable entity store, served over
//! HTTP as GraphQL and as a plain named-operation endpoint.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  HTTP (axum)   /graphql   /execute          │
//! ├─────────────────────────────────────────────┤
//! │  GraphQL schema (async-graphql)             │
//! ├─────────────────────────────────────────────┤
//! │  ItemResolver   validation, error kinds     │
//! ├─────────────────────────────────────────────┤
//! │  ItemStore      memory │ postgres           │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use itemql::resolver::ItemResolver;
//! use itemql::storage::MemoryItemStore;
//!
//! # tokio_test::block_on(async {
//! let resolver = ItemResolver::new(Arc::new(MemoryItemStore::new()));
//! let item = resolver
//!     .add_item(Some("Widget".into()), Some("A small widget".into()))
//!     .await
//!     .unwrap();
//! assert_eq!(resolver.item(&item.id.to_string()).await.unwrap(), Some(item));
//! # });
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod graphql;
pub mod resolver;
pub mod server;
pub mod storage;

use std::sync::Arc;

pub use config::Config;
pub use resolver::{ItemResolver, ResolveError, ResolveResult};
pub use storage::{Item, ItemId, ItemStore, MemoryItemStore, StorageError};

/// Open the store selected by `config`.
///
/// # Errors
/// Returns an error if the database cannot be reached, or if a database URL
/// is configured but postgres support was not compiled in.
pub async fn open_store(config: &Config) -> anyhow::Result<Arc<dyn ItemStore>> {
    match config.database_url.as_deref().filter(|url| !url.trim().is_empty()) {
        None => {
            tracing::warn!("DATABASE_URL not set; items are kept in memory and lost on exit");
            Ok(Arc::new(MemoryItemStore::new()))
        }
        #[cfg(feature = "postgres")]
        Some(url) => {
            anyhow::ensure!(
                (1..=storage::POOL_CONNECTIONS_COUNT_MAX).contains(&config.max_connections),
                "max connections must be within 1..={}",
                storage::POOL_CONNECTIONS_COUNT_MAX
            );
            let store = storage::PostgresItemStore::connect(url, config.max_connections).await?;
            tracing::info!("connected to postgres");
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "postgres"))]
        Some(_) => Err(anyhow::anyhow!(
            "DATABASE_URL is set but postgres support is not compiled in"
        )),
    }
}

// =============================================================================
// Tests
// =============================================================================
