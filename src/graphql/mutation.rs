//! Mutation root

use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use super::types::ItemObject;
use crate::resolver::ItemResolver;
use crate::storage::ItemPatch;

/// Write operations.
#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create an item. Both fields must be non-empty.
    async fn add_item(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: String,
    ) -> Result<ItemObject> {
        let resolver = ctx.data::<ItemResolver>()?;
        let item = resolver
            .add_item(Some(name), Some(description))
            .await
            .map_err(|e| e.extend())?;
        Ok(item.into())
    }

    /// Overwrite the supplied fields of an item; omitted fields are kept.
    /// Returns null if no such item exists.
    async fn update_item(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Option<ItemObject>> {
        let resolver = ctx.data::<ItemResolver>()?;
        let item = resolver
            .update_item(&id, ItemPatch { name, description })
            .await
            .map_err(|e| e.extend())?;
        Ok(item.map(ItemObject::from))
    }

    /// Delete an item. Returns false if no such item existed.
    async fn delete_item(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let resolver = ctx.data::<ItemResolver>()?;
        resolver.delete_item(&id).await.map_err(|e| e.extend())
    }
}
