//! Query root

use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use super::types::ItemObject;
use crate::resolver::ItemResolver;

/// Read operations.
#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every item, in store order.
    async fn items(&self, ctx: &Context<'_>) -> Result<Vec<ItemObject>> {
        let resolver = ctx.data::<ItemResolver>()?;
        let items = resolver.items().await.map_err(|e| e.extend())?;
        Ok(items.into_iter().map(ItemObject::from).collect())
    }

    /// One item by id; null if no such item exists.
    async fn item(&self, ctx: &Context<'_>, id: ID) -> Result<Option<ItemObject>> {
        let resolver = ctx.data::<ItemResolver>()?;
        let item = resolver.item(&id).await.map_err(|e| e.extend())?;
        Ok(item.map(ItemObject::from))
    }
}
