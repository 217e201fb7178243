//! GraphQL API for items
//!
//! - [`QueryRoot`]: `items`, `item(id)`
//! - [`MutationRoot`]: `addItem`, `updateItem`, `deleteItem`
//!
//! Every field delegates to [`ItemResolver`]; resolver errors surface in the
//! response `errors` array with `extensions.code` set.

mod mutation;
mod query;
mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::ItemObject;

use async_graphql::extensions::Tracing;
use async_graphql::{EmptySubscription, ErrorExtensions, Schema};

use crate::resolver::{ItemResolver, ResolveError};

/// The complete item schema.
pub type ItemSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema around a resolver.
pub fn build_schema(resolver: ItemResolver) -> ItemSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(resolver)
        .extension(Tracing)
        .finish()
}

impl ErrorExtensions for ResolveError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, e| e.set("code", code.to_string()))
    }
}
