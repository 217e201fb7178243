//! itemql - GraphQL CRUD service for items
//!
//! Serves `items`, `item`, `addItem`, `updateItem` and `deleteItem` over
//! GraphQL at `/graphql`, and as named operations at `/execute`.

use clap::Parser;
use itemql::config::{Config, APP_VERSION};
use itemql::resolver::ItemResolver;
use itemql::server::{self, AppState, GRAPHQL_PATH};

// =============================================================================
// Main
// =============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .init();

    tracing::info!("itemql v{}", APP_VERSION);

    let addr = config.bind_address()?;

    // Store handle lives for the whole process
    let store = itemql::open_store(&config).await?;
    tracing::info!("Item store: {}", store.backend_name());

    let state = AppState::new(ItemResolver::new(store.clone()));
    let app = server::router(state, config.graphiql());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on http://{}{}", addr, GRAPHQL_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("Item store closed");

    Ok(())
}
