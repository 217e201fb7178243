//! HTTP server
//!
//! Routes:
//! - `POST /graphql`  GraphQL endpoint
//! - `GET  /graphql`  GraphiQL IDE (optional)
//! - `POST /execute`  named-operation envelope
//! - `GET  /health`   liveness check

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::config::APP_VERSION;
use crate::graphql::{build_schema, ItemSchema};
use crate::resolver::{Envelope, ItemResolver, Operation};

/// GraphQL endpoint path
pub const GRAPHQL_PATH: &str = "/graphql";

/// Named-operation endpoint path
pub const EXECUTE_PATH: &str = "/execute";

/// Health endpoint path
pub const HEALTH_PATH: &str = "/health";

// =============================================================================
// State
// =============================================================================

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub schema: ItemSchema,
    pub resolver: ItemResolver,
}

impl AppState {
    /// Build the schema around `resolver`.
    pub fn new(resolver: ItemResolver) -> Self {
        Self {
            schema: build_schema(resolver.clone()),
            resolver,
        }
    }
}

// =============================================================================
// Router
// =============================================================================

/// Build the application router.
pub fn router(state: AppState, graphiql: bool) -> Router {
    let graphql = if graphiql {
        get(graphiql_handler).post(graphql_handler)
    } else {
        post(graphql_handler)
    };

    Router::new()
        .route(GRAPHQL_PATH, graphql)
        .route(EXECUTE_PATH, post(execute_handler))
        .route(HEALTH_PATH, get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// Handlers
// =============================================================================

/// Execute a GraphQL request.
pub async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// Serve the GraphiQL IDE.
pub async fn graphiql_handler() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Execute a named operation and wrap the outcome in an envelope.
pub async fn execute_handler(
    State(state): State<AppState>,
    Json(operation): Json<Operation>,
) -> (StatusCode, Json<Envelope>) {
    let name = operation.name();
    let mutation = operation.is_mutation();
    let result = state.resolver.execute(operation).await;

    let status = match &result {
        Ok(_) => StatusCode::OK,
        Err(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    tracing::debug!(operation = name, mutation, status = status.as_u16(), "executed");

    (status, Json(result.into()))
}

/// Liveness check.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok", "version": APP_VERSION }))
}

// =============================================================================
// Shutdown
// =============================================================================

/// Resolves on Ctrl-C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
