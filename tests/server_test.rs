//! HTTP handlers, called directly with extracted inputs

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use itemql::resolver::{ItemResolver, Operation, OperationOutput};
use itemql::server::{self, AppState};
use itemql::storage::{MemoryItemStore, StoreFault};
use serde_json::json;

fn setup() -> (Arc<MemoryItemStore>, AppState) {
    let store = Arc::new(MemoryItemStore::new());
    let state = AppState::new(ItemResolver::new(store.clone()));
    (store, state)
}

/// Decode `body` the way the `/execute` route does, then run the handler.
/// A rejected body yields the rejection status and a null body.
async fn execute(state: &AppState, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let bytes = serde_json::to_vec(&body).unwrap();
    let operation = match Json::<Operation>::from_bytes(&bytes) {
        Ok(operation) => operation,
        Err(rejection) => return (rejection.status(), serde_json::Value::Null),
    };
    let (status, Json(envelope)) = server::execute_handler(State(state.clone()), operation).await;
    (status, serde_json::to_value(envelope).unwrap())
}

#[test]
fn test_router_builds_with_and_without_graphiql() {
    let (_, state) = setup();
    let _ = server::router(state.clone(), true);
    let _ = server::router(state, false);
}

#[tokio::test]
async fn test_execute_widget_scenario() {
    let (_, state) = setup();

    let (status, body) = execute(
        &state,
        json!({"operation": "addItem", "arguments": {"name": "Widget", "description": "A small widget"}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["name"], "Widget");

    let (status, body) = execute(
        &state,
        json!({"operation": "updateItem", "arguments": {"id": id, "description": "Updated"}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Widget");
    assert_eq!(body["data"]["description"], "Updated");

    let (_, body) = execute(&state, json!({"operation": "deleteItem", "arguments": {"id": id}})).await;
    assert_eq!(body, json!({"data": true}));

    let (status, body) = execute(&state, json!({"operation": "item", "arguments": {"id": id}})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"data": null}));

    let (_, body) = execute(&state, json!({"operation": "items"})).await;
    assert_eq!(body, json!({"data": []}));
}

#[tokio::test]
async fn test_execute_client_errors_are_bad_request() {
    let (_, state) = setup();

    let (status, body) = execute(
        &state,
        json!({"operation": "addItem", "arguments": {"name": "Widget"}}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"data": null, "error": {"code": "VALIDATION_ERROR", "message": "description is required"}})
    );

    let (status, body) = execute(&state, json!({"operation": "item", "arguments": {"id": "1"}})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_ID");

    let (status, body) = execute(&state, json!({"operation": "deleteItem", "arguments": {}})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "id is required");
}

#[tokio::test]
async fn test_execute_accepts_omitted_or_empty_arguments() {
    let (_, state) = setup();

    let (status, body) = execute(&state, json!({"operation": "items", "arguments": {}})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"data": []}));

    let (status, body) = execute(&state, json!({"operation": "items", "arguments": null})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"data": []}));

    let (status, body) = execute(&state, json!({"operation": "deleteItem"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"data": null, "error": {"code": "VALIDATION_ERROR", "message": "id is required"}})
    );

    let (status, body) = execute(&state, json!({"operation": "addItem"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"data": null, "error": {"code": "VALIDATION_ERROR", "message": "name is required"}})
    );
}

#[tokio::test]
async fn test_execute_ignores_unused_arguments() {
    let (_, state) = setup();

    let (status, body) = execute(
        &state,
        json!({"operation": "items", "arguments": {"id": "1", "name": "ignored"}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"data": []}));
}

#[tokio::test]
async fn test_execute_unknown_operation_is_rejected() {
    let (_, state) = setup();

    let (status, body) = execute(&state, json!({"operation": "dropItems"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, serde_json::Value::Null);
}

#[tokio::test]
async fn test_execute_padded_id_is_invalid() {
    let (_, state) = setup();

    let (_, body) = execute(
        &state,
        json!({"operation": "addItem", "arguments": {"name": "Widget", "description": "A small widget"}}),
    )
    .await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = execute(&state, json!({"operation": "item", "arguments": {"id": format!(" {id} ")}})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_ID");
}

#[tokio::test]
async fn test_execute_store_error_is_internal() {
    let (store, state) = setup();
    store.inject_fault(StoreFault::Read);

    let (status, body) = execute(&state, json!({"operation": "items"})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "STORE_ERROR");
}

#[tokio::test]
async fn test_resolver_and_schema_share_store() {
    let (_, state) = setup();

    state
        .resolver
        .add_item(Some("Widget".to_string()), Some("A small widget".to_string()))
        .await
        .unwrap();

    let response = state.schema.execute("{ items { name } }").await;
    let data = response.data.into_json().unwrap();
    assert_eq!(data, json!({"items": [{"name": "Widget"}]}));

    let listed = state.resolver.execute(Operation::Items).await.unwrap();
    assert!(matches!(listed, OperationOutput::Items(items) if items.len() == 1));
}

#[tokio::test]
async fn test_health() {
    let Json(body) = server::health_handler().await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_graphiql_points_at_graphql_endpoint() {
    let html = server::graphiql_handler().await;
    assert!(html.0.contains(server::GRAPHQL_PATH));
}
