use super::*;
use std::sync::Arc;
use std::sync::atomic::Ordering;

use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::config::Capabilities;
use crate::state::test_helpers::{self, MemoryReports, StubSubcategories};

async fn call(state: AppState, method: Method) -> (StatusCode, serde_json::Value) {
    let response = list_subcategories(State(state), method).await.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn state_with(store: Arc<StubSubcategories>) -> AppState {
    test_helpers::test_app_state_with(store, Arc::new(MemoryReports::default()), Capabilities::default())
}

#[tokio::test]
async fn non_get_methods_are_rejected_without_store_access() {
    for method in [Method::POST, Method::PUT, Method::PATCH, Method::DELETE, Method::HEAD, Method::OPTIONS] {
        let store = Arc::new(StubSubcategories::ok(vec![test_helpers::subcategory("rust")]));
        let (status, body) = call(state_with(store.clone()), method.clone()).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "method {method}");
        assert_eq!(body["success"], false);
        assert_eq!(store.calls.load(Ordering::SeqCst), 0, "method {method} touched the store");
    }
}

#[tokio::test]
async fn get_returns_rows_in_store_order() {
    let newest = test_helpers::subcategory("system design");
    let oldest = test_helpers::subcategory("algorithms");
    let store = Arc::new(StubSubcategories::ok(vec![newest.clone(), oldest.clone()]));

    let (status, body) = call(state_with(store), Method::GET).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let list: Vec<wire::Subcategory> = serde_json::from_value(body["subcategories"].clone()).unwrap();
    assert_eq!(list, vec![newest, oldest]);
}

#[tokio::test]
async fn get_with_no_rows_returns_empty_list() {
    let store = Arc::new(StubSubcategories::ok(Vec::new()));
    let (status, body) = call(state_with(store), Method::GET).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"success": true, "subcategories": []}));
}

#[tokio::test]
async fn store_failure_returns_generic_500() {
    let store = Arc::new(StubSubcategories::failing());
    let (status, body) = call(state_with(store), Method::GET).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({"success": false, "error": "Failed to fetch subcategories"}));
    assert!(!body.to_string().contains("relation"));
}
