//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use cost_cache::{api::create_router, AppState, BoundedCostCache};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app(count_limit: usize, cost_limit: u64) -> Router {
    create_router(AppState::new(BoundedCostCache::new(count_limit, cost_limit)))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

fn set_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri("/set")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(key: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(format!("/get/{}", key))
        .body(Body::empty())
        .unwrap()
}

fn delete_request(key: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(format!("/del/{}", key))
        .body(Body::empty())
        .unwrap()
}

fn plain_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// == SET / GET ==

#[tokio::test]
async fn test_set_then_get() {
    let app = create_test_app(100, 1024);

    let (status, json) = send(&app, set_request(r#"{"key":"photo","value":"pixels"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["stored"], true);
    assert_eq!(json["replaced"], false);
    assert!(json["message"].as_str().unwrap().contains("photo"));

    let (status, json) = send(&app, get_request("photo")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["key"], "photo");
    assert_eq!(json["value"], "pixels");
}

#[tokio::test]
async fn test_set_replace() {
    let app = create_test_app(100, 1024);

    send(&app, set_request(r#"{"key":"k","value":"one"}"#)).await;
    let (_, json) = send(&app, set_request(r#"{"key":"k","value":"two","cost":50}"#)).await;
    assert_eq!(json["replaced"], true);

    let (_, stats) = send(&app, plain_request("GET", "/stats")).await;
    assert_eq!(stats["total_entries"], 1);
    assert_eq!(stats["total_cost"], 50);
}

#[tokio::test]
async fn test_get_not_found() {
    let app = create_test_app(100, 1024);

    let (status, json) = send(&app, get_request("missing")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("missing"));
}

// == Eviction ==

#[tokio::test]
async fn test_count_limit_evicts_least_recent() {
    let app = create_test_app(2, 0);

    send(&app, set_request(r#"{"key":"A","value":"a"}"#)).await;
    send(&app, set_request(r#"{"key":"B","value":"b"}"#)).await;
    send(&app, get_request("A")).await;
    let (_, json) = send(&app, set_request(r#"{"key":"C","value":"c"}"#)).await;
    assert_eq!(json["evicted"], serde_json::json!(["B"]));

    assert_eq!(send(&app, get_request("A")).await.0, StatusCode::OK);
    assert_eq!(send(&app, get_request("B")).await.0, StatusCode::NOT_FOUND);
    assert_eq!(send(&app, get_request("C")).await.0, StatusCode::OK);
}

#[tokio::test]
async fn test_cost_limit_evicts() {
    let app = create_test_app(0, 100);

    send(&app, set_request(r#"{"key":"x","value":"x","cost":60}"#)).await;
    let (_, json) = send(&app, set_request(r#"{"key":"y","value":"y","cost":60}"#)).await;
    assert_eq!(json["evicted"], serde_json::json!(["x"]));

    let (_, stats) = send(&app, plain_request("GET", "/stats")).await;
    assert_eq!(stats["total_cost"], 60);
    assert_eq!(stats["evictions"], 1);
}

#[tokio::test]
async fn test_oversized_entry_not_retained() {
    let app = create_test_app(0, 100);

    let (status, json) = send(&app, set_request(r#"{"key":"z","value":"z","cost":150}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["stored"], false);

    assert_eq!(send(&app, get_request("z")).await.0, StatusCode::NOT_FOUND);
    let (_, stats) = send(&app, plain_request("GET", "/stats")).await;
    assert_eq!(stats["total_cost"], 0);
}

// == Invalid Input ==

#[tokio::test]
async fn test_empty_key_request() {
    let app = create_test_app(100, 1024);

    let (status, json) = send(&app, set_request(r#"{"key":"","value":"v"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_negative_cost_request() {
    let app = create_test_app(100, 1024);

    let (status, _) = send(&app, set_request(r#"{"key":"k","value":"v","cost":-1}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, stats) = send(&app, plain_request("GET", "/stats")).await;
    assert_eq!(stats["total_entries"], 0);
}

#[tokio::test]
async fn test_invalid_json_request() {
    let app = create_test_app(100, 1024);

    let response = app
        .oneshot(set_request(r#"{"key": "test"}"#))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

// == DELETE / CLEAR ==

#[tokio::test]
async fn test_delete_is_idempotent() {
    let app = create_test_app(100, 1024);

    send(&app, set_request(r#"{"key":"gone","value":"v"}"#)).await;

    let (status, json) = send(&app, delete_request("gone")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["removed"], true);

    let (status, json) = send(&app, delete_request("gone")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["removed"], false);

    assert_eq!(send(&app, get_request("gone")).await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_clear_endpoint() {
    let app = create_test_app(100, 1024);

    send(&app, set_request(r#"{"key":"a","value":"1"}"#)).await;
    send(&app, set_request(r#"{"key":"b","value":"2"}"#)).await;

    let (status, json) = send(&app, plain_request("POST", "/clear")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["cleared"], 2);

    let (_, stats) = send(&app, plain_request("GET", "/stats")).await;
    assert_eq!(stats["total_entries"], 0);
    assert_eq!(stats["total_cost"], 0);
}

// == STATS / HEALTH ==

#[tokio::test]
async fn test_stats_endpoint() {
    let app = create_test_app(10, 500);

    send(&app, set_request(r#"{"key":"s","value":"val"}"#)).await;
    send(&app, get_request("s")).await;
    send(&app, get_request("nope")).await;

    let (status, json) = send(&app, plain_request("GET", "/stats")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["total_entries"], 1);
    assert_eq!(json["total_cost"], 3);
    assert_eq!(json["count_limit"], 10);
    assert_eq!(json["cost_limit"], 500);
    assert_eq!(json["hit_rate"], 0.5);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app(100, 1024);

    let (status, json) = send(&app, plain_request("GET", "/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}
