//! Shared helpers for API integration tests
//!
//! Tests drive the real router in-process over an in-memory SQLite pool.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::sync::Arc;
use tower::ServiceExt;

use catalog_server::{
    api, config::AppConfig, repository::Repository, response::ResponseFormatter,
    services::Services, AppState,
};

/// Build the application with a fresh in-memory database.
/// One connection only: each SQLite `:memory:` connection is its own database.
pub async fn test_app() -> Router {
    let (app, _) = test_app_with_pool().await;
    app
}

/// Same as [`test_app`], also handing back the pool so tests can observe
/// rows that have no read endpoint.
pub async fn test_app_with_pool() -> (Router, Pool<Sqlite>) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let state = AppState {
        config: Arc::new(AppConfig::default()),
        services: Arc::new(Services::new(Repository::new(pool.clone()))),
        formatter: ResponseFormatter::default(),
    };

    (api::create_router(state), pool)
}

/// Send one request, returning status, headers and the parsed JSON body
/// (`Value::Null` for empty bodies).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("valid JSON body")
    };
    (status, headers, value)
}

/// Create an author through the API, returning its id
pub async fn create_author(app: &Router, name: &str) -> i64 {
    let (status, _, body) = send(
        app,
        "POST",
        "/authors",
        Some(json!({
            "name": name,
            "gender": "male",
            "biography": "Prolific Science-Fiction Writer",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_i64().expect("author id")
}

/// Create a book through the API, returning its id
pub async fn create_book(app: &Router, title: &str, author_id: i64) -> i64 {
    let (status, _, body) = send(
        app,
        "POST",
        "/books",
        Some(json!({
            "title": title,
            "description": "A description",
            "author_id": author_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_i64().expect("book id")
}

/// Create a bundle through the API, returning its id
pub async fn create_bundle(app: &Router, title: &str) -> i64 {
    let (status, _, body) = send(
        app,
        "POST",
        "/bundles",
        Some(json!({
            "title": title,
            "description": "A bundle of books",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_i64().expect("bundle id")
}

/// Assert the standard 404 error envelope
pub fn assert_not_found_body(body: &Value) {
    assert_eq!(body["error"]["message"], json!("Not Found"));
    assert_eq!(body["error"]["status"], json!(404));
}
