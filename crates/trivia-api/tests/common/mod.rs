use std::path::PathBuf;

use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use trivia_api::{build_router, AppState};
use trivia_store::SqliteStore;

/// Ids the sample seed assigns to its two World Cup questions
#[allow(dead_code)]
pub const WORLD_CUP_IDS: [i64; 2] = [6, 7];

/// Router over an in-memory SQLite store loaded with the sample seed
#[allow(dead_code)]
pub fn seeded_app() -> Router {
    let seed = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("seeds")
        .join("trivia.yaml");
    let mut store = SqliteStore::open_in_memory().expect("Failed to open in-memory store");
    trivia_store::import_seed(&seed, store.conn_mut()).expect("Sample seed should import");
    build_router(AppState::new(store))
}

/// Router over a store with no rows at all
#[allow(dead_code)]
pub fn empty_app() -> Router {
    build_router(AppState::new(
        SqliteStore::open_in_memory().expect("Failed to open in-memory store"),
    ))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

/// Send one request through the router without binding a socket
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        json,
    }
}

/// Assert the standard failure envelope
#[allow(dead_code)]
pub fn assert_envelope(res: &TestResponse, status: u16, message: &str) {
    assert_eq!(res.status.as_u16(), status);
    assert_eq!(res.json["success"], false);
    assert_eq!(res.json["error"], status);
    assert_eq!(res.json["message"], message);
}
