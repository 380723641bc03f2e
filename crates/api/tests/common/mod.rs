#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use notes_api::config::{LogFormat, ServerConfig};
use notes_api::router::build_app_router;
use notes_api::state::AppState;
use notes_db::Store;

/// A store living in its own temporary directory.
///
/// Keep the value alive for the duration of the test; dropping it removes
/// the database file.
pub struct TestStore {
    pub store: Store,
    _dir: TempDir,
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(database_path: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_path,
        database_max_connections: 2,
        cors_origins: vec!["http://localhost:5173".to_string()],
        log_format: LogFormat::Pretty,
    }
}

/// Open a fresh, empty store in a temporary directory.
pub async fn test_store() -> TestStore {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path().join("notes.db"));
    let store = Store::initialize(&config.store_config()).await.unwrap();
    TestStore { store, _dir: dir }
}

/// Build the full application router (same middleware stack as production)
/// on top of the given store.
pub fn build_test_app(store: &Store) -> Router {
    let state = AppState {
        store: store.clone(),
        config: Arc::new(test_config(PathBuf::from("unused.db"))),
    };
    build_app_router(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_raw_json(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_raw_json(app, Method::PUT, uri, body.to_string()).await
}

/// Send a body verbatim with a JSON content type (used for malformed JSON).
pub async fn send_raw_json(app: Router, method: Method, uri: &str, body: String) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
