#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use vouch_api::config::ServerConfig;
use vouch_api::router::build_app_router;
use vouch_api::state::AppState;
use vouch_core::id::IdGenerator;
use vouch_core::testimonial::Testimonial;
use vouch_store::{MemoryStore, StoreError, TestimonialStore};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        data_file: PathBuf::from("testimonials-test.json"),
        body_limit_bytes: 5 * 1024 * 1024,
        request_timeout_secs: 30,
    }
}

/// Deterministic id source: `t-1`, `t-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds(AtomicU64);

impl IdGenerator for SequentialIds {
    fn generate(&self) -> String {
        format!("t-{}", self.0.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

/// A store whose every operation fails, for exercising the 500 path.
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl TestimonialStore for FailingStore {
    async fn load(&self) -> Result<Vec<Testimonial>, StoreError> {
        Err(StoreError::Io(std::io::Error::other("disk unplugged")))
    }

    async fn save(&self, _testimonials: &[Testimonial]) -> Result<(), StoreError> {
        Err(StoreError::Io(std::io::Error::other("disk unplugged")))
    }
}

/// Build the full application router with all middleware layers, using
/// the given store.
///
/// This goes through the same [`build_app_router`] as `main.rs`, so
/// integration tests exercise the production middleware stack (CORS,
/// request ID, timeout, tracing, panic recovery). Ids are generated by
/// [`SequentialIds`].
pub fn build_test_app(store: Arc<dyn TestimonialStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        ids: Arc::new(SequentialIds::default()),
        config: Arc::new(config.clone()),
    };

    build_app_router(state, &config)
}

/// An app backed by a fresh empty in-memory store.
pub fn empty_app() -> Router {
    build_test_app(Arc::new(MemoryStore::new()))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn patch(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::PATCH)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
