#![allow(dead_code)] // Not every test binary uses every helper.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use marquee_api::config::ServerConfig;
use marquee_api::router::build_app_router;
use marquee_api::state::AppState;
use marquee_api::store::MovieStore;
use marquee_core::{Genre, MovieRecord};

/// The origin the test config allows; everything else is gated off.
pub const ALLOWED_ORIGIN: &str = "http://localhost:8080";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![ALLOWED_ORIGIN.to_string()],
        seed_path: "unused".to_string(),
        request_timeout_secs: 30,
    }
}

/// Two well-known records so tests can assert against fixed ids.
pub fn seed_movies() -> Vec<MovieRecord> {
    vec![
        MovieRecord {
            id: Uuid::parse_str("dcdd0fbf-95a0-4ffd-a5ac-a27e2b291b03").unwrap(),
            title: "The Shawshank Redemption".into(),
            year: 1994,
            genre: vec![Genre::Drama],
            director: "Frank Darabont".into(),
            duration: 142,
            rate: 9.3,
            poster: "https://example.com/shawshank.jpg".into(),
        },
        MovieRecord {
            id: Uuid::parse_str("c8a7d63f-3b04-44d3-9d95-8782fd7dcfaf").unwrap(),
            title: "Some Like It Hot".into(),
            year: 1959,
            genre: vec![Genre::Comedy, Genre::Romance],
            director: "Billy Wilder".into(),
            duration: 121,
            rate: 8.2,
            poster: "https://example.com/some-like-it-hot.jpg".into(),
        },
    ]
}

/// Build the full application router with all middleware layers, backed by
/// a fresh store seeded with the given records.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (origin gate, CORS, request ID,
/// timeout, tracing, panic recovery) that production uses. The returned
/// router is `Clone`; clones share the same store.
pub fn build_test_app(seed: Vec<MovieRecord>) -> Router {
    let config = test_config();
    let state = AppState {
        store: Arc::new(MovieStore::new(seed)),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
