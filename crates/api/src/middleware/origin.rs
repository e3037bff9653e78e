//! Origin gate: rejects cross-origin requests before any handler runs.
//!
//! The `CorsLayer` only controls response headers; this middleware is what
//! actually refuses requests from origins outside the allow-list. Requests
//! without an `Origin` header (curl, server-to-server) always pass.

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::state::AppState;

pub async fn enforce_origin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok());

    match origin {
        Some(origin) if !state.config.origin_allowed(origin) => {
            tracing::warn!(%origin, "Rejected request from disallowed origin");
            (
                StatusCode::FORBIDDEN,
                axum::Json(json!({ "message": "Origin not allowed" })),
            )
                .into_response()
        }
        _ => next.run(request).await,
    }
}
