use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use marquee_core::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and implements [`IntoResponse`] to
/// produce the service's JSON error bodies.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A domain-level error from `marquee-core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<marquee_core::ValidationError> for ApiError {
    fn from(err: marquee_core::ValidationError) -> Self {
        ApiError::Core(CoreError::Validation(err))
    }
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // 400 carries the full structured issue list under "error".
            ApiError::Core(CoreError::Validation(err)) => (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({ "error": err.issues })),
            )
                .into_response(),

            ApiError::Core(err @ CoreError::NotFound { .. }) => (
                StatusCode::NOT_FOUND,
                axum::Json(json!({ "message": err.to_string() })),
            )
                .into_response(),
        }
    }
}
