//! Handlers for the `/movies` resource family.
//!
//! Write paths take the body as raw `serde_json::Value` and run it through
//! the core validator, so the 400 body always carries the full field-level
//! issue list rather than a framework deserialization message.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use marquee_core::{validation, CoreError, MovieRecord};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

fn not_found(id: Uuid) -> ApiError {
    ApiError::Core(CoreError::NotFound { entity: "Movie", id })
}

#[derive(Debug, Deserialize)]
pub struct ListMoviesQuery {
    pub genre: Option<String>,
}

/// GET /movies — all records, or those matching `?genre=` (case-insensitive
/// exact match). An empty result is a 200 with an empty array.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<ListMoviesQuery>,
) -> Json<Vec<MovieRecord>> {
    let movies = match query.genre.as_deref() {
        Some(genre) => state.store.list_by_genre(genre).await,
        None => state.store.list().await,
    };
    Json(movies)
}

/// GET /movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<MovieRecord>> {
    let movie = state.store.find_by_id(id).await.ok_or_else(|| not_found(id))?;
    Ok(Json(movie))
}

/// POST /movies — full validation, then a fresh server-assigned id. Any id
/// in the payload is ignored.
pub async fn create_movie(
    State(state): State<AppState>,
    Json(input): Json<Value>,
) -> ApiResult<(StatusCode, Json<MovieRecord>)> {
    let new_movie = validation::validate_full(&input)?;

    let movie = new_movie.into_record(Uuid::new_v4());
    state.store.append(movie.clone()).await;

    tracing::info!(movie_id = %movie.id, title = %movie.title, "Movie created");

    Ok((StatusCode::CREATED, Json(movie)))
}

/// PATCH /movies/{id} — partial validation runs before the existence check,
/// so a malformed body against a nonexistent id is a 400, not a 404.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<Value>,
) -> ApiResult<Json<MovieRecord>> {
    let patch = validation::validate_partial(&input)?;

    let movie = state
        .store
        .update(id, &patch)
        .await
        .ok_or_else(|| not_found(id))?;

    tracing::info!(movie_id = %movie.id, "Movie updated");

    Ok(Json(movie))
}

/// DELETE /movies/{id} — removal is permanent; the id is never reused.
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    if !state.store.remove_by_id(id).await {
        return Err(not_found(id));
    }

    tracing::info!(movie_id = %id, "Movie deleted");

    Ok(StatusCode::NO_CONTENT)
}
