pub mod health;
pub mod movies;

use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// GET / — small HTML landing page.
async fn index() -> Html<&'static str> {
    Html("<h1>This is the movies' official page!</h1>")
}

/// Build the full route tree (landing page, health check, movie resource).
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .merge(health::router())
        .merge(movies::router())
}
