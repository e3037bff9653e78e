use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::MovieStore;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; the store and config live behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory movie collection, owned here and nowhere else.
    pub store: Arc<MovieStore>,
    /// Server configuration (consulted by the origin gate).
    pub config: Arc<ServerConfig>,
}
