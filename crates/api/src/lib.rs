//! Marquee API server library.
//!
//! Exposes the building blocks (config, state, error handling, store,
//! routes) so integration tests and the binary entrypoint can both build
//! the exact same router.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;
