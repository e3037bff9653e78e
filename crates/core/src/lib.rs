//! Core domain logic for the movie catalog.
//!
//! Pure types and validation only — no HTTP, no async runtime. The API crate
//! layers transport concerns on top of what lives here.

pub mod error;
pub mod genre;
pub mod movie;
pub mod validation;

pub use error::{CoreError, FieldIssue, ValidationError};
pub use genre::Genre;
pub use movie::{MovieRecord, MoviePatch, NewMovie};
