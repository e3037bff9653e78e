use tokio::sync::RwLock;
use uuid::Uuid;

use marquee_core::{MoviePatch, MovieRecord};

/// In-memory holder of all movie records for the process lifetime.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across handlers. Records keep insertion order. Mutations take the
/// write lock for their whole lookup-then-modify sequence, so concurrent
/// operations on one id serialize cleanly (last writer wins).
pub struct MovieStore {
    movies: RwLock<Vec<MovieRecord>>,
}

impl MovieStore {
    /// Create a store seeded with the given records.
    pub fn new(seed: Vec<MovieRecord>) -> Self {
        Self {
            movies: RwLock::new(seed),
        }
    }

    /// All records in insertion order.
    pub async fn list(&self) -> Vec<MovieRecord> {
        self.movies.read().await.clone()
    }

    /// Records whose genre list contains `name`, compared case-insensitively.
    pub async fn list_by_genre(&self, name: &str) -> Vec<MovieRecord> {
        self.movies
            .read()
            .await
            .iter()
            .filter(|movie| movie.genre.iter().any(|g| g.matches_filter(name)))
            .cloned()
            .collect()
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<MovieRecord> {
        self.movies
            .read()
            .await
            .iter()
            .find(|movie| movie.id == id)
            .cloned()
    }

    /// Append a record whose id the caller has already assigned.
    pub async fn append(&self, movie: MovieRecord) {
        self.movies.write().await.push(movie);
    }

    /// Merge a patch onto the record with the given id, preserving its
    /// position. Lookup and mutation happen under one write-lock acquisition.
    ///
    /// Returns the merged record, or `None` if the id is absent.
    pub async fn update(&self, id: Uuid, patch: &MoviePatch) -> Option<MovieRecord> {
        let mut movies = self.movies.write().await;
        let movie = movies.iter_mut().find(|movie| movie.id == id)?;
        patch.apply(movie);
        Some(movie.clone())
    }

    /// Remove the record with the given id. Returns whether one was found.
    pub async fn remove_by_id(&self, id: Uuid) -> bool {
        let mut movies = self.movies.write().await;
        match movies.iter().position(|movie| movie.id == id) {
            Some(index) => {
                movies.remove(index);
                true
            }
            None => false,
        }
    }

    /// Current number of records.
    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.movies.read().await.is_empty()
    }
}
