use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::genre::Genre;

/// A catalog entry as stored and served.
///
/// Every stored record satisfies the full-record rules in
/// [`crate::validation`] at all times; `id` is assigned once on create and
/// never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: Uuid,
    pub title: String,
    pub year: i32,
    pub genre: Vec<Genre>,
    pub director: String,
    pub duration: u32,
    pub rate: f64,
    pub poster: String,
}

/// A fully validated create payload. Becomes a [`MovieRecord`] once the
/// server assigns an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub genre: Vec<Genre>,
    pub director: String,
    pub duration: u32,
    pub rate: f64,
    pub poster: String,
}

impl NewMovie {
    pub fn into_record(self, id: Uuid) -> MovieRecord {
        MovieRecord {
            id,
            title: self.title,
            year: self.year,
            genre: self.genre,
            director: self.director,
            duration: self.duration,
            rate: self.rate,
            poster: self.poster,
        }
    }
}

/// A validated partial-update payload. Absent fields keep their prior
/// values; `id` is not patchable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<Vec<Genre>>,
    pub director: Option<String>,
    pub duration: Option<u32>,
    pub rate: Option<f64>,
    pub poster: Option<String>,
}

impl MoviePatch {
    pub fn is_empty(&self) -> bool {
        *self == MoviePatch::default()
    }

    /// Merge the supplied fields onto an existing record.
    pub fn apply(&self, movie: &mut MovieRecord) {
        if let Some(title) = &self.title {
            movie.title = title.clone();
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(genre) = &self.genre {
            movie.genre = genre.clone();
        }
        if let Some(director) = &self.director {
            movie.director = director.clone();
        }
        if let Some(duration) = self.duration {
            movie.duration = duration;
        }
        if let Some(rate) = self.rate {
            movie.rate = rate;
        }
        if let Some(poster) = &self.poster {
            movie.poster = poster.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MovieRecord {
        MovieRecord {
            id: Uuid::new_v4(),
            title: "The Matrix".into(),
            year: 1999,
            genre: vec![Genre::Action, Genre::SciFi],
            director: "Lana Wachowski, Lilly Wachowski".into(),
            duration: 136,
            rate: 8.7,
            poster: "https://example.com/matrix.jpg".into(),
        }
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut movie = sample();
        let before = movie.clone();
        MoviePatch::default().apply(&mut movie);
        assert_eq!(movie, before);
    }

    #[test]
    fn patch_touches_only_supplied_fields() {
        let mut movie = sample();
        let original_id = movie.id;
        let patch = MoviePatch {
            title: Some("The Matrix Reloaded".into()),
            ..MoviePatch::default()
        };
        patch.apply(&mut movie);
        assert_eq!(movie.title, "The Matrix Reloaded");
        assert_eq!(movie.id, original_id);
        assert_eq!(movie.year, 1999);
        assert_eq!(movie.rate, 8.7);
    }
}
