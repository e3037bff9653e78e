//! Seed dataset loading.
//!
//! The collection starts from a static JSON file (an array of full movie
//! records, ids included). The file is read once at startup and never
//! written back.

use std::path::Path;

use marquee_core::MovieRecord;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("seed file is not a valid movie array: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read and parse the seed dataset.
pub fn load_seed(path: impl AsRef<Path>) -> Result<Vec<MovieRecord>, SeedError> {
    let raw = std::fs::read_to_string(path)?;
    let movies: Vec<MovieRecord> = serde_json::from_str(&raw)?;
    Ok(movies)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_seed("does/not/exist.json").unwrap_err();
        assert_matches!(err, SeedError::Io(_));
    }

    #[test]
    fn non_array_payload_is_a_parse_error() {
        let file = std::env::temp_dir().join("marquee-bad-seed.json");
        std::fs::write(&file, "{\"not\": \"an array\"}").unwrap();
        let err = load_seed(&file).unwrap_err();
        assert_matches!(err, SeedError::Parse(_));
    }

    #[test]
    fn bundled_dataset_parses() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/movies.json");
        let movies = load_seed(path).unwrap();
        assert!(!movies.is_empty());
    }
}
