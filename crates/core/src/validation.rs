//! Movie schema validation — pure logic, no I/O beyond reading the clock
//! for the year upper bound.
//!
//! Full and partial validation share one set of per-field rule functions;
//! they differ only in whether an absent field is an error. All field issues
//! are collected in a single pass — validation never stops at the first
//! problem.

use chrono::{Datelike, Utc};
use serde_json::Value;
use url::Url;

use crate::error::{FieldIssue, ValidationError};
use crate::genre::Genre;
use crate::movie::{MoviePatch, NewMovie};

/// Earliest accepted release year.
pub const MIN_YEAR: i64 = 1800;

/// Validate a create payload: every field required and well-formed.
///
/// A client-supplied `id` (or any other unknown key) is ignored.
pub fn validate_full(input: &Value) -> Result<NewMovie, ValidationError> {
    let map = object(input)?;
    let mut issues = Vec::new();

    let title = field(map, "title", Presence::Required, parse_title, &mut issues);
    let year = field(map, "year", Presence::Required, parse_year, &mut issues);
    let genre = field(map, "genre", Presence::Required, parse_genres, &mut issues);
    let director = field(map, "director", Presence::Required, parse_director, &mut issues);
    let duration = field(map, "duration", Presence::Required, parse_duration, &mut issues);
    let rate = field(map, "rate", Presence::Required, parse_rate, &mut issues);
    let poster = field(map, "poster", Presence::Required, parse_poster, &mut issues);

    match (title, year, genre, director, duration, rate, poster) {
        (
            Some(title),
            Some(year),
            Some(genre),
            Some(director),
            Some(duration),
            Some(rate),
            Some(poster),
        ) => Ok(NewMovie {
            title,
            year,
            genre,
            director,
            duration,
            rate,
            poster,
        }),
        _ => Err(ValidationError::new(issues)),
    }
}

/// Validate a partial-update payload: only supplied fields are checked,
/// against the same per-field rules as [`validate_full`].
///
/// An empty object is valid and yields an empty patch. A JSON `null` counts
/// as supplied-and-wrong-type, not as absent.
pub fn validate_partial(input: &Value) -> Result<MoviePatch, ValidationError> {
    let map = object(input)?;
    let mut issues = Vec::new();

    let patch = MoviePatch {
        title: field(map, "title", Presence::Optional, parse_title, &mut issues),
        year: field(map, "year", Presence::Optional, parse_year, &mut issues),
        genre: field(map, "genre", Presence::Optional, parse_genres, &mut issues),
        director: field(map, "director", Presence::Optional, parse_director, &mut issues),
        duration: field(map, "duration", Presence::Optional, parse_duration, &mut issues),
        rate: field(map, "rate", Presence::Optional, parse_rate, &mut issues),
        poster: field(map, "poster", Presence::Optional, parse_poster, &mut issues),
    };

    if issues.is_empty() {
        Ok(patch)
    } else {
        Err(ValidationError::new(issues))
    }
}

#[derive(Clone, Copy)]
enum Presence {
    Required,
    Optional,
}

fn object(input: &Value) -> Result<&serde_json::Map<String, Value>, ValidationError> {
    input.as_object().ok_or_else(|| {
        ValidationError::new(vec![FieldIssue::new("", "Payload must be a JSON object")])
    })
}

/// Look up one field and run its rule, recording any issue.
///
/// Returns `None` when the field is absent or invalid; the caller decides
/// what absence means (required vs. patch).
fn field<T>(
    map: &serde_json::Map<String, Value>,
    name: &'static str,
    presence: Presence,
    parse: fn(&Value) -> Result<T, String>,
    issues: &mut Vec<FieldIssue>,
) -> Option<T> {
    match map.get(name) {
        None => {
            if matches!(presence, Presence::Required) {
                issues.push(FieldIssue::new(name, missing_message(name)));
            }
            None
        }
        Some(value) => match parse(value) {
            Ok(parsed) => Some(parsed),
            Err(message) => {
                issues.push(FieldIssue::new(name, message));
                None
            }
        },
    }
}

fn missing_message(name: &str) -> String {
    let label = match name {
        "title" => "Title",
        "year" => "Year",
        "genre" => "Genre",
        "director" => "Director",
        "duration" => "Duration",
        "rate" => "Rate",
        "poster" => "Poster",
        other => other,
    };
    format!("{label} is required")
}

// --- Per-field rules, shared by full and partial validation ---

fn parse_title(value: &Value) -> Result<String, String> {
    let title = value
        .as_str()
        .ok_or_else(|| "Title must be a string".to_string())?;
    if title.is_empty() {
        return Err("Title must be at least 1 character".to_string());
    }
    Ok(title.to_string())
}

fn parse_year(value: &Value) -> Result<i32, String> {
    let year = value
        .as_i64()
        .ok_or_else(|| "Year must be an integer".to_string())?;
    // Upper bound follows the wall clock, so the same payload can flip from
    // valid to invalid across a year boundary.
    let current = i64::from(Utc::now().year());
    if !(MIN_YEAR..=current).contains(&year) {
        return Err(format!("Year must be between {MIN_YEAR} and {current}"));
    }
    Ok(year as i32)
}

fn parse_genres(value: &Value) -> Result<Vec<Genre>, String> {
    let entries = value
        .as_array()
        .ok_or_else(|| "Genre must be an array of genres".to_string())?;
    if entries.is_empty() {
        return Err("At least one genre is required".to_string());
    }
    let mut genres = Vec::with_capacity(entries.len());
    for entry in entries {
        let name = entry
            .as_str()
            .ok_or_else(|| format!("Invalid genre: {entry}"))?;
        let genre = name
            .parse::<Genre>()
            .map_err(|()| format!("Invalid genre: {name}"))?;
        // Duplicates are allowed; the list is order-preserving.
        genres.push(genre);
    }
    Ok(genres)
}

fn parse_director(value: &Value) -> Result<String, String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| "Director must be a string".to_string())
}

fn parse_duration(value: &Value) -> Result<u32, String> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| "Duration must be a non-negative integer".to_string())
}

fn parse_rate(value: &Value) -> Result<f64, String> {
    let rate = value
        .as_f64()
        .ok_or_else(|| "Rate must be a number".to_string())?;
    if !(0.0..=10.0).contains(&rate) {
        return Err("Rate must be between 0 and 10".to_string());
    }
    Ok(rate)
}

fn parse_poster(value: &Value) -> Result<String, String> {
    let poster = value
        .as_str()
        .ok_or_else(|| "Poster must be a string".to_string())?;
    // Syntactic well-formedness only; no reachability check.
    Url::parse(poster).map_err(|_| "Poster must be a valid URL".to_string())?;
    Ok(poster.to_string())
}
