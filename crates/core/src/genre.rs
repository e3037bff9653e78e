use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed set of catalog genres.
///
/// Spellings are the wire format and are matched case-sensitively on input;
/// only the genre *filter* query compares case-insensitively (see
/// [`Genre::matches_filter`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Mystery,
    Thriller,
    Western,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Animation,
    Documentary,
    Biography,
    Crime,
    Romance,
    Family,
    War,
    History,
    Music,
    Sport,
    Musical,
}

impl Genre {
    pub const ALL: [Genre; 21] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Comedy,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Mystery,
        Genre::Thriller,
        Genre::Western,
        Genre::SciFi,
        Genre::Animation,
        Genre::Documentary,
        Genre::Biography,
        Genre::Crime,
        Genre::Romance,
        Genre::Family,
        Genre::War,
        Genre::History,
        Genre::Music,
        Genre::Sport,
        Genre::Musical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Mystery => "Mystery",
            Genre::Thriller => "Thriller",
            Genre::Western => "Western",
            Genre::SciFi => "Sci-Fi",
            Genre::Animation => "Animation",
            Genre::Documentary => "Documentary",
            Genre::Biography => "Biography",
            Genre::Crime => "Crime",
            Genre::Romance => "Romance",
            Genre::Family => "Family",
            Genre::War => "War",
            Genre::History => "History",
            Genre::Music => "Music",
            Genre::Sport => "Sport",
            Genre::Musical => "Musical",
        }
    }

    /// Case-insensitive comparison used by the `?genre=` list filter.
    pub fn matches_filter(&self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = ();

    /// Case-sensitive lookup against the fixed spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!("Comedy".parse::<Genre>(), Ok(Genre::Comedy));
        assert!("comedy".parse::<Genre>().is_err());
        assert_eq!("Sci-Fi".parse::<Genre>(), Ok(Genre::SciFi));
        assert!("SciFi".parse::<Genre>().is_err());
    }

    #[test]
    fn filter_match_is_case_insensitive() {
        assert!(Genre::Comedy.matches_filter("comedy"));
        assert!(Genre::SciFi.matches_filter("SCI-FI"));
        assert!(!Genre::Comedy.matches_filter("drama"));
    }

    #[test]
    fn serializes_with_display_spelling() {
        let json = serde_json::to_string(&Genre::SciFi).unwrap();
        assert_eq!(json, "\"Sci-Fi\"");
        let back: Genre = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Genre::SciFi);
    }
}
