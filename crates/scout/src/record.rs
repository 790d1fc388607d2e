// ABOUTME: MovieRecord struct holding the movie fields scraped from a source page.
// ABOUTME: Every field defaults to empty; this is also the shape that crosses the message boundary.

use serde::{Deserialize, Serialize};

/// Movie metadata extracted from a source page.
///
/// Missing data is represented by empty values, never by absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MovieRecord {
    pub title: String,
    pub original_title: String,
    /// Four digits, or empty.
    pub year: String,
    pub director: String,
    /// Comma-space joined.
    pub genres: String,
    /// Comma-space joined, first three entries only.
    pub cast: String,
    pub trailer_id: String,
    pub tmdb_id: String,
    pub poster_url: String,
    pub streaming_providers: Vec<String>,
}

impl MovieRecord {
    /// Returns true if nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.original_title.is_empty()
            && self.year.is_empty()
            && self.director.is_empty()
            && self.genres.is_empty()
            && self.cast.is_empty()
            && self.trailer_id.is_empty()
            && self.tmdb_id.is_empty()
            && self.poster_url.is_empty()
            && self.streaming_providers.is_empty()
    }

    /// Genres split back into individual names.
    pub fn genre_list(&self) -> Vec<&str> {
        split_joined(&self.genres)
    }

    /// Cast split back into individual names.
    pub fn cast_list(&self) -> Vec<&str> {
        split_joined(&self.cast)
    }
}

fn split_joined(s: &str) -> Vec<&str> {
    s.split(", ").map(str::trim).filter(|p| !p.is_empty()).collect()
}
