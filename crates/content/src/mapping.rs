// ABOUTME: Semantic field keys and the persisted FieldMapping from keys to destination controls.
// ABOUTME: A mapping always serializes with exactly the seven semantic keys.

use std::fmt;
use std::str::FromStr;

use reelcopy_scout::MovieRecord;
use serde::{Deserialize, Serialize};

/// The movie attributes that can be mapped onto a destination form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticKey {
    Title,
    Director,
    Year,
    Genres,
    Cast,
    Poster,
    Trailer,
}

impl SemanticKey {
    pub const ALL: [SemanticKey; 7] = [
        SemanticKey::Title,
        SemanticKey::Director,
        SemanticKey::Year,
        SemanticKey::Genres,
        SemanticKey::Cast,
        SemanticKey::Poster,
        SemanticKey::Trailer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticKey::Title => "title",
            SemanticKey::Director => "director",
            SemanticKey::Year => "year",
            SemanticKey::Genres => "genres",
            SemanticKey::Cast => "cast",
            SemanticKey::Poster => "poster",
            SemanticKey::Trailer => "trailer",
        }
    }

    /// Label shown next to the key's dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            SemanticKey::Title => "Movie title",
            SemanticKey::Director => "Director",
            SemanticKey::Year => "Year",
            SemanticKey::Genres => "Genres",
            SemanticKey::Cast => "Cast",
            SemanticKey::Poster => "Poster",
            SemanticKey::Trailer => "Trailer ID",
        }
    }

    /// The record value this key carries into the destination form.
    pub fn value_of<'r>(&self, record: &'r MovieRecord) -> &'r str {
        match self {
            SemanticKey::Title => &record.title,
            SemanticKey::Director => &record.director,
            SemanticKey::Year => &record.year,
            SemanticKey::Genres => &record.genres,
            SemanticKey::Cast => &record.cast,
            SemanticKey::Poster => &record.poster_url,
            SemanticKey::Trailer => &record.trailer_id,
        }
    }
}

impl fmt::Display for SemanticKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SemanticKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SemanticKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown field key: {}", s))
    }
}

/// Destination control identifier per semantic key; empty means unmapped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMapping {
    pub title: String,
    pub director: String,
    pub year: String,
    pub genres: String,
    pub cast: String,
    pub poster: String,
    pub trailer: String,
}

impl FieldMapping {
    pub fn get(&self, key: SemanticKey) -> &str {
        match key {
            SemanticKey::Title => &self.title,
            SemanticKey::Director => &self.director,
            SemanticKey::Year => &self.year,
            SemanticKey::Genres => &self.genres,
            SemanticKey::Cast => &self.cast,
            SemanticKey::Poster => &self.poster,
            SemanticKey::Trailer => &self.trailer,
        }
    }

    pub fn set(&mut self, key: SemanticKey, identifier: impl Into<String>) {
        let slot = match key {
            SemanticKey::Title => &mut self.title,
            SemanticKey::Director => &mut self.director,
            SemanticKey::Year => &mut self.year,
            SemanticKey::Genres => &mut self.genres,
            SemanticKey::Cast => &mut self.cast,
            SemanticKey::Poster => &mut self.poster,
            SemanticKey::Trailer => &mut self.trailer,
        };
        *slot = identifier.into();
    }

    /// Keys with a destination, paired with their identifier.
    pub fn mapped(&self) -> impl Iterator<Item = (SemanticKey, &str)> + '_ {
        SemanticKey::ALL
            .into_iter()
            .map(move |k| (k, self.get(k)))
            .filter(|(_, id)| !id.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.mapped().next().is_none()
    }
}
