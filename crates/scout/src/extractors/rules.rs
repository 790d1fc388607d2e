// ABOUTME: Data model for the per-field selector table used by the extractor.
// ABOUTME: Defines SelectorSpec, TransformSpec, FieldRule and FieldTable with serde support.

//! Selector table definitions.
//!
//! Each movie field is described by a [`FieldRule`]: an ordered list of
//! selectors plus a post-processor. Keeping the table as data lets it ship as
//! embedded JSON and be replaced from a file without touching code.

use serde::{Deserialize, Serialize};

/// Specifies how to select content from the DOM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectorSpec {
    /// A simple CSS selector string; the element text is used, e.g. "h1.title"
    Css(String),
    /// A CSS selector with attribute extraction, e.g. ["img", "src"]
    CssAttr(Vec<String>),
}

impl Default for SelectorSpec {
    fn default() -> Self {
        SelectorSpec::Css(String::new())
    }
}

impl SelectorSpec {
    /// Returns (css_selector, optional_attribute).
    pub fn parts(&self) -> (&str, Option<&str>) {
        match self {
            SelectorSpec::Css(css) => (css.as_str(), None),
            SelectorSpec::CssAttr(parts) => match parts.as_slice() {
                [css, attr, ..] => (css.as_str(), Some(attr.as_str())),
                [css] => (css.as_str(), None),
                [] => ("", None),
            },
        }
    }
}

/// Post-processing applied to every raw value a selector produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransformSpec {
    /// Keep the value as-is (already trimmed)
    #[default]
    Trim,
    /// Keep only the first run of four digits
    Year,
    /// Keep the value of a query parameter, e.g. `v` of a YouTube link
    QueryParam { name: String },
    /// Resolve a possibly relative URL against the page URL
    ResolveUrl,
}

/// Extraction rule for a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Selectors to try in order, most specific first
    #[serde(default)]
    pub selectors: Vec<SelectorSpec>,
    /// Collect every match of the winning selector instead of the first
    #[serde(default)]
    pub allow_multiple: bool,
    /// Keep at most this many matches
    #[serde(default)]
    pub limit: Option<usize>,
    /// For attribute selectors, fall back to element text when the attribute is missing
    #[serde(default)]
    pub text_fallback: bool,
    #[serde(default)]
    pub transform: TransformSpec,
}

/// One rule per [`MovieRecord`](crate::MovieRecord) field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldTable {
    pub title: FieldRule,
    pub original_title: FieldRule,
    pub year: FieldRule,
    pub director: FieldRule,
    pub genres: FieldRule,
    pub cast: FieldRule,
    pub trailer_id: FieldRule,
    pub tmdb_id: FieldRule,
    pub poster_url: FieldRule,
    pub streaming_providers: FieldRule,
}

impl FieldTable {
    /// All rules paired with their field names, in record order.
    pub fn rules(&self) -> [(&'static str, &FieldRule); 10] {
        [
            ("title", &self.title),
            ("original_title", &self.original_title),
            ("year", &self.year),
            ("director", &self.director),
            ("genres", &self.genres),
            ("cast", &self.cast),
            ("trailer_id", &self.trailer_id),
            ("tmdb_id", &self.tmdb_id),
            ("poster_url", &self.poster_url),
            ("streaming_providers", &self.streaming_providers),
        ]
    }

    /// Every CSS selector string mentioned anywhere in the table.
    pub fn selector_strings(&self) -> Vec<&str> {
        self.rules()
            .into_iter()
            .flat_map(|(_, rule)| rule.selectors.iter().map(|s| s.parts().0))
            .filter(|css| !css.is_empty())
            .collect()
    }
}
