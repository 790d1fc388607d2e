// ABOUTME: The Extractor that turns a recognized source page into a MovieRecord.
// ABOUTME: Evaluates the field table rule by rule; absent fields become empty values.

use dom_query::Document;
use url::Url;

use crate::error::ExtractError;
use crate::extractors::select::{extract_first, extract_joined, extract_values};
use crate::options::{ExtractorBuilder, Options};
use crate::record::MovieRecord;

/// Reads movie metadata from source pages.
#[derive(Debug, Clone)]
pub struct Extractor {
    opts: Options,
}

impl Extractor {
    pub fn new(opts: Options) -> Self {
        Self { opts }
    }

    pub fn builder() -> ExtractorBuilder {
        ExtractorBuilder::new()
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Returns true if `url` belongs to a known source page.
    pub fn recognizes(&self, url: &str) -> bool {
        self.opts.source.matches(url)
    }

    /// Extracts a record from an already parsed document.
    ///
    /// Fails only when the URL is not a recognized source page; missing
    /// fields are returned as empty values.
    pub fn extract(&self, url: &str, doc: &Document) -> Result<MovieRecord, ExtractError> {
        if !self.recognizes(url) {
            return Err(ExtractError::unrecognized_page(url, "extract"));
        }
        let record = self.extract_unchecked(url, doc);
        tracing::debug!(url, title = %record.title, "extracted movie record");
        Ok(record)
    }

    /// Parses `html` and extracts a record from it.
    pub fn extract_html(&self, url: &str, html: &str) -> Result<MovieRecord, ExtractError> {
        let doc = Document::from(html);
        self.extract(url, &doc)
    }

    /// Like [`extract`](Self::extract) but recovers an unrecognized page as an
    /// empty record.
    pub fn extract_or_default(&self, url: &str, doc: &Document) -> MovieRecord {
        match self.extract(url, doc) {
            Ok(record) => record,
            Err(err) => {
                tracing::debug!(error = %err, "returning empty record");
                MovieRecord::default()
            }
        }
    }

    fn extract_unchecked(&self, url: &str, doc: &Document) -> MovieRecord {
        let table = &self.opts.table;
        let base = Url::parse(url).ok();
        let base = base.as_ref();

        MovieRecord {
            title: extract_first(doc, &table.title, base),
            original_title: extract_first(doc, &table.original_title, base),
            year: extract_first(doc, &table.year, base),
            director: extract_first(doc, &table.director, base),
            genres: extract_joined(doc, &table.genres, base),
            cast: extract_joined(doc, &table.cast, base),
            trailer_id: extract_first(doc, &table.trailer_id, base),
            tmdb_id: extract_first(doc, &table.tmdb_id, base),
            poster_url: extract_first(doc, &table.poster_url, base),
            streaming_providers: extract_values(doc, &table.streaming_providers, base),
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
