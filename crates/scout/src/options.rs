// ABOUTME: Configuration options for the extractor and the ExtractorBuilder fluent API.
// ABOUTME: Holds the source-page recognizer and the field table in use.

use crate::extractor::Extractor;
use crate::extractors::loader::load_builtin_table;
use crate::extractors::rules::FieldTable;
use crate::recognizer::PageRecognizer;

/// Configuration options for the extractor.
#[derive(Debug, Clone)]
pub struct Options {
    pub source: PageRecognizer,
    pub table: FieldTable,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            source: PageRecognizer::source_defaults(),
            table: load_builtin_table(),
        }
    }
}

/// Builder for constructing Extractor instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ExtractorBuilder {
    opts: Options,
}

impl ExtractorBuilder {
    /// Create a new ExtractorBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Replace the URL patterns that identify a source page.
    pub fn source_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opts.source = PageRecognizer::new(patterns);
        self
    }

    /// Use a custom field table.
    pub fn table(mut self, table: FieldTable) -> Self {
        self.opts.table = table;
        self
    }

    /// Build the Extractor with the configured options.
    pub fn build(self) -> Extractor {
        Extractor::new(self.opts)
    }
}

impl Default for ExtractorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
