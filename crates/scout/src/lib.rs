// ABOUTME: Main library entry point for the reelcopy movie metadata extractor.
// ABOUTME: Re-exports the public API: Extractor, ExtractorBuilder, MovieRecord, ExtractError, CopyFormat.

//! Scout - reads movie metadata out of a rendered source page.
//!
//! Every field of a [`MovieRecord`] is resolved through an ordered list of CSS
//! selectors described by a data-driven [`FieldTable`]. The first selector that
//! yields a non-empty value wins; a field nobody matches is simply empty.
//!
//! # Example
//!
//! ```
//! use reelcopy_scout::Extractor;
//!
//! let extractor = Extractor::builder().build();
//! let html = r#"<h1>Inception</h1><div class="year">2010</div>"#;
//! let record = extractor
//!     .extract_html("http://127.0.0.1:5000/movie/27205", html)
//!     .unwrap();
//! assert_eq!(record.title, "Inception");
//! assert_eq!(record.year, "2010");
//! ```

pub mod error;
pub mod extractor;
pub mod extractors;
pub mod formats;
pub mod options;
pub mod recognizer;
pub mod record;

pub use crate::error::{ErrorCode, ExtractError};
pub use crate::extractor::Extractor;
pub use crate::extractors::loader::{load_builtin_table, load_table_file, load_table_str};
pub use crate::extractors::rules::{FieldRule, FieldTable, SelectorSpec, TransformSpec};
pub use crate::formats::CopyFormat;
pub use crate::options::{ExtractorBuilder, Options};
pub use crate::recognizer::{origin_of, PageRecognizer};
pub use crate::record::MovieRecord;

/// Re-exported so callers can hand parsed documents to the extractor.
pub use dom_query::Document;
