// ABOUTME: Error types for the extractor including ErrorCode enum and ExtractError struct.
// ABOUTME: Provides categorized errors with convenience constructors and boolean helpers.

use std::fmt;

/// Error codes representing different categories of extraction failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    UnrecognizedPage,
    InvalidTable,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::UnrecognizedPage => "not a recognized source page",
            ErrorCode::InvalidTable => "invalid field table",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub struct ExtractError {
    pub code: ErrorCode,
    pub url: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scout: {} {}: {}", self.op, self.url, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl ExtractError {
    /// Create an UnrecognizedPage error.
    pub fn unrecognized_page(url: impl Into<String>, op: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::UnrecognizedPage,
            url: url.into(),
            op: op.into(),
            source: None,
        }
    }

    /// Create an InvalidTable error. `url` holds the table location, if any.
    pub fn invalid_table(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::InvalidTable,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Returns true if the page was not a recognized source page.
    pub fn is_unrecognized_page(&self) -> bool {
        self.code == ErrorCode::UnrecognizedPage
    }

    /// Returns true if a field table could not be loaded.
    pub fn is_invalid_table(&self) -> bool {
        self.code == ErrorCode::InvalidTable
    }
}
