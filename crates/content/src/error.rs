// ABOUTME: Error types for the mapper including ErrorCode enum and MappingError struct.
// ABOUTME: Provides categorized errors with convenience constructors and boolean helpers.

use std::fmt;

/// Error codes representing different categories of mapping failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    WrongPage,
    NotOpen,
    UnknownField,
    PersistenceFailed,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::WrongPage => "not a recognized admin page",
            ErrorCode::NotOpen => "mapping modal is not open",
            ErrorCode::UnknownField => "unknown destination field",
            ErrorCode::PersistenceFailed => "failed to persist mapping",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for mapping operations.
#[derive(Debug, thiserror::Error)]
pub struct MappingError {
    pub code: ErrorCode,
    pub url: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "content: {} {}: {}", self.op, self.url, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl MappingError {
    fn new(
        code: ErrorCode,
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a WrongPage error.
    pub fn wrong_page(url: impl Into<String>, op: impl Into<String>) -> Self {
        Self::new(ErrorCode::WrongPage, url, op, None)
    }

    /// Create a NotOpen error.
    pub fn not_open(url: impl Into<String>, op: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotOpen, url, op, None)
    }

    /// Create an UnknownField error naming the identifier that was not offered.
    pub fn unknown_field(
        url: impl Into<String>,
        op: impl Into<String>,
        identifier: &str,
    ) -> Self {
        Self::new(
            ErrorCode::UnknownField,
            url,
            op,
            Some(anyhow::anyhow!("no catalog entry for {:?}", identifier)),
        )
    }

    /// Create a PersistenceFailed error.
    pub fn persistence_failed(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::PersistenceFailed, url, op, source)
    }

    /// Returns true if the page is not a recognized admin page.
    pub fn is_wrong_page(&self) -> bool {
        self.code == ErrorCode::WrongPage
    }

    /// Returns true if no modal was open.
    pub fn is_not_open(&self) -> bool {
        self.code == ErrorCode::NotOpen
    }

    /// Returns true if a chosen identifier is not in the catalog.
    pub fn is_unknown_field(&self) -> bool {
        self.code == ErrorCode::UnknownField
    }

    /// Returns true if the mapping could not be stored.
    pub fn is_persistence_failed(&self) -> bool {
        self.code == ErrorCode::PersistenceFailed
    }
}
