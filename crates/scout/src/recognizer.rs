// ABOUTME: URL-pattern recognizer deciding whether a page is a known source or admin page.
// ABOUTME: Also provides origin_of() for scoping persisted data to a site.

use url::Url;

/// Default patterns identifying the movie catalog app.
pub const SOURCE_PATTERNS: &[&str] = &["movie-info-app", "127.0.0.1:5000", "localhost:5000"];

/// Default patterns identifying a WordPress admin page.
pub const ADMIN_PATTERNS: &[&str] = &["wp-admin", "wordpress"];

/// Matches page URLs against a list of substring patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRecognizer {
    patterns: Vec<String>,
}

impl PageRecognizer {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(Into::into)
                .filter(|p: &String| !p.is_empty())
                .collect(),
        }
    }

    /// Recognizer for the movie catalog app.
    pub fn source_defaults() -> Self {
        Self::new(SOURCE_PATTERNS.iter().copied())
    }

    /// Recognizer for WordPress admin pages.
    pub fn admin_defaults() -> Self {
        Self::new(ADMIN_PATTERNS.iter().copied())
    }

    /// Returns true if any pattern occurs in the URL.
    pub fn matches(&self, url: &str) -> bool {
        self.patterns.iter().any(|p| url.contains(p.as_str()))
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

/// Extracts the origin (scheme + host + optional port) from a URL.
pub fn origin_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    match parsed.port() {
        Some(port) => Some(format!("{}://{}:{}", parsed.scheme(), host, port)),
        None => Some(format!("{}://{}", parsed.scheme(), host)),
    }
}
