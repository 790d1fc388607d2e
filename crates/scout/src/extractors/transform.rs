// ABOUTME: Post-processors applied to raw selector matches before they become field values.
// ABOUTME: Implements year, query-parameter and URL-resolution transforms.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::extractors::rules::TransformSpec;

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{4}").unwrap());

/// Applies a transform to one raw value. An empty result means "no value".
pub fn apply(spec: &TransformSpec, raw: &str, base: Option<&Url>) -> String {
    let raw = raw.trim();
    match spec {
        TransformSpec::Trim => raw.to_string(),
        TransformSpec::Year => first_year(raw),
        TransformSpec::QueryParam { name } => query_param(raw, name),
        TransformSpec::ResolveUrl => resolve_url(raw, base),
    }
}

/// First run of four consecutive digits, or empty.
pub fn first_year(text: &str) -> String {
    YEAR_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Value of `name` in `[?&]name=value`, or empty.
///
/// Also accepts bare text such as `watch?v=abc123` that is not an absolute URL.
pub fn query_param(text: &str, name: &str) -> String {
    let pattern = format!(r"[?&]{}=([^&]+)", regex::escape(name));
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(_) => return String::new(),
    };
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Resolves a relative reference the way a browser resolves `img.src`.
pub fn resolve_url(raw: &str, base: Option<&Url>) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match base {
        Some(base) => base
            .join(raw)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| raw.to_string()),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_from_date() {
        assert_eq!(first_year("2017-03-01"), "2017");
        assert_eq!(first_year("Released (1999)"), "1999");
    }

    #[test]
    fn test_year_without_four_digits() {
        assert_eq!(first_year("TBA"), "");
        assert_eq!(first_year("99"), "");
    }

    #[test]
    fn test_query_param_v() {
        assert_eq!(
            query_param("https://youtube.com/watch?v=abc123&t=10", "v"),
            "abc123"
        );
        assert_eq!(query_param("https://youtube.com/watch?t=10&v=xyz", "v"), "xyz");
    }

    #[test]
    fn test_query_param_absent() {
        assert_eq!(query_param("https://youtube.com/embed/abc123", "v"), "");
        assert_eq!(query_param("https://example.com/?vv=1", "v"), "");
    }

    #[test]
    fn test_resolve_relative_against_base() {
        let base = Url::parse("http://127.0.0.1:5000/movie/27205").unwrap();
        assert_eq!(
            resolve_url("/static/posters/27205.jpg", Some(&base)),
            "http://127.0.0.1:5000/static/posters/27205.jpg"
        );
        assert_eq!(
            resolve_url("https://image.tmdb.org/t/p/w500/a.jpg", Some(&base)),
            "https://image.tmdb.org/t/p/w500/a.jpg"
        );
        assert_eq!(resolve_url("a.jpg", None), "a.jpg");
        assert_eq!(resolve_url("", Some(&base)), "");
    }

    #[test]
    fn test_apply_trims() {
        assert_eq!(apply(&TransformSpec::Trim, "  Heat ", None), "Heat");
        assert_eq!(apply(&TransformSpec::Year, " 2010 ", None), "2010");
    }
}
