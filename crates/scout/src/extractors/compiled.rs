// ABOUTME: Pre-compiled CSS selector cache for repeated selector lookup.
// ABOUTME: Shared by the extractor and by destination-page control probing.

//! Selector caching for efficient repeated DOM queries.
//!
//! Invalid selectors are cached too (as `None`) so a broken table entry or an
//! unusual control identifier is only parsed once.

use std::collections::HashMap;
use std::sync::RwLock;

use dom_query::Matcher;
use once_cell::sync::Lazy;

type MatcherCache = RwLock<HashMap<String, Option<Matcher>>>;

static MATCHERS: Lazy<MatcherCache> = Lazy::new(|| RwLock::new(HashMap::new()));

fn compile(css: &str) -> Option<Matcher> {
    match Matcher::new(css) {
        Ok(matcher) => Some(matcher),
        Err(_) => {
            tracing::debug!(selector = css, "unparsable selector");
            None
        }
    }
}

/// Returns the cached matcher for `css`, compiling it on first use.
///
/// `None` means the selector does not parse.
pub fn get_or_compile(css: &str) -> Option<Matcher> {
    if let Some(hit) = MATCHERS
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .get(css)
    {
        return hit.clone();
    }

    let compiled = compile(css);
    MATCHERS
        .write()
        .unwrap_or_else(|e| e.into_inner())
        .entry(css.to_string())
        .or_insert(compiled)
        .clone()
}

/// Warms the cache with every selector of a table.
pub fn precompile_selectors<I, S>(selectors: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cache = MATCHERS.write().unwrap_or_else(|e| e.into_inner());
    for css in selectors {
        let css = css.as_ref();
        if !cache.contains_key(css) {
            cache.insert(css.to_string(), compile(css));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_selector_is_cached() {
        assert!(get_or_compile(".movie-title h1").is_some());
        assert!(get_or_compile(".movie-title h1").is_some());
    }

    #[test]
    fn test_invalid_selector_returns_none() {
        assert!(get_or_compile("[[[invalid").is_none());
        assert!(get_or_compile("[[[invalid").is_none());
    }

    #[test]
    fn test_precompile_selectors() {
        precompile_selectors([".genre-tag", "[data-field=\"cast\"]"]);
        assert!(get_or_compile(".genre-tag").is_some());
        assert!(get_or_compile("[data-field=\"cast\"]").is_some());
    }
}
