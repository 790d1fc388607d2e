// ABOUTME: Selector-based field extraction for evaluating a FieldRule against a document.
// ABOUTME: Supports text or attribute extraction, text fallback, limits, and selector precedence.

//! Selector-based field extraction utilities.
//!
//! Key behaviors:
//! - Selectors are tried in order; the first selector matching a node with a
//!   non-empty raw value wins, and later selectors are never consulted.
//! - Single-valued rules transform the first non-empty node of the winning
//!   selector only. An empty transform result is the field's value.
//! - `allow_multiple`: every node of the winning selector, cut to `limit`
//!   nodes when set, then transformed; empty values are dropped.
//! - Text is trimmed, inner whitespace is kept.

use dom_query::{Document, Selection};
use url::Url;

use crate::extractors::compiled::get_or_compile;
use crate::extractors::rules::{FieldRule, SelectorSpec};
use crate::extractors::transform;

/// Evaluates a rule, returning the values of the winning selector.
///
/// Returns an empty vec if no selector yields a value.
pub fn extract_values(doc: &Document, rule: &FieldRule, base: Option<&Url>) -> Vec<String> {
    for spec in &rule.selectors {
        let mut raw = raw_values(doc, spec, rule.text_fallback);
        let Some(first) = raw.iter().find(|v| !v.is_empty()) else {
            continue;
        };

        if !rule.allow_multiple {
            let value = transform::apply(&rule.transform, first, base);
            return if value.is_empty() { Vec::new() } else { vec![value] };
        }

        if let Some(limit) = rule.limit {
            raw.truncate(limit);
        }
        return raw
            .iter()
            .map(|v| transform::apply(&rule.transform, v, base))
            .filter(|v| !v.is_empty())
            .collect();
    }
    Vec::new()
}

/// First value of a rule, or empty.
pub fn extract_first(doc: &Document, rule: &FieldRule, base: Option<&Url>) -> String {
    extract_values(doc, rule, base)
        .into_iter()
        .next()
        .unwrap_or_default()
}

/// Values of a rule joined with ", ".
pub fn extract_joined(doc: &Document, rule: &FieldRule, base: Option<&Url>) -> String {
    extract_values(doc, rule, base).join(", ")
}

/// Raw (untransformed) value of every node matched by one selector, in
/// document order. Nodes without a value yield an empty string.
fn raw_values(doc: &Document, spec: &SelectorSpec, text_fallback: bool) -> Vec<String> {
    let (css, attr) = spec.parts();
    if css.is_empty() {
        return vec![];
    }
    let matcher = match get_or_compile(css) {
        Some(m) => m,
        None => {
            tracing::debug!(selector = css, "skipping invalid selector");
            return vec![];
        }
    };

    doc.select_matcher(&matcher)
        .iter()
        .map(|el| match attr {
            None => element_text(&el),
            Some(attr) => {
                let value = el.attr(attr).map(|v| v.trim().to_string()).unwrap_or_default();
                if value.is_empty() && text_fallback {
                    element_text(&el)
                } else {
                    value
                }
            }
        })
        .collect()
}

fn element_text(el: &Selection) -> String {
    el.text().trim().to_string()
}
