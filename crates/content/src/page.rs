// ABOUTME: Page model: a URL, a mutable parsed HTML document, and a log of dispatched events.
// ABOUTME: All DOM access of the mapper goes through this type.

use dom_query::{Document, Selection};
use reelcopy_scout::extractors::compiled::get_or_compile;

/// Kind of synthetic event dispatched to a form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Input,
    Change,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Input => "input",
            EventKind::Change => "change",
        }
    }
}

/// A synthetic event as observed by the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchedEvent {
    pub kind: EventKind,
    /// The identifier the control was located by.
    pub target: String,
    pub bubbles: bool,
}

/// A live page: its URL, its document, and the events dispatched into it.
pub struct Page {
    url: String,
    doc: Document,
    events: Vec<DispatchedEvent>,
}

impl Page {
    pub fn new(url: impl Into<String>, html: &str) -> Self {
        Self::from_document(url, Document::from(html))
    }

    pub fn from_document(url: impl Into<String>, doc: Document) -> Self {
        Self {
            url: url.into(),
            doc,
            events: Vec::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Serializes the current document.
    pub fn html(&self) -> String {
        self.doc.html().to_string()
    }

    /// Selects by CSS; an invalid selector selects nothing.
    pub fn select(&self, css: &str) -> Option<Selection<'_>> {
        let matcher = get_or_compile(css)?;
        let sel = self.doc.select_matcher(&matcher);
        if sel.exists() {
            Some(sel)
        } else {
            None
        }
    }

    /// Number of elements matching `css`.
    pub fn count(&self, css: &str) -> usize {
        self.select(css).map(|s| s.length()).unwrap_or(0)
    }

    /// Returns true if an element with this id exists.
    pub fn element_exists(&self, id: &str) -> bool {
        self.select(&attr_selector("id", id)).is_some()
    }

    /// Removes every element with this id. Removing an absent id is a no-op.
    pub fn remove_element(&mut self, id: &str) -> bool {
        self.remove_matching(&attr_selector("id", id))
    }

    /// Removes every element matching `css`, returning true if any was removed.
    pub fn remove_matching(&mut self, css: &str) -> bool {
        match self.select(css) {
            Some(sel) => {
                sel.remove();
                true
            }
            None => false,
        }
    }

    /// Appends an HTML fragment as the last child of `<body>`.
    pub fn append_to_body(&mut self, html: &str) {
        self.doc.select("body").append_html(html);
    }

    /// Appends an HTML fragment as the last child of `<head>`.
    pub fn append_to_head(&mut self, html: &str) {
        self.doc.select("head").append_html(html);
    }

    /// Events dispatched so far, oldest first.
    pub fn events(&self) -> &[DispatchedEvent] {
        &self.events
    }

    /// Drains the event log.
    pub fn take_events(&mut self) -> Vec<DispatchedEvent> {
        std::mem::take(&mut self.events)
    }

    /// Splits the page into its document and its event log, so a located
    /// element can be mutated while events are recorded.
    pub(crate) fn parts_mut(&mut self) -> (&Document, &mut Vec<DispatchedEvent>) {
        (&self.doc, &mut self.events)
    }
}

/// Quotes a value as a CSS string literal.
pub fn css_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\a "),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// `[attr="value"]` with the value safely quoted.
pub fn attr_selector(attr: &str, value: &str) -> String {
    format!("[{}={}]", attr, css_string(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HTML: &str = r#"<html><head></head><body><div id="a">A</div><p class="x">1</p><p class="x">2</p></body></html>"#;

    #[test]
    fn test_count_and_exists() {
        let page = Page::new("https://blog.example.com/wp-admin/", HTML);
        assert_eq!(page.count("p.x"), 2);
        assert!(page.element_exists("a"));
        assert!(!page.element_exists("b"));
        assert_eq!(page.count("[[[invalid"), 0);
    }

    #[test]
    fn test_remove_element_is_idempotent() {
        let mut page = Page::new("u", HTML);
        assert!(page.remove_element("a"));
        assert!(!page.element_exists("a"));
        assert!(!page.remove_element("a"));
    }

    #[test]
    fn test_append_to_body_and_head() {
        let mut page = Page::new("u", HTML);
        page.append_to_body(r#"<section id="s">hi</section>"#);
        page.append_to_head(r#"<style id="st">p{}</style>"#);
        assert!(page.element_exists("s"));
        assert_eq!(page.count("head style"), 1);
    }

    #[test]
    fn test_css_string_escapes_quotes() {
        assert_eq!(css_string(r#"a"b\c"#), r#""a\"b\\c""#);
        assert_eq!(attr_selector("name", "acf[field_1]"), r#"[name="acf[field_1]"]"#);
    }

    #[test]
    fn test_attr_selector_matches_bracketed_names() {
        let page = Page::new(
            "u",
            r#"<body><input name="acf[field_1]" type="text"></body>"#,
        );
        assert_eq!(page.count(&attr_selector("name", "acf[field_1]")), 1);
    }
}
