// ABOUTME: Discovery of fillable controls on the destination page at modal-open time.
// ABOUTME: Builds the DestinationFieldCatalog of (label, identifier) pairs in document order.

use crate::page::Page;

const TEXT_CONTROLS: &str = r#"input[type="text"], input[type="url"], textarea"#;
const SELECT_CONTROLS: &str = "select";

/// One fillable control offered in the mapping dropdowns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub label: String,
    pub identifier: String,
}

/// Fillable controls of the destination page. Rebuilt on every modal open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationFieldCatalog {
    entries: Vec<CatalogEntry>,
}

impl DestinationFieldCatalog {
    /// Scans the page: text/url inputs and textareas first, then selects.
    ///
    /// Controls with neither a `name` nor an `id` cannot be located again and
    /// are left out.
    pub fn scan(page: &Page) -> Self {
        let mut entries = Vec::new();
        collect(page, TEXT_CONTROLS, "Input Field", true, &mut entries);
        collect(page, SELECT_CONTROLS, "Select Field", false, &mut entries);
        tracing::debug!(url = page.url(), controls = entries.len(), "scanned destination form");
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `identifier` is offered by some entry.
    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.iter().any(|e| e.identifier == identifier)
    }
}

fn collect(
    page: &Page,
    css: &str,
    fallback_label: &str,
    use_placeholder: bool,
    entries: &mut Vec<CatalogEntry>,
) {
    let Some(controls) = page.select(css) else {
        return;
    };
    for control in controls.iter() {
        let attr = |name: &str| {
            control
                .attr(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let name = attr("name");
        let id = attr("id");
        let Some(identifier) = name.clone().or_else(|| id.clone()) else {
            continue;
        };
        let placeholder = if use_placeholder { attr("placeholder") } else { None };
        let label = name
            .or(id)
            .or(placeholder)
            .unwrap_or_else(|| fallback_label.to_string());
        entries.push(CatalogEntry { label, identifier });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(label: &str, identifier: &str) -> CatalogEntry {
        CatalogEntry {
            label: label.to_string(),
            identifier: identifier.to_string(),
        }
    }

    #[test]
    fn test_scan_orders_text_controls_before_selects() {
        let page = Page::new(
            "https://blog.example.com/wp-admin/post.php",
            r#"<body>
                <select name="category"><option>Film</option></select>
                <input type="text" name="post_title" id="title">
                <textarea id="excerpt"></textarea>
                <input type="url" name="poster_url">
            </body>"#,
        );
        let catalog = DestinationFieldCatalog::scan(&page);
        assert_eq!(
            catalog.entries(),
            &[
                entry("post_title", "post_title"),
                entry("excerpt", "excerpt"),
                entry("poster_url", "poster_url"),
                entry("category", "category"),
            ]
        );
    }

    #[test]
    fn test_controls_without_name_or_id_are_excluded() {
        let page = Page::new(
            "u",
            r#"<body>
                <input type="text" placeholder="Search">
                <select></select>
                <input type="text" id="tags">
            </body>"#,
        );
        let catalog = DestinationFieldCatalog::scan(&page);
        assert_eq!(catalog.entries(), &[entry("tags", "tags")]);
    }

    #[test]
    fn test_ignores_other_input_types() {
        let page = Page::new(
            "u",
            r#"<body>
                <input type="hidden" name="_wpnonce">
                <input type="checkbox" name="sticky">
                <input type="submit" id="publish">
            </body>"#,
        );
        assert!(DestinationFieldCatalog::scan(&page).is_empty());
    }

    #[test]
    fn test_contains() {
        let page = Page::new("u", r#"<body><textarea name="content"></textarea></body>"#);
        let catalog = DestinationFieldCatalog::scan(&page);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("content"));
        assert!(!catalog.contains("title"));
    }
}
