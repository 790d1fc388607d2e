// ABOUTME: HTML rendering of the mapping modal and its stylesheet.
// ABOUTME: Also reads and writes the dropdown selections inside a rendered modal.

use reelcopy_scout::formats::escape_html;
use reelcopy_scout::MovieRecord;

use crate::catalog::DestinationFieldCatalog;
use crate::field::{select_option, selected_option_value};
use crate::mapping::{FieldMapping, SemanticKey};
use crate::page::{attr_selector, Page};

pub const MODAL_ID: &str = "movie-mapping-modal";
pub const STYLES_ID: &str = "movie-mapping-styles";
pub const SAVE_ID: &str = "save-mapping";
pub const CANCEL_ID: &str = "cancel-mapping";
pub const CLOSE_CLASS: &str = "movie-mapping-close";

const UNSELECTED_LABEL: &str = "-- Select field --";

/// Element id of the dropdown for `key`.
pub fn dropdown_id(key: SemanticKey) -> String {
    format!("map-{}", key.as_str())
}

/// Stylesheet injected once per page.
pub const STYLES: &str = r#"
.movie-mapping-overlay { position: fixed; top: 0; left: 0; width: 100%; height: 100%; background: rgba(0, 0, 0, 0.5); z-index: 999999; display: flex; align-items: center; justify-content: center; }
.movie-mapping-modal { background: white; border-radius: 8px; width: 90%; max-width: 600px; max-height: 80vh; overflow-y: auto; }
.movie-mapping-header { padding: 20px; border-bottom: 1px solid #eee; display: flex; justify-content: space-between; align-items: center; }
.movie-mapping-header h3 { margin: 0; }
.movie-mapping-close { background: none; border: none; font-size: 24px; cursor: pointer; color: #666; }
.movie-mapping-content { padding: 20px; }
.movie-info { background: #f8f9fa; padding: 15px; border-radius: 5px; margin-bottom: 20px; }
.mapping-field { margin-bottom: 15px; }
.mapping-field label { display: block; margin-bottom: 5px; font-weight: bold; }
.mapping-field select { width: 100%; padding: 8px; border: 1px solid #ddd; border-radius: 4px; }
.movie-mapping-footer { padding: 20px; border-top: 1px solid #eee; text-align: right; }
.movie-mapping-footer .btn { padding: 8px 16px; border: none; border-radius: 4px; cursor: pointer; margin-left: 10px; color: white; }
.movie-mapping-footer .btn-primary { background: #007cba; }
.movie-mapping-footer .btn-secondary { background: #6c757d; }
"#;

/// The `<style>` element carrying [`STYLES`].
pub fn render_styles() -> String {
    format!(r#"<style id="{}">{}</style>"#, STYLES_ID, STYLES)
}

/// Renders the modal for `record` with one dropdown per semantic key.
///
/// When `preselect` names an identifier present in the catalog, that option
/// starts out selected.
pub fn render_modal(
    record: &MovieRecord,
    catalog: &DestinationFieldCatalog,
    preselect: Option<&FieldMapping>,
) -> String {
    let or_unknown = |s: &str| {
        if s.is_empty() {
            "Unknown".to_string()
        } else {
            escape_html(s)
        }
    };

    let mut html = String::new();
    html.push_str(&format!(r#"<div id="{}">"#, MODAL_ID));
    html.push_str(r#"<div class="movie-mapping-overlay"><div class="movie-mapping-modal">"#);
    html.push_str(&format!(
        r#"<div class="movie-mapping-header"><h3>Movie field mapping</h3><button class="{}">&times;</button></div>"#,
        CLOSE_CLASS
    ));
    html.push_str(r#"<div class="movie-mapping-content">"#);
    html.push_str(&format!(
        r#"<div class="movie-info"><h4>{}</h4><p>Year: {}</p><p>Director: {}</p></div>"#,
        escape_html(&record.title),
        or_unknown(&record.year),
        or_unknown(&record.director)
    ));
    html.push_str(r#"<div class="mapping-settings"><h5>Choose the form field each value goes into:</h5>"#);

    for key in SemanticKey::ALL {
        let chosen = preselect
            .map(|m| m.get(key))
            .filter(|id| !id.is_empty() && catalog.contains(id));
        html.push_str(&format!(
            r#"<div class="mapping-field"><label for="{id}">{label}:</label><select id="{id}">"#,
            id = dropdown_id(key),
            label = key.label()
        ));
        html.push_str(&format!(
            r#"<option value="">{}</option>"#,
            UNSELECTED_LABEL
        ));
        let mut marked = false;
        for entry in catalog.entries() {
            let selected = !marked && chosen == Some(entry.identifier.as_str());
            marked |= selected;
            html.push_str(&format!(
                r#"<option value="{}"{}>{}</option>"#,
                escape_html(&entry.identifier),
                if selected { r#" selected="selected""# } else { "" },
                escape_html(&entry.label)
            ));
        }
        html.push_str("</select></div>");
    }

    html.push_str("</div></div>");
    html.push_str(&format!(
        r#"<div class="movie-mapping-footer"><button class="btn btn-primary" id="{}">Save mapping</button><button class="btn btn-secondary" id="{}">Cancel</button></div>"#,
        SAVE_ID, CANCEL_ID
    ));
    html.push_str("</div></div></div>");
    html
}

/// Current selection of every dropdown in the open modal.
pub fn read_mapping(page: &Page) -> FieldMapping {
    let mut mapping = FieldMapping::default();
    for key in SemanticKey::ALL {
        if let Some(select) = page.select(&dropdown_selector(key)) {
            mapping.set(key, selected_option_value(&select.first()));
        }
    }
    mapping
}

/// Selects `identifier` in the dropdown of `key`. Returns false if the
/// dropdown is missing or does not offer that identifier.
pub fn choose(page: &mut Page, key: SemanticKey, identifier: &str) -> bool {
    match page.select(&dropdown_selector(key)) {
        Some(select) => select_option(&select.first(), identifier),
        None => false,
    }
}

fn dropdown_selector(key: SemanticKey) -> String {
    format!(
        "{} select{}",
        attr_selector("id", MODAL_ID),
        attr_selector("id", &dropdown_id(key))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DestinationFieldCatalog;

    const FORM: &str = r#"<html><head></head><body>
        <input type="text" name="post_title">
        <input type="text" name="movie_year">
    </body></html>"#;

    fn open(preselect: Option<&FieldMapping>) -> Page {
        let mut page = Page::new("https://blog.example.com/wp-admin/post-new.php", FORM);
        let catalog = DestinationFieldCatalog::scan(&page);
        let record = MovieRecord {
            title: "Heat".to_string(),
            ..Default::default()
        };
        page.append_to_body(&render_modal(&record, &catalog, preselect));
        page
    }

    #[test]
    fn test_renders_one_dropdown_per_key() {
        let page = open(None);
        assert_eq!(page.count("#movie-mapping-modal select"), 7);
        // leading unselected option plus two catalog entries
        assert_eq!(page.count("#map-title option"), 3);
        assert_eq!(page.count("#map-trailer option"), 3);
        assert_eq!(page.count("#save-mapping"), 1);
        assert_eq!(page.count("#cancel-mapping"), 1);
        assert_eq!(page.count(".movie-mapping-close"), 1);
    }

    #[test]
    fn test_fresh_modal_reads_as_empty_mapping() {
        let page = open(None);
        assert_eq!(read_mapping(&page), FieldMapping::default());
    }

    #[test]
    fn test_choose_then_read() {
        let mut page = open(None);
        assert!(choose(&mut page, SemanticKey::Title, "post_title"));
        assert!(choose(&mut page, SemanticKey::Year, "movie_year"));
        assert!(!choose(&mut page, SemanticKey::Cast, "actors"));
        let mapping = read_mapping(&page);
        assert_eq!(mapping.title, "post_title");
        assert_eq!(mapping.year, "movie_year");
        assert_eq!(mapping.cast, "");
    }

    #[test]
    fn test_preselect_only_known_identifiers() {
        let mut stored = FieldMapping::default();
        stored.set(SemanticKey::Title, "post_title");
        stored.set(SemanticKey::Director, "gone_field");
        let page = open(Some(&stored));
        let mapping = read_mapping(&page);
        assert_eq!(mapping.title, "post_title");
        assert_eq!(mapping.director, "");
    }

    #[test]
    fn test_labels_are_escaped() {
        let mut page = Page::new(
            "u",
            r#"<html><body><input type="text" name="a&quot;b"></body></html>"#,
        );
        let catalog = DestinationFieldCatalog::scan(&page);
        page.append_to_body(&render_modal(&MovieRecord::default(), &catalog, None));
        assert!(choose(&mut page, SemanticKey::Title, "a\"b"));
        assert_eq!(read_mapping(&page).title, "a\"b");
    }
}
