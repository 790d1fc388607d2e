// ABOUTME: FormField capability for committing a value into a destination form control.
// ABOUTME: DomField implements it over a page element and records synthetic input/change events.

use dom_query::Selection;

use crate::page::{attr_selector, DispatchedEvent, EventKind, Page};
use reelcopy_scout::extractors::compiled::get_or_compile;
use reelcopy_scout::formats::escape_html;

/// A destination control that can receive a value.
pub trait FormField {
    /// The identifier the control was located by.
    fn identifier(&self) -> &str;

    /// The control's current value.
    fn value(&self) -> String;

    /// Replaces the value and notifies the host page, as if the user typed it.
    fn commit_value(&mut self, value: &str);
}

/// A form control living in a [`Page`].
pub struct DomField<'a> {
    identifier: String,
    element: Selection<'a>,
    events: &'a mut Vec<DispatchedEvent>,
}

impl<'a> DomField<'a> {
    /// Locates a control by trying `[name=id]`, `#id`, then `[id*=id]`.
    ///
    /// The first lookup that matches wins; within a lookup the first element in
    /// document order is used.
    pub fn locate(page: &'a mut Page, identifier: &str) -> Option<DomField<'a>> {
        if identifier.is_empty() {
            return None;
        }
        let (doc, events) = page.parts_mut();
        for lookup in lookups(identifier) {
            let Some(matcher) = get_or_compile(&lookup) else {
                continue;
            };
            let sel = doc.select_matcher(&matcher);
            if sel.exists() {
                return Some(DomField {
                    identifier: identifier.to_string(),
                    element: sel.first(),
                    events,
                });
            }
        }
        None
    }

    /// Lower-cased tag name of the control.
    pub fn tag(&self) -> String {
        tag_name(&self.element)
    }
}

impl FormField for DomField<'_> {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn value(&self) -> String {
        control_value(&self.element)
    }

    fn commit_value(&mut self, value: &str) {
        set_control_value(&self.element, value);
        for kind in [EventKind::Input, EventKind::Change] {
            self.events.push(DispatchedEvent {
                kind,
                target: self.identifier.clone(),
                bubbles: true,
            });
        }
    }
}

fn lookups(identifier: &str) -> [String; 3] {
    [
        attr_selector("name", identifier),
        format!("#{}", identifier),
        format!("[id*={}]", crate::page::css_string(identifier)),
    ]
}

pub(crate) fn tag_name(el: &Selection) -> String {
    el.nodes()
        .first()
        .and_then(|n| n.node_name())
        .map(|n| n.to_lowercase())
        .unwrap_or_default()
}

/// Current value of an input, textarea or select element.
pub(crate) fn control_value(el: &Selection) -> String {
    match tag_name(el).as_str() {
        "textarea" => el.text().to_string(),
        "select" => selected_option_value(el),
        _ => el.attr("value").map(|v| v.to_string()).unwrap_or_default(),
    }
}

fn set_control_value(el: &Selection, value: &str) {
    match tag_name(el).as_str() {
        "textarea" => el.set_html(escape_html(value)),
        "select" => {
            select_option(el, value);
        }
        _ => el.set_attr("value", value),
    }
}

fn option_value(option: &Selection) -> String {
    match option.attr("value") {
        Some(v) => v.to_string(),
        None => option.text().trim().to_string(),
    }
}

/// Set on a select whose last commit matched no option.
const NO_SELECTION_ATTR: &str = "data-no-selection";

/// Value of the selected option, or of the first option when none is marked.
/// A select left without a match by [`select_option`] reads as empty.
pub(crate) fn selected_option_value(select: &Selection) -> String {
    if select.has_attr(NO_SELECTION_ATTR) {
        return String::new();
    }
    let options = select.select("option");
    let selected = options.iter().find(|o| o.has_attr("selected"));
    match selected {
        Some(option) => option_value(&option),
        None => options
            .iter()
            .next()
            .map(|o| option_value(&o))
            .unwrap_or_default(),
    }
}

/// Marks the option whose value equals `value` as selected and clears the rest.
///
/// Returns false, leaving no option marked, when nothing matches.
pub(crate) fn select_option(select: &Selection, value: &str) -> bool {
    let mut found = false;
    for option in select.select("option").iter() {
        option.remove_attr("selected");
        if !found && option_value(&option) == value {
            option.set_attr("selected", "selected");
            found = true;
        }
    }
    if found {
        select.remove_attr(NO_SELECTION_ATTR);
    } else {
        select.set_attr(NO_SELECTION_ATTR, "");
    }
    found
}
