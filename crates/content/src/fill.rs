// ABOUTME: Writes MovieRecord values into the destination controls named by a FieldMapping.
// ABOUTME: Controls that cannot be located are skipped and reported, never treated as errors.

use reelcopy_scout::MovieRecord;

use crate::field::{DomField, FormField};
use crate::mapping::{FieldMapping, SemanticKey};
use crate::page::Page;

/// Outcome of a fill pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillReport {
    /// Keys whose value was committed into a control.
    pub filled: Vec<SemanticKey>,
    /// Mapped keys with a value whose control was not found.
    pub skipped: Vec<SemanticKey>,
}

impl FillReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Fills every mapped key that has a non-empty value in `record`.
pub fn fill_fields(page: &mut Page, record: &MovieRecord, mapping: &FieldMapping) -> FillReport {
    let mut report = FillReport::default();
    for (key, identifier) in mapping.mapped() {
        let value = key.value_of(record);
        if value.is_empty() {
            continue;
        }
        match DomField::locate(page, identifier) {
            Some(mut field) => {
                field.commit_value(value);
                report.filled.push(key);
            }
            None => {
                tracing::debug!(key = key.as_str(), identifier, "destination control not found");
                report.skipped.push(key);
            }
        }
    }
    report
}
