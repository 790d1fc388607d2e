// ABOUTME: Loader for field tables from embedded JSON data or user-supplied files.
// ABOUTME: Provides load_builtin_table() to initialize the default FieldTable.

//! Field table loader.
//!
//! The builtin table is compiled into the binary; alternative tables with the
//! same schema can be loaded from JSON strings or files.

use std::fs;
use std::path::Path;

use crate::error::ExtractError;
use crate::extractors::compiled::precompile_selectors;
use crate::extractors::rules::FieldTable;

/// Embedded JSON containing the builtin movie field rules.
const BUILTIN_FIELDS_JSON: &str = include_str!("../../data/movie_fields.json");

/// Loads the builtin field table from embedded JSON.
///
/// # Panics
///
/// Panics if the embedded JSON is malformed or cannot be deserialized.
pub fn load_builtin_table() -> FieldTable {
    let table: FieldTable =
        serde_json::from_str(BUILTIN_FIELDS_JSON).expect("failed to parse builtin field table");
    precompile_selectors(table.selector_strings());
    table
}

/// Parses a field table from a JSON string.
pub fn load_table_str(json: &str) -> Result<FieldTable, ExtractError> {
    let table: FieldTable = serde_json::from_str(json)
        .map_err(|e| ExtractError::invalid_table("", "parse table", Some(e.into())))?;
    precompile_selectors(table.selector_strings());
    Ok(table)
}

/// Reads and parses a field table from a JSON file.
pub fn load_table_file(path: impl AsRef<Path>) -> Result<FieldTable, ExtractError> {
    let path = path.as_ref();
    let location = path.display().to_string();
    let json = fs::read_to_string(path)
        .map_err(|e| ExtractError::invalid_table(&location, "read table", Some(e.into())))?;
    load_table_str(&json).map_err(|mut e| {
        e.url = location;
        e
    })
}
