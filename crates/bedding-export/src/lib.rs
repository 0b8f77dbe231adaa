//! Delimited-text export of catalog records.
//!
//! Produces the semicolon-separated files the ERP import expects: a BOM
//! prefix for spreadsheet encoding detection, CRLF line endings, and
//! quote-wrapping for values carrying the delimiter, quotes or line
//! breaks.

use bedding_catalog::{CatalogRecord, FieldValue};

const DELIMITER: char = ';';
const BOM: char = '\u{feff}';

/// Render records as delimited text.
///
/// Columns follow the explicit list when one is given, otherwise the
/// union of all record keys in first-seen order. A column a record does
/// not carry renders empty. Empty input yields an empty string.
pub fn to_csv(records: &[CatalogRecord], columns: Option<&[&str]>) -> String {
    if records.is_empty() {
        return String::new();
    }

    let columns = resolve_columns(records, columns);
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(columns.join(&DELIMITER.to_string()));

    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|column| prepare_value(record.get(column)))
            .collect();
        lines.push(row.join(&DELIMITER.to_string()));
    }

    format!("{}{}", BOM, lines.join("\r\n"))
}

fn resolve_columns(records: &[CatalogRecord], columns: Option<&[&str]>) -> Vec<String> {
    if let Some(columns) = columns {
        if !columns.is_empty() {
            return columns.iter().map(|c| c.to_string()).collect();
        }
    }
    let mut seen = Vec::new();
    for record in records {
        for column in record.columns() {
            if !seen.contains(column) {
                seen.push(column.clone());
            }
        }
    }
    seen
}

fn prepare_value(value: Option<&FieldValue>) -> String {
    let text = match value {
        None => return String::new(),
        Some(value) if value.is_null() => return String::new(),
        Some(value) => value.to_string(),
    };
    if needs_quoting(&text) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text
    }
}

fn needs_quoting(value: &str) -> bool {
    value.contains([DELIMITER, '"', '\r', '\n'])
}
