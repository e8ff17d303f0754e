//! CSV text construction.
//!
//! Serializes row objects into CSV with RFC-4180-style escaping. The
//! quoting behavior is kept bit-for-bit stable so spreadsheet tools parse
//! exports unchanged: a value is quoted only when it contains a quote,
//! a comma or a newline, and inner quotes are doubled.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use venue_sdk::build_csv;
//!
//! let rows = vec![json!({"quartier": "Lafiabougou", "halls": 3})];
//! let csv = build_csv(&rows, None);
//! assert_eq!(csv, "quartier,halls\nLafiabougou,3");
//! ```

use serde_json::Value;

/// Build CSV text from row objects.
///
/// When `columns` is `None`, the column set is the union of object keys
/// across all rows in first-seen order (scanning rows top-to-bottom), not
/// alphabetical. Cells absent from a row, and `null` cells, serialize as
/// empty strings. Rows are joined with `\n` with no trailing newline; an
/// empty `rows` slice yields an empty string with no header row.
///
/// Non-object rows contribute no columns and serialize as all-empty cells.
pub fn build_csv(rows: &[Value], columns: Option<&[String]>) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let derived;
    let columns: &[String] = match columns {
        Some(cols) => cols,
        None => {
            derived = derive_columns(rows);
            &derived
        }
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        columns
            .iter()
            .map(|c| escape_cell(c))
            .collect::<Vec<_>>()
            .join(","),
    );

    for row in rows {
        let line = columns
            .iter()
            .map(|col| escape_cell(&cell_text(row.get(col))))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(line);
    }

    lines.join("\n")
}

/// Union of object keys across all rows, in first-seen order.
///
/// Relies on serde_json's `preserve_order` feature so each object's keys
/// iterate in insertion order.
fn derive_columns(rows: &[Value]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for row in rows {
        if let Value::Object(map) = row {
            for key in map.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
    }
    columns
}

/// Stringify one cell value. `None` and `null` become the empty string;
/// strings are emitted verbatim (escaping happens separately); any other
/// value uses its compact JSON text.
fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Quote a cell if it contains a quote, comma or newline, doubling any
/// inner quotes. Everything else passes through unquoted.
fn escape_cell(text: &str) -> String {
    if text.contains('"') || text.contains(',') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}
