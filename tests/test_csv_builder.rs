//! CSV construction: column derivation, escaping, degenerate inputs.

use serde_json::json;
use venue_sdk::build_csv;

// ---------------------------------------------------------------------------
// Degenerate inputs
// ---------------------------------------------------------------------------

#[test]
fn empty_rows_yield_empty_string_without_header() {
    assert_eq!(build_csv(&[], None), "");
    assert_eq!(build_csv(&[], Some(&["a".to_string()])), "");
}

#[test]
fn non_object_rows_serialize_as_empty_cells() {
    let rows = vec![json!({"a": 1}), json!(null), json!([1, 2])];
    let csv = build_csv(&rows, None);
    assert_eq!(csv, "a\n1\n\n");
}

// ---------------------------------------------------------------------------
// Column derivation
// ---------------------------------------------------------------------------

#[test]
fn columns_derive_in_first_seen_order() {
    let rows = vec![json!({"a": 1, "b": 2}), json!({"b": 3, "c": 4})];
    let csv = build_csv(&rows, None);
    assert_eq!(csv, "a,b,c\n1,2,\n,3,4");
}

#[test]
fn explicit_columns_override_derivation() {
    let rows = vec![json!({"a": 1, "b": 2})];
    let cols = vec!["b".to_string(), "missing".to_string()];
    let csv = build_csv(&rows, Some(&cols));
    assert_eq!(csv, "b,missing\n2,");
}

// ---------------------------------------------------------------------------
// Cell serialization
// ---------------------------------------------------------------------------

#[test]
fn scalars_stringify_and_null_is_empty() {
    let rows = vec![json!({
        "name": "Hippodrome",
        "halls": 3,
        "active": true,
        "notes": null,
    })];
    let csv = build_csv(&rows, None);
    assert_eq!(csv, "name,halls,active,notes\nHippodrome,3,true,");
}

#[test]
fn value_with_quote_comma_and_newline_is_escaped() {
    let rows = vec![json!({"note": "He said \"hi\", then\nleft"})];
    let csv = build_csv(&rows, None);
    assert_eq!(csv, "note\n\"He said \"\"hi\"\", then\nleft\"");
}

#[test]
fn plain_values_are_not_quoted() {
    let rows = vec![json!({"a": "plain text", "b": "semi;colon"})];
    let csv = build_csv(&rows, None);
    assert_eq!(csv, "a,b\nplain text,semi;colon");
}

#[test]
fn header_names_follow_the_same_escaping_rule() {
    let rows = vec![json!({"name, extended": "x"})];
    let csv = build_csv(&rows, None);
    assert_eq!(csv, "\"name, extended\"\nx");
}

#[test]
fn no_trailing_newline_after_last_row() {
    let rows = vec![json!({"a": 1}), json!({"a": 2})];
    let csv = build_csv(&rows, None);
    assert!(!csv.ends_with('\n'));
    assert_eq!(csv.lines().count(), 3);
}

// ---------------------------------------------------------------------------
// Round trip through a hand-rolled RFC-4180 reader
// ---------------------------------------------------------------------------

/// Minimal quoted-field-aware CSV parse, enough to verify the encoder.
fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => record.push(std::mem::take(&mut field)),
                '\n' => {
                    record.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut record));
                }
                _ => field.push(c),
            }
        }
    }
    record.push(field);
    records.push(record);
    records
}

#[test]
fn encoding_round_trips_through_a_standard_reader() {
    let rows = vec![
        json!({"quartier": "Lafiabougou", "note": "He said \"hi\", then\nleft"}),
        json!({"quartier": "Hippodrome", "note": "plain"}),
    ];
    let csv = build_csv(&rows, None);
    let parsed = parse_csv(&csv);

    assert_eq!(parsed[0], vec!["quartier", "note"]);
    assert_eq!(parsed[1], vec!["Lafiabougou", "He said \"hi\", then\nleft"]);
    assert_eq!(parsed[2], vec!["Hippodrome", "plain"]);
}
