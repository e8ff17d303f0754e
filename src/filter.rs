//! In-memory venue filtering.
//!
//! All predicates are optional and combined as a conjunction; venues that
//! satisfy every specified constraint are kept in their original order.
//! The filter is pure and total: it performs no I/O and never fails, it
//! only narrows the collection.

use crate::models::{Venue, VenueFilters};

/// Filter a venue collection by the given predicates.
///
/// Returns the sub-sequence of venues satisfying **all** specified
/// constraints, preserving the input order. With no constraints set
/// (including empty-string values, which are treated as absent), the
/// full collection is returned unchanged.
///
/// Matching rules:
/// - `quartier`: trimmed, case-insensitive equality on both sides.
/// - `operator` / `bet_type`: exact, case-sensitive equality.
/// - `q`: case-insensitive substring search over the venue's combined
///   quartier, address, notes and contact phone.
pub fn filter_venues(venues: &[Venue], filters: &VenueFilters) -> Vec<Venue> {
    let quartier = normalized_filter(filters.quartier.as_deref());
    let operator = non_empty(filters.operator.as_deref());
    let bet_type = non_empty(filters.bet_type.as_deref());
    let query = normalized_filter(filters.q.as_deref());

    venues
        .iter()
        .filter(|v| {
            if let Some(ref want) = quartier {
                if normalize(&v.quartier) != *want {
                    return false;
                }
            }
            if let Some(want) = operator {
                if v.operator != want {
                    return false;
                }
            }
            if let Some(want) = bet_type {
                if v.bet_type != want {
                    return false;
                }
            }
            if let Some(ref want) = query {
                if !haystack(v).contains(want.as_str()) {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

/// Build the normalized searchable text for one venue.
///
/// Concatenates quartier, address, notes and contact phone (empty string
/// for absent fields) with single spaces, lowercased. Built per call; a
/// precomputed per-record blob could replace this for large collections
/// without changing the matching semantics.
fn haystack(venue: &Venue) -> String {
    format!(
        "{} {} {} {}",
        venue.quartier,
        venue.address,
        venue.notes.as_deref().unwrap_or(""),
        venue.contact_phone.as_deref().unwrap_or(""),
    )
    .to_lowercase()
}

/// Trim and lowercase a value for case-insensitive comparison.
fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Normalize an optional filter value; empty or whitespace-only values
/// count as "no constraint".
fn normalized_filter(value: Option<&str>) -> Option<String> {
    value.map(normalize).filter(|s| !s.is_empty())
}

/// An empty-string exact-match filter counts as "no constraint".
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
