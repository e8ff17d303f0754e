use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Venue — a physical gaming-hall record
// ---------------------------------------------------------------------------

/// A venue as returned by the directory API.
///
/// `id` and `created_at` are assigned server-side and never supplied by
/// this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub quartier: String,
    /// Categorical operator code (e.g. `"MSFG"`); the set of valid values
    /// is maintained by the directory service.
    pub operator: String,
    pub bet_type: String,
    pub address: String,
    pub notes: Option<String>,
    pub contact_phone: Option<String>,
    pub created_at: String,
    pub created_by: String,
}

// ---------------------------------------------------------------------------
// NewVenue — creation payload
// ---------------------------------------------------------------------------

/// Payload for creating a venue. The server assigns `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVenue {
    pub quartier: String,
    pub operator: String,
    pub bet_type: String,
    pub address: String,
    pub notes: Option<String>,
    pub contact_phone: Option<String>,
    pub created_by: String,
}

// ---------------------------------------------------------------------------
// VenueUpdate — partial update payload
// ---------------------------------------------------------------------------

/// Partial update for a venue. `None` fields are omitted from the wire
/// payload, leaving the stored value untouched. `id`, `created_at` and
/// `created_by` cannot be updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quartier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bet_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
}

// ---------------------------------------------------------------------------
// VenueFilters — optional filter predicates
// ---------------------------------------------------------------------------

/// Filter predicates for [`filter_venues`](crate::filter_venues).
///
/// All fields are optional. When `None` (or an empty string), the
/// corresponding constraint is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueFilters {
    /// Neighborhood name, matched case-insensitively after trimming.
    pub quartier: Option<String>,
    /// Operator code, matched exactly (categorical values are canonical).
    pub operator: Option<String>,
    /// Bet type, matched exactly.
    pub bet_type: Option<String>,
    /// Free-text query searched as a substring of the venue's combined
    /// quartier, address, notes and contact phone.
    pub q: Option<String>,
}
