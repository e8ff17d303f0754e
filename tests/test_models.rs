//! Model wire-format and SDK configuration behavior.

mod common;

use std::time::Duration;

use serde_json::json;
use venue_sdk::{config, NewVenue, Venue, VenueSdk, VenueUpdate};

// ---------------------------------------------------------------------------
// Venue wire format
// ---------------------------------------------------------------------------

#[test]
fn venue_deserializes_from_camel_case_json() {
    let payload = json!({
        "id": "v-010",
        "quartier": "Hippodrome",
        "operator": "MSFG",
        "betType": "Sport",
        "address": "Route de Koulikoro",
        "notes": null,
        "contactPhone": "+223 66 00 11 22",
        "createdAt": "2024-03-01T09:00:00Z",
        "createdBy": "agent-07"
    });
    let venue: Venue = serde_json::from_value(payload).unwrap();
    assert_eq!(venue.bet_type, "Sport");
    assert_eq!(venue.contact_phone.as_deref(), Some("+223 66 00 11 22"));
    assert!(venue.notes.is_none());
}

#[test]
fn venue_serialization_round_trips() {
    let venue = common::venue(
        "v-001",
        "Lafiabougou",
        "MSFG",
        "PMU",
        "Rue 224, Bamako",
        Some("near the market"),
        None,
    );
    let value = serde_json::to_value(&venue).unwrap();
    assert_eq!(value["betType"], "PMU");
    assert_eq!(value["createdBy"], "agent-07");

    let back: Venue = serde_json::from_value(value).unwrap();
    assert_eq!(back, venue);
}

// ---------------------------------------------------------------------------
// Payload shaping
// ---------------------------------------------------------------------------

#[test]
fn new_venue_carries_no_server_assigned_fields() {
    let new = NewVenue {
        quartier: "Badalabougou".to_string(),
        operator: "PremierBet".to_string(),
        bet_type: "PMU".to_string(),
        address: "Carrefour des jeunes".to_string(),
        notes: None,
        contact_phone: None,
        created_by: "agent-07".to_string(),
    };
    let value = serde_json::to_value(&new).unwrap();
    assert!(value.get("id").is_none());
    assert!(value.get("createdAt").is_none());
}

#[test]
fn venue_update_omits_unset_fields() {
    let update = VenueUpdate {
        notes: Some("renovated".to_string()),
        ..Default::default()
    };
    let value = serde_json::to_value(&update).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 1);
    assert_eq!(obj["notes"], "renovated");
}

// ---------------------------------------------------------------------------
// SDK configuration
// ---------------------------------------------------------------------------

#[test]
fn builder_defaults_to_configured_base_url() {
    let sdk = VenueSdk::builder().build();
    assert_eq!(sdk.base_url(), config::DEFAULT_API_BASE);
}

#[test]
fn builder_accepts_custom_base_url_and_timeout() {
    let sdk = VenueSdk::builder()
        .base_url("http://localhost:8080/api")
        .timeout(Duration::from_secs(5))
        .build();
    assert_eq!(sdk.base_url(), "http://localhost:8080/api");
    assert_eq!(sdk.to_string(), "VenueSdk(base_url=http://localhost:8080/api)");
}

#[test]
fn endpoint_urls_normalize_trailing_slash() {
    assert_eq!(
        config::venues_url("http://localhost:8080/api/"),
        "http://localhost:8080/api/venues"
    );
    assert_eq!(
        config::venue_url("http://localhost:8080/api", "v-001"),
        "http://localhost:8080/api/venues/v-001"
    );
}
