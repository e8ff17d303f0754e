//! Shared test fixtures for the venue SDK integration tests.
//!
//! Provides `sample_venues()`, a small in-memory collection covering the
//! field combinations the filter cares about (mixed case, padded
//! whitespace, absent optional fields).

use venue_sdk::Venue;

/// Build one venue with the given distinguishing fields.
pub fn venue(
    id: &str,
    quartier: &str,
    operator: &str,
    bet_type: &str,
    address: &str,
    notes: Option<&str>,
    contact_phone: Option<&str>,
) -> Venue {
    Venue {
        id: id.to_string(),
        quartier: quartier.to_string(),
        operator: operator.to_string(),
        bet_type: bet_type.to_string(),
        address: address.to_string(),
        notes: notes.map(str::to_string),
        contact_phone: contact_phone.map(str::to_string),
        created_at: "2024-03-01T09:00:00Z".to_string(),
        created_by: "agent-07".to_string(),
    }
}

/// A small sample collection in a fixed order.
pub fn sample_venues() -> Vec<Venue> {
    vec![
        venue(
            "v-001",
            "Lafiabougou",
            "MSFG",
            "PMU",
            "Rue 224, Bamako",
            Some("near the market"),
            Some("+223 70 11 22 33"),
        ),
        venue(
            "v-002",
            "  lafiabougou ",
            "LONACI",
            "Sport",
            "Avenue de la Liberté",
            None,
            None,
        ),
        venue(
            "v-003",
            "Hippodrome",
            "MSFG",
            "Sport",
            "Route de Koulikoro",
            Some("second floor"),
            Some("+223 66 44 55 66"),
        ),
        venue(
            "v-004",
            "Badalabougou",
            "PremierBet",
            "PMU",
            "Carrefour des jeunes",
            None,
            Some("+223 76 00 00 00"),
        ),
    ]
}
