use chrono::FixedOffset;

/// Default base URL of the venue directory API.
pub const DEFAULT_API_BASE: &str = "https://api.kiosques.ml/v1";

/// Canonical timezone for all reporting-period computation.
///
/// Keeping this in a single constant avoids scattering offset literals
/// across period math and tests. Africa/Bamako is UTC+0 year-round with
/// no daylight-saving shifts, so dates computed here never depend on the
/// host machine's local timezone.
pub const REPORT_TIMEZONE: &str = "Africa/Bamako";

/// UTC offset of [`REPORT_TIMEZONE`] in seconds.
pub const REPORT_UTC_OFFSET_SECS: i32 = 0;

/// The fixed reporting offset as a chrono timezone.
pub fn report_offset() -> FixedOffset {
    FixedOffset::east_opt(REPORT_UTC_OFFSET_SECS)
        .expect("offset is a compile-time constant within range")
}

/// Build the URL of the venue collection endpoint.
pub fn venues_url(base: &str) -> String {
    format!("{}/venues", base.trim_end_matches('/'))
}

/// Build the URL of a single-venue endpoint.
pub fn venue_url(base: &str, id: &str) -> String {
    format!("{}/venues/{}", base.trim_end_matches('/'), id)
}
