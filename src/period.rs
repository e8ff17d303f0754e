//! Reporting period computation.
//!
//! Derives `YYYY-MM-DD` start/end date pairs for the named period kinds,
//! anchored to the fixed reporting timezone ([`config::REPORT_TIMEZONE`])
//! with a Monday week start. The host machine's local timezone is never
//! consulted, so the same instant yields the same period on every machine.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::VenueError;

// ---------------------------------------------------------------------------
// PeriodKind
// ---------------------------------------------------------------------------

/// How a reporting date interval is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    /// Start and end are both today's date.
    Today,
    /// The current ISO week: Monday through the following Sunday.
    Week,
    /// The current calendar month, first through last day.
    Month,
    /// Caller-supplied bounds, passed through verbatim.
    Range,
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
            Self::Range => "range",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PeriodKind {
    type Err = VenueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "range" => Ok(Self::Range),
            other => Err(VenueError::InvalidArgument(format!(
                "Unknown period kind: {}",
                other
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// PeriodState
// ---------------------------------------------------------------------------

/// A resolved reporting period.
///
/// `start` and `end` are `YYYY-MM-DD` strings. For every kind except
/// [`PeriodKind::Range`] they are fully determined by the kind and the
/// current instant, and `start <= end` holds. For `Range` the bounds are
/// caller-supplied strings carried verbatim: ordering is **not** validated
/// and malformed strings are not rejected here — consumers must validate
/// before interpreting them as dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodState {
    pub kind: PeriodKind,
    pub start: String,
    pub end: String,
}

// ---------------------------------------------------------------------------
// Period computation
// ---------------------------------------------------------------------------

/// Compute a reporting period for `kind` against today's date in the fixed
/// reporting timezone.
///
/// `start`/`end` are only consulted for [`PeriodKind::Range`]; either bound
/// that is absent defaults to today.
pub fn compute_period(
    kind: PeriodKind,
    start: Option<&str>,
    end: Option<&str>,
) -> PeriodState {
    compute_period_on(kind, start, end, today_in_report_zone())
}

/// Compute a reporting period anchored to an explicit `today`.
///
/// This is the injected-clock form of [`compute_period`], used directly in
/// tests and anywhere a pinned anchor date is needed.
pub fn compute_period_on(
    kind: PeriodKind,
    start: Option<&str>,
    end: Option<&str>,
    today: NaiveDate,
) -> PeriodState {
    let (start, end) = match kind {
        PeriodKind::Today => (format_date(today), format_date(today)),
        PeriodKind::Week => {
            // Monday on/before today; num_days_from_monday is 0 on Monday,
            // so a Monday anchors its own week and a Sunday closes it.
            let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
            (format_date(monday), format_date(monday + Duration::days(6)))
        }
        PeriodKind::Month => {
            let first = today.with_day(1).unwrap_or(today);
            (format_date(first), format_date(last_day_of_month(today)))
        }
        PeriodKind::Range => {
            let today_str = format_date(today);
            (
                start.map(str::to_string).unwrap_or_else(|| today_str.clone()),
                end.map(str::to_string).unwrap_or(today_str),
            )
        }
    };
    PeriodState { kind, start, end }
}

/// The initial period used by date-range selectors: today.
pub fn default_period() -> PeriodState {
    compute_period(PeriodKind::Today, None, None)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Today's calendar date in the fixed reporting timezone.
pub fn today_in_report_zone() -> NaiveDate {
    Utc::now().with_timezone(&config::report_offset()).date_naive()
}

/// Last calendar day of the month containing `date` (28-31, leap-aware).
fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    // Day 1 of the next month always exists.
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d - Duration::days(1))
        .unwrap_or(date)
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
