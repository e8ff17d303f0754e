//! Venue directory SDK for Rust.
//!
//! Provides a high-level client for an operator tool over a directory of
//! physical venues (gaming halls): CRUD access to the directory service,
//! in-memory multi-predicate filtering with free-text search, reporting
//! period computation in a fixed timezone, and CSV export with delivery
//! to a file.
//!
//! # Quick start
//!
//! ```no_run
//! use venue_sdk::{VenueSdk, VenueFilters};
//!
//! let sdk = VenueSdk::builder().build();
//!
//! // List venues matching an operator and a free-text query
//! let filters = VenueFilters {
//!     operator: Some("MSFG".into()),
//!     q: Some("bamako".into()),
//!     ..Default::default()
//! };
//! let venues = sdk.venues().list_filtered(&filters).unwrap();
//!
//! // Current reporting week (Monday through Sunday)
//! let period = venue_sdk::compute_period(venue_sdk::PeriodKind::Week, None, None);
//! println!("{} .. {}", period.start, period.end);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod csv_builder;
pub mod error;
pub mod export;
pub mod filter;
pub mod models;
pub mod period;
pub mod queries;
pub mod store;

#[cfg(feature = "async")]
pub use async_client::AsyncVenueSdk;
pub use csv_builder::build_csv;
pub use error::{Result, VenueError};
pub use export::write_csv_file;
pub use filter::filter_venues;
pub use models::{NewVenue, Venue, VenueFilters, VenueUpdate};
pub use period::{
    compute_period, compute_period_on, default_period, PeriodKind, PeriodState,
};
pub use store::VenueStore;

use std::cell::RefCell;
use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// VenueSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`VenueSdk`] instance.
///
/// Use [`VenueSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](VenueSdkBuilder::build) to create the SDK.
pub struct VenueSdkBuilder {
    base_url: Option<String>,
    timeout: Duration,
}

impl Default for VenueSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl VenueSdkBuilder {
    /// Set a custom directory service base URL.
    ///
    /// If not set, [`config::DEFAULT_API_BASE`] is used.
    pub fn base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout for directory calls.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the SDK.
    ///
    /// No network traffic happens here; the HTTP client is created lazily
    /// on the first directory call.
    pub fn build(self) -> VenueSdk {
        let store = VenueStore::new(self.base_url, self.timeout);
        VenueSdk {
            store: RefCell::new(store),
        }
    }
}

// ---------------------------------------------------------------------------
// VenueSdk
// ---------------------------------------------------------------------------

/// The main entry point for the venue SDK.
///
/// Wraps a [`VenueStore`] (the HTTP transport to the directory service)
/// and exposes the venue query interface as a lightweight borrowing
/// wrapper. The pure core functions ([`filter_venues`], [`compute_period`],
/// [`build_csv`], [`write_csv_file`]) are free functions and need no SDK
/// instance.
///
/// Created via [`VenueSdk::builder()`].
pub struct VenueSdk {
    store: RefCell<VenueStore>,
}

impl VenueSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> VenueSdkBuilder {
        VenueSdkBuilder::default()
    }

    /// Access the venue query interface.
    ///
    /// Returns a lightweight wrapper that borrows from the underlying
    /// store and provides CRUD plus filtered listing.
    pub fn venues(&self) -> queries::venues::VenueQuery<'_> {
        queries::venues::VenueQuery::new(&self.store)
    }

    /// Consume the SDK and release all resources.
    ///
    /// Closes the HTTP client. This happens automatically on drop, but can
    /// be invoked explicitly for deterministic cleanup.
    pub fn close(self) {
        drop(self);
    }

    /// The configured directory service base URL.
    pub fn base_url(&self) -> String {
        self.store.borrow().base_url.clone()
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for VenueSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VenueSdk(base_url={})", self.store.borrow().base_url)
    }
}
