//! HTTP transport for the venue directory service.
//!
//! Thin blocking client over the directory's REST endpoints. The SDK never
//! caches or retries: persistence errors propagate unmodified to the
//! caller, and all filtering happens in memory after a fetch.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::config;
use crate::error::{Result, VenueError};
use crate::models::{NewVenue, Venue, VenueUpdate};

/// Blocking HTTP access to the venue directory API.
pub struct VenueStore {
    /// Base URL of the directory service, without a trailing slash.
    pub base_url: String,
    timeout: Duration,
    client: Option<Client>,
}

impl VenueStore {
    /// Create a new store against the given base URL.
    ///
    /// If `base_url` is `None`, [`config::DEFAULT_API_BASE`] is used.
    pub fn new(base_url: Option<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| config::DEFAULT_API_BASE.to_string()),
            timeout,
            client: None,
        }
    }

    /// Lazy HTTP client, created on first use.
    fn client(&mut self) -> &Client {
        if self.client.is_none() {
            self.client = Some(
                Client::builder()
                    .timeout(self.timeout)
                    .redirect(reqwest::redirect::Policy::limited(10))
                    .build()
                    .expect("failed to build HTTP client"),
            );
        }
        self.client.as_ref().unwrap()
    }

    /// Fetch the full venue collection.
    ///
    /// Ordering is whatever the service returns; the in-memory filter
    /// preserves it as "original order".
    pub fn list(&mut self) -> Result<Vec<Venue>> {
        let url = config::venues_url(&self.base_url);
        let resp = self.client().get(&url).send()?.error_for_status()?;
        Ok(resp.json()?)
    }

    /// Fetch a single venue by id. A 404 maps to `Ok(None)`.
    pub fn get(&mut self, id: &str) -> Result<Option<Venue>> {
        let url = config::venue_url(&self.base_url, id);
        let resp = self.client().get(&url).send()?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = resp.error_for_status()?;
        Ok(Some(resp.json()?))
    }

    /// Create a venue. The service assigns `id` and `created_at` and
    /// returns the stored record.
    pub fn create(&mut self, venue: &NewVenue) -> Result<Venue> {
        let url = config::venues_url(&self.base_url);
        let resp = self
            .client()
            .post(&url)
            .json(venue)
            .send()?
            .error_for_status()?;
        Ok(resp.json()?)
    }

    /// Apply a partial update and return the updated record.
    pub fn update(&mut self, id: &str, changes: &VenueUpdate) -> Result<Venue> {
        let url = config::venue_url(&self.base_url, id);
        let resp = self.client().patch(&url).json(changes).send()?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(VenueError::NotFound(format!("Venue {}", id)));
        }
        let resp = resp.error_for_status()?;
        Ok(resp.json()?)
    }

    /// Delete a venue. Succeeds with no payload.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let url = config::venue_url(&self.base_url, id);
        let resp = self.client().delete(&url).send()?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(VenueError::NotFound(format!("Venue {}", id)));
        }
        resp.error_for_status()?;
        Ok(())
    }

    /// Close the HTTP client, if open.
    pub fn close(&mut self) {
        self.client = None;
    }
}
