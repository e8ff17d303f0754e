//! Venue CRUD and filtered listing against the directory service.

use std::cell::RefCell;

use crate::error::Result;
use crate::filter::filter_venues;
use crate::models::{NewVenue, Venue, VenueFilters, VenueUpdate};
use crate::store::VenueStore;

/// Query interface for venue records.
pub struct VenueQuery<'a> {
    store: &'a RefCell<VenueStore>,
}

impl<'a> VenueQuery<'a> {
    /// Create a new `VenueQuery` bound to the given store.
    pub fn new(store: &'a RefCell<VenueStore>) -> Self {
        Self { store }
    }

    // -- Listing -----------------------------------------------------------

    /// Fetch the full venue collection in service order.
    pub fn list(&self) -> Result<Vec<Venue>> {
        self.store.borrow_mut().list()
    }

    /// Fetch the full collection and apply the in-memory filter.
    ///
    /// Convenience composition of [`list`](Self::list) and
    /// [`filter_venues`]; the filter runs only on already-fetched data and
    /// preserves the service's ordering.
    pub fn list_filtered(&self, filters: &VenueFilters) -> Result<Vec<Venue>> {
        let all = self.list()?;
        Ok(filter_venues(&all, filters))
    }

    // -- Single record lookup ----------------------------------------------

    /// Retrieve a single venue by id, or `None` if it does not exist.
    pub fn get(&self, id: &str) -> Result<Option<Venue>> {
        self.store.borrow_mut().get(id)
    }

    // -- Mutations ---------------------------------------------------------

    /// Create a venue; the service assigns `id` and `created_at`.
    pub fn create(&self, venue: &NewVenue) -> Result<Venue> {
        self.store.borrow_mut().create(venue)
    }

    /// Apply a partial update and return the updated record.
    pub fn update(&self, id: &str, changes: &VenueUpdate) -> Result<Venue> {
        self.store.borrow_mut().update(id, changes)
    }

    /// Delete a venue by id.
    pub fn delete(&self, id: &str) -> Result<()> {
        self.store.borrow_mut().delete(id)
    }
}
