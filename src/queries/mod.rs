//! Query modules for the venue SDK.
//!
//! Each module provides a query struct that borrows the underlying
//! [`VenueStore`](crate::store::VenueStore) and exposes methods returning
//! `Result<T>` with typed model payloads.

pub mod venues;

pub use venues::VenueQuery;
