//! Async wrapper around [`VenueSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//! Directory calls are short blocking HTTP requests, making this approach
//! efficient.
//!
//! # Example
//!
//! ```no_run
//! # use venue_sdk::AsyncVenueSdk;
//! # async fn example() -> venue_sdk::Result<()> {
//! let sdk = AsyncVenueSdk::builder().build().await?;
//!
//! // Run any sync SDK method via closure
//! let venues = sdk.run(|s| s.venues().list()).await?;
//!
//! // Convenience method for a single lookup
//! let venue = sdk.get("v-001").await?;
//! # Ok(())
//! # }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{Result, VenueError};
use crate::models::{NewVenue, Venue, VenueFilters, VenueUpdate};
use crate::VenueSdk;

// ---------------------------------------------------------------------------
// AsyncVenueSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncVenueSdk`] instance.
pub struct AsyncVenueSdkBuilder {
    base_url: Option<String>,
    timeout: Duration,
}

impl Default for AsyncVenueSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl AsyncVenueSdkBuilder {
    /// Set a custom directory service base URL.
    pub fn base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout for directory calls.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the async SDK.
    ///
    /// Construction runs on the blocking thread pool so it won't block
    /// the async event loop.
    pub async fn build(self) -> Result<AsyncVenueSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = VenueSdk::builder();
            if let Some(url) = self.base_url {
                builder = builder.base_url(url);
            }
            builder = builder.timeout(self.timeout);
            let sdk = builder.build();
            Ok(AsyncVenueSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| VenueError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncVenueSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`VenueSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`VenueSdk`] is
/// protected by a [`Mutex`] since it uses `RefCell` internally.
pub struct AsyncVenueSdk {
    inner: Arc<Mutex<VenueSdk>>,
}

impl AsyncVenueSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncVenueSdkBuilder {
        AsyncVenueSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives a `&VenueSdk` reference and should return a
    /// `Result<T>`. The operation runs on a dedicated blocking thread,
    /// keeping the async event loop free.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&VenueSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| VenueError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| VenueError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch the full venue collection asynchronously.
    pub async fn list(&self) -> Result<Vec<Venue>> {
        self.run(|s| s.venues().list()).await
    }

    /// Fetch the collection and apply the in-memory filter asynchronously.
    pub async fn list_filtered(&self, filters: VenueFilters) -> Result<Vec<Venue>> {
        self.run(move |s| s.venues().list_filtered(&filters)).await
    }

    /// Retrieve a single venue by id asynchronously.
    pub async fn get(&self, id: &str) -> Result<Option<Venue>> {
        let id = id.to_string();
        self.run(move |s| s.venues().get(&id)).await
    }

    /// Create a venue asynchronously.
    pub async fn create(&self, venue: NewVenue) -> Result<Venue> {
        self.run(move |s| s.venues().create(&venue)).await
    }

    /// Apply a partial update asynchronously.
    pub async fn update(&self, id: &str, changes: VenueUpdate) -> Result<Venue> {
        let id = id.to_string();
        self.run(move |s| s.venues().update(&id, &changes)).await
    }

    /// Delete a venue asynchronously.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = id.to_string();
        self.run(move |s| s.venues().delete(&id)).await
    }

    /// Close the SDK, releasing all resources.
    ///
    /// After calling this, subsequent operations will fail with a
    /// poisoned lock error.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || {
            let sdk = self
                .inner
                .lock()
                .map_err(|_| VenueError::InvalidArgument("SDK lock poisoned".into()))?;
            // Dropping the MutexGuard drops the SDK
            drop(sdk);
            Ok(())
        })
        .await
        .map_err(|e| VenueError::InvalidArgument(format!("Task join error: {e}")))?
    }
}
