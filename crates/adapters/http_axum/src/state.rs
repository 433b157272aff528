//! Shared application state for axum handlers.

use std::sync::Arc;

use venuehub_app::ports::{CacheHandler, LocationRepository};
use venuehub_app::services::location_service::{CachedLocations, LocationService};

/// Application state shared across all axum handlers.
///
/// Generic over the repository and cache types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`: only the `Arc` wrapper is cloned.
pub struct AppState<R, C> {
    /// Location CRUD service.
    pub location_service: Arc<LocationService<R, C>>,
}

impl<R, C> Clone for AppState<R, C> {
    fn clone(&self) -> Self {
        Self {
            location_service: Arc::clone(&self.location_service),
        }
    }
}

impl<R, C> AppState<R, C>
where
    R: LocationRepository + Send + Sync + 'static,
    C: CacheHandler<CachedLocations> + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(location_service: LocationService<R, C>) -> Self {
        Self::from_arc(Arc::new(location_service))
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    pub fn from_arc(location_service: Arc<LocationService<R, C>>) -> Self {
        Self { location_service }
    }
}
