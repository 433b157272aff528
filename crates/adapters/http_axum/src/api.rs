//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod locations;

use axum::Router;
use axum::routing::get;

use venuehub_app::ports::{CacheHandler, LocationRepository};
use venuehub_app::services::location_service::CachedLocations;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R, C>() -> Router<AppState<R, C>>
where
    R: LocationRepository + Send + Sync + 'static,
    C: CacheHandler<CachedLocations> + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/locations",
            get(locations::list::<R, C>).post(locations::create::<R, C>),
        )
        .route(
            "/locations/{id}",
            get(locations::get::<R, C>)
                .put(locations::update::<R, C>)
                .delete(locations::delete::<R, C>),
        )
}
