//! Storage port: repository trait for the location aggregate.
//!
//! Queries are a fixed set of named lookups rather than arbitrary predicates.
//! Every read that returns a [`Location`] includes its seats.
//!
//! `Ok(false)` / `Ok(None)` mean the operation did not happen (row missing,
//! uniqueness violated, …). `Err` is reserved for infrastructure failures.

use std::future::Future;

use venuehub_domain::error::VenueHubError;
use venuehub_domain::id::LocationId;
use venuehub_domain::location::Location;

/// Repository for persisting and querying [`Location`] aggregates.
pub trait LocationRepository {
    /// Insert a location together with all of its seats, atomically.
    fn create(
        &self,
        location: Location,
    ) -> impl Future<Output = Result<bool, VenueHubError>> + Send;

    /// Whether a location with this id exists.
    fn exists_by_id(
        &self,
        id: LocationId,
    ) -> impl Future<Output = Result<bool, VenueHubError>> + Send;

    /// Whether a location other than `excluding` already uses `name`.
    ///
    /// Name comparison is case-sensitive.
    fn exists_by_name(
        &self,
        name: &str,
        excluding: Option<LocationId>,
    ) -> impl Future<Output = Result<bool, VenueHubError>> + Send;

    /// Get a location and its seats by id.
    fn find_by_id(
        &self,
        id: LocationId,
    ) -> impl Future<Output = Result<Option<Location>, VenueHubError>> + Send;

    /// Get every location with its seats, ordered by name ascending.
    fn list_all_sorted_by_name(
        &self,
    ) -> impl Future<Output = Result<Vec<Location>, VenueHubError>> + Send;

    /// Replace the stored address fields and seat collection of a location.
    fn update(
        &self,
        location: Location,
    ) -> impl Future<Output = Result<bool, VenueHubError>> + Send;

    /// Delete a location; its seats go with it.
    fn delete_by_id(
        &self,
        id: LocationId,
    ) -> impl Future<Output = Result<bool, VenueHubError>> + Send;
}
