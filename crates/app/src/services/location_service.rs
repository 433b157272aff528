//! Location service: the five location use-cases and the cache-refresh contract.
//!
//! Every mutating operation runs the validation pipeline, talks to the
//! repository and, once the store confirms the write, reloads the full list
//! of locations into the cache. Reads go through the cache and fall back to
//! the store on a miss.
//!
//! Operations never return `Err`: every outcome is a tagged reply. Storage
//! failures are logged and replaced with a generic per-operation message.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use venuehub_domain::contract::{
    FailureKind, LocationByIdReply, LocationByIdRequest, LocationCreateRequest, LocationListReply,
    LocationReply, LocationUpdateRequest,
};
use venuehub_domain::error::{
    ConflictError, NotFoundError, RejectedError, ValidationError, VenueHubError,
};
use venuehub_domain::id::LocationId;
use venuehub_domain::location::Location;
use venuehub_domain::seat_layout;
use venuehub_domain::validation::ValidationManager;

use crate::ports::{CacheHandler, LocationRepository};

/// Cache slot holding every location, sorted by name.
pub const LOCATIONS_CACHE_KEY: &str = "Locations";

/// How long a refreshed location list stays in the cache.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(10 * 60);

/// Upper bound on the seats a single request may generate.
pub const DEFAULT_MAX_SEAT_COUNT: u32 = 100_000;

/// The cached location list. Readers share one allocation.
pub type CachedLocations = Arc<Vec<Location>>;

const ID_FIELD: &str = "ID";

const CREATE_FAILED: &str = "An error occurred while creating the location.";
const GET_FAILED: &str = "An error occurred while retrieving the location.";
const LIST_FAILED: &str = "An error occurred while retrieving locations.";
const UPDATE_FAILED: &str = "An error occurred while updating the location.";
const DELETE_FAILED: &str = "An error occurred while deleting the location.";

/// Application service for location CRUD operations.
pub struct LocationService<R, C> {
    repo: R,
    cache: C,
    cache_ttl: Duration,
    max_seat_count: u32,
}

impl<R, C> LocationService<R, C>
where
    R: LocationRepository + Sync,
    C: CacheHandler<CachedLocations> + Sync,
{
    /// Create a new service backed by the given repository and cache.
    pub fn new(repo: R, cache: C) -> Self {
        Self {
            repo,
            cache,
            cache_ttl: DEFAULT_CACHE_TTL,
            max_seat_count: DEFAULT_MAX_SEAT_COUNT,
        }
    }

    /// Override how long refreshed lists stay cached.
    #[must_use]
    pub fn with_cache_ttl(mut self, cache_ttl: Duration) -> Self {
        self.cache_ttl = cache_ttl;
        self
    }

    /// Override how many seats a single create or update may generate.
    #[must_use]
    pub fn with_max_seat_count(mut self, max_seat_count: u32) -> Self {
        self.max_seat_count = max_seat_count;
        self
    }

    /// Create a location, generating its seats when a seat count is given.
    #[tracing::instrument(skip(self, request), fields(location_name = %request.name))]
    pub async fn create_location(&self, request: LocationCreateRequest) -> LocationReply {
        match self.try_create(&request).await {
            Ok(()) => LocationReply::success(),
            Err(err) => {
                let (kind, message) = describe_failure(err, CREATE_FAILED);
                LocationReply::failed(kind, message)
            }
        }
    }

    /// Look up a single location, preferring the cached list.
    #[tracing::instrument(skip(self, request), fields(location_id = %request.id))]
    pub async fn get_location_by_id(&self, request: LocationByIdRequest) -> LocationByIdReply {
        match self.try_get_by_id(&request.id).await {
            Ok(location) => LocationByIdReply::found(location),
            Err(err) => {
                let (kind, message) = describe_failure(err, GET_FAILED);
                LocationByIdReply::failed(kind, message)
            }
        }
    }

    /// List every location, sorted by name, seats included.
    #[tracing::instrument(skip(self))]
    pub async fn get_all_locations(&self) -> LocationListReply {
        match self.try_get_all().await {
            Ok(locations) => LocationListReply::listed(locations),
            Err(err) => {
                let (kind, message) = describe_failure(err, LIST_FAILED);
                LocationListReply::failed(kind, message)
            }
        }
    }

    /// Replace a location's address and, when a layout is given, its seats.
    #[tracing::instrument(skip(self, request), fields(location_id = %request.id))]
    pub async fn update_location(&self, request: LocationUpdateRequest) -> LocationReply {
        match self.try_update(&request).await {
            Ok(()) => LocationReply::success(),
            Err(err) => {
                let (kind, message) = describe_failure(err, UPDATE_FAILED);
                LocationReply::failed(kind, message)
            }
        }
    }

    /// Delete a location and all of its seats.
    #[tracing::instrument(skip(self, request), fields(location_id = %request.id))]
    pub async fn delete_location(&self, request: LocationByIdRequest) -> LocationReply {
        match self.try_delete(&request.id).await {
            Ok(()) => LocationReply::success(),
            Err(err) => {
                let (kind, message) = describe_failure(err, DELETE_FAILED);
                LocationReply::failed(kind, message)
            }
        }
    }

    /// Reload every location from the store and overwrite the cache slot.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository; the cache is
    /// left untouched in that case.
    pub async fn refresh_cache(&self) -> Result<CachedLocations, VenueHubError> {
        let locations = self.repo.list_all_sorted_by_name().await?;
        tracing::debug!(count = locations.len(), "refreshed location cache");
        Ok(self
            .cache
            .set(LOCATIONS_CACHE_KEY, Arc::new(locations), self.cache_ttl)
            .await)
    }

    fn check_seat_limit(&self, seat_count: i32) -> Result<(), ValidationError> {
        match u32::try_from(seat_count) {
            Ok(count) if count > self.max_seat_count => Err(ValidationError::SeatLimitExceeded {
                max: self.max_seat_count,
            }),
            _ => Ok(()),
        }
    }

    async fn try_create(&self, request: &LocationCreateRequest) -> Result<(), VenueHubError> {
        ValidationManager::validate_create(request)?;
        self.check_seat_limit(request.seat_count)?;

        if self.repo.exists_by_name(&request.name, None).await? {
            return Err(ConflictError::DuplicateName.into());
        }

        let seats = if request.seat_count > 0 {
            seat_layout::generate(request.seat_count, request.row_count, request.gate_count)
        } else {
            Vec::new()
        };

        let location = Location::builder()
            .name(&request.name)
            .street_name(&request.street_name)
            .postal_code(&request.postal_code)
            .city(&request.city)
            .seats(seats)
            .build()?;

        if !self.repo.create(location).await? {
            return Err(RejectedError::NotSaved.into());
        }

        self.refresh_cache().await?;
        Ok(())
    }

    async fn try_get_by_id(&self, id: &str) -> Result<Location, VenueHubError> {
        ValidationManager::validate_identifier(id, ID_FIELD)?;

        // an id that does not parse can never match, but still goes through
        // the same miss path as any unknown id
        let wanted = LocationId::from_str(id).ok();

        if let Some(cached) = self.cache.get(LOCATIONS_CACHE_KEY).await {
            if let Some(location) = find_location(&cached, wanted) {
                tracing::debug!("location served from cache");
                return Ok(location);
            }
        }

        tracing::debug!("location cache miss");
        let refreshed = self.refresh_cache().await?;
        find_location(&refreshed, wanted).ok_or_else(|| NotFoundError::Location.into())
    }

    async fn try_get_all(&self) -> Result<Vec<Location>, VenueHubError> {
        let locations = match self.cache.get(LOCATIONS_CACHE_KEY).await {
            Some(cached) => cached,
            None => self.refresh_cache().await?,
        };
        Ok(locations.as_ref().clone())
    }

    async fn try_update(&self, request: &LocationUpdateRequest) -> Result<(), VenueHubError> {
        ValidationManager::validate_identifier(&request.id, ID_FIELD)?;

        let id = LocationId::from_str(&request.id).map_err(|_| NotFoundError::Location)?;
        let mut location = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(NotFoundError::Location)?;

        ValidationManager::validate_update(request)?;
        self.check_seat_limit(request.seat_count)?;

        if self.repo.exists_by_name(&request.name, Some(id)).await? {
            return Err(ConflictError::DuplicateName.into());
        }

        let seats = if request.seat_count > 0 && request.row_count > 0 {
            seat_layout::generate(request.seat_count, request.row_count, request.gate_count)
        } else {
            Vec::new()
        };
        let replaced = location.apply_update(request, seats);
        tracing::debug!(seats_replaced = replaced, "applied location update");

        if !self.repo.update(location).await? {
            return Err(RejectedError::NotUpdated.into());
        }

        self.refresh_cache().await?;
        Ok(())
    }

    async fn try_delete(&self, id: &str) -> Result<(), VenueHubError> {
        ValidationManager::validate_identifier(id, ID_FIELD)?;

        let id = LocationId::from_str(id).map_err(|_| NotFoundError::NoLocationWithId)?;
        if !self.repo.exists_by_id(id).await? {
            return Err(NotFoundError::NoLocationWithId.into());
        }

        // not atomic with the existence check: a concurrent delete in between
        // surfaces as NotDeleted
        if !self.repo.delete_by_id(id).await? {
            return Err(RejectedError::NotDeleted.into());
        }

        self.refresh_cache().await?;
        Ok(())
    }
}

fn find_location(locations: &[Location], wanted: Option<LocationId>) -> Option<Location> {
    locations
        .iter()
        .find(|location| Some(location.id) == wanted)
        .cloned()
}

/// Map an error to the reply kind and the message the caller sees.
///
/// Storage failures are logged here and hidden behind `fallback`.
fn describe_failure(err: VenueHubError, fallback: &'static str) -> (FailureKind, String) {
    match err {
        VenueHubError::Validation(err) => (FailureKind::Validation, err.to_string()),
        VenueHubError::NotFound(err) => (FailureKind::NotFound, err.to_string()),
        VenueHubError::Conflict(err) => (FailureKind::Conflict, err.to_string()),
        VenueHubError::Rejected(err) => (FailureKind::Rejected, err.to_string()),
        VenueHubError::Storage(source) => {
            tracing::error!(error = %source, operation = fallback, "location storage failure");
            (FailureKind::Internal, fallback.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::InMemoryCache;
    use std::future::Future;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Default)]
    struct InMemoryLocationRepo {
        store: Mutex<Vec<Location>>,
        list_calls: AtomicUsize,
        fail: AtomicBool,
        reject_writes: AtomicBool,
    }

    impl InMemoryLocationRepo {
        fn check(&self) -> Result<(), VenueHubError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(VenueHubError::Storage(Box::new(std::io::Error::other(
                    "connection reset",
                ))));
            }
            Ok(())
        }

        fn rejects(&self) -> bool {
            self.reject_writes.load(Ordering::SeqCst)
        }
    }

    impl LocationRepository for InMemoryLocationRepo {
        fn create(
            &self,
            location: Location,
        ) -> impl Future<Output = Result<bool, VenueHubError>> + Send {
            let result = self.check().map(|()| {
                if self.rejects() {
                    return false;
                }
                self.store.lock().unwrap().push(location);
                true
            });
            async { result }
        }

        fn exists_by_id(
            &self,
            id: LocationId,
        ) -> impl Future<Output = Result<bool, VenueHubError>> + Send {
            let result = self
                .check()
                .map(|()| self.store.lock().unwrap().iter().any(|l| l.id == id));
            async { result }
        }

        fn exists_by_name(
            &self,
            name: &str,
            excluding: Option<LocationId>,
        ) -> impl Future<Output = Result<bool, VenueHubError>> + Send {
            let result = self.check().map(|()| {
                self.store
                    .lock()
                    .unwrap()
                    .iter()
                    .any(|l| l.name == name && Some(l.id) != excluding)
            });
            async { result }
        }

        fn find_by_id(
            &self,
            id: LocationId,
        ) -> impl Future<Output = Result<Option<Location>, VenueHubError>> + Send {
            let result = self.check().map(|()| {
                self.store
                    .lock()
                    .unwrap()
                    .iter()
                    .find(|l| l.id == id)
                    .cloned()
            });
            async { result }
        }

        fn list_all_sorted_by_name(
            &self,
        ) -> impl Future<Output = Result<Vec<Location>, VenueHubError>> + Send {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            let result = self.check().map(|()| {
                let mut all = self.store.lock().unwrap().clone();
                all.sort_by(|a, b| a.name.cmp(&b.name));
                all
            });
            async { result }
        }

        fn update(
            &self,
            location: Location,
        ) -> impl Future<Output = Result<bool, VenueHubError>> + Send {
            let result = self.check().map(|()| {
                if self.rejects() {
                    return false;
                }
                let mut store = self.store.lock().unwrap();
                match store.iter_mut().find(|l| l.id == location.id) {
                    Some(slot) => {
                        *slot = location;
                        true
                    }
                    None => false,
                }
            });
            async { result }
        }

        fn delete_by_id(
            &self,
            id: LocationId,
        ) -> impl Future<Output = Result<bool, VenueHubError>> + Send {
            let result = self.check().map(|()| {
                if self.rejects() {
                    return false;
                }
                let mut store = self.store.lock().unwrap();
                let before = store.len();
                store.retain(|l| l.id != id);
                store.len() < before
            });
            async { result }
        }
    }

    type TestService = LocationService<InMemoryLocationRepo, InMemoryCache<CachedLocations>>;

    fn make_service() -> TestService {
        LocationService::new(InMemoryLocationRepo::default(), InMemoryCache::new())
    }

    fn create_request(name: &str) -> LocationCreateRequest {
        LocationCreateRequest {
            name: name.to_string(),
            street_name: "Test Street".to_string(),
            postal_code: "12345".to_string(),
            city: "TestCity".to_string(),
            seat_count: 20,
            row_count: 4,
            gate_count: 2,
        }
    }

    fn update_request(id: LocationId, name: &str) -> LocationUpdateRequest {
        LocationUpdateRequest {
            id: id.to_string(),
            name: name.to_string(),
            street_name: "Updated Street".to_string(),
            postal_code: "11111".to_string(),
            city: "UpdatedCity".to_string(),
            seat_count: 30,
            row_count: 5,
            gate_count: 1,
        }
    }

    fn by_id(id: &str) -> LocationByIdRequest {
        LocationByIdRequest { id: id.to_string() }
    }

    async fn create(svc: &TestService, name: &str) -> LocationId {
        let reply = svc.create_location(create_request(name)).await;
        assert!(reply.succeeded, "{:?}", reply.error_message);
        svc.get_all_locations()
            .await
            .locations
            .into_iter()
            .find(|l| l.name == name)
            .unwrap()
            .id
    }

    fn list_calls(svc: &TestService) -> usize {
        svc.repo.list_calls.load(Ordering::SeqCst)
    }

    #[tokio::test]
    async fn should_create_location_with_generated_seats() {
        let svc = make_service();

        let reply = svc.create_location(create_request("Test Arena")).await;
        assert!(reply.succeeded);
        assert!(reply.error_message.is_none());

        let all = svc.get_all_locations().await;
        assert_eq!(all.locations.len(), 1);
        assert_eq!(all.locations[0].name, "Test Arena");
        assert_eq!(all.locations[0].seats.len(), 20);
    }

    #[tokio::test]
    async fn should_create_location_without_seats_when_seat_count_is_zero() {
        let svc = make_service();
        let mut request = create_request("Empty Hall");
        request.seat_count = 0;
        request.row_count = 0;
        request.gate_count = 0;

        assert!(svc.create_location(request).await.succeeded);

        let all = svc.get_all_locations().await;
        assert!(all.locations[0].seats.is_empty());
    }

    #[tokio::test]
    async fn should_reject_create_when_fields_are_missing() {
        let svc = make_service();
        let mut request = create_request("Test Arena");
        request.city = String::new();

        let reply = svc.create_location(request).await;
        assert!(!reply.succeeded);
        assert_eq!(
            reply.error_message.as_deref(),
            Some("One or more required fields are missing.")
        );
        assert_eq!(reply.failure, Some(FailureKind::Validation));
        assert!(svc.get_all_locations().await.locations.is_empty());
    }

    #[tokio::test]
    async fn should_reject_create_when_seat_policy_fails() {
        let svc = make_service();
        let mut request = create_request("Test Arena");
        request.row_count = 0;

        let reply = svc.create_location(request).await;
        assert_eq!(
            reply.error_message.as_deref(),
            Some("Rows or Gates must be greater than 0 when seats are provided.")
        );
    }

    #[tokio::test]
    async fn should_reject_duplicate_name_without_touching_cache() {
        let svc = make_service();
        create(&svc, "Test Arena").await;
        let cached_before = svc.cache.get(LOCATIONS_CACHE_KEY).await;
        let calls_before = list_calls(&svc);

        let reply = svc.create_location(create_request("Test Arena")).await;

        assert!(!reply.succeeded);
        assert_eq!(
            reply.error_message.as_deref(),
            Some("Location name already exists.")
        );
        assert_eq!(reply.failure, Some(FailureKind::Conflict));
        assert_eq!(svc.cache.get(LOCATIONS_CACHE_KEY).await, cached_before);
        assert_eq!(list_calls(&svc), calls_before);
    }

    #[tokio::test]
    async fn should_treat_names_case_sensitively() {
        let svc = make_service();
        create(&svc, "Test Arena").await;
        assert!(svc.create_location(create_request("test arena")).await.succeeded);
    }

    #[tokio::test]
    async fn should_report_not_saved_when_store_rejects_create() {
        let svc = make_service();
        svc.repo.reject_writes.store(true, Ordering::SeqCst);

        let reply = svc.create_location(create_request("Test Arena")).await;
        assert_eq!(
            reply.error_message.as_deref(),
            Some("The location could not be saved.")
        );
        assert_eq!(reply.failure, Some(FailureKind::Rejected));
    }

    #[tokio::test]
    async fn should_hide_storage_error_behind_generic_message_on_create() {
        let svc = make_service();
        svc.repo.fail.store(true, Ordering::SeqCst);

        let reply = svc.create_location(create_request("Test Arena")).await;
        assert_eq!(
            reply.error_message.as_deref(),
            Some("An error occurred while creating the location.")
        );
        assert_eq!(reply.failure, Some(FailureKind::Internal));
    }

    #[tokio::test]
    async fn should_reflect_create_in_cached_list_immediately() {
        let svc = make_service();
        create(&svc, "Alpha").await;
        assert_eq!(svc.get_all_locations().await.locations.len(), 1);

        svc.create_location(create_request("Beta")).await;

        let names: Vec<String> = svc
            .get_all_locations()
            .await
            .locations
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, ["Alpha", "Beta"]);
    }

    #[tokio::test]
    async fn should_return_location_by_id_from_cache() {
        let svc = make_service();
        let id = create(&svc, "Test Arena").await;
        let calls_before = list_calls(&svc);

        let reply = svc.get_location_by_id(by_id(&id.to_string())).await;

        assert!(reply.succeeded);
        assert_eq!(reply.location.unwrap().name, "Test Arena");
        assert_eq!(list_calls(&svc), calls_before);
    }

    #[tokio::test]
    async fn should_fall_back_to_store_when_cached_snapshot_is_stale() {
        let svc = make_service();
        create(&svc, "Alpha").await;

        let hidden = Location::builder()
            .name("Written Elsewhere")
            .street_name("Street")
            .postal_code("12345")
            .city("City")
            .build()
            .unwrap();
        let hidden_id = hidden.id;
        svc.repo.store.lock().unwrap().push(hidden);

        let reply = svc.get_location_by_id(by_id(&hidden_id.to_string())).await;

        assert!(reply.succeeded);
        assert_eq!(reply.location.unwrap().name, "Written Elsewhere");
        let cached = svc.cache.get(LOCATIONS_CACHE_KEY).await.unwrap();
        assert_eq!(cached.len(), 2);
    }

    #[tokio::test]
    async fn should_require_id_on_get_by_id() {
        let svc = make_service();
        for id in ["", "   "] {
            let reply = svc.get_location_by_id(by_id(id)).await;
            assert!(!reply.succeeded);
            assert_eq!(reply.error_message.as_deref(), Some("ID is required."));
        }
    }

    #[tokio::test]
    async fn should_report_not_found_for_unknown_id() {
        let svc = make_service();
        create(&svc, "Test Arena").await;

        for id in [LocationId::new().to_string(), "123".to_string()] {
            let reply = svc.get_location_by_id(by_id(&id)).await;
            assert!(!reply.succeeded);
            assert!(reply.location.is_none());
            assert_eq!(
                reply.error_message.as_deref(),
                Some("The location could not be found.")
            );
            assert_eq!(reply.failure, Some(FailureKind::NotFound));
        }
    }

    #[tokio::test]
    async fn should_list_locations_sorted_by_name_and_serve_from_cache() {
        let svc = make_service();
        for name in ["Charlie", "Alpha", "Bravo"] {
            svc.create_location(create_request(name)).await;
        }

        let first = svc.get_all_locations().await;
        let calls_after_first = list_calls(&svc);
        let second = svc.get_all_locations().await;

        let names: Vec<&str> = first.locations.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Bravo", "Charlie"]);
        assert_eq!(first, second);
        assert_eq!(list_calls(&svc), calls_after_first);
    }

    #[tokio::test]
    async fn should_load_from_store_when_cache_is_empty() {
        let svc = make_service();
        let reply = svc.get_all_locations().await;
        assert!(reply.succeeded);
        assert!(reply.locations.is_empty());
        assert_eq!(list_calls(&svc), 1);
    }

    #[tokio::test]
    async fn should_hide_storage_error_behind_generic_message_on_list() {
        let svc = make_service();
        svc.repo.fail.store(true, Ordering::SeqCst);

        let reply = svc.get_all_locations().await;
        assert!(!reply.succeeded);
        assert_eq!(
            reply.error_message.as_deref(),
            Some("An error occurred while retrieving locations.")
        );
    }

    #[tokio::test]
    async fn should_update_address_and_regenerate_seats() {
        let svc = make_service();
        let id = create(&svc, "Test Arena").await;

        let reply = svc
            .update_location(update_request(id, "Updated Test Arena"))
            .await;
        assert!(reply.succeeded, "{:?}", reply.error_message);

        let location = svc
            .get_location_by_id(by_id(&id.to_string()))
            .await
            .location
            .unwrap();
        assert_eq!(location.name, "Updated Test Arena");
        assert_eq!(location.city, "UpdatedCity");
        assert_eq!(location.seats.len(), 30);
        assert!(location.seats.iter().all(|s| s.gate == "1"));
    }

    #[tokio::test]
    async fn should_keep_existing_seats_when_update_has_no_layout() {
        let svc = make_service();
        let id = create(&svc, "Test Arena").await;
        let seats_before = svc
            .get_location_by_id(by_id(&id.to_string()))
            .await
            .location
            .unwrap()
            .seats;

        let mut request = update_request(id, "Test Arena");
        request.seat_count = 0;
        request.row_count = 0;
        request.gate_count = 0;
        assert!(svc.update_location(request).await.succeeded);

        let location = svc
            .get_location_by_id(by_id(&id.to_string()))
            .await
            .location
            .unwrap();
        assert_eq!(location.street_name, "Updated Street");
        assert_eq!(location.seats, seats_before);
    }

    #[tokio::test]
    async fn should_allow_update_that_keeps_own_name() {
        let svc = make_service();
        let id = create(&svc, "Test Arena").await;
        assert!(
            svc.update_location(update_request(id, "Test Arena"))
                .await
                .succeeded
        );
    }

    #[tokio::test]
    async fn should_reject_update_to_name_of_another_location() {
        let svc = make_service();
        create(&svc, "Test Arena 1").await;
        let id = create(&svc, "Test Arena 2").await;

        let reply = svc.update_location(update_request(id, "Test Arena 1")).await;

        assert!(!reply.succeeded);
        assert_eq!(
            reply.error_message.as_deref(),
            Some("Location name already exists.")
        );
    }

    #[tokio::test]
    async fn should_report_not_found_when_updating_unknown_location() {
        let svc = make_service();

        let reply = svc
            .update_location(update_request(LocationId::new(), "Ghost"))
            .await;
        assert_eq!(
            reply.error_message.as_deref(),
            Some("The location could not be found.")
        );

        let mut request = update_request(LocationId::new(), "Ghost");
        request.id = "123".to_string();
        let reply = svc.update_location(request).await;
        assert_eq!(reply.failure, Some(FailureKind::NotFound));
    }

    #[tokio::test]
    async fn should_require_id_on_update() {
        let svc = make_service();
        let mut request = update_request(LocationId::new(), "Arena");
        request.id = String::new();

        let reply = svc.update_location(request).await;
        assert_eq!(reply.error_message.as_deref(), Some("ID is required."));
    }

    #[tokio::test]
    async fn should_validate_update_request_after_loading_location() {
        let svc = make_service();
        let id = create(&svc, "Test Arena").await;

        let mut request = update_request(id, "Test Arena");
        request.gate_count = 0;
        let reply = svc.update_location(request).await;

        assert_eq!(
            reply.error_message.as_deref(),
            Some("Rows or Gates must be greater than 0 when seats are provided.")
        );
        let location = svc
            .get_location_by_id(by_id(&id.to_string()))
            .await
            .location
            .unwrap();
        assert_eq!(location.street_name, "Test Street");
    }

    #[tokio::test]
    async fn should_report_not_updated_when_store_rejects_update() {
        let svc = make_service();
        let id = create(&svc, "Test Arena").await;
        svc.repo.reject_writes.store(true, Ordering::SeqCst);

        let reply = svc.update_location(update_request(id, "Other")).await;
        assert_eq!(
            reply.error_message.as_deref(),
            Some("The location could not be updated.")
        );
    }

    #[tokio::test]
    async fn should_delete_location_and_refresh_cache() {
        let svc = make_service();
        let id = create(&svc, "Test Arena").await;

        let reply = svc.delete_location(by_id(&id.to_string())).await;
        assert!(reply.succeeded);

        assert!(svc.get_all_locations().await.locations.is_empty());
        let lookup = svc.get_location_by_id(by_id(&id.to_string())).await;
        assert!(!lookup.succeeded);
    }

    #[tokio::test]
    async fn should_require_id_on_delete() {
        let svc = make_service();
        let reply = svc.delete_location(by_id(" ")).await;
        assert_eq!(reply.error_message.as_deref(), Some("ID is required."));
    }

    #[tokio::test]
    async fn should_report_no_location_when_deleting_unknown_id() {
        let svc = make_service();
        for id in [LocationId::new().to_string(), "123".to_string()] {
            let reply = svc.delete_location(by_id(&id)).await;
            assert_eq!(
                reply.error_message.as_deref(),
                Some("No location found with given ID.")
            );
            assert_eq!(reply.failure, Some(FailureKind::NotFound));
        }
    }

    #[tokio::test]
    async fn should_report_not_deleted_when_store_rejects_delete() {
        let svc = make_service();
        let id = create(&svc, "Test Arena").await;
        svc.repo.reject_writes.store(true, Ordering::SeqCst);

        let reply = svc.delete_location(by_id(&id.to_string())).await;
        assert_eq!(
            reply.error_message.as_deref(),
            Some("The location could not be deleted.")
        );
        assert_eq!(reply.failure, Some(FailureKind::Rejected));
    }

    #[tokio::test]
    async fn should_hide_storage_error_behind_generic_message_on_get() {
        let svc = make_service();
        svc.repo.fail.store(true, Ordering::SeqCst);

        let reply = svc
            .get_location_by_id(by_id(&LocationId::new().to_string()))
            .await;

        assert!(!reply.succeeded);
        assert!(reply.location.is_none());
        assert_eq!(
            reply.error_message.as_deref(),
            Some("An error occurred while retrieving the location.")
        );
        assert_eq!(reply.failure, Some(FailureKind::Internal));
        assert_eq!(list_calls(&svc), 1);
    }

    #[tokio::test]
    async fn should_hide_storage_error_behind_generic_message_on_update() {
        let svc = make_service();
        let id = create(&svc, "Test Arena").await;
        svc.repo.fail.store(true, Ordering::SeqCst);

        let reply = svc.update_location(update_request(id, "Renamed")).await;

        assert!(!reply.succeeded);
        assert_eq!(
            reply.error_message.as_deref(),
            Some("An error occurred while updating the location.")
        );
        assert_eq!(reply.failure, Some(FailureKind::Internal));
    }

    #[tokio::test]
    async fn should_hide_storage_error_behind_generic_message_on_delete() {
        let svc = make_service();
        let id = create(&svc, "Test Arena").await;
        svc.repo.fail.store(true, Ordering::SeqCst);

        let reply = svc.delete_location(by_id(&id.to_string())).await;

        assert!(!reply.succeeded);
        assert_eq!(
            reply.error_message.as_deref(),
            Some("An error occurred while deleting the location.")
        );
        assert_eq!(reply.failure, Some(FailureKind::Internal));
    }

    #[tokio::test]
    async fn should_share_cached_list_between_reads() {
        let svc = make_service();
        create(&svc, "Test Arena").await;

        let first = svc.cache.get(LOCATIONS_CACHE_KEY).await.unwrap();
        svc.get_location_by_id(by_id(&first[0].id.to_string())).await;
        svc.get_all_locations().await;
        let second = svc.cache.get(LOCATIONS_CACHE_KEY).await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn should_reject_create_above_seat_limit_before_generating_seats() {
        let svc = make_service().with_max_seat_count(1_000);
        let mut request = create_request("Mega Dome");
        request.seat_count = i32::MAX;
        request.row_count = 2;
        request.gate_count = 1;

        let reply = svc.create_location(request).await;

        assert_eq!(
            reply.error_message.as_deref(),
            Some("Seat count cannot exceed 1000.")
        );
        assert_eq!(reply.failure, Some(FailureKind::Validation));
        assert!(svc.repo.store.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_accept_create_at_seat_limit() {
        let svc = make_service().with_max_seat_count(20);
        assert!(svc.create_location(create_request("Arena")).await.succeeded);
    }

    #[tokio::test]
    async fn should_reject_update_above_seat_limit() {
        let svc = make_service().with_max_seat_count(25);
        let id = create(&svc, "Test Arena").await;

        let reply = svc.update_location(update_request(id, "Test Arena")).await;

        assert_eq!(
            reply.error_message.as_deref(),
            Some("Seat count cannot exceed 25.")
        );
        let location = svc
            .get_location_by_id(by_id(&id.to_string()))
            .await
            .location
            .unwrap();
        assert_eq!(location.seats.len(), 20);
    }

    #[tokio::test(start_paused = true)]
    async fn should_reload_from_store_after_cache_expires() {
        let svc: TestService =
            LocationService::new(InMemoryLocationRepo::default(), InMemoryCache::new())
                .with_cache_ttl(Duration::from_secs(30));
        svc.get_all_locations().await;
        assert_eq!(svc.repo.list_calls.load(Ordering::SeqCst), 1);

        tokio::time::advance(Duration::from_secs(31)).await;
        svc.get_all_locations().await;

        assert_eq!(svc.repo.list_calls.load(Ordering::SeqCst), 2);
    }
}
