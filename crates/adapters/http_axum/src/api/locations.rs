//! JSON REST handlers for locations.
//!
//! Handlers always answer with the full reply body; only the status code
//! changes with the outcome.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use venuehub_app::ports::{CacheHandler, LocationRepository};
use venuehub_app::services::location_service::CachedLocations;
use venuehub_domain::contract::{
    FailureKind, LocationByIdReply, LocationByIdRequest, LocationCreateRequest, LocationListReply,
    LocationReply, LocationUpdateRequest,
};
use venuehub_domain::error::ValidationError;

use crate::error::ApiReply;
use crate::state::AppState;

fn missing_model(rejection: &JsonRejection) -> ApiReply<LocationReply> {
    tracing::debug!(error = %rejection, "unreadable request body");
    let reply = LocationReply::failed(
        FailureKind::Validation,
        ValidationError::MissingModel.to_string(),
    );
    ApiReply::new(StatusCode::OK, reply.failure, reply)
}

/// `GET /api/locations`
pub async fn list<R, C>(State(state): State<AppState<R, C>>) -> ApiReply<LocationListReply>
where
    R: LocationRepository + Send + Sync + 'static,
    C: CacheHandler<CachedLocations> + Send + Sync + 'static,
{
    let reply = state.location_service.get_all_locations().await;
    ApiReply::new(StatusCode::OK, reply.failure, reply)
}

/// `GET /api/locations/{id}`
pub async fn get<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<String>,
) -> ApiReply<LocationByIdReply>
where
    R: LocationRepository + Send + Sync + 'static,
    C: CacheHandler<CachedLocations> + Send + Sync + 'static,
{
    let reply = state
        .location_service
        .get_location_by_id(LocationByIdRequest { id })
        .await;
    ApiReply::new(StatusCode::OK, reply.failure, reply)
}

/// `POST /api/locations`
pub async fn create<R, C>(
    State(state): State<AppState<R, C>>,
    body: Result<Json<LocationCreateRequest>, JsonRejection>,
) -> ApiReply<LocationReply>
where
    R: LocationRepository + Send + Sync + 'static,
    C: CacheHandler<CachedLocations> + Send + Sync + 'static,
{
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return missing_model(&rejection),
    };
    let reply = state.location_service.create_location(request).await;
    ApiReply::new(StatusCode::CREATED, reply.failure, reply)
}

/// `PUT /api/locations/{id}`
///
/// The id in the path wins over any id in the body.
pub async fn update<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<String>,
    body: Result<Json<LocationUpdateRequest>, JsonRejection>,
) -> ApiReply<LocationReply>
where
    R: LocationRepository + Send + Sync + 'static,
    C: CacheHandler<CachedLocations> + Send + Sync + 'static,
{
    let Json(mut request) = match body {
        Ok(body) => body,
        Err(rejection) => return missing_model(&rejection),
    };
    request.id = id;
    let reply = state.location_service.update_location(request).await;
    ApiReply::new(StatusCode::OK, reply.failure, reply)
}

/// `DELETE /api/locations/{id}`
pub async fn delete<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<String>,
) -> ApiReply<LocationReply>
where
    R: LocationRepository + Send + Sync + 'static,
    C: CacheHandler<CachedLocations> + Send + Sync + 'static,
{
    let reply = state
        .location_service
        .delete_location(LocationByIdRequest { id })
        .await;
    ApiReply::new(StatusCode::OK, reply.failure, reply)
}
