//! HTTP response mapping for tagged replies.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use venuehub_domain::contract::FailureKind;

/// Map a reply's failure kind to an HTTP status code.
#[must_use]
pub fn status_for(kind: FailureKind) -> StatusCode {
    match kind {
        FailureKind::Validation => StatusCode::BAD_REQUEST,
        FailureKind::NotFound => StatusCode::NOT_FOUND,
        FailureKind::Conflict => StatusCode::CONFLICT,
        FailureKind::Rejected => StatusCode::UNPROCESSABLE_ENTITY,
        FailureKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// A reply body together with the status it is sent with.
///
/// The body is always the full reply, so callers read `succeeded` and
/// `errorMessage` the same way whatever the status.
pub struct ApiReply<T> {
    status: StatusCode,
    body: T,
}

impl<T> ApiReply<T> {
    /// Send `body` with `success` unless the reply carries a failure kind.
    pub fn new(success: StatusCode, failure: Option<FailureKind>, body: T) -> Self {
        Self {
            status: failure.map_or(success, status_for),
            body,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiReply<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
