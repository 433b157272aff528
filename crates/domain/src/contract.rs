//! Request and reply shapes of the five location operations.
//!
//! Replies are tagged outcomes: `succeeded` plus an optional `errorMessage`.
//! A failed reply also records a [`FailureKind`], which is never serialised
//! but lets a transport pick a matching status code.

use serde::{Deserialize, Serialize};

use crate::location::Location;
use crate::validation::fields::RequiredFields;

/// Input of `CreateLocation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationCreateRequest {
    pub name: String,
    pub street_name: String,
    pub postal_code: String,
    pub city: String,
    pub seat_count: i32,
    pub row_count: i32,
    pub gate_count: i32,
}

/// Input of `UpdateLocation`. Always a full replacement, never a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationUpdateRequest {
    pub id: String,
    pub name: String,
    pub street_name: String,
    pub postal_code: String,
    pub city: String,
    pub seat_count: i32,
    pub row_count: i32,
    pub gate_count: i32,
}

/// Input of `GetLocationById` and `DeleteLocation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationByIdRequest {
    pub id: String,
}

impl RequiredFields for LocationCreateRequest {
    fn text_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", &self.name),
            ("streetName", &self.street_name),
            ("postalCode", &self.postal_code),
            ("city", &self.city),
        ]
    }

    fn count_fields(&self) -> Vec<(&'static str, i32)> {
        vec![
            ("seatCount", self.seat_count),
            ("rowCount", self.row_count),
            ("gateCount", self.gate_count),
        ]
    }
}

impl RequiredFields for LocationUpdateRequest {
    fn text_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("id", &self.id),
            ("name", &self.name),
            ("streetName", &self.street_name),
            ("postalCode", &self.postal_code),
            ("city", &self.city),
        ]
    }

    fn count_fields(&self) -> Vec<(&'static str, i32)> {
        vec![
            ("seatCount", self.seat_count),
            ("rowCount", self.row_count),
            ("gateCount", self.gate_count),
        ]
    }
}

/// Why an operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request was malformed or broke the seat-layout policy.
    Validation,
    /// No location with the given id.
    NotFound,
    /// Another location already uses the requested name.
    Conflict,
    /// The store declined the write.
    Rejected,
    /// The store or cache failed; details are only in the logs.
    Internal,
}

/// Reply of `CreateLocation`, `UpdateLocation` and `DeleteLocation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationReply {
    pub succeeded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip)]
    pub failure: Option<FailureKind>,
}

impl LocationReply {
    #[must_use]
    pub fn success() -> Self {
        Self {
            succeeded: true,
            error_message: None,
            failure: None,
        }
    }

    #[must_use]
    pub fn failed(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            error_message: Some(message.into()),
            failure: Some(kind),
        }
    }
}

/// Reply of `GetLocationById`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationByIdReply {
    pub succeeded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip)]
    pub failure: Option<FailureKind>,
}

impl LocationByIdReply {
    #[must_use]
    pub fn found(location: Location) -> Self {
        Self {
            succeeded: true,
            error_message: None,
            location: Some(location),
            failure: None,
        }
    }

    #[must_use]
    pub fn failed(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            error_message: Some(message.into()),
            location: None,
            failure: Some(kind),
        }
    }
}

/// Reply of `GetAllLocations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationListReply {
    pub succeeded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(skip)]
    pub failure: Option<FailureKind>,
}

impl LocationListReply {
    #[must_use]
    pub fn listed(locations: Vec<Location>) -> Self {
        Self {
            succeeded: true,
            error_message: None,
            locations,
            failure: None,
        }
    }

    #[must_use]
    pub fn failed(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            error_message: Some(message.into()),
            locations: Vec::new(),
            failure: Some(kind),
        }
    }
}
