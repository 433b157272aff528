//! Per-operation validation sequences.

use crate::contract::{LocationCreateRequest, LocationUpdateRequest};

use super::{FieldValidator, SeatCountValidator, ValidationResult};

/// Runs the checks each operation needs, field checks first so a missing
/// field is reported ahead of any seat-layout problem.
pub struct ValidationManager;

impl ValidationManager {
    /// # Errors
    ///
    /// Returns the first field or seat-layout violation.
    pub fn validate_create(request: &LocationCreateRequest) -> ValidationResult {
        FieldValidator::validate_fields(Some(request))?;
        SeatCountValidator::validate(request.seat_count, request.row_count, request.gate_count)
    }

    /// # Errors
    ///
    /// Returns the first field or seat-layout violation.
    pub fn validate_update(request: &LocationUpdateRequest) -> ValidationResult {
        FieldValidator::validate_fields(Some(request))?;
        SeatCountValidator::validate(request.seat_count, request.row_count, request.gate_count)
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::MissingIdentifier`](crate::error::ValidationError::MissingIdentifier)
    /// when `id` is blank.
    pub fn validate_identifier(id: &str, field_name: &str) -> ValidationResult {
        FieldValidator::validate_identifier(id, field_name)
    }
}
