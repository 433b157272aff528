//! Seat-layout policy over the `(seats, rows, gates)` triple.

use crate::error::ValidationError;

use super::ValidationResult;

/// Validates that a seat count, row count and gate count describe a layout
/// [`seat_layout::generate`](crate::seat_layout::generate) can fill.
pub struct SeatCountValidator;

impl SeatCountValidator {
    /// Apply the layout rules in order; the first broken rule is reported.
    ///
    /// A location without seats must not carry rows or gates. A location with
    /// seats needs at least one row and one gate, and fewer rows and fewer
    /// gates than seats.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first rule that fails.
    pub fn validate(seat_count: i32, row_count: i32, gate_count: i32) -> ValidationResult {
        if seat_count == 0 && (row_count > 0 || gate_count > 0) {
            return Err(ValidationError::LayoutWithoutSeats);
        }

        if seat_count > 0 {
            if row_count <= 0 || gate_count <= 0 {
                return Err(ValidationError::MissingLayout);
            }
            if row_count >= seat_count {
                return Err(ValidationError::TooManyRows);
            }
            if gate_count >= seat_count {
                return Err(ValidationError::TooManyGates);
            }
        }

        Ok(())
    }
}
