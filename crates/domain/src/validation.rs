//! Validation pipeline: structural field checks, then the seat-layout policy.
//!
//! Every check returns a [`ValidationResult`]; the first failure wins.

pub mod fields;
pub mod manager;
pub mod seat_count;

pub use fields::FieldValidator;
pub use manager::ValidationManager;
pub use seat_count::SeatCountValidator;

use crate::error::ValidationError;

/// Outcome of a validation step.
pub type ValidationResult = Result<(), ValidationError>;
