//! Structural checks: required text fields and non-negative counts.

use crate::error::ValidationError;

use super::ValidationResult;

/// A request shape that lists the fields [`FieldValidator`] must inspect.
///
/// Fields are returned in declaration order, which decides which failure is
/// reported when several fields are invalid.
pub trait RequiredFields {
    /// Every text field as `(wire name, value)`. All must be non-blank.
    fn text_fields(&self) -> Vec<(&'static str, &str)>;

    /// Every integer field as `(wire name, value)`. None may be negative.
    fn count_fields(&self) -> Vec<(&'static str, i32)>;
}

/// Validates request shapes and single identifiers.
pub struct FieldValidator;

impl FieldValidator {
    /// Check that `model` is present, that no text field is blank and that no
    /// count is negative.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingModel`] when `model` is `None`
    /// - [`ValidationError::MissingFields`] when any text field is blank
    /// - [`ValidationError::NegativeValue`] naming the first negative count
    pub fn validate_fields<T: RequiredFields>(model: Option<&T>) -> ValidationResult {
        let model = model.ok_or(ValidationError::MissingModel)?;

        if model
            .text_fields()
            .iter()
            .any(|(_, value)| value.trim().is_empty())
        {
            return Err(ValidationError::MissingFields);
        }

        if let Some((field, _)) = model
            .count_fields()
            .into_iter()
            .find(|(_, value)| *value < 0)
        {
            return Err(ValidationError::NegativeValue { field });
        }

        Ok(())
    }

    /// Check that an identifier is not blank.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingIdentifier`] naming `field_name`.
    pub fn validate_identifier(value: &str, field_name: &str) -> ValidationResult {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingIdentifier {
                field: field_name.to_string(),
            });
        }
        Ok(())
    }
}
