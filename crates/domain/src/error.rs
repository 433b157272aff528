//! Common error types used across the workspace.
//!
//! Every variant that can reach a caller renders the exact message the
//! caller sees. Storage failures are the exception: they are boxed, logged
//! by the service and replaced with a generic per-operation message.

/// Top-level error for every layer of venuehub.
#[derive(Debug, thiserror::Error)]
pub enum VenueHubError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error(transparent)]
    Rejected(#[from] RejectedError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A request failed structural or seat-layout validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Required fields are missing.")]
    MissingModel,

    #[error("One or more required fields are missing.")]
    MissingFields,

    #[error("'{field}' cannot be a negative value.")]
    NegativeValue { field: &'static str },

    #[error("{field} is required.")]
    MissingIdentifier { field: String },

    #[error("Rows and Gates cannot have values when no seats are provided.")]
    LayoutWithoutSeats,

    #[error("Rows or Gates must be greater than 0 when seats are provided.")]
    MissingLayout,

    #[error("Rows must be less than the number of seats.")]
    TooManyRows,

    #[error("Gates must be less than the number of seats.")]
    TooManyGates,

    #[error("Seat count cannot exceed {max}.")]
    SeatLimitExceeded { max: u32 },
}

/// The addressed location does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    #[error("The location could not be found.")]
    Location,

    /// Reported by delete, which checks existence before acting.
    #[error("No location found with given ID.")]
    NoLocationWithId,
}

/// The request collides with another location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("Location name already exists.")]
    DuplicateName,
}

/// The store reported that a write did not happen.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectedError {
    #[error("The location could not be saved.")]
    NotSaved,

    #[error("The location could not be updated.")]
    NotUpdated,

    #[error("The location could not be deleted.")]
    NotDeleted,
}
