//! Location: a venue with an address and the seats it owns.

use serde::{Deserialize, Serialize};

use crate::contract::LocationUpdateRequest;
use crate::error::{ValidationError, VenueHubError};
use crate::id::{LocationId, SeatId};
use crate::seat_layout::SeatPlacement;

/// A venue together with the seats it exclusively owns.
///
/// Serialises to the wire shape
/// `{id, name, streetName, postalCode, city, seats: [{id, seatNumber, row, gate}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub street_name: String,
    pub postal_code: String,
    pub city: String,
    pub seats: Vec<Seat>,
}

/// A single seat of a [`Location`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub id: SeatId,
    pub seat_number: String,
    pub row: String,
    pub gate: String,
}

impl From<SeatPlacement> for Seat {
    fn from(placement: SeatPlacement) -> Self {
        Self {
            id: SeatId::new(),
            seat_number: placement.seat_number,
            row: placement.row,
            gate: placement.gate,
        }
    }
}

impl Location {
    /// Create a builder for constructing a [`Location`].
    #[must_use]
    pub fn builder() -> LocationBuilder {
        LocationBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`VenueHubError::Validation`] when any address field or the
    /// name is blank.
    pub fn validate(&self) -> Result<(), VenueHubError> {
        let fields = [&self.name, &self.street_name, &self.postal_code, &self.city];
        if fields.iter().any(|value| value.trim().is_empty()) {
            return Err(ValidationError::MissingFields.into());
        }
        Ok(())
    }

    /// Apply an update request in place.
    ///
    /// Address fields that differ are replaced. The seat collection is
    /// replaced by `seats` only when the request carries both a seat count and
    /// a row count; otherwise the current seats are kept as they are, whatever
    /// the gate count says.
    ///
    /// Returns `true` when the seats were replaced.
    pub fn apply_update(
        &mut self,
        request: &LocationUpdateRequest,
        seats: Vec<SeatPlacement>,
    ) -> bool {
        replace_if_different(&mut self.name, &request.name);
        replace_if_different(&mut self.street_name, &request.street_name);
        replace_if_different(&mut self.postal_code, &request.postal_code);
        replace_if_different(&mut self.city, &request.city);

        if request.seat_count > 0 && request.row_count > 0 {
            self.seats = seats.into_iter().map(Seat::from).collect();
            return true;
        }
        false
    }
}

fn replace_if_different(current: &mut String, requested: &str) {
    if current != requested {
        requested.clone_into(current);
    }
}

/// Step-by-step builder for [`Location`].
#[derive(Debug, Default)]
pub struct LocationBuilder {
    id: Option<LocationId>,
    name: Option<String>,
    street_name: Option<String>,
    postal_code: Option<String>,
    city: Option<String>,
    seats: Vec<Seat>,
}

impl LocationBuilder {
    #[must_use]
    pub fn id(mut self, id: LocationId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn street_name(mut self, street_name: impl Into<String>) -> Self {
        self.street_name = Some(street_name.into());
        self
    }

    #[must_use]
    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Give every generated seat a fresh identity and attach it.
    #[must_use]
    pub fn seats(mut self, seats: impl IntoIterator<Item = SeatPlacement>) -> Self {
        self.seats = seats.into_iter().map(Seat::from).collect();
        self
    }

    /// Consume the builder, validate, and return a [`Location`].
    ///
    /// # Errors
    ///
    /// Returns [`VenueHubError::Validation`] if a required field is missing
    /// or blank.
    pub fn build(self) -> Result<Location, VenueHubError> {
        let location = Location {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            street_name: self.street_name.unwrap_or_default(),
            postal_code: self.postal_code.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            seats: self.seats,
        };
        location.validate()?;
        Ok(location)
    }
}
