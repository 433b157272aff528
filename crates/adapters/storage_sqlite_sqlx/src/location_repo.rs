//! `SQLite` implementation of [`LocationRepository`].
//!
//! A location spans two tables: `locations` holds the address and
//! `location_seats` holds its seats in insertion order. Writes touching both
//! run inside one transaction.

use std::collections::HashMap;
use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqliteConnection, SqlitePool};

use venuehub_app::ports::LocationRepository;
use venuehub_domain::error::VenueHubError;
use venuehub_domain::id::{LocationId, SeatId};
use venuehub_domain::location::{Location, Seat};

use crate::error::{StorageError, is_unique_violation};

fn parse_id<T>(value: &str) -> Result<T, sqlx::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    T::from_str(value).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

/// Wrapper for converting a `locations` row into a domain [`Location`].
///
/// The seats are loaded separately and attached afterwards.
struct Wrapper(Location);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;

        Ok(Self(Location {
            id: parse_id(&id)?,
            name: row.try_get("name")?,
            street_name: row.try_get("street_name")?,
            postal_code: row.try_get("postal_code")?,
            city: row.try_get("city")?,
            seats: Vec::new(),
        }))
    }
}

/// A `location_seats` row along with the location it belongs to.
struct SeatRow {
    location_id: LocationId,
    seat: Seat,
}

impl<'r> FromRow<'r, SqliteRow> for SeatRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let location_id: String = row.try_get("location_id")?;
        let id: String = row.try_get("id")?;

        Ok(Self {
            location_id: parse_id(&location_id)?,
            seat: Seat {
                id: parse_id::<SeatId>(&id)?,
                seat_number: row.try_get("seat_number")?,
                row: row.try_get("row_label")?,
                gate: row.try_get("gate")?,
            },
        })
    }
}

const INSERT: &str =
    "INSERT INTO locations (id, name, street_name, postal_code, city) VALUES (?, ?, ?, ?, ?)";
const INSERT_SEAT: &str = "INSERT INTO location_seats (id, location_id, position, seat_number, row_label, gate) VALUES (?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str =
    "SELECT id, name, street_name, postal_code, city FROM locations WHERE id = ?";
const SELECT_ALL_BY_NAME: &str =
    "SELECT id, name, street_name, postal_code, city FROM locations ORDER BY name";
const SELECT_SEATS_BY_LOCATION: &str = "SELECT id, location_id, seat_number, row_label, gate FROM location_seats WHERE location_id = ? ORDER BY position";
const SELECT_ALL_SEATS: &str = "SELECT id, location_id, seat_number, row_label, gate FROM location_seats ORDER BY location_id, position";
const EXISTS_BY_ID: &str = "SELECT EXISTS(SELECT 1 FROM locations WHERE id = ?)";
const EXISTS_BY_NAME: &str =
    "SELECT EXISTS(SELECT 1 FROM locations WHERE name = ? AND (? IS NULL OR id <> ?))";
const UPDATE: &str =
    "UPDATE locations SET name = ?, street_name = ?, postal_code = ?, city = ? WHERE id = ?";
const DELETE_SEATS: &str = "DELETE FROM location_seats WHERE location_id = ?";
const DELETE_BY_ID: &str = "DELETE FROM locations WHERE id = ?";

async fn insert_seats(
    conn: &mut SqliteConnection,
    location_id: LocationId,
    seats: &[Seat],
) -> Result<(), sqlx::Error> {
    for (position, seat) in seats.iter().enumerate() {
        sqlx::query(INSERT_SEAT)
            .bind(seat.id.to_string())
            .bind(location_id.to_string())
            .bind(i64::try_from(position).unwrap_or(i64::MAX))
            .bind(&seat.seat_number)
            .bind(&seat.row)
            .bind(&seat.gate)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

/// `SQLite`-backed location repository.
pub struct SqliteLocationRepository {
    pool: SqlitePool,
}

impl SqliteLocationRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl LocationRepository for SqliteLocationRepository {
    fn create(
        &self,
        location: Location,
    ) -> impl Future<Output = Result<bool, VenueHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            let inserted = sqlx::query(INSERT)
                .bind(location.id.to_string())
                .bind(&location.name)
                .bind(&location.street_name)
                .bind(&location.postal_code)
                .bind(&location.city)
                .execute(&mut *tx)
                .await;
            match inserted {
                Ok(_) => {}
                // dropping the transaction rolls it back
                Err(err) if is_unique_violation(&err) => return Ok(false),
                Err(err) => return Err(StorageError::from(err).into()),
            }

            insert_seats(&mut tx, location.id, &location.seats)
                .await
                .map_err(StorageError::from)?;
            tx.commit().await.map_err(StorageError::from)?;

            Ok(true)
        }
    }

    fn exists_by_id(
        &self,
        id: LocationId,
    ) -> impl Future<Output = Result<bool, VenueHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let exists: i64 = sqlx::query_scalar(EXISTS_BY_ID)
                .bind(id.to_string())
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(exists != 0)
        }
    }

    fn exists_by_name(
        &self,
        name: &str,
        excluding: Option<LocationId>,
    ) -> impl Future<Output = Result<bool, VenueHubError>> + Send {
        let pool = self.pool.clone();
        let name = name.to_string();
        let excluding = excluding.map(|id| id.to_string());
        async move {
            let exists: i64 = sqlx::query_scalar(EXISTS_BY_NAME)
                .bind(&name)
                .bind(excluding.clone())
                .bind(excluding)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(exists != 0)
        }
    }

    fn find_by_id(
        &self,
        id: LocationId,
    ) -> impl Future<Output = Result<Option<Location>, VenueHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            // both reads share one snapshot so a concurrent delete cannot
            // strip the seats from a location already read
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            let Some(Wrapper(mut location)) = row else {
                return Ok(None);
            };

            let seats: Vec<SeatRow> = sqlx::query_as(SELECT_SEATS_BY_LOCATION)
                .bind(id.to_string())
                .fetch_all(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            tx.commit().await.map_err(StorageError::from)?;
            location.seats = seats.into_iter().map(|row| row.seat).collect();

            Ok(Some(location))
        }
    }

    fn list_all_sorted_by_name(
        &self,
    ) -> impl Future<Output = Result<Vec<Location>, VenueHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL_BY_NAME)
                .fetch_all(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            let seat_rows: Vec<SeatRow> = sqlx::query_as(SELECT_ALL_SEATS)
                .fetch_all(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            tx.commit().await.map_err(StorageError::from)?;

            let mut seats: HashMap<LocationId, Vec<Seat>> = HashMap::new();
            for row in seat_rows {
                seats.entry(row.location_id).or_default().push(row.seat);
            }

            Ok(rows
                .into_iter()
                .map(|Wrapper(mut location)| {
                    location.seats = seats.remove(&location.id).unwrap_or_default();
                    location
                })
                .collect())
        }
    }

    fn update(
        &self,
        location: Location,
    ) -> impl Future<Output = Result<bool, VenueHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            let updated = sqlx::query(UPDATE)
                .bind(&location.name)
                .bind(&location.street_name)
                .bind(&location.postal_code)
                .bind(&location.city)
                .bind(location.id.to_string())
                .execute(&mut *tx)
                .await;
            match updated {
                Ok(result) if result.rows_affected() > 0 => {}
                Ok(_) => return Ok(false),
                Err(err) if is_unique_violation(&err) => return Ok(false),
                Err(err) => return Err(StorageError::from(err).into()),
            }

            sqlx::query(DELETE_SEATS)
                .bind(location.id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            insert_seats(&mut tx, location.id, &location.seats)
                .await
                .map_err(StorageError::from)?;
            tx.commit().await.map_err(StorageError::from)?;

            Ok(true)
        }
    }

    fn delete_by_id(
        &self,
        id: LocationId,
    ) -> impl Future<Output = Result<bool, VenueHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}
