//! Trip CRUD operations and queries.

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result, TripError},
    models::{Trip, TripFilter, TripStatus, TripType},
    params::ValidatedTrip,
};

const INSERT_TRIP_SQL: &str = "INSERT INTO trips (origin, destination, depart_date, return_date, travelers, trip_type, points_programs, cabin_preference, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";
const TRIP_COLUMNS: &str = "id, origin, destination, depart_date, return_date, travelers, trip_type, points_programs, cabin_preference, status, created_at, updated_at";
const CHECK_TRIP_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM trips WHERE id = ?1)";
const UPDATE_TRIP_STATUS_SQL: &str =
    "UPDATE trips SET status = ?1, updated_at = ?2 WHERE id = ?3 AND status = ?4";
const DELETE_TRIP_SELECTIONS_SQL: &str = "DELETE FROM selections WHERE trip_id = ?1";
const DELETE_TRIP_SQL: &str = "DELETE FROM trips WHERE id = ?1";

/// Maps a trips row to a [`Trip`] with empty selections.
///
/// Column order must match [`TRIP_COLUMNS`].
fn trip_from_row(row: &Row<'_>) -> rusqlite::Result<Trip> {
    let depart_date = parse_column::<Date>(row, 3)?;
    let return_date = row
        .get::<_, Option<String>>(4)?
        .map(|s| {
            s.parse::<Date>()
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))
        })
        .transpose()?;

    let programs_json: String = row.get(7)?;
    let points_programs: Vec<String> = serde_json::from_str(&programs_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e)))?;

    let trip_type = parse_text_column::<TripType>(row, 6)?;
    let cabin_preference = row
        .get::<_, Option<String>>(8)?
        .map(|s| {
            s.parse().map_err(|e: String| {
                rusqlite::Error::FromSqlConversionFailure(
                    8,
                    Type::Text,
                    Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
                )
            })
        })
        .transpose()?;
    let status = parse_text_column::<TripStatus>(row, 9)?;

    Ok(Trip {
        id: row.get::<_, i64>(0)? as u64,
        origin: row.get(1)?,
        destination: row.get(2)?,
        depart_date,
        return_date,
        travelers: row.get::<_, i64>(5)? as u32,
        trip_type,
        points_programs,
        cabin_preference,
        status,
        created_at: parse_column::<Timestamp>(row, 10)?,
        updated_at: parse_column::<Timestamp>(row, 11)?,
        selected_flight: None,
        selected_hotel: None,
    })
}

fn parse_column<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    row.get::<_, String>(idx)?.parse::<T>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
    })
}

fn parse_text_column<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: std::str::FromStr<Err = String>,
{
    let text: String = row.get(idx)?;
    text.parse().map_err(|e: String| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
        )
    })
}

impl super::Database {
    /// Creates a new trip session from validated parameters.
    pub fn create_trip(
        &mut self,
        destination: &str,
        travelers: u32,
        points_programs: &[String],
        validated: &ValidatedTrip,
    ) -> Result<Trip> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();
        let programs_json = serde_json::to_string(points_programs)?;

        tx.execute(
            INSERT_TRIP_SQL,
            params![
                &validated.origin,
                destination,
                validated.depart_date.to_string(),
                validated.return_date.map(|d| d.to_string()),
                travelers as i64,
                validated.trip_type.as_str(),
                &programs_json,
                validated.cabin_preference.map(|c| c.as_str()),
                TripStatus::Active.as_str(),
                &now_str,
                &now_str
            ],
        )
        .map_err(|e| TripError::database_error("Failed to insert trip", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Trip {
            id,
            origin: validated.origin.clone(),
            destination: destination.into(),
            depart_date: validated.depart_date,
            return_date: validated.return_date,
            travelers,
            trip_type: validated.trip_type,
            points_programs: points_programs.to_vec(),
            cabin_preference: validated.cabin_preference,
            status: TripStatus::Active,
            created_at: now,
            updated_at: now,
            selected_flight: None,
            selected_hotel: None,
        })
    }

    /// Retrieves a trip by its ID, with its selections attached.
    pub fn get_trip(&self, id: u64) -> Result<Option<Trip>> {
        let sql = format!("SELECT {TRIP_COLUMNS} FROM trips WHERE id = ?1");
        let mut trip = self
            .connection
            .query_row(&sql, params![id as i64], trip_from_row)
            .optional()
            .map_err(|e| TripError::database_error("Failed to query trip", e))?;

        if let Some(ref mut trip) = trip {
            self.attach_selections(trip)?;
        }

        Ok(trip)
    }

    /// Lists trips with optional filtering, newest first.
    pub fn list_trips(&self, filter: Option<&TripFilter>) -> Result<Vec<Trip>> {
        let mut query = format!("SELECT {TRIP_COLUMNS} FROM trips");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(f) = filter {
            if let Some(ref destination) = f.destination_contains {
                conditions.push("destination LIKE ?");
                params_vec.push(Box::new(format!("%{destination}%")));
            }

            if let Some(ref status) = f.status {
                conditions.push("status = ?");
                params_vec.push(Box::new(status.as_str().to_string()));
            }
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY created_at DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| TripError::database_error("Failed to prepare query", e))?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let mut trips: Vec<Trip> = stmt
            .query_map(&params_refs[..], trip_from_row)
            .map_err(|e| TripError::database_error("Failed to query trips", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TripError::database_error("Failed to fetch trips", e))?;

        for trip in &mut trips {
            self.attach_selections(trip)?;
        }

        Ok(trips)
    }

    /// Archives a trip (soft delete).
    ///
    /// Returns the archived trip if it exists, None otherwise. Archiving an
    /// already-archived trip is a no-op that still returns the trip.
    pub fn archive_trip(&mut self, id: u64) -> Result<Option<Trip>> {
        self.set_trip_status(id, TripStatus::Archived, TripStatus::Active)
    }

    /// Restores an archived trip to active.
    pub fn unarchive_trip(&mut self, id: u64) -> Result<Option<Trip>> {
        self.set_trip_status(id, TripStatus::Active, TripStatus::Archived)
    }

    fn set_trip_status(
        &mut self,
        id: u64,
        to: TripStatus,
        from: TripStatus,
    ) -> Result<Option<Trip>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        let rows_affected = tx
            .execute(
                UPDATE_TRIP_STATUS_SQL,
                params![to.as_str(), &now, id as i64, from.as_str()],
            )
            .map_err(|e| TripError::database_error("Failed to update trip status", e))?;

        if rows_affected == 0 {
            let exists: bool = tx
                .query_row(CHECK_TRIP_EXISTS_SQL, params![id as i64], |row| row.get(0))
                .map_err(|e| TripError::database_error("Failed to check trip existence", e))?;

            if !exists {
                return Ok(None);
            }
            // Trip exists but already has the target status; fall through and
            // return its details.
        }

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_trip(id)
    }

    /// Permanently deletes a trip and its selections. Cannot be undone.
    pub fn delete_trip(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_TRIP_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .map_err(|e| TripError::database_error("Failed to check trip existence", e))?;

        if !exists {
            return Err(TripError::TripNotFound { id });
        }

        // The foreign key cascade covers this, but we delete explicitly so the
        // behavior does not depend on the pragma.
        tx.execute(DELETE_TRIP_SELECTIONS_SQL, params![id as i64])
            .map_err(|e| TripError::database_error("Failed to delete trip selections", e))?;

        tx.execute(DELETE_TRIP_SQL, params![id as i64])
            .map_err(|e| TripError::database_error("Failed to delete trip", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
