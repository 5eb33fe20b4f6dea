//! Selection storage: the chosen redemption options for a trip.
//!
//! Selections are stored one row per (trip, kind) with the chosen catalog
//! option serialized as JSON. Selecting again for the same kind replaces the
//! previous row.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    error::{DatabaseResultExt, Result, TripError},
    models::{FlightOption, HotelOption, Trip},
};

const UPSERT_SELECTION_SQL: &str = "INSERT OR REPLACE INTO selections (trip_id, kind, option_id, payload, selected_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_SELECTION_SQL: &str =
    "SELECT payload FROM selections WHERE trip_id = ?1 AND kind = ?2";
const DELETE_SELECTIONS_SQL: &str = "DELETE FROM selections WHERE trip_id = ?1";
const TOUCH_TRIP_SQL: &str = "UPDATE trips SET updated_at = ?1 WHERE id = ?2";

/// Which slot of a trip a selection occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    Flight,
    Hotel,
}

impl SelectionKind {
    /// Database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionKind::Flight => "flight",
            SelectionKind::Hotel => "hotel",
        }
    }
}

impl super::Database {
    /// Stores the selected flight for a trip, replacing any previous one.
    pub fn set_flight_selection(&mut self, trip_id: u64, option: &FlightOption) -> Result<()> {
        self.set_selection(trip_id, SelectionKind::Flight, &option.id, option)
    }

    /// Stores the selected hotel for a trip, replacing any previous one.
    pub fn set_hotel_selection(&mut self, trip_id: u64, option: &HotelOption) -> Result<()> {
        self.set_selection(trip_id, SelectionKind::Hotel, &option.id, option)
    }

    fn set_selection<T: Serialize>(
        &mut self,
        trip_id: u64,
        kind: SelectionKind,
        option_id: &str,
        option: &T,
    ) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        let payload = serde_json::to_string(option)?;

        tx.execute(
            UPSERT_SELECTION_SQL,
            params![trip_id as i64, kind.as_str(), option_id, &payload, &now],
        )
        .map_err(|e| TripError::database_error("Failed to store selection", e))?;

        tx.execute(TOUCH_TRIP_SQL, params![&now, trip_id as i64])
            .map_err(|e| TripError::database_error("Failed to touch trip", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Retrieves the stored selection of the given kind, if any.
    pub fn get_selection<T: DeserializeOwned>(
        &self,
        trip_id: u64,
        kind: SelectionKind,
    ) -> Result<Option<T>> {
        let payload: Option<String> = self
            .connection
            .query_row(
                SELECT_SELECTION_SQL,
                params![trip_id as i64, kind.as_str()],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| TripError::database_error("Failed to query selection", e))?;

        payload
            .map(|json| serde_json::from_str(&json).map_err(TripError::from))
            .transpose()
    }

    /// Removes both selections from a trip.
    pub fn clear_selections(&mut self, trip_id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();

        tx.execute(DELETE_SELECTIONS_SQL, params![trip_id as i64])
            .map_err(|e| TripError::database_error("Failed to clear selections", e))?;

        tx.execute(TOUCH_TRIP_SQL, params![&now, trip_id as i64])
            .map_err(|e| TripError::database_error("Failed to touch trip", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Loads both selections onto a trip fetched from the trips table.
    pub(super) fn attach_selections(&self, trip: &mut Trip) -> Result<()> {
        trip.selected_flight = self.get_selection(trip.id, SelectionKind::Flight)?;
        trip.selected_hotel = self.get_selection(trip.id, SelectionKind::Hotel)?;
        Ok(())
    }
}
