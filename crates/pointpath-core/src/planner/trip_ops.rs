//! Trip session lifecycle operations for the Planner.

use tokio::task;

use super::Planner;
use crate::{
    error::{Result, TripError},
    models::{Trip, TripFilter},
    params::{CreateTrip, DeleteTrip, Id, ListTrips},
};

impl Planner {
    /// Creates a new trip session after validating the parameters.
    ///
    /// String-typed fields (dates, trip type, cabin) are parsed here; an
    /// empty origin defaults to YYZ.
    pub async fn create_trip(&self, params: &CreateTrip) -> Result<Trip> {
        let validated = params.validate()?;

        let db_path = self.db_path.clone();
        let destination = params.destination.trim().to_string();
        let travelers = params.travelers;
        let points_programs = params.points_programs.clone();

        task::spawn_blocking(move || {
            let mut db = crate::db::Database::new(&db_path)?;
            db.create_trip(&destination, travelers, &points_programs, &validated)
        })
        .await
        .map_err(|e| TripError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a trip by its ID, selections included.
    pub async fn get_trip(&self, params: &Id) -> Result<Option<Trip>> {
        let db_path = self.db_path.clone();
        let trip_id = params.id;

        task::spawn_blocking(move || {
            let db = crate::db::Database::new(&db_path)?;
            db.get_trip(trip_id)
        })
        .await
        .map_err(|e| TripError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a trip by ID, failing with `TripNotFound` when absent.
    pub async fn require_trip(&self, params: &Id) -> Result<Trip> {
        self.get_trip(params)
            .await?
            .ok_or(TripError::TripNotFound { id: params.id })
    }

    /// Lists trips with optional filtering.
    pub async fn list_trips(&self, filter: Option<TripFilter>) -> Result<Vec<Trip>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = crate::db::Database::new(&db_path)?;
            db.list_trips(filter.as_ref())
        })
        .await
        .map_err(|e| TripError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Archives a trip (soft delete). Returns the archived trip, or None if
    /// no trip has that ID.
    pub async fn archive_trip(&self, params: &Id) -> Result<Option<Trip>> {
        let db_path = self.db_path.clone();
        let trip_id = params.id;

        task::spawn_blocking(move || {
            let mut db = crate::db::Database::new(&db_path)?;
            db.archive_trip(trip_id)
        })
        .await
        .map_err(|e| TripError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Restores an archived trip to active.
    pub async fn unarchive_trip(&self, params: &Id) -> Result<Option<Trip>> {
        let db_path = self.db_path.clone();
        let trip_id = params.id;

        task::spawn_blocking(move || {
            let mut db = crate::db::Database::new(&db_path)?;
            db.unarchive_trip(trip_id)
        })
        .await
        .map_err(|e| TripError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently deletes a trip and its selections, with confirmation.
    ///
    /// Returns the deleted trip's details, or None if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns `TripError::InvalidInput` when `confirmed` is false.
    pub async fn delete_trip(&self, params: &DeleteTrip) -> Result<Option<Trip>> {
        if !params.confirmed {
            return Err(TripError::invalid_input(
                "confirmed",
                "Trip deletion requires explicit confirmation. Set 'confirmed' to true to \
                 proceed with permanent deletion.",
            ));
        }

        let id_params = Id { id: params.id };
        let trip = self.get_trip(&id_params).await?;

        if trip.is_some() {
            let db_path = self.db_path.clone();
            let trip_id = params.id;

            task::spawn_blocking(move || {
                let mut db = crate::db::Database::new(&db_path)?;
                db.delete_trip(trip_id)
            })
            .await
            .map_err(|e| TripError::Configuration {
                message: format!("Task join error: {e}"),
            })??;
        }

        Ok(trip)
    }

    /// Removes both selections from a trip, returning it to its just-created
    /// state.
    pub async fn reset_selections(&self, params: &Id) -> Result<Trip> {
        // Fail early with TripNotFound rather than silently clearing nothing
        self.require_trip(params).await?;

        let db_path = self.db_path.clone();
        let trip_id = params.id;

        task::spawn_blocking(move || {
            let mut db = crate::db::Database::new(&db_path)?;
            db.clear_selections(trip_id)
        })
        .await
        .map_err(|e| TripError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        self.require_trip(params).await
    }

    /// Convenience listing that builds the filter from list parameters.
    pub async fn list_trips_filtered(&self, params: &ListTrips) -> Result<Vec<Trip>> {
        self.list_trips(Some(TripFilter::from(params))).await
    }
}
