//! Catalog browsing, selection, and roadmap operations for the Planner.

use tokio::task;

use super::Planner;
use crate::{
    catalog,
    error::{Result, TripError},
    models::{FlightOption, HotelOption, Roadmap, Trip, TripType},
    params::{Id, SelectOption},
    roadmap::synthesize,
};

impl Planner {
    /// Returns the flight redemption options for a trip.
    ///
    /// # Errors
    ///
    /// Returns `TripError::TripNotFound` when the trip does not exist, and
    /// `TripError::InvalidInput` for hotel-only trips.
    pub async fn flight_options(&self, params: &Id) -> Result<Vec<FlightOption>> {
        let trip = self.require_trip(params).await?;

        if trip.trip_type == TripType::Hotel {
            return Err(TripError::invalid_input(
                "trip_type",
                format!("Trip {} is hotel-only and has no flight options", trip.id),
            ));
        }

        Ok(catalog::flight_options())
    }

    /// Returns the hotel redemption options for a trip, with totals computed
    /// from the trip's night count.
    ///
    /// # Errors
    ///
    /// Returns `TripError::TripNotFound` when the trip does not exist, and
    /// `TripError::InvalidInput` for flight-only trips.
    pub async fn hotel_options(&self, params: &Id) -> Result<Vec<HotelOption>> {
        let trip = self.require_trip(params).await?;

        if trip.trip_type == TripType::Flight {
            return Err(TripError::invalid_input(
                "trip_type",
                format!("Trip {} is flight-only and has no hotel options", trip.id),
            ));
        }

        Ok(catalog::hotel_options(trip.nights()))
    }

    /// Selects a flight option for a trip, replacing any previous selection.
    pub async fn select_flight(&self, params: &SelectOption) -> Result<FlightOption> {
        let trip = self
            .require_trip(&Id { id: params.trip_id })
            .await?;

        if trip.trip_type == TripType::Hotel {
            return Err(TripError::invalid_input(
                "trip_type",
                format!("Trip {} is hotel-only; cannot select a flight", trip.id),
            ));
        }

        let option = catalog::find_flight(&params.option_id).ok_or_else(|| {
            TripError::OptionNotFound {
                id: params.option_id.clone(),
            }
        })?;

        let db_path = self.db_path.clone();
        let trip_id = params.trip_id;
        let stored = option.clone();

        task::spawn_blocking(move || {
            let mut db = crate::db::Database::new(&db_path)?;
            db.set_flight_selection(trip_id, &stored)
        })
        .await
        .map_err(|e| TripError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(option)
    }

    /// Selects a hotel option for a trip, replacing any previous selection.
    ///
    /// The stored option carries totals computed from the trip's nights, so
    /// the roadmap and totals stay consistent with the dates entered.
    pub async fn select_hotel(&self, params: &SelectOption) -> Result<HotelOption> {
        let trip = self
            .require_trip(&Id { id: params.trip_id })
            .await?;

        if trip.trip_type == TripType::Flight {
            return Err(TripError::invalid_input(
                "trip_type",
                format!("Trip {} is flight-only; cannot select a hotel", trip.id),
            ));
        }

        let option = catalog::find_hotel(&params.option_id, trip.nights()).ok_or_else(|| {
            TripError::OptionNotFound {
                id: params.option_id.clone(),
            }
        })?;

        let db_path = self.db_path.clone();
        let trip_id = params.trip_id;
        let stored = option.clone();

        task::spawn_blocking(move || {
            let mut db = crate::db::Database::new(&db_path)?;
            db.set_hotel_selection(trip_id, &stored)
        })
        .await
        .map_err(|e| TripError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(option)
    }

    /// Synthesizes the booking roadmap for a trip from its current
    /// selections.
    pub async fn roadmap(&self, params: &Id) -> Result<Roadmap> {
        let trip = self.require_trip(params).await?;
        Ok(Self::roadmap_for(&trip))
    }

    /// Pure roadmap synthesis for an already-loaded trip.
    pub fn roadmap_for(trip: &Trip) -> Roadmap {
        synthesize(
            Some(trip),
            trip.selected_flight.as_ref(),
            trip.selected_hotel.as_ref(),
        )
    }
}
