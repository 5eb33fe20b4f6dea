//! Trip model definition and related functionality.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{CabinClass, FlightOption, HotelOption, TripStatus, TripType};

/// Represents a planning session: the trip parameters entered up front plus
/// the redemption options selected along the way.
///
/// The parameters (route, dates, travelers, programs, cabin) are immutable
/// once the trip is created; only the selections and status change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    /// Unique identifier for the trip
    pub id: u64,

    /// Origin airport or city code
    pub origin: String,

    /// Destination city or airport code
    pub destination: String,

    /// Departure date
    pub depart_date: Date,

    /// Optional return date
    pub return_date: Option<Date>,

    /// Number of travelers (1-9)
    pub travelers: u32,

    /// Whether the session covers a flight, a hotel, or both
    #[serde(default)]
    pub trip_type: TripType,

    /// Loyalty programs the traveler holds points in
    #[serde(default)]
    pub points_programs: Vec<String>,

    /// Preferred cabin class, if any
    pub cabin_preference: Option<CabinClass>,

    /// Status of the trip (active or archived)
    #[serde(default)]
    pub status: TripStatus,

    /// Timestamp when the trip was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the trip was last modified (UTC)
    pub updated_at: Timestamp,

    /// Selected flight redemption, if one has been chosen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_flight: Option<FlightOption>,

    /// Selected hotel redemption, if one has been chosen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_hotel: Option<HotelOption>,
}

impl Trip {
    /// Number of hotel nights implied by the trip dates.
    ///
    /// Return minus departure, clamped to at least one night. Trips without
    /// a return date default to a three-night stay.
    pub fn nights(&self) -> u32 {
        match self.return_date {
            Some(ret) => self
                .depart_date
                .until(ret)
                .map(|span| span.get_days())
                .unwrap_or(0)
                .max(1) as u32,
            None => 3,
        }
    }
}
