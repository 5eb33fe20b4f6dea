//! Parameter structures for planner operations.
//!
//! Shared parameter structures usable across interfaces (CLI, MCP) without
//! framework-specific derives. Interface layers wrap these with their own
//! derives and convert via `.into()` or transparent serde wrappers:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Dates, trip types, and cabin classes arrive as strings from every
//! interface; [`CreateTrip::validate`] parses them into the typed forms the
//! planner stores. The schema feature adds JSON schema derives for the MCP
//! server without pulling schemars into plain library builds.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    models::{CabinClass, TripType},
    Result, TripError,
};

/// Generic parameters for operations requiring just a trip ID.
///
/// Used for show_trip, archive_trip, unarchive_trip, reset_selections,
/// flight_options, hotel_options, and roadmap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the trip to operate on
    pub id: u64,
}

/// Parameters for creating a new trip planning session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateTrip {
    /// Origin airport or city code; defaults to YYZ when empty
    #[serde(default)]
    pub origin: String,
    /// Destination city or airport code (required)
    pub destination: String,
    /// Departure date in YYYY-MM-DD format (required)
    pub depart_date: String,
    /// Optional return date in YYYY-MM-DD format
    pub return_date: Option<String>,
    /// Number of travelers, 1 through 9
    #[serde(default = "default_travelers")]
    pub travelers: u32,
    /// What the session covers: 'flight', 'hotel', or 'both'
    pub trip_type: Option<String>,
    /// Loyalty programs the traveler holds points in (at least one required)
    #[serde(default)]
    pub points_programs: Vec<String>,
    /// Preferred cabin class: 'economy', 'premium', or 'business'
    pub cabin_preference: Option<String>,
}

fn default_travelers() -> u32 {
    1
}

/// Typed form of [`CreateTrip`] produced by validation.
#[derive(Debug, Clone)]
pub struct ValidatedTrip {
    pub origin: String,
    pub depart_date: jiff::civil::Date,
    pub return_date: Option<jiff::civil::Date>,
    pub trip_type: TripType,
    pub cabin_preference: Option<CabinClass>,
}

impl CreateTrip {
    /// Validate trip creation parameters and parse the string-typed fields.
    ///
    /// # Errors
    ///
    /// Returns `TripError::InvalidInput` when the destination is empty, no
    /// points program is given, the traveler count is outside 1-9, a date
    /// fails to parse, the return date precedes departure, or the trip type
    /// or cabin string is unrecognized.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointpath_core::params::CreateTrip;
    ///
    /// let params = CreateTrip {
    ///     destination: "LHR".to_string(),
    ///     depart_date: "2025-06-01".to_string(),
    ///     points_programs: vec!["Aeroplan".to_string()],
    ///     travelers: 2,
    ///     ..Default::default()
    /// };
    /// let validated = params.validate()?;
    /// assert_eq!(validated.origin, "YYZ");
    /// # pointpath_core::Result::<()>::Ok(())
    /// ```
    pub fn validate(&self) -> Result<ValidatedTrip> {
        if self.destination.trim().is_empty() {
            return Err(TripError::invalid_input(
                "destination",
                "Destination is required",
            ));
        }

        if self.points_programs.is_empty() {
            return Err(TripError::invalid_input(
                "points_programs",
                "Select at least one points program",
            ));
        }

        if !(1..=9).contains(&self.travelers) {
            return Err(TripError::invalid_input(
                "travelers",
                format!("Travelers must be between 1 and 9, got {}", self.travelers),
            ));
        }

        let depart_date = parse_date("depart_date", &self.depart_date)?;
        let return_date = self
            .return_date
            .as_deref()
            .map(|s| parse_date("return_date", s))
            .transpose()?;

        if let Some(ret) = return_date {
            if ret < depart_date {
                return Err(TripError::invalid_input(
                    "return_date",
                    "Return date must not be before the departure date",
                ));
            }
        }

        let trip_type = match self.trip_type.as_deref() {
            Some(s) => TripType::from_str(s).map_err(|_| {
                TripError::invalid_input(
                    "trip_type",
                    format!("Invalid trip type: {s}. Must be 'flight', 'hotel', or 'both'"),
                )
            })?,
            None => TripType::default(),
        };

        let cabin_preference = self
            .cabin_preference
            .as_deref()
            .map(|s| {
                CabinClass::from_str(s).map_err(|_| {
                    TripError::invalid_input(
                        "cabin_preference",
                        format!("Invalid cabin: {s}. Must be 'economy', 'premium', or 'business'"),
                    )
                })
            })
            .transpose()?;

        let origin = if self.origin.trim().is_empty() {
            "YYZ".to_string()
        } else {
            self.origin.trim().to_string()
        };

        Ok(ValidatedTrip {
            origin,
            depart_date,
            return_date,
            trip_type,
            cabin_preference,
        })
    }
}

fn parse_date(field: &str, value: &str) -> Result<jiff::civil::Date> {
    value.parse().map_err(|_| {
        TripError::invalid_input(
            field,
            format!("Invalid date: {value}. Use YYYY-MM-DD format"),
        )
    })
}

/// Parameters for listing trips.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListTrips {
    /// Whether to show archived trips instead of active ones
    #[serde(default)]
    pub archived: bool,
    /// Only show trips whose destination contains this substring
    pub destination: Option<String>,
}

/// Parameters for deleting a trip.
///
/// Deletion is destructive and removes the trip's selections with it, so it
/// must be explicitly confirmed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteTrip {
    /// The ID of the trip to delete
    pub id: u64,
    /// Confirmation flag; the deletion is refused without it
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for selecting a redemption option for a trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SelectOption {
    /// The ID of the trip to attach the selection to
    pub trip_id: u64,
    /// Catalog ID of the option to select
    pub option_id: String,
}
