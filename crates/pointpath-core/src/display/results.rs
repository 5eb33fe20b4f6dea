//! Result wrapper types for displaying operation outcomes.
//!
//! Wrapper types that format the results of create, select, and delete
//! operations with consistent messaging and resource display.

use std::fmt;

use crate::models::{FlightOption, HotelOption, Trip};

/// Wrapper type for displaying the result of create operations.
///
/// Formats creation results with a success message carrying the resource ID
/// followed by the full details of the created resource.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Trip> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created trip with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of selecting a redemption option.
///
/// Confirms which option was attached to which trip, then shows the option
/// details so the user can double-check points and fees.
pub struct SelectResult<T> {
    pub trip_id: u64,
    pub resource: T,
}

impl<T> SelectResult<T> {
    /// Create a new SelectResult wrapper.
    pub fn new(trip_id: u64, resource: T) -> Self {
        Self { trip_id, resource }
    }
}

impl fmt::Display for SelectResult<FlightOption> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Selected flight '{}' for trip {}",
            self.resource.title, self.trip_id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for SelectResult<HotelOption> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Selected hotel '{}' for trip {}",
            self.resource.title, self.trip_id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Trip> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted trip {} → {} (ID: {})",
            self.resource.origin, self.resource.destination, self.resource.id
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::{TripStatus, TripType};

    fn sample_trip() -> Trip {
        Trip {
            id: 7,
            origin: "YYZ".to_string(),
            destination: "LHR".to_string(),
            depart_date: date(2025, 6, 1),
            return_date: None,
            travelers: 1,
            trip_type: TripType::Both,
            points_programs: vec![],
            cabin_preference: None,
            status: TripStatus::Active,
            created_at: jiff::Timestamp::UNIX_EPOCH,
            updated_at: jiff::Timestamp::UNIX_EPOCH,
            selected_flight: None,
            selected_hotel: None,
        }
    }

    #[test]
    fn test_create_result_display() {
        let output = format!("{}", CreateResult::new(sample_trip()));
        assert!(output.contains("Created trip with ID: 7"));
        assert!(output.contains("YYZ → LHR"));
    }

    #[test]
    fn test_select_result_display() {
        let flight = FlightOption {
            id: "amex-flyingblue".to_string(),
            title: "Amex → Flying Blue".to_string(),
            points: 52_000,
            fees: Some(180),
            reason: String::new(),
            recommended: false,
        };
        let output = format!("{}", SelectResult::new(7, flight));
        assert!(output.contains("Selected flight 'Amex → Flying Blue' for trip 7"));
        assert!(output.contains("52,000"));
    }

    #[test]
    fn test_delete_result_display() {
        let output = format!("{}", DeleteResult::new(sample_trip()));
        assert_eq!(output, "Deleted trip YYZ → LHR (ID: 7)\n");
    }
}
