//! Filter types for trip listing queries.

use crate::params::ListTrips;

use super::TripStatus;

/// Filter criteria for listing trips.
#[derive(Debug, Clone, Default)]
pub struct TripFilter {
    /// Match trips whose destination contains this substring
    pub destination_contains: Option<String>,

    /// Filter by a specific status
    pub status: Option<TripStatus>,

    /// Include archived trips alongside active ones
    pub include_archived: bool,
}

impl From<&ListTrips> for TripFilter {
    fn from(params: &ListTrips) -> Self {
        let status = if params.archived {
            TripStatus::Archived
        } else {
            TripStatus::Active
        };
        TripFilter {
            destination_contains: params.destination.clone(),
            status: Some(status),
            include_archived: params.archived,
        }
    }
}
