//! Redemption option models for flights and hotels.

use serde::{Deserialize, Serialize};

/// A way to pay for a flight with loyalty points, possibly via a transfer.
///
/// The title may encode a transfer route with an arrow separator, e.g.
/// `"Amex → Flying Blue"`; the roadmap synthesizer reads the segment after
/// the arrow as the destination program name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightOption {
    /// Catalog identifier for the option
    pub id: String,

    /// Display title, optionally encoding a transfer route
    pub title: String,

    /// Points required for the redemption
    pub points: u64,

    /// Taxes and fees in dollars, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<u64>,

    /// Why this option is worth considering
    pub reason: String,

    /// Whether this is the recommended option
    #[serde(default)]
    pub recommended: bool,
}

/// A way to pay for a hotel stay with loyalty points, or with cash.
///
/// A `total_points` of zero marks a cash booking: the stay costs no points
/// and contributes no transfer or login steps to the roadmap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelOption {
    /// Catalog identifier for the option
    pub id: String,

    /// Display title, optionally encoding a transfer route
    pub title: String,

    /// Points required per night
    pub points_per_night: u64,

    /// Points required for the whole stay (zero for a cash booking)
    pub total_points: u64,

    /// Number of nights in the stay
    pub nights: u32,

    /// Why this option is worth considering
    pub reason: String,

    /// Whether this is the recommended option
    #[serde(default)]
    pub recommended: bool,
}

impl HotelOption {
    /// Whether this option is paid with cash rather than points.
    pub fn is_cash_booking(&self) -> bool {
        self.total_points == 0
    }
}
