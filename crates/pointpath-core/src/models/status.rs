//! Status and preference enumerations for trips.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of trip statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    /// Trip is active and visible
    #[default]
    Active,

    /// Trip is archived and hidden from normal views
    Archived,
}

impl FromStr for TripStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(TripStatus::Active),
            "archived" => Ok(TripStatus::Archived),
            _ => Err(format!("Invalid trip status: {s}")),
        }
    }
}

impl TripStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Active => "active",
            TripStatus::Archived => "archived",
        }
    }
}

/// What the planning session covers: a flight, a hotel stay, or both.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    /// Flight redemption only
    Flight,

    /// Hotel redemption only
    Hotel,

    /// Flight and hotel
    #[default]
    Both,
}

impl FromStr for TripType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flight" => Ok(TripType::Flight),
            "hotel" => Ok(TripType::Hotel),
            "both" => Ok(TripType::Both),
            _ => Err(format!("Invalid trip type: {s}")),
        }
    }
}

impl TripType {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TripType::Flight => "flight",
            TripType::Hotel => "hotel",
            TripType::Both => "both",
        }
    }

    /// Human-readable label for display output.
    pub fn label(&self) -> &'static str {
        match self {
            TripType::Flight => "Flight only",
            TripType::Hotel => "Hotel only",
            TripType::Both => "Flight + Hotel",
        }
    }
}

/// Preferred cabin class for flight redemptions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CabinClass {
    /// Economy cabin
    Economy,

    /// Premium economy cabin
    Premium,

    /// Business cabin
    Business,
}

impl FromStr for CabinClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "economy" => Ok(CabinClass::Economy),
            "premium" | "premium_economy" => Ok(CabinClass::Premium),
            "business" => Ok(CabinClass::Business),
            _ => Err(format!("Invalid cabin class: {s}")),
        }
    }
}

impl CabinClass {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CabinClass::Economy => "economy",
            CabinClass::Premium => "premium",
            CabinClass::Business => "business",
        }
    }

    /// Human-readable label for display output.
    pub fn label(&self) -> &'static str {
        match self {
            CabinClass::Economy => "Economy",
            CabinClass::Premium => "Premium Economy",
            CabinClass::Business => "Business",
        }
    }
}
