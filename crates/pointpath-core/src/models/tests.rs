//! Unit tests for model types.

use std::str::FromStr;

use jiff::civil::date;

use super::*;

fn sample_trip() -> Trip {
    Trip {
        id: 1,
        origin: "YYZ".to_string(),
        destination: "LHR".to_string(),
        depart_date: date(2025, 6, 1),
        return_date: Some(date(2025, 6, 8)),
        travelers: 2,
        trip_type: TripType::Both,
        points_programs: vec!["Amex MR (Canada)".to_string()],
        cabin_preference: Some(CabinClass::Business),
        status: TripStatus::Active,
        created_at: jiff::Timestamp::UNIX_EPOCH,
        updated_at: jiff::Timestamp::UNIX_EPOCH,
        selected_flight: None,
        selected_hotel: None,
    }
}

#[test]
fn test_trip_status_round_trip() {
    assert_eq!(TripStatus::from_str("active"), Ok(TripStatus::Active));
    assert_eq!(TripStatus::from_str("Archived"), Ok(TripStatus::Archived));
    assert!(TripStatus::from_str("deleted").is_err());
    assert_eq!(TripStatus::Archived.as_str(), "archived");
}

#[test]
fn test_trip_type_parsing() {
    assert_eq!(TripType::from_str("flight"), Ok(TripType::Flight));
    assert_eq!(TripType::from_str("hotel"), Ok(TripType::Hotel));
    assert_eq!(TripType::from_str("both"), Ok(TripType::Both));
    assert!(TripType::from_str("cruise").is_err());
    assert_eq!(TripType::default(), TripType::Both);
}

#[test]
fn test_cabin_class_parsing() {
    assert_eq!(CabinClass::from_str("economy"), Ok(CabinClass::Economy));
    assert_eq!(CabinClass::from_str("premium"), Ok(CabinClass::Premium));
    assert_eq!(
        CabinClass::from_str("premium_economy"),
        Ok(CabinClass::Premium)
    );
    assert_eq!(CabinClass::from_str("business"), Ok(CabinClass::Business));
    assert!(CabinClass::from_str("first").is_err());
    assert_eq!(CabinClass::Premium.label(), "Premium Economy");
}

#[test]
fn test_trip_nights_from_dates() {
    let trip = sample_trip();
    assert_eq!(trip.nights(), 7);
}

#[test]
fn test_trip_nights_defaults_without_return() {
    let mut trip = sample_trip();
    trip.return_date = None;
    assert_eq!(trip.nights(), 3);
}

#[test]
fn test_trip_nights_clamped_to_one() {
    let mut trip = sample_trip();
    // Same-day return still counts as one night.
    trip.return_date = Some(trip.depart_date);
    assert_eq!(trip.nights(), 1);
}

#[test]
fn test_hotel_option_cash_booking() {
    let cash = HotelOption {
        id: "4".to_string(),
        title: "Pay Cash".to_string(),
        points_per_night: 0,
        total_points: 0,
        nights: 3,
        reason: "Sometimes cash is better value".to_string(),
        recommended: false,
    };
    assert!(cash.is_cash_booking());

    let points = HotelOption {
        total_points: 75_000,
        points_per_night: 25_000,
        ..cash
    };
    assert!(!points.is_cash_booking());
}

#[test]
fn test_trip_serialization_round_trip() {
    let trip = sample_trip();
    let json = serde_json::to_string(&trip).expect("serialize trip");
    let back: Trip = serde_json::from_str(&json).expect("deserialize trip");
    assert_eq!(trip, back);
}
