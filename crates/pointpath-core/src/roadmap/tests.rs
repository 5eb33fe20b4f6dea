//! Unit tests for roadmap synthesis.

use jiff::civil::date;

use super::synthesize;
use crate::models::{CabinClass, FlightOption, HotelOption, Trip, TripStatus, TripType};

fn sample_trip() -> Trip {
    Trip {
        id: 1,
        origin: "YYZ".to_string(),
        destination: "LHR".to_string(),
        depart_date: date(2025, 6, 1),
        return_date: None,
        travelers: 1,
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

fn flight(title: &str, points: u64, fees: Option<u64>) -> FlightOption {
    FlightOption {
        id: "f".to_string(),
        title: title.to_string(),
        points,
        fees,
        reason: String::new(),
        recommended: false,
    }
}

fn hotel(title: &str, per_night: u64, nights: u32) -> HotelOption {
    HotelOption {
        id: "h".to_string(),
        title: title.to_string(),
        points_per_night: per_night,
        total_points: per_night * u64::from(nights),
        nights,
        reason: String::new(),
        recommended: false,
    }
}

fn assert_contiguous(roadmap: &crate::models::Roadmap) {
    for (i, step) in roadmap.steps.iter().enumerate() {
        assert_eq!(step.step, i as u32 + 1, "step numbers must be 1..N in order");
    }
}

#[test]
fn test_no_selections_yields_single_confirmation_step() {
    let roadmap = synthesize(Some(&sample_trip()), None, None);

    assert_eq!(roadmap.steps.len(), 1);
    assert_eq!(roadmap.steps[0].step, 1);
    assert_eq!(
        roadmap.steps[0].instruction,
        "Confirm all bookings and save confirmation numbers"
    );
    assert_eq!(roadmap.total_points, 0);
    assert_eq!(roadmap.total_fees, 0);
    assert!(roadmap.backup_option.is_none());
}

#[test]
fn test_amex_transfer_flight_scenario() {
    let trip = sample_trip();
    let flight = flight("Amex → Flying Blue", 52_000, Some(180));
    let roadmap = synthesize(Some(&trip), Some(&flight), None);

    assert_eq!(roadmap.steps.len(), 4);
    assert_eq!(
        roadmap.steps[0].instruction,
        "Log in to your American Express Membership Rewards account"
    );
    assert_eq!(
        roadmap.steps[1].instruction,
        "Transfer 52,000 MR points to Flying Blue"
    );
    assert_eq!(
        roadmap.steps[2].instruction,
        "Search and book your flight from YYZ to LHR"
    );
    assert_eq!(
        roadmap.steps[2].details.as_deref(),
        Some("Look for 2025-06-01. Select the lowest cost option in business.")
    );
    assert_eq!(
        roadmap.steps[3].instruction,
        "Confirm all bookings and save confirmation numbers"
    );
    assert_contiguous(&roadmap);
    assert_eq!(roadmap.total_points, 52_000);
    assert_eq!(roadmap.total_fees, 180);
    assert!(roadmap.backup_option.is_some());
}

#[test]
fn test_all_matching_programs_fire() {
    // "Amex → Aeroplan" names two known programs; both step blocks apply,
    // Amex first, then the Aeroplan login.
    let flight = flight("Amex → Aeroplan", 45_000, None);
    let roadmap = synthesize(Some(&sample_trip()), Some(&flight), None);

    assert_eq!(roadmap.steps.len(), 5);
    assert_eq!(
        roadmap.steps[0].instruction,
        "Log in to your American Express Membership Rewards account"
    );
    assert_eq!(
        roadmap.steps[1].instruction,
        "Transfer 45,000 MR points to Aeroplan"
    );
    assert_eq!(roadmap.steps[2].instruction, "Log in to Aeroplan.com");
    assert!(roadmap.steps[3]
        .instruction
        .starts_with("Search and book your flight"));
    assert_contiguous(&roadmap);
}

#[test]
fn test_avion_transfer_without_target_falls_back() {
    let flight = flight("Avion Direct", 48_000, Some(310));
    let roadmap = synthesize(Some(&sample_trip()), Some(&flight), None);

    assert_eq!(roadmap.steps[0].instruction, "Log in to RBC Avion Rewards");
    assert_eq!(
        roadmap.steps[1].instruction,
        "Transfer Avion points to your airline partner"
    );
}

#[test]
fn test_unrecognized_title_still_gets_search_step() {
    let flight = flight("WestJet Dollars", 30_000, None);
    let roadmap = synthesize(Some(&sample_trip()), Some(&flight), None);

    assert_eq!(roadmap.steps.len(), 2);
    assert!(roadmap.steps[0]
        .instruction
        .starts_with("Search and book your flight"));
}

#[test]
fn test_missing_trip_degrades_to_placeholders() {
    let flight = flight("Aeroplan Direct", 45_000, Some(230));
    let roadmap = synthesize(None, Some(&flight), None);

    let search = &roadmap.steps[1];
    assert_eq!(
        search.instruction,
        "Search and book your flight from origin to destination"
    );
    assert_eq!(
        search.details.as_deref(),
        Some("Look for your departure date. Select the lowest cost option in your preferred cabin.")
    );
    assert_eq!(roadmap.summary.route, "");
    assert_eq!(roadmap.summary.travelers, 0);
}

#[test]
fn test_empty_strings_degrade_like_missing_trip() {
    let mut trip = sample_trip();
    trip.origin = String::new();
    trip.cabin_preference = None;
    let flight = flight("Aeroplan Direct", 45_000, None);
    let roadmap = synthesize(Some(&trip), Some(&flight), None);

    assert_eq!(
        roadmap.steps[1].instruction,
        "Search and book your flight from origin to LHR"
    );
    assert!(roadmap.steps[1]
        .details
        .as_deref()
        .expect("search step has details")
        .ends_with("in your preferred cabin."));
}

#[test]
fn test_hotel_steps_for_marriott() {
    let trip = sample_trip();
    let hotel = hotel("Amex → Marriott Bonvoy", 25_000, 3);
    let roadmap = synthesize(Some(&trip), None, Some(&hotel));

    assert_eq!(roadmap.steps.len(), 3);
    assert_eq!(
        roadmap.steps[0].instruction,
        "Log in to your Marriott Bonvoy account"
    );
    assert_eq!(roadmap.steps[1].instruction, "Search for hotels in LHR");
    assert_eq!(
        roadmap.steps[1].details.as_deref(),
        Some("3 nights starting 2025-06-01")
    );
    assert_eq!(roadmap.total_points, 75_000);
    assert!(roadmap.backup_option.is_none());
}

#[test]
fn test_hilton_steps_include_point_total() {
    let hotel = hotel("Amex → Hilton Honors", 35_000, 3);
    let roadmap = synthesize(Some(&sample_trip()), None, Some(&hotel));

    assert_eq!(roadmap.steps[0].instruction, "Log in to Hilton Honors");
    assert_eq!(
        roadmap.steps[1].instruction,
        "Book 3 nights using 105,000 points"
    );
}

#[test]
fn test_cash_booking_short_circuits_hotel_steps() {
    // Even a title full of program tokens contributes nothing when the
    // stay costs zero points.
    let mut cash = hotel("Marriott Hilton Aeroplan", 0, 3);
    cash.total_points = 0;
    let roadmap = synthesize(Some(&sample_trip()), None, Some(&cash));

    assert_eq!(roadmap.steps.len(), 1);
    assert_eq!(
        roadmap.steps[0].instruction,
        "Confirm all bookings and save confirmation numbers"
    );
    assert_eq!(roadmap.total_points, 0);
}

#[test]
fn test_flight_and_hotel_combined_ordering() {
    let trip = sample_trip();
    let flight = flight("Aeroplan Direct", 45_000, Some(230));
    let hotel = hotel("Aeroplan Hotel Rewards", 18_000, 3);
    let roadmap = synthesize(Some(&trip), Some(&flight), Some(&hotel));

    // Aeroplan login, flight search, hotel booking, confirmation.
    assert_eq!(roadmap.steps.len(), 4);
    assert_eq!(roadmap.steps[0].instruction, "Log in to Aeroplan.com");
    assert!(roadmap.steps[1]
        .instruction
        .starts_with("Search and book your flight"));
    assert_eq!(
        roadmap.steps[2].instruction,
        "Use Aeroplan Hotel Rewards via aeroplan.com"
    );
    assert_contiguous(&roadmap);
    assert_eq!(roadmap.total_points, 45_000 + 54_000);
    assert_eq!(roadmap.total_fees, 230);
}

#[test]
fn test_totals_for_every_presence_combination() {
    let trip = sample_trip();
    let flight = flight("Aeroplan Direct", 45_000, Some(230));
    let hotel = hotel("Amex → Marriott Bonvoy", 25_000, 3);

    let cases = [
        (None, None, 0, 0),
        (Some(&flight), None, 45_000, 230),
        (None, Some(&hotel), 75_000, 0),
        (Some(&flight), Some(&hotel), 120_000, 230),
    ];
    for (f, h, points, fees) in cases {
        let roadmap = synthesize(Some(&trip), f, h);
        assert_eq!(roadmap.total_points, points);
        assert_eq!(roadmap.total_fees, fees);
        assert_contiguous(&roadmap);
        assert!(!roadmap.steps.is_empty());
    }
}

#[test]
fn test_synthesis_is_deterministic() {
    let trip = sample_trip();
    let flight = flight("Amex → Flying Blue", 52_000, Some(180));
    let hotel = hotel("Amex → Hilton Honors", 35_000, 3);

    let first = synthesize(Some(&trip), Some(&flight), Some(&hotel));
    let second = synthesize(Some(&trip), Some(&flight), Some(&hotel));
    assert_eq!(first, second);
}

#[test]
fn test_summary_snapshot() {
    let mut trip = sample_trip();
    trip.return_date = Some(date(2025, 6, 8));
    trip.travelers = 2;
    let roadmap = synthesize(Some(&trip), None, None);

    assert_eq!(roadmap.summary.route, "YYZ → LHR");
    assert_eq!(roadmap.summary.dates, "2025-06-01 - 2025-06-08");
    assert_eq!(roadmap.summary.travelers, 2);
}
