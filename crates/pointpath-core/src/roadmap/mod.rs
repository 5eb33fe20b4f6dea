//! Roadmap synthesis: turning selections into booking instructions.
//!
//! [`synthesize`] is a pure function of the trip parameters and the two
//! optional selections. It never fails and never touches the database:
//! missing inputs degrade to placeholder wording so the caller can always
//! render something. The planner recomputes the roadmap from scratch on
//! every request.

use crate::display::Points;
use crate::models::{FlightOption, HotelOption, Roadmap, RoadmapStep, Trip, TripSummary};
use crate::programs::{transfer_target, FlightProgram, HotelProgram};

#[cfg(test)]
mod tests;

/// Fallback suggestion attached to roadmaps that include a flight.
const BACKUP_OPTION: &str = "If your preferred flight is unavailable, try booking through \
     Aeroplan using flexible dates. You can also check partner availability on United.com \
     before transferring points.";

/// Fallback wording when a transfer title has no destination segment.
const GENERIC_PARTNER: &str = "your airline partner";

/// Builds the step-by-step booking roadmap for the given selections.
///
/// Steps are appended in a fixed order: flight program steps (every
/// recognized program in the title contributes its block), the flight
/// search step, hotel program steps (skipped entirely for cash bookings),
/// and a single closing confirmation step. The confirmation step is always
/// present, so the result is never empty. Steps are numbered 1..N in append
/// order with no gaps.
pub fn synthesize(
    trip: Option<&Trip>,
    flight: Option<&FlightOption>,
    hotel: Option<&HotelOption>,
) -> Roadmap {
    let mut steps: Vec<(String, Option<String>)> = Vec::new();

    if let Some(flight) = flight {
        push_flight_steps(&mut steps, trip, flight);
    }

    if let Some(hotel) = hotel {
        if !hotel.is_cash_booking() {
            push_hotel_steps(&mut steps, trip, hotel);
        }
    }

    steps.push((
        "Confirm all bookings and save confirmation numbers".to_string(),
        Some("Screenshot or save all confirmation emails in one place".to_string()),
    ));

    let total_points = flight.map_or(0, |f| f.points) + hotel.map_or(0, |h| h.total_points);
    let total_fees = flight.and_then(|f| f.fees).unwrap_or(0);

    Roadmap {
        summary: summarize(trip),
        steps: steps
            .into_iter()
            .zip(1u32..)
            .map(|((instruction, details), step)| RoadmapStep {
                step,
                instruction,
                details,
            })
            .collect(),
        total_points,
        total_fees,
        backup_option: flight.map(|_| BACKUP_OPTION.to_string()),
    }
}

fn push_flight_steps(
    steps: &mut Vec<(String, Option<String>)>,
    trip: Option<&Trip>,
    flight: &FlightOption,
) {
    for program in FlightProgram::detect(&flight.title) {
        match program {
            FlightProgram::MembershipRewards => {
                steps.push((
                    "Log in to your American Express Membership Rewards account".to_string(),
                    Some("Go to membershiprewards.ca and navigate to \"Use Points\"".to_string()),
                ));
                steps.push((
                    format!(
                        "Transfer {} MR points to {}",
                        Points(flight.points),
                        transfer_target(&flight.title).unwrap_or(GENERIC_PARTNER)
                    ),
                    Some("Allow 24-48 hours for transfer to complete before booking".to_string()),
                ));
            }
            FlightProgram::Aeroplan => {
                steps.push((
                    "Log in to Aeroplan.com".to_string(),
                    Some("Use your Aeroplan member number".to_string()),
                ));
            }
            FlightProgram::Avion => {
                steps.push((
                    "Log in to RBC Avion Rewards".to_string(),
                    Some("Navigate to \"Transfer Points\"".to_string()),
                ));
                steps.push((
                    format!(
                        "Transfer Avion points to {}",
                        transfer_target(&flight.title).unwrap_or(GENERIC_PARTNER)
                    ),
                    Some("Transfers to Avios typically process within 24 hours".to_string()),
                ));
            }
        }
    }

    let origin = nonempty(trip.map(|t| t.origin.as_str())).unwrap_or("origin");
    let destination = nonempty(trip.map(|t| t.destination.as_str())).unwrap_or("destination");
    let depart = trip.map_or_else(
        || "your departure date".to_string(),
        |t| t.depart_date.to_string(),
    );
    let cabin = trip
        .and_then(|t| t.cabin_preference)
        .map_or("your preferred cabin", |c| c.as_str());

    steps.push((
        format!("Search and book your flight from {origin} to {destination}"),
        Some(format!(
            "Look for {depart}. Select the lowest cost option in {cabin}."
        )),
    ));
}

fn push_hotel_steps(
    steps: &mut Vec<(String, Option<String>)>,
    trip: Option<&Trip>,
    hotel: &HotelOption,
) {
    let destination = nonempty(trip.map(|t| t.destination.as_str())).unwrap_or("your destination");
    let check_in = trip.map_or_else(
        || "your check-in date".to_string(),
        |t| t.depart_date.to_string(),
    );

    for program in HotelProgram::detect(&hotel.title) {
        match program {
            HotelProgram::MarriottBonvoy => {
                steps.push((
                    "Log in to your Marriott Bonvoy account".to_string(),
                    Some("marriott.com - Use Points to book".to_string()),
                ));
                steps.push((
                    format!("Search for hotels in {destination}"),
                    Some(format!("{} nights starting {check_in}", hotel.nights)),
                ));
            }
            HotelProgram::HiltonHonors => {
                steps.push((
                    "Log in to Hilton Honors".to_string(),
                    Some("hilton.com - Use your points balance".to_string()),
                ));
                steps.push((
                    format!(
                        "Book {} nights using {} points",
                        hotel.nights,
                        Points(hotel.total_points)
                    ),
                    Some(
                        "Look for properties with \"Points + Money\" if you want to save points"
                            .to_string(),
                    ),
                ));
            }
            HotelProgram::AeroplanHotels => {
                steps.push((
                    "Use Aeroplan Hotel Rewards via aeroplan.com".to_string(),
                    Some("Search hotels and book using your Aeroplan points".to_string()),
                ));
            }
        }
    }
}

fn summarize(trip: Option<&Trip>) -> TripSummary {
    match trip {
        Some(trip) => TripSummary {
            route: format!("{} → {}", trip.origin, trip.destination),
            dates: match trip.return_date {
                Some(ret) => format!("{} - {}", trip.depart_date, ret),
                None => trip.depart_date.to_string(),
            },
            travelers: trip.travelers,
        },
        None => TripSummary::default(),
    }
}

/// Empty strings degrade to placeholders the same way absent values do.
fn nonempty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
