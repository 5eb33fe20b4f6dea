//! Redemption option catalogs.
//!
//! The current build serves a static catalog in place of a live award-search
//! backend; the planner layer treats these as the result of an option fetch,
//! so swapping in a real service later only changes this module.

use crate::models::{FlightOption, HotelOption};

/// Flight redemption options for a trip.
pub fn flight_options() -> Vec<FlightOption> {
    vec![
        FlightOption {
            id: "1".to_string(),
            title: "Aeroplan Direct".to_string(),
            points: 45_000,
            fees: Some(230),
            reason: "Best value for Star Alliance routing with no transfer required".to_string(),
            recommended: true,
        },
        FlightOption {
            id: "2".to_string(),
            title: "Amex → Flying Blue".to_string(),
            points: 52_000,
            fees: Some(180),
            reason: "Lower fees via Air France, good if you have excess MR points".to_string(),
            recommended: false,
        },
        FlightOption {
            id: "3".to_string(),
            title: "Avion → Avios".to_string(),
            points: 48_000,
            fees: Some(310),
            reason: "Unlock British Airways routing via Avios transfer".to_string(),
            recommended: false,
        },
        FlightOption {
            id: "4".to_string(),
            title: "Amex → ANA Mileage Club".to_string(),
            points: 55_000,
            fees: Some(150),
            reason: "Premium carrier with low fuel surcharges".to_string(),
            recommended: false,
        },
    ]
}

/// Hotel redemption options for a stay of the given length.
///
/// Total points scale with the night count; the cash option stays at zero.
pub fn hotel_options(nights: u32) -> Vec<HotelOption> {
    let priced = |id: &str, title: &str, per_night: u64, reason: &str, recommended: bool| {
        HotelOption {
            id: id.to_string(),
            title: title.to_string(),
            points_per_night: per_night,
            total_points: per_night * u64::from(nights),
            nights,
            reason: reason.to_string(),
            recommended,
        }
    };

    vec![
        priced(
            "1",
            "Amex → Marriott Bonvoy",
            25_000,
            "Best value transfer ratio for category 5+ properties",
            true,
        ),
        priced(
            "2",
            "Amex → Hilton Honors",
            35_000,
            "Higher points but includes breakfast at most properties",
            false,
        ),
        priced(
            "3",
            "Aeroplan Hotel Rewards",
            18_000,
            "Use existing Aeroplan without transfer",
            false,
        ),
        priced(
            "4",
            "Pay Cash",
            0,
            "Sometimes cash is better value, especially with promotions",
            false,
        ),
    ]
}

/// Look up a flight option by catalog ID.
pub fn find_flight(id: &str) -> Option<FlightOption> {
    flight_options().into_iter().find(|option| option.id == id)
}

/// Look up a hotel option by catalog ID, priced for the given night count.
pub fn find_hotel(id: &str, nights: u32) -> Option<HotelOption> {
    hotel_options(nights)
        .into_iter()
        .find(|option| option.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_catalog_has_one_recommendation() {
        let options = flight_options();
        assert_eq!(options.len(), 4);
        assert_eq!(options.iter().filter(|o| o.recommended).count(), 1);
    }

    #[test]
    fn test_hotel_totals_scale_with_nights() {
        let options = hotel_options(5);
        let marriott = &options[0];
        assert_eq!(marriott.points_per_night, 25_000);
        assert_eq!(marriott.total_points, 125_000);
        assert_eq!(marriott.nights, 5);
    }

    #[test]
    fn test_cash_option_stays_at_zero() {
        let options = hotel_options(7);
        let cash = options.last().expect("cash option present");
        assert_eq!(cash.total_points, 0);
        assert!(cash.is_cash_booking());
    }

    #[test]
    fn test_find_by_id() {
        assert_eq!(find_flight("2").map(|o| o.title), Some("Amex → Flying Blue".to_string()));
        assert!(find_flight("99").is_none());
        assert_eq!(find_hotel("3", 3).map(|o| o.total_points), Some(54_000));
    }
}
