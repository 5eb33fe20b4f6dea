//! Loyalty program recognition for redemption option titles.
//!
//! Catalog titles encode the programs involved in a redemption, e.g.
//! `"Amex → Flying Blue"` or `"Aeroplan Direct"`. The roadmap synthesizer
//! selects its step templates from the explicit enums defined here rather
//! than matching strings inline.
//!
//! Detection scans a title against every known token and returns all
//! matches in declaration order. A title naming two programs (such as
//! `"Amex → Aeroplan"`) therefore yields the step blocks for both; this is
//! intentional and matched by tests.

use serde::{Deserialize, Serialize};

/// Programs recognized in flight option titles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FlightProgram {
    /// American Express Membership Rewards, a transferable currency
    MembershipRewards,

    /// Air Canada Aeroplan
    Aeroplan,

    /// RBC Avion, a bank rewards currency
    Avion,
}

impl FlightProgram {
    const ALL: [FlightProgram; 3] = [
        FlightProgram::MembershipRewards,
        FlightProgram::Aeroplan,
        FlightProgram::Avion,
    ];

    /// The title fragment that marks this program (case-sensitive).
    pub fn token(&self) -> &'static str {
        match self {
            FlightProgram::MembershipRewards => "Amex",
            FlightProgram::Aeroplan => "Aeroplan",
            FlightProgram::Avion => "Avion",
        }
    }

    /// All programs whose token appears in `title`, in declaration order.
    pub fn detect(title: &str) -> Vec<FlightProgram> {
        Self::ALL
            .into_iter()
            .filter(|program| title.contains(program.token()))
            .collect()
    }
}

/// Programs recognized in hotel option titles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HotelProgram {
    /// Marriott Bonvoy
    MarriottBonvoy,

    /// Hilton Honors
    HiltonHonors,

    /// Hotel bookings paid through Aeroplan
    AeroplanHotels,
}

impl HotelProgram {
    const ALL: [HotelProgram; 3] = [
        HotelProgram::MarriottBonvoy,
        HotelProgram::HiltonHonors,
        HotelProgram::AeroplanHotels,
    ];

    /// The title fragment that marks this program (case-sensitive).
    pub fn token(&self) -> &'static str {
        match self {
            HotelProgram::MarriottBonvoy => "Marriott",
            HotelProgram::HiltonHonors => "Hilton",
            HotelProgram::AeroplanHotels => "Aeroplan",
        }
    }

    /// All programs whose token appears in `title`, in declaration order.
    pub fn detect(title: &str) -> Vec<HotelProgram> {
        Self::ALL
            .into_iter()
            .filter(|program| title.contains(program.token()))
            .collect()
    }
}

/// The destination program encoded after the arrow in a transfer title.
///
/// `"Amex → Flying Blue"` yields `Some("Flying Blue")`. Titles without an
/// arrow, or with nothing after it, yield `None`.
pub fn transfer_target(title: &str) -> Option<&str> {
    let (_, target) = title.split_once('→')?;
    let target = target.trim();
    (!target.is_empty()).then_some(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_single_flight_program() {
        assert_eq!(
            FlightProgram::detect("Avion → Avios"),
            vec![FlightProgram::Avion]
        );
    }

    #[test]
    fn test_detect_all_matching_flight_programs() {
        // Multiple tokens in one title all fire.
        assert_eq!(
            FlightProgram::detect("Amex → Aeroplan"),
            vec![FlightProgram::MembershipRewards, FlightProgram::Aeroplan]
        );
    }

    #[test]
    fn test_detect_is_case_sensitive() {
        assert!(FlightProgram::detect("amex direct").is_empty());
    }

    #[test]
    fn test_detect_hotel_programs() {
        assert_eq!(
            HotelProgram::detect("Amex → Marriott Bonvoy"),
            vec![HotelProgram::MarriottBonvoy]
        );
        assert_eq!(
            HotelProgram::detect("Aeroplan Hotel Rewards"),
            vec![HotelProgram::AeroplanHotels]
        );
        assert!(HotelProgram::detect("Pay Cash").is_empty());
    }

    #[test]
    fn test_transfer_target() {
        assert_eq!(transfer_target("Amex → Flying Blue"), Some("Flying Blue"));
        assert_eq!(transfer_target("Amex → ANA Mileage Club"), Some("ANA Mileage Club"));
        assert_eq!(transfer_target("Aeroplan Direct"), None);
        assert_eq!(transfer_target("Amex → "), None);
    }
}
