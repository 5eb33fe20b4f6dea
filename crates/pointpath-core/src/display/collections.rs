//! Collection wrapper types for displaying groups of domain objects.
//!
//! Newtype wrappers that format collections of domain objects with consistent
//! structure and graceful empty collection handling.

use std::{fmt, ops::Index};

use crate::models::{FlightOption, HotelOption, Trip};

macro_rules! collection_wrapper {
    ($(#[$doc:meta])* $name:ident, $item:ty, $empty:literal) => {
        $(#[$doc])*
        pub struct $name(pub Vec<$item>);

        impl $name {
            /// Check if the collection is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Get the number of items in the collection.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Get a reference to the item at the given index.
            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            /// Get an iterator over the items.
            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl Index<usize> for $name {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<Self::Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.0.is_empty() {
                    writeln!(f, $empty)
                } else {
                    for item in &self.0 {
                        write!(f, "{}", item)?;
                        writeln!(f)?;
                    }
                    Ok(())
                }
            }
        }
    };
}

collection_wrapper!(
    /// Newtype wrapper for displaying collections of trips.
    ///
    /// Each trip renders with its own Display format; empty collections
    /// produce a friendly placeholder instead of nothing.
    Trips,
    Trip,
    "No trips found."
);

collection_wrapper!(
    /// Newtype wrapper for displaying flight redemption option catalogs.
    FlightOptions,
    FlightOption,
    "No flight options available."
);

collection_wrapper!(
    /// Newtype wrapper for displaying hotel redemption option catalogs.
    HotelOptions,
    HotelOption,
    "No hotel options available."
);

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_flight() -> FlightOption {
        FlightOption {
            id: "aeroplan-direct".to_string(),
            title: "Aeroplan Direct".to_string(),
            points: 45_000,
            fees: Some(230),
            reason: "Best availability on this route".to_string(),
            recommended: true,
        }
    }

    #[test]
    fn test_flight_options_display() {
        let options = FlightOptions(vec![sample_flight()]);
        let output = format!("{options}");
        assert!(output.contains("Aeroplan Direct"));
        assert!(output.contains("45,000"));
        assert!(output.contains("(recommended)"));

        let empty = FlightOptions(vec![]);
        assert_eq!(format!("{empty}"), "No flight options available.\n");
    }

    #[test]
    fn test_hotel_options_display_empty() {
        let empty = HotelOptions(vec![]);
        assert_eq!(format!("{empty}"), "No hotel options available.\n");
    }

    #[test]
    fn test_trips_display_empty() {
        let empty = Trips(vec![]);
        assert_eq!(format!("{empty}"), "No trips found.\n");
    }

    #[test]
    fn test_flight_options_indexing() {
        let options = FlightOptions(vec![sample_flight()]);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].id, "aeroplan-direct");
        assert!(options.get(1).is_none());
    }
}
