//! Data models for trips, redemption options, and roadmaps.
//!
//! This module contains the core domain models for the PointPath planning
//! system. Display implementations live in [`crate::display::models`] to keep
//! data structures and presentation logic separate.
//!
//! A [`Trip`] is the unit of a planning session: the parameters entered up
//! front plus the [`FlightOption`] / [`HotelOption`] selections made along
//! the way. A [`Roadmap`] is derived from those three inputs on demand and
//! never stored.

pub mod filters;
pub mod option;
pub mod roadmap;
pub mod status;
pub mod trip;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use filters::TripFilter;
pub use option::{FlightOption, HotelOption};
pub use roadmap::{Roadmap, RoadmapStep, TripSummary};
pub use status::{CabinClass, TripStatus, TripType};
pub use trip::Trip;
