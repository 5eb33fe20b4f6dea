//! Core library for the PointPath trip planning application.
//!
//! This crate provides the business logic for planning award travel with
//! loyalty points: trip sessions, the catalog of redemption options, the
//! roadmap synthesizer that turns selections into ordered booking
//! instructions, plus the database layer and error handling behind them.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for
//!   direct markdown formatting
//! - **Display Wrappers** ([`display`]): Collection, result, and export
//!   formatting, including the plain-text roadmap export
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use pointpath_core::{params::CreateTrip, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let trip = planner
//!     .create_trip(&CreateTrip {
//!         destination: "LHR".to_string(),
//!         depart_date: "2025-06-01".to_string(),
//!         return_date: Some("2025-06-08".to_string()),
//!         travelers: 2,
//!         points_programs: vec!["Aeroplan".to_string()],
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("Created trip: {trip}");
//!
//! // Derive the booking roadmap from the current selections
//! let roadmap = planner
//!     .roadmap(&pointpath_core::params::Id { id: trip.id })
//!     .await?;
//! println!("{roadmap}");
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod programs;
pub mod roadmap;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, FlightOptions, HotelOptions, OperationStatus, Points, RoadmapText,
    SelectResult, Trips,
};
pub use error::{Result, TripError};
pub use models::{
    CabinClass, FlightOption, HotelOption, Roadmap, RoadmapStep, Trip, TripFilter, TripStatus,
    TripSummary, TripType,
};
pub use params::{CreateTrip, DeleteTrip, Id, ListTrips, SelectOption};
pub use planner::{Planner, PlannerBuilder};
pub use roadmap::synthesize;
