//! High-level planner API for managing trips, selections, and roadmaps.
//!
//! [`Planner`] is the central coordinator between the application layers and
//! the database. It validates parameters, runs blocking SQLite work on the
//! tokio blocking pool, and hands results back as domain models or display
//! wrappers.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │   (handlers)    │───▶│ (trip_ops,      │───▶│   (via db/)     │
//! │                 │    │  option_ops)    │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     User Interface      Business Logic         Data Persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances
//! - [`trip_ops`]: Trip session lifecycle (create, list, archive, delete)
//! - [`option_ops`]: Catalog browsing, selections, and roadmap synthesis
//! - [`handlers`]: Operations returning formatted display wrappers
//!
//! # Usage
//!
//! ```rust,no_run
//! use pointpath_core::{params::CreateTrip, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new().build().await?;
//!
//! let trip = planner
//!     .create_trip(&CreateTrip {
//!         destination: "LHR".to_string(),
//!         depart_date: "2025-06-01".to_string(),
//!         points_programs: vec!["Aeroplan".to_string()],
//!         travelers: 1,
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let roadmap = planner.roadmap(&pointpath_core::params::Id { id: trip.id }).await?;
//! println!("{roadmap}");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod builder;
pub mod handlers;
pub mod option_ops;
pub mod trip_ops;

pub use builder::PlannerBuilder;

/// Main planner interface for managing trip sessions.
pub struct Planner {
    pub(crate) db_path: PathBuf,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
