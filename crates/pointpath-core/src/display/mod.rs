//! Display formatting functions and result types.
//!
//! This module combines direct Display implementations on domain models with
//! newtype wrappers for collections, operation results, and export formats.
//! Business logic stays in the models; everything the CLI or MCP server prints
//! goes through the types here.
//!
//! ```text
//! ┌──────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │  Domain Models   │    │ Display Wrappers │    │   Formatted     │
//! │ (Trip, Roadmap)  │───▶│ & Result Types   │───▶│    Output       │
//! │                  │    │                  │    │ (Terminal/MCP)  │
//! └──────────────────┘    └──────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers (Trips, FlightOptions, HotelOptions)
//! - [`results`]: Operation result types (CreateResult, SelectResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`points`]: Thousands-separated point amount formatting
//! - [`datetime`]: Date/time formatting utilities
//! - [`export`]: Plain-text roadmap export ([`RoadmapText`])
//! - [`models`]: Display implementations for domain models
//!
//! Formatters other than [`RoadmapText`] produce markdown for rich terminal
//! display; `RoadmapText` produces plain text meant to be pasted elsewhere.
//!
//! ## Usage
//!
//! ```rust
//! use pointpath_core::display::{OperationStatus, Points};
//!
//! assert_eq!(format!("{}", Points(45_000)), "45,000");
//!
//! let status = OperationStatus::success("Trip archived".to_string());
//! assert!(format!("{status}").contains("Success:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod export;
pub mod models;
pub mod points;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{FlightOptions, HotelOptions, Trips};
pub use datetime::LocalDateTime;
pub use export::RoadmapText;
pub use points::Points;
pub use results::{CreateResult, DeleteResult, SelectResult};
pub use status::OperationStatus;
