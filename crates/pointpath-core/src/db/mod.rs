//! Database operations and SQLite management for trips and selections.
//!
//! Low-level database operations for the PointPath planning system. Handles
//! SQLite connections, schema management, and provides query interfaces for
//! trip sessions and their redemption selections.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod selection_queries;
pub mod trip_queries;

pub use selection_queries::SelectionKind;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
