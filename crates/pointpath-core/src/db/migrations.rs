//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result, TripError};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply migrations for databases created before the current schema.
    fn apply_migrations(&self) -> Result<()> {
        // cabin_preference was added after the first release
        let has_cabin_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('trips') WHERE name = 'cabin_preference'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_cabin_column {
            self.connection
                .execute("ALTER TABLE trips ADD COLUMN cabin_preference TEXT", [])
                .map_err(|e| {
                    TripError::database_error(
                        "Failed to add cabin_preference column to trips table",
                        e,
                    )
                })?;
        }

        Ok(())
    }
}
