//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Wrapper type for displaying operation confirmation messages.
///
/// Used for operations whose result is a yes/no outcome rather than a
/// resource: archive, unarchive, reset, and refused deletions.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let archived = OperationStatus::success("Archived trip 3".to_string());
        assert_eq!(format!("{archived}"), "Success: Archived trip 3\n");

        let refused = OperationStatus::failure("Deletion requires confirmation".to_string());
        assert!(format!("{refused}").starts_with("Error:"));
    }
}
