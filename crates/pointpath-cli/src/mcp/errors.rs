//! Error handling utilities for MCP server

use pointpath_core::TripError;
use rmcp::ErrorData;

/// Helper to convert planner errors to MCP errors
///
/// Caller mistakes (bad parameters, unknown IDs) map to invalid_params so the
/// client can correct them; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &TripError) -> ErrorData {
    match error {
        TripError::InvalidInput { .. }
        | TripError::TripNotFound { .. }
        | TripError::OptionNotFound { .. } => {
            ErrorData::invalid_params(format!("{}: {}", message, error), None)
        }
        _ => ErrorData::internal_error(format!("{}: {}", message, error), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_invalid_params() {
        let error = TripError::TripNotFound { id: 42 };
        let data = to_mcp_error("Failed to get trip", &error);
        assert_eq!(data.code, ErrorData::invalid_params("", None).code);
        assert!(data.message.contains("42"));
    }

    #[test]
    fn test_configuration_maps_to_internal_error() {
        let error = TripError::Configuration {
            message: "boom".to_string(),
        };
        let data = to_mcp_error("Failed", &error);
        assert_eq!(data.code, ErrorData::internal_error("", None).code);
    }
}
