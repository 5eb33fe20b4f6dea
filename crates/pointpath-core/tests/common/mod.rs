use pointpath_core::PlannerBuilder;
use tempfile::TempDir;

/// Helper function to create a test planner backed by a temp database
pub async fn create_test_planner() -> (TempDir, pointpath_core::Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Creation parameters for a basic one-week YYZ to LHR trip
pub fn sample_create_params() -> pointpath_core::params::CreateTrip {
    pointpath_core::params::CreateTrip {
        origin: "YYZ".to_string(),
        destination: "LHR".to_string(),
        depart_date: "2025-06-01".to_string(),
        return_date: Some("2025-06-08".to_string()),
        travelers: 2,
        trip_type: Some("both".to_string()),
        points_programs: vec!["Aeroplan".to_string(), "Amex MR (Canada)".to_string()],
        cabin_preference: Some("business".to_string()),
    }
}
