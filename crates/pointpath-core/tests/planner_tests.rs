use pointpath_core::{
    params::{DeleteTrip, Id, ListTrips, SelectOption},
    TripError, TripStatus,
};

mod common;

use common::{create_test_planner, sample_create_params};

#[tokio::test]
async fn test_complete_trip_workflow() {
    let (_temp_dir, planner) = create_test_planner().await;

    // Create a trip
    let trip = planner
        .create_trip(&sample_create_params())
        .await
        .expect("Failed to create trip");
    assert_eq!(trip.origin, "YYZ");
    assert_eq!(trip.destination, "LHR");
    assert_eq!(trip.nights(), 7);
    assert_eq!(trip.status, TripStatus::Active);
    assert!(trip.selected_flight.is_none());
    assert!(trip.selected_hotel.is_none());

    // Browse options
    let flights = planner
        .flight_options(&Id { id: trip.id })
        .await
        .expect("Failed to list flight options");
    assert_eq!(flights.len(), 4);

    let hotels = planner
        .hotel_options(&Id { id: trip.id })
        .await
        .expect("Failed to list hotel options");
    assert_eq!(hotels[0].nights, 7);
    assert_eq!(hotels[0].total_points, 25_000 * 7);

    // Select a flight and a hotel
    let flight = planner
        .select_flight(&SelectOption {
            trip_id: trip.id,
            option_id: "1".to_string(),
        })
        .await
        .expect("Failed to select flight");
    assert_eq!(flight.title, "Aeroplan Direct");

    let hotel = planner
        .select_hotel(&SelectOption {
            trip_id: trip.id,
            option_id: "1".to_string(),
        })
        .await
        .expect("Failed to select hotel");
    assert_eq!(hotel.total_points, 175_000);

    // Selections persist on the stored trip
    let loaded = planner
        .require_trip(&Id { id: trip.id })
        .await
        .expect("Failed to reload trip");
    assert_eq!(
        loaded.selected_flight.as_ref().map(|f| f.title.as_str()),
        Some("Aeroplan Direct")
    );
    assert_eq!(
        loaded.selected_hotel.as_ref().map(|h| h.total_points),
        Some(175_000)
    );

    // Roadmap reflects both selections
    let roadmap = planner
        .roadmap(&Id { id: trip.id })
        .await
        .expect("Failed to synthesize roadmap");
    assert_eq!(roadmap.total_points, 45_000 + 175_000);
    assert_eq!(roadmap.total_fees, 230);
    assert_eq!(
        roadmap.steps.last().map(|s| s.instruction.as_str()),
        Some("Confirm all bookings and save confirmation numbers")
    );
    assert!(roadmap.backup_option.is_some());
}

#[tokio::test]
async fn test_reselection_replaces_previous_choice() {
    let (_temp_dir, planner) = create_test_planner().await;

    let trip = planner
        .create_trip(&sample_create_params())
        .await
        .expect("Failed to create trip");

    for option_id in ["1", "2"] {
        planner
            .select_flight(&SelectOption {
                trip_id: trip.id,
                option_id: option_id.to_string(),
            })
            .await
            .expect("Failed to select flight");
    }

    let loaded = planner
        .require_trip(&Id { id: trip.id })
        .await
        .expect("Failed to reload trip");
    let selected = loaded.selected_flight.expect("flight should be selected");
    assert_eq!(selected.id, "2");
    assert_eq!(selected.title, "Amex → Flying Blue");
}

#[tokio::test]
async fn test_reset_selections_clears_both_slots() {
    let (_temp_dir, planner) = create_test_planner().await;

    let trip = planner
        .create_trip(&sample_create_params())
        .await
        .expect("Failed to create trip");

    planner
        .select_flight(&SelectOption {
            trip_id: trip.id,
            option_id: "1".to_string(),
        })
        .await
        .expect("Failed to select flight");
    planner
        .select_hotel(&SelectOption {
            trip_id: trip.id,
            option_id: "2".to_string(),
        })
        .await
        .expect("Failed to select hotel");

    let reset = planner
        .reset_selections(&Id { id: trip.id })
        .await
        .expect("Failed to reset selections");
    assert!(reset.selected_flight.is_none());
    assert!(reset.selected_hotel.is_none());

    // The roadmap collapses back to the confirmation step
    let roadmap = planner
        .roadmap(&Id { id: trip.id })
        .await
        .expect("Failed to synthesize roadmap");
    assert_eq!(roadmap.steps.len(), 1);
    assert_eq!(roadmap.total_points, 0);
}

#[tokio::test]
async fn test_archive_and_unarchive_round_trip() {
    let (_temp_dir, planner) = create_test_planner().await;

    let trip = planner
        .create_trip(&sample_create_params())
        .await
        .expect("Failed to create trip");

    let archived = planner
        .archive_trip(&Id { id: trip.id })
        .await
        .expect("Failed to archive trip")
        .expect("trip should exist");
    assert_eq!(archived.status, TripStatus::Archived);

    // Archived trips drop out of the default listing
    let active = planner
        .list_trips_filtered(&ListTrips::default())
        .await
        .expect("Failed to list trips");
    assert!(active.is_empty());

    let archived_list = planner
        .list_trips_filtered(&ListTrips {
            archived: true,
            destination: None,
        })
        .await
        .expect("Failed to list archived trips");
    assert_eq!(archived_list.len(), 1);

    let restored = planner
        .unarchive_trip(&Id { id: trip.id })
        .await
        .expect("Failed to unarchive trip")
        .expect("trip should exist");
    assert_eq!(restored.status, TripStatus::Active);
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let (_temp_dir, planner) = create_test_planner().await;

    let trip = planner
        .create_trip(&sample_create_params())
        .await
        .expect("Failed to create trip");

    let refused = planner
        .delete_trip(&DeleteTrip {
            id: trip.id,
            confirmed: false,
        })
        .await;
    assert!(matches!(
        refused,
        Err(TripError::InvalidInput { ref field, .. }) if field == "confirmed"
    ));

    let deleted = planner
        .delete_trip(&DeleteTrip {
            id: trip.id,
            confirmed: true,
        })
        .await
        .expect("Failed to delete trip")
        .expect("trip should have existed");
    assert_eq!(deleted.id, trip.id);

    let gone = planner
        .get_trip(&Id { id: trip.id })
        .await
        .expect("Failed to query trip");
    assert!(gone.is_none());
}

#[tokio::test]
async fn test_operations_on_missing_trip_fail_with_not_found() {
    let (_temp_dir, planner) = create_test_planner().await;

    let missing = Id { id: 404 };

    assert!(matches!(
        planner.flight_options(&missing).await,
        Err(TripError::TripNotFound { id: 404 })
    ));
    assert!(matches!(
        planner.roadmap(&missing).await,
        Err(TripError::TripNotFound { id: 404 })
    ));
    assert!(matches!(
        planner.reset_selections(&missing).await,
        Err(TripError::TripNotFound { id: 404 })
    ));
}

#[tokio::test]
async fn test_trip_type_gates_catalogs_and_selection() {
    let (_temp_dir, planner) = create_test_planner().await;

    let mut params = sample_create_params();
    params.trip_type = Some("hotel".to_string());
    let trip = planner
        .create_trip(&params)
        .await
        .expect("Failed to create trip");

    assert!(matches!(
        planner.flight_options(&Id { id: trip.id }).await,
        Err(TripError::InvalidInput { ref field, .. }) if field == "trip_type"
    ));
    assert!(matches!(
        planner
            .select_flight(&SelectOption {
                trip_id: trip.id,
                option_id: "1".to_string(),
            })
            .await,
        Err(TripError::InvalidInput { .. })
    ));

    // Hotel side still works
    let hotels = planner
        .hotel_options(&Id { id: trip.id })
        .await
        .expect("Failed to list hotel options");
    assert_eq!(hotels.len(), 4);
}

#[tokio::test]
async fn test_unknown_option_id_is_rejected() {
    let (_temp_dir, planner) = create_test_planner().await;

    let trip = planner
        .create_trip(&sample_create_params())
        .await
        .expect("Failed to create trip");

    let result = planner
        .select_flight(&SelectOption {
            trip_id: trip.id,
            option_id: "99".to_string(),
        })
        .await;
    assert!(matches!(
        result,
        Err(TripError::OptionNotFound { ref id }) if id == "99"
    ));
}

#[tokio::test]
async fn test_cash_hotel_contributes_nothing_to_roadmap() {
    let (_temp_dir, planner) = create_test_planner().await;

    let trip = planner
        .create_trip(&sample_create_params())
        .await
        .expect("Failed to create trip");

    planner
        .select_hotel(&SelectOption {
            trip_id: trip.id,
            option_id: "4".to_string(),
        })
        .await
        .expect("Failed to select cash hotel");

    let roadmap = planner
        .roadmap(&Id { id: trip.id })
        .await
        .expect("Failed to synthesize roadmap");
    assert_eq!(roadmap.steps.len(), 1);
    assert_eq!(roadmap.total_points, 0);
}

#[tokio::test]
async fn test_destination_filter_in_listing() {
    let (_temp_dir, planner) = create_test_planner().await;

    planner
        .create_trip(&sample_create_params())
        .await
        .expect("Failed to create trip");

    let mut tokyo = sample_create_params();
    tokyo.destination = "HND".to_string();
    planner
        .create_trip(&tokyo)
        .await
        .expect("Failed to create trip");

    let matched = planner
        .list_trips_filtered(&ListTrips {
            archived: false,
            destination: Some("LH".to_string()),
        })
        .await
        .expect("Failed to list trips");
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].destination, "LHR");
}
