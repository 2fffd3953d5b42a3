use std::sync::Arc;
use tokio::sync::mpsc;

use kestrel_app::adapters::outbound::{init_noop_logger, InMemoryWorkPlanRepository};
use kestrel_app::application::PlanningService;
use kestrel_app::common::{ApplicationError, DomainError, DomainResult};
use kestrel_app::domains::flight_planning::ports::{FieldBoundarySource, WorkPlanRepository};
use kestrel_app::domains::flight_planning::*;

struct NoBoundarySource;

impl FieldBoundarySource for NoBoundarySource {
    fn load_boundary_geojson(&self, name: &str) -> DomainResult<String> {
        Err(DomainError::InfrastructureError(format!(
            "no boundary {}",
            name
        )))
    }
}

fn planning_input() -> PlanningInput {
    PlanningInput {
        field_extent: FieldExtent::Rectangle {
            width_east_west_meters: 100.0,
            height_north_south_meters: 200.0,
        },
        area_hectares: 2.0,
        application_rate_l_per_ha: 15.0,
        resupply_site: GeoPoint {
            lat: -31.4201,
            lng: -64.1888,
        },
        wind: Wind {
            direction_degrees: 0.0,
            speed_kmh: 5.0,
        },
        track_spacing_meters: 10.0,
        ground_speed_kmh: 54.0,
        battery_endurance_minutes: 12.0,
        tank_capacity_liters: 20.0,
        resupply_duration_minutes: 3.0,
        turn_duration_seconds: 0.0,
        drone_count: 1,
        center_point: None,
    }
}

fn build_service() -> (PlanningService, Arc<InMemoryWorkPlanRepository>) {
    let (sender, mut receiver) = mpsc::channel(64);
    // Drain envelopes so the channel never backs up during a test.
    tokio::spawn(async move { while receiver.recv().await.is_some() {} });

    let repository = Arc::new(InMemoryWorkPlanRepository::new());
    let service = PlanningService::new(
        FlightPlanningCommandActor::new(sender),
        repository.clone(),
        Arc::new(NoBoundarySource),
        init_noop_logger(),
        PlannerTunables::default(),
    );
    (service, repository)
}

#[tokio::test]
async fn test_compute_plan_persists_the_result() {
    let (service, repository) = build_service();

    let plan = service
        .compute_plan("field-1", planning_input())
        .await
        .unwrap();

    let stored = repository.load_plan(&plan.id).unwrap().unwrap();
    assert_eq!(stored, plan);
    assert_eq!(stored.total_flights, 10);
    assert_eq!(stored.total_resupply_stops, 1);
}

#[tokio::test]
async fn test_recompute_replaces_stored_segments_in_place() {
    let (service, repository) = build_service();
    let original = service
        .compute_plan("field-1", planning_input())
        .await
        .unwrap();

    let mut edited = planning_input();
    edited.drone_count = 2;
    let recomputed = service
        .recompute_plan(&original.id, edited)
        .await
        .unwrap();

    assert_eq!(recomputed.id, original.id);
    assert_eq!(recomputed.created_at, original.created_at);

    // Exactly one plan remains stored, carrying the regenerated segments.
    assert_eq!(repository.len(), 1);
    let stored = repository.load_plan(&original.id).unwrap().unwrap();
    assert_eq!(stored.input.drone_count, 2);
    assert!(stored.total_estimated_minutes <= original.total_estimated_minutes);
}

#[tokio::test]
async fn test_recompute_unknown_plan_fails() {
    let (service, _repository) = build_service();

    let result = service.recompute_plan("no-such-plan", planning_input()).await;

    match result.unwrap_err() {
        ApplicationError::Domain(DomainError::PlanNotFound { id }) => {
            assert_eq!(id, "no-such-plan");
        }
        other => panic!("Expected PlanNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_infeasible_input_does_not_overwrite_stored_plan() {
    let (service, repository) = build_service();
    let original = service
        .compute_plan("field-1", planning_input())
        .await
        .unwrap();

    let mut infeasible = planning_input();
    infeasible.field_extent = FieldExtent::Rectangle {
        width_east_west_meters: 3000.0,
        height_north_south_meters: 100.0,
    };
    let result = service.recompute_plan(&original.id, infeasible).await;
    assert!(matches!(
        result.unwrap_err(),
        ApplicationError::Domain(DomainError::InfeasiblePlan { .. })
    ));

    let stored = repository.load_plan(&original.id).unwrap().unwrap();
    assert_eq!(stored.segments.len(), original.segments.len());
    assert_eq!(stored.modified_at, original.modified_at);
}
