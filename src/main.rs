use kestrel_app::Config;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

use kestrel_app::adapters::outbound::field_data::FilesystemBoundarySource;
use kestrel_app::adapters::outbound::memory_repository::InMemoryWorkPlanRepository;
use kestrel_app::adapters::outbound::console_logger::init_console_logger;
use kestrel_app::application::PlanningService;
use kestrel_app::domains::flight_planning::{
    FieldExtent, FlightPlanningCommandActor, GeoPoint, PlanningInput, Wind,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Kestrel App");

    // Load configuration, falling back to defaults when no file is present
    let config = match Config::from_file("config.toml").await {
        Ok(config) => config,
        Err(e) => {
            info!("No config.toml loaded ({}), using defaults", e);
            Config::default()
        }
    };

    info!("Drift threshold: {} km/h", config.planning.drift_threshold_kmh);

    // Initialize event channel and command actor
    let (event_sender, mut event_receiver) = mpsc::channel(100);
    let command_actor = FlightPlanningCommandActor::new(event_sender);

    // Wire adapters behind the domain ports
    let boundary_source = Arc::new(FilesystemBoundarySource::new(
        config.data.data_dir.clone().map(Into::into),
    ));
    let repository = Arc::new(InMemoryWorkPlanRepository::new());
    let logger = init_console_logger();

    // Construct application service
    let planning_service = PlanningService::new(
        command_actor,
        repository.clone(),
        boundary_source.clone(),
        logger,
        config.tunables(),
    );

    // Drain published events in the background
    tokio::spawn(async move {
        while let Some(envelope) = event_receiver.recv().await {
            info!("event {}: {}", envelope.event_type, envelope.aggregate_id);
        }
    });

    // Demo: try loading a sample boundary (non-fatal)
    match planning_service.load_field_boundary("sample_field.geojson") {
        Ok(extent) => info!("Loaded sample_field.geojson: {:?}", extent),
        Err(e) => error!("Failed to load sample_field.geojson: {:?}", e),
    }

    // Demo: plan a rectangular field
    let input = PlanningInput {
        field_extent: FieldExtent::Rectangle {
            width_east_west_meters: 100.0,
            height_north_south_meters: 200.0,
        },
        area_hectares: 2.0,
        application_rate_l_per_ha: 15.0,
        resupply_site: GeoPoint { lat: -31.4201, lng: -64.1888 },
        wind: Wind { direction_degrees: 180.0, speed_kmh: 8.0 },
        track_spacing_meters: 10.0,
        ground_speed_kmh: 54.0,
        battery_endurance_minutes: 12.0,
        tank_capacity_liters: 20.0,
        resupply_duration_minutes: 3.0,
        turn_duration_seconds: 6.0,
        drone_count: 1,
        center_point: None,
    };

    match planning_service.compute_plan("demo-field", input).await {
        Ok(plan) => info!(
            "Planned {} flights, {:.1} min, {:.0} m, {} resupply stops",
            plan.total_flights,
            plan.total_estimated_minutes,
            plan.total_distance_meters,
            plan.total_resupply_stops
        ),
        Err(e) => error!("Demo planning failed: {}", e),
    }

    info!("Kestrel App started successfully");

    // Keep the application running
    tokio::signal::ctrl_c().await?;
    info!("Shutting down Kestrel App");

    Ok(())
}
