use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

use kestrel_app::adapters::outbound::{init_noop_logger, InMemoryWorkPlanRepository};
use kestrel_app::application::PlanningService;
use kestrel_app::common::DomainResult;
use kestrel_app::domains::flight_planning::ports::FieldBoundarySource;
use kestrel_app::domains::flight_planning::*;

struct BridgeCapture {
    messages: Arc<Mutex<Vec<String>>>,
}

impl BridgeCapture {
    fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl kestrel_app::domains::logger::DomainLogger for BridgeCapture {
    fn info(&self, msg: &str) {
        self.messages.lock().unwrap().push(format!("INFO:{}", msg));
    }
    fn warn(&self, msg: &str) {
        self.messages.lock().unwrap().push(format!("WARN:{}", msg));
    }
    fn error(&self, msg: &str) {
        self.messages.lock().unwrap().push(format!("ERR:{}", msg));
    }
}

struct StaticBoundarySource {
    geojson: String,
}

impl FieldBoundarySource for StaticBoundarySource {
    fn load_boundary_geojson(&self, _name: &str) -> DomainResult<String> {
        Ok(self.geojson.clone())
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

fn service_with(
    logger: Arc<dyn kestrel_app::domains::logger::DomainLogger>,
) -> (PlanningService, mpsc::Receiver<kestrel_app::common::EventEnvelope>) {
    let (sender, receiver) = mpsc::channel(16);
    let service = PlanningService::new(
        FlightPlanningCommandActor::new(sender),
        Arc::new(InMemoryWorkPlanRepository::new()),
        Arc::new(StaticBoundarySource {
            geojson: r#"{"type":"Polygon","coordinates":[[[-64.19,-31.42],[-64.187,-31.42],[-64.1885,-31.418],[-64.19,-31.42]]]}"#.to_string(),
        }),
        logger,
        PlannerTunables::default(),
    );
    (service, receiver)
}

#[tokio::test]
async fn test_injected_logger_sees_planning_messages() {
    let capture = Arc::new(BridgeCapture::new());
    let messages = capture.messages.clone();
    let (service, mut receiver) = service_with(capture);

    let plan = service
        .compute_plan("field-7", planning_input())
        .await
        .unwrap();

    let msgs = messages.lock().unwrap();
    assert!(msgs
        .iter()
        .any(|m| m.starts_with("INFO:") && m.contains(&plan.id)));

    // The command actor forwarded the aggregate's events as envelopes.
    let first = receiver.recv().await.unwrap();
    assert_eq!(first.event_type, "PlannerCreated");
    assert_eq!(first.aggregate_id, "field-7");
    let second = receiver.recv().await.unwrap();
    assert_eq!(second.event_type, "PlanComputed");
    assert_eq!(second.metadata.source, "kestrel-app");
}

#[tokio::test]
async fn test_injected_logger_sees_failures() {
    let capture = Arc::new(BridgeCapture::new());
    let messages = capture.messages.clone();
    let (service, _receiver) = service_with(capture);

    let mut input = planning_input();
    input.track_spacing_meters = -2.0;
    let result = service.compute_plan("field-7", input).await;
    assert!(result.is_err());

    let msgs = messages.lock().unwrap();
    assert!(msgs.iter().any(|m| m.starts_with("ERR:")));
}

#[tokio::test]
async fn test_noop_logger_accepts_everything() {
    let noop = init_noop_logger();
    noop.info("ignored");
    noop.warn("ignored");
    noop.error("ignored-err");

    let (service, _receiver) = service_with(noop);
    let extent = service.load_field_boundary("any.geojson").unwrap();
    assert!(matches!(extent, FieldExtent::Polygon { vertices } if vertices.len() == 3));
}
