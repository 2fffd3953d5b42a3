use super::types::{GeoPoint, PlanningInput};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which consumable a resupply stop replenishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResupplyKind {
    Battery,
    Product,
    Both,
}

/// Axis the coverage passes run along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepOrientation {
    EastWest,
    NorthSouth,
}

/// Wind-relative ordering of the serpentine sweep. Stored on the plan, never
/// re-derived downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanStrategy {
    /// Back-and-forth from the minimum edge; wind below the drift threshold.
    Serpentine,
    /// Back-and-forth starting at the upwind edge, so the heaviest-tank
    /// passes fly into the wind.
    UpwindSerpentine,
}

/// One flown leg of the plan: a single pass traversal, possibly preceded by
/// a resupply detour (the detour is charged to wall clock, not to this
/// segment's distance).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSegment {
    /// Global, 1-based, monotonic across all drones in wall-clock
    /// completion order.
    pub sequence_number: u32,
    /// Which simulated vehicle flies this segment.
    pub drone_index: u32,
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub distance_meters: f64,
    pub flight_duration_minutes: f64,
    pub area_covered_hectares: f64,
    pub volume_dispensed_liters: f64,
    /// The drone detours to the resupply site after this segment.
    pub requires_resupply: bool,
    pub resupply_kind: Option<ResupplyKind>,
    pub comment: Option<String>,
}

/// Deterministic output of the pure engine: everything a plan contains
/// except its persisted identity and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSolution {
    pub segments: Vec<FlightSegment>,
    pub sweep_orientation: SweepOrientation,
    pub scan_strategy: ScanStrategy,
    pub total_flights: u32,
    pub total_estimated_minutes: f64,
    pub total_distance_meters: f64,
    pub total_area_covered_hectares: f64,
    pub total_resupply_stops: u32,
}

/// The persisted aggregate: input echo plus derived totals and the ordered
/// segment set. Produced atomically by one planning invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkPlan {
    pub id: String,
    pub input: PlanningInput,
    pub segments: Vec<FlightSegment>,
    pub total_flights: u32,
    pub total_estimated_minutes: f64,
    pub total_distance_meters: f64,
    pub total_area_covered_hectares: f64,
    pub total_resupply_stops: u32,
    pub sweep_orientation: SweepOrientation,
    pub scan_strategy: ScanStrategy,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl WorkPlan {
    /// Wrap a fresh engine solution into a new persisted plan.
    pub fn from_solution(input: PlanningInput, solution: PlanSolution) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            input,
            segments: solution.segments,
            total_flights: solution.total_flights,
            total_estimated_minutes: solution.total_estimated_minutes,
            total_distance_meters: solution.total_distance_meters,
            total_area_covered_hectares: solution.total_area_covered_hectares,
            total_resupply_stops: solution.total_resupply_stops,
            sweep_orientation: solution.sweep_orientation,
            scan_strategy: solution.scan_strategy,
            created_at: now,
            modified_at: now,
        }
    }

    /// Regenerate this plan in place from a new solution: same identity and
    /// creation timestamp, fresh segment set and totals.
    pub fn regenerate(&self, input: PlanningInput, solution: PlanSolution) -> Self {
        Self {
            id: self.id.clone(),
            input,
            segments: solution.segments,
            total_flights: solution.total_flights,
            total_estimated_minutes: solution.total_estimated_minutes,
            total_distance_meters: solution.total_distance_meters,
            total_area_covered_hectares: solution.total_area_covered_hectares,
            total_resupply_stops: solution.total_resupply_stops,
            sweep_orientation: solution.sweep_orientation,
            scan_strategy: solution.scan_strategy,
            created_at: self.created_at,
            modified_at: Utc::now(),
        }
    }
}
