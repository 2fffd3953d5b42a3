use super::segmenter::SegmentationOutcome;
use crate::domains::flight_planning::aggregate::plan::{PlanSolution, ScanStrategy, SweepOrientation};

/// Stage 4: pure summation of per-segment metrics into the plan summary.
/// Total time is the maximum across drone wall clocks, not the sum, since
/// drones fly concurrently. This stage cannot fail.
pub fn aggregate(
    outcome: SegmentationOutcome,
    orientation: SweepOrientation,
    strategy: ScanStrategy,
) -> PlanSolution {
    let total_estimated_minutes = outcome
        .drone_wall_clock_minutes
        .iter()
        .fold(0.0_f64, |acc, t| acc.max(*t));

    let total_distance_meters = outcome.segments.iter().map(|s| s.distance_meters).sum();
    let total_area_covered_hectares = outcome
        .segments
        .iter()
        .map(|s| s.area_covered_hectares)
        .sum();
    let total_resupply_stops = outcome
        .segments
        .iter()
        .filter(|s| s.requires_resupply)
        .count() as u32;

    PlanSolution {
        total_flights: outcome.segments.len() as u32,
        total_estimated_minutes,
        total_distance_meters,
        total_area_covered_hectares,
        total_resupply_stops,
        sweep_orientation: orientation,
        scan_strategy: strategy,
        segments: outcome.segments,
    }
}
