pub mod aggregator;
pub mod geometry;
pub mod passes;
pub mod segmenter;

pub use aggregator::aggregate;
pub use geometry::{resolve, FieldBounds, NormalizedField, METERS_PER_DEGREE_LAT};
pub use passes::{clip_line_to_polygon, generate_passes, SweepLayout};
pub use segmenter::{segment, SegmentationOutcome};

use crate::common::DomainResult;
use crate::domains::flight_planning::aggregate::plan::{PlanSolution, ScanStrategy};
use crate::domains::flight_planning::aggregate::types::PlanningInput;
use serde::{Deserialize, Serialize};

/// Engine constants with reasonable defaults; overridable through the
/// application configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannerTunables {
    /// Wind speed above which sweep orientation is chosen parallel to the
    /// wind, km/h.
    pub drift_threshold_kmh: f64,
    /// Minimum polygon area as a fraction of the declared hectares before
    /// the boundary counts as degenerate.
    pub geometry_epsilon_ratio: f64,
}

impl Default for PlannerTunables {
    fn default() -> Self {
        Self {
            drift_threshold_kmh: 15.0,
            geometry_epsilon_ratio: 0.01,
        }
    }
}

/// The engine's single entry point: a pure, synchronous computation from
/// one validated input to a complete ordered coverage plan. Recomputation
/// is the caller invoking this again with new inputs.
pub fn compute_plan(input: &PlanningInput) -> DomainResult<PlanSolution> {
    compute_plan_with(input, &PlannerTunables::default())
}

pub fn compute_plan_with(
    input: &PlanningInput,
    tunables: &PlannerTunables,
) -> DomainResult<PlanSolution> {
    input.validate()?;
    let field = geometry::resolve(input, tunables.geometry_epsilon_ratio)?;
    let layout = passes::generate_passes(
        &field,
        input.track_spacing_meters,
        &input.wind,
        tunables.drift_threshold_kmh,
    );
    let outcome = segmenter::segment(&layout.passes, input, &field)?;
    let mut solution = aggregator::aggregate(outcome, layout.orientation, layout.strategy);

    if solution.scan_strategy == ScanStrategy::UpwindSerpentine {
        if let Some(first) = solution.segments.first_mut() {
            first
                .comment
                .get_or_insert_with(|| "sweep oriented parallel to wind".to_string());
        }
    }
    Ok(solution)
}
