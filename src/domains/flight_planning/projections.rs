// Flight planning projections - summary read model for list views
use crate::domains::flight_planning::aggregate::plan::WorkPlan;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightPlanningProjection {
    pub plan_id: String,
    pub total_flights: u32,
    pub total_resupply_stops: u32,
    pub total_estimated_minutes: f64,
    pub total_area_covered_hectares: f64,
}

impl From<&WorkPlan> for FlightPlanningProjection {
    fn from(plan: &WorkPlan) -> Self {
        Self {
            plan_id: plan.id.clone(),
            total_flights: plan.total_flights,
            total_resupply_stops: plan.total_resupply_stops,
            total_estimated_minutes: plan.total_estimated_minutes,
            total_area_covered_hectares: plan.total_area_covered_hectares,
        }
    }
}
