use crate::common::DomainEvent;
use crate::domains::flight_planning::aggregate::plan::WorkPlan;
use crate::domains::flight_planning::engine::PlannerTunables;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FlightPlanningEvent {
    PlannerCreated {
        planner_id: String,
        tunables: PlannerTunables,
        timestamp: DateTime<Utc>,
    },
    PlanComputed {
        planner_id: String,
        plan: WorkPlan,
        timestamp: DateTime<Utc>,
    },
    PlanRecomputed {
        planner_id: String,
        plan: WorkPlan,
        timestamp: DateTime<Utc>,
    },
    PlanningFailed {
        planner_id: String,
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

impl DomainEvent for FlightPlanningEvent {
    fn event_type(&self) -> &'static str {
        match self {
            FlightPlanningEvent::PlannerCreated { .. } => "PlannerCreated",
            FlightPlanningEvent::PlanComputed { .. } => "PlanComputed",
            FlightPlanningEvent::PlanRecomputed { .. } => "PlanRecomputed",
            FlightPlanningEvent::PlanningFailed { .. } => "PlanningFailed",
        }
    }

    fn aggregate_id(&self) -> &str {
        match self {
            FlightPlanningEvent::PlannerCreated { planner_id, .. } => planner_id,
            FlightPlanningEvent::PlanComputed { planner_id, .. } => planner_id,
            FlightPlanningEvent::PlanRecomputed { planner_id, .. } => planner_id,
            FlightPlanningEvent::PlanningFailed { planner_id, .. } => planner_id,
        }
    }

    fn event_version(&self) -> u64 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            FlightPlanningEvent::PlannerCreated { timestamp, .. } => *timestamp,
            FlightPlanningEvent::PlanComputed { timestamp, .. } => *timestamp,
            FlightPlanningEvent::PlanRecomputed { timestamp, .. } => *timestamp,
            FlightPlanningEvent::PlanningFailed { timestamp, .. } => *timestamp,
        }
    }
}
