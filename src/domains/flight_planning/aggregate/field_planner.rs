use super::plan::WorkPlan;
use super::types::PlanningInput;
use crate::common::aggregate::AggregateRoot;
use crate::common::{DomainError, DomainResult};
use crate::domains::flight_planning::engine::{self, PlannerTunables};
use crate::domains::flight_planning::events::FlightPlanningEvent;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Aggregate root for one field's coverage planning. The engine underneath
/// is a pure function; this aggregate owns identity, the current plan, and
/// the event stream around it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldPlanner {
    pub id: String,
    pub tunables: PlannerTunables,
    pub current_plan: Option<WorkPlan>,
    pub version: u64,
    #[serde(skip)]
    uncommitted_events: Vec<FlightPlanningEvent>,
}

impl FieldPlanner {
    // Public methods for AggregateRoot trait
    pub fn uncommitted_events(&self) -> &[FlightPlanningEvent] {
        &self.uncommitted_events
    }
    pub fn mark_events_as_committed(&mut self) {
        self.uncommitted_events.clear();
    }
    pub fn add_event(&mut self, event: FlightPlanningEvent) {
        self.uncommitted_events.push(event);
    }
}

impl FieldPlanner {
    pub fn new(id: String, tunables: PlannerTunables) -> Self {
        let mut planner = Self {
            id: id.clone(),
            tunables,
            current_plan: None,
            version: 0,
            uncommitted_events: Vec::new(),
        };

        let event = FlightPlanningEvent::PlannerCreated {
            planner_id: id,
            tunables,
            timestamp: Utc::now(),
        };

        planner.add_event(event);
        planner
    }

    /// Rebuild a planner around a previously persisted plan, e.g. after the
    /// repository re-hydrates it for recomputation.
    pub fn from_plan(id: String, tunables: PlannerTunables, plan: WorkPlan) -> Self {
        Self {
            id,
            tunables,
            current_plan: Some(plan),
            version: 0,
            uncommitted_events: Vec::new(),
        }
    }

    /// Compute a fresh plan for this field. On success the plan becomes the
    /// planner's current plan; on failure the failure is recorded as an
    /// event and the previous plan (if any) stays current.
    pub fn compute_plan(&mut self, input: PlanningInput) -> DomainResult<WorkPlan> {
        match engine::compute_plan_with(&input, &self.tunables) {
            Ok(solution) => {
                let plan = WorkPlan::from_solution(input, solution);
                let event = FlightPlanningEvent::PlanComputed {
                    planner_id: self.id.clone(),
                    plan: plan.clone(),
                    timestamp: Utc::now(),
                };
                self.add_event(event.clone());
                self.apply(&event)?;
                Ok(plan)
            }
            Err(e) => {
                let event = FlightPlanningEvent::PlanningFailed {
                    planner_id: self.id.clone(),
                    reason: e.to_string(),
                    timestamp: Utc::now(),
                };
                self.add_event(event.clone());
                self.apply(&event)?;
                Err(e)
            }
        }
    }

    /// Recompute the current plan with edited inputs. The previous segment
    /// set is discarded and the plan regenerated in place: same identity and
    /// creation timestamp, fresh modification timestamp.
    pub fn recompute_plan(&mut self, input: PlanningInput) -> DomainResult<WorkPlan> {
        let previous = self
            .current_plan
            .clone()
            .ok_or_else(|| DomainError::PlanNotFound {
                id: self.id.clone(),
            })?;

        match engine::compute_plan_with(&input, &self.tunables) {
            Ok(solution) => {
                let plan = previous.regenerate(input, solution);
                let event = FlightPlanningEvent::PlanRecomputed {
                    planner_id: self.id.clone(),
                    plan: plan.clone(),
                    timestamp: Utc::now(),
                };
                self.add_event(event.clone());
                self.apply(&event)?;
                Ok(plan)
            }
            Err(e) => {
                let event = FlightPlanningEvent::PlanningFailed {
                    planner_id: self.id.clone(),
                    reason: e.to_string(),
                    timestamp: Utc::now(),
                };
                self.add_event(event.clone());
                self.apply(&event)?;
                Err(e)
            }
        }
    }
}
