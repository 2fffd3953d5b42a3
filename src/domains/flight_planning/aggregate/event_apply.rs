use super::field_planner::FieldPlanner;
use crate::common::aggregate::AggregateRoot;
use crate::common::DomainResult;
use crate::domains::flight_planning::events::FlightPlanningEvent;

impl AggregateRoot for FieldPlanner {
    type Event = FlightPlanningEvent;

    fn aggregate_id(&self) -> &str {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) -> DomainResult<()> {
        match event {
            FlightPlanningEvent::PlannerCreated { tunables, .. } => {
                self.tunables = *tunables;
            }
            FlightPlanningEvent::PlanComputed { plan, .. }
            | FlightPlanningEvent::PlanRecomputed { plan, .. } => {
                self.current_plan = Some(plan.clone());
            }
            FlightPlanningEvent::PlanningFailed { .. } => {
                // The previous plan stays current; failures only advance the
                // version.
            }
        }
        self.version += 1;
        Ok(())
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        FieldPlanner::uncommitted_events(self)
    }

    fn mark_events_as_committed(&mut self) {
        FieldPlanner::mark_events_as_committed(self)
    }

    fn add_event(&mut self, event: Self::Event) {
        FieldPlanner::add_event(self, event)
    }
}
