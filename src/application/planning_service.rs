// Planning Service - application facade over the flight planning domain
use crate::common::{ApplicationError, ApplicationResult, DomainError, DomainResult};
use crate::domains::flight_planning::{
    loader, FieldBoundarySource, FieldPlanner, FlightPlanningCommandActor, PlannerTunables,
    PlanningInput, WorkPlan, WorkPlanRepository,
};
use crate::domains::flight_planning::aggregate::types::FieldExtent;
use crate::domains::logger::DynLogger;
use std::sync::Arc;

pub struct PlanningService {
    command_actor: FlightPlanningCommandActor,
    repository: Arc<dyn WorkPlanRepository>,
    boundary_source: Arc<dyn FieldBoundarySource>,
    logger: DynLogger,
    tunables: PlannerTunables,
}

impl PlanningService {
    pub fn new(
        command_actor: FlightPlanningCommandActor,
        repository: Arc<dyn WorkPlanRepository>,
        boundary_source: Arc<dyn FieldBoundarySource>,
        logger: DynLogger,
        tunables: PlannerTunables,
    ) -> Self {
        Self {
            command_actor,
            repository,
            boundary_source,
            logger,
            tunables,
        }
    }

    /// Compute and persist a fresh plan for a field.
    pub async fn compute_plan(
        &self,
        field_id: &str,
        input: PlanningInput,
    ) -> ApplicationResult<WorkPlan> {
        let mut planner = FieldPlanner::new(field_id.to_string(), self.tunables);
        let outcome = planner.compute_plan(input);
        self.publish_and_commit(&mut planner).await?;

        match outcome {
            Ok(plan) => {
                self.repository
                    .save_plan(&plan)
                    .map_err(|e| ApplicationError::Repository(e.to_string()))?;
                self.logger.info(&format!(
                    "computed plan {} for field {}: {} flights, {} resupply stops",
                    plan.id, field_id, plan.total_flights, plan.total_resupply_stops
                ));
                Ok(plan)
            }
            Err(e) => {
                self.logger
                    .error(&format!("planning failed for field {}: {}", field_id, e));
                Err(e.into())
            }
        }
    }

    /// Recompute a persisted plan with edited inputs. The stored segments
    /// are discarded and the plan is regenerated under its existing
    /// identity.
    pub async fn recompute_plan(
        &self,
        plan_id: &str,
        new_input: PlanningInput,
    ) -> ApplicationResult<WorkPlan> {
        let existing = self
            .repository
            .load_plan(plan_id)
            .map_err(|e| ApplicationError::Repository(e.to_string()))?
            .ok_or_else(|| {
                ApplicationError::Domain(DomainError::PlanNotFound {
                    id: plan_id.to_string(),
                })
            })?;

        let mut planner =
            FieldPlanner::from_plan(plan_id.to_string(), self.tunables, existing);
        let outcome = planner.recompute_plan(new_input);
        self.publish_and_commit(&mut planner).await?;

        match outcome {
            Ok(plan) => {
                self.repository
                    .save_plan(&plan)
                    .map_err(|e| ApplicationError::Repository(e.to_string()))?;
                self.logger
                    .info(&format!("recomputed plan {}", plan.id));
                Ok(plan)
            }
            Err(e) => {
                self.logger
                    .error(&format!("recomputation failed for plan {}: {}", plan_id, e));
                Err(e.into())
            }
        }
    }

    /// Load a field boundary through the boundary source and parse it into
    /// a polygon extent.
    pub fn load_field_boundary(&self, name: &str) -> DomainResult<FieldExtent> {
        let raw = self.boundary_source.load_boundary_geojson(name)?;
        loader::parse_boundary(&raw).map_err(DomainError::from)
    }

    async fn publish_and_commit(&self, planner: &mut FieldPlanner) -> ApplicationResult<()> {
        self.command_actor
            .publish_events(planner.uncommitted_events())
            .await
            .map_err(ApplicationError::EventPublication)?;
        planner.mark_events_as_committed();
        Ok(())
    }
}
