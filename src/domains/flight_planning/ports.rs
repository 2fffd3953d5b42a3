use crate::common::DomainResult;
use crate::domains::flight_planning::aggregate::plan::WorkPlan;
use async_trait::async_trait;

/// Port trait the flight_planning domain depends on for loading field
/// boundary data. Implementations (adapters) provide filesystem or
/// network-backed sources.
pub trait FieldBoundarySource: Send + Sync {
    fn load_boundary_geojson(&self, name: &str) -> DomainResult<String>;
}

/// Port for persisting work plans in various backends (memory, filesystem,
/// a relational store, ...). The storage layer owns the at-most-one-current
/// plan discipline; the domain only hands over plain serializable data.
pub trait WorkPlanRepository: Send + Sync {
    /// Persist the plan, replacing any previous version under the same id
    fn save_plan(&self, plan: &WorkPlan) -> DomainResult<()>;
    /// Load a previously persisted plan
    fn load_plan(&self, plan_id: &str) -> DomainResult<Option<WorkPlan>>;
    /// Delete a persisted plan and its segments
    fn delete_plan(&self, plan_id: &str) -> DomainResult<()>;
}

/// Async variant of WorkPlanRepository for adapters that perform async I/O
#[async_trait]
pub trait WorkPlanRepositoryAsync: Send + Sync {
    async fn save_plan(&self, plan: &WorkPlan) -> DomainResult<()>;
    async fn load_plan(&self, plan_id: &str) -> DomainResult<Option<WorkPlan>>;
    async fn delete_plan(&self, plan_id: &str) -> DomainResult<()>;
}
