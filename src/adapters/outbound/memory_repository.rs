use crate::common::{DomainError, DomainResult};
use crate::domains::flight_planning::aggregate::plan::WorkPlan;
use crate::domains::flight_planning::ports::WorkPlanRepository;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory WorkPlanRepository for tests and development. Saving under an
/// existing id replaces the stored plan, which is exactly the recomputation
/// contract.
pub struct InMemoryWorkPlanRepository {
    plans: Mutex<HashMap<String, WorkPlan>>,
}

impl InMemoryWorkPlanRepository {
    pub fn new() -> Self {
        Self {
            plans: Mutex::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.plans.lock().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryWorkPlanRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkPlanRepository for InMemoryWorkPlanRepository {
    fn save_plan(&self, plan: &WorkPlan) -> DomainResult<()> {
        let mut plans = self
            .plans
            .lock()
            .map_err(|e| DomainError::InfrastructureError(format!("lock poisoned: {}", e)))?;
        plans.insert(plan.id.clone(), plan.clone());
        Ok(())
    }

    fn load_plan(&self, plan_id: &str) -> DomainResult<Option<WorkPlan>> {
        let plans = self
            .plans
            .lock()
            .map_err(|e| DomainError::InfrastructureError(format!("lock poisoned: {}", e)))?;
        Ok(plans.get(plan_id).cloned())
    }

    fn delete_plan(&self, plan_id: &str) -> DomainResult<()> {
        let mut plans = self
            .plans
            .lock()
            .map_err(|e| DomainError::InfrastructureError(format!("lock poisoned: {}", e)))?;
        plans.remove(plan_id);
        Ok(())
    }
}
