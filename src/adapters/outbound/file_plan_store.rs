use crate::common::{DomainError, DomainResult};
use crate::domains::flight_planning::aggregate::plan::WorkPlan;
use crate::domains::flight_planning::ports::{WorkPlanRepository, WorkPlanRepositoryAsync};
use async_trait::async_trait;
use std::path::PathBuf;

/// File-based WorkPlanRepository for development and small deployments.
///
/// Each plan is stored as one JSON document named by plan id, so saving an
/// existing id atomically replaces the previous segment set with the
/// regenerated one.
pub struct FilePlanStore {
    base_path: PathBuf,
}

impl FilePlanStore {
    pub fn new<P: Into<PathBuf>>(base_path: P) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn plan_path(&self, plan_id: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", plan_id))
    }

    fn ensure_base_dir(&self) -> DomainResult<()> {
        std::fs::create_dir_all(&self.base_path).map_err(|e| {
            DomainError::InfrastructureError(format!(
                "Failed to create plan store directory: {}",
                e
            ))
        })
    }

    async fn ensure_base_dir_async(&self) -> DomainResult<()> {
        tokio::fs::create_dir_all(&self.base_path).await.map_err(|e| {
            DomainError::InfrastructureError(format!(
                "Failed to create plan store directory: {}",
                e
            ))
        })
    }
}

impl WorkPlanRepository for FilePlanStore {
    fn save_plan(&self, plan: &WorkPlan) -> DomainResult<()> {
        self.ensure_base_dir()?;
        let json = serde_json::to_string_pretty(plan)?;
        std::fs::write(self.plan_path(&plan.id), json).map_err(|e| {
            DomainError::InfrastructureError(format!("Failed to write plan file: {}", e))
        })
    }

    fn load_plan(&self, plan_id: &str) -> DomainResult<Option<WorkPlan>> {
        let path = self.plan_path(plan_id);
        if !path.exists() {
            return Ok(None);
        }
        let json = std::fs::read_to_string(&path).map_err(|e| {
            DomainError::InfrastructureError(format!("Failed to read plan file: {}", e))
        })?;
        Ok(Some(serde_json::from_str(&json)?))
    }

    fn delete_plan(&self, plan_id: &str) -> DomainResult<()> {
        let path = self.plan_path(plan_id);
        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| {
                DomainError::InfrastructureError(format!("Failed to delete plan file: {}", e))
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl WorkPlanRepositoryAsync for FilePlanStore {
    async fn save_plan(&self, plan: &WorkPlan) -> DomainResult<()> {
        self.ensure_base_dir_async().await?;
        let json = serde_json::to_string_pretty(plan)?;
        tokio::fs::write(self.plan_path(&plan.id), json)
            .await
            .map_err(|e| {
                DomainError::InfrastructureError(format!("Failed to write plan file: {}", e))
            })
    }

    async fn load_plan(&self, plan_id: &str) -> DomainResult<Option<WorkPlan>> {
        let path = self.plan_path(plan_id);
        match tokio::fs::read_to_string(&path).await {
            Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::InfrastructureError(format!(
                "Failed to read plan file: {}",
                e
            ))),
        }
    }

    async fn delete_plan(&self, plan_id: &str) -> DomainResult<()> {
        match tokio::fs::remove_file(self.plan_path(plan_id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::InfrastructureError(format!(
                "Failed to delete plan file: {}",
                e
            ))),
        }
    }
}
