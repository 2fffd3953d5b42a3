use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Work plan not found: {id}")]
    PlanNotFound { id: String },

    #[error("Invalid planning input: {reason}")]
    Validation { reason: String },

    #[error("Degenerate field geometry: {reason}")]
    Geometry { reason: String },

    #[error("Pass {pass_index} cannot be flown within a full {resource} budget (short by {shortfall:.2})")]
    InfeasiblePlan {
        pass_index: usize,
        resource: String,
        shortfall: f64,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Plan repository error: {0}")]
    Repository(String),

    #[error("Event publication error: {0}")]
    EventPublication(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] anyhow::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;
pub type ApplicationResult<T> = Result<T, ApplicationError>;
