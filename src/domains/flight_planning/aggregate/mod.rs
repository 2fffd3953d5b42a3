pub mod event_apply;
pub mod field_planner;
pub mod plan;
pub mod types;

// Re-export all public types for convenience
pub use field_planner::FieldPlanner;
pub use plan::*;
pub use types::*;
