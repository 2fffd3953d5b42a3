pub mod console_logger;
pub mod field_data;
pub mod file_logger;
pub mod file_plan_store;
pub mod memory_repository;
pub mod noop_logger;

pub use console_logger::*;
pub use field_data::*;
pub use file_logger::*;
pub use file_plan_store::*;
pub use memory_repository::*;
pub use noop_logger::*;
