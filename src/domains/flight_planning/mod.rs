pub mod actors;
pub mod aggregate;
pub mod engine;
pub mod events;
pub mod loader;
pub mod ports;
pub mod projections;

pub use actors::*;
pub use aggregate::*;
pub use engine::*;
pub use events::*;
pub use ports::*;
pub use projections::*;
