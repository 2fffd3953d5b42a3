pub mod flight_planning;
pub mod logger;

pub use flight_planning::*;
pub use logger::*;
