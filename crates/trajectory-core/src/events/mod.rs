//! Progress events emitted by a simulation run.

pub mod handler;
pub mod types;

pub use handler::{NoOpEventHandler, SimulationEventHandler};
pub use types::*;
