//! SimulationEventHandler trait, all methods no-op by default.

use super::types::*;

/// Receives progress callbacks from a simulation run.
///
/// Handlers only override the events they care about. Callbacks run on
/// the thread driving the run, between batches, never from worker threads.
pub trait SimulationEventHandler: Send + Sync {
    fn on_simulation_started(&self, _event: &SimulationStartedEvent) {}
    fn on_batch_complete(&self, _event: &BatchCompleteEvent) {}
    fn on_simulation_complete(&self, _event: &SimulationCompleteEvent) {}
    fn on_simulation_cancelled(&self, _event: &SimulationCancelledEvent) {}
}

/// Handler that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpEventHandler;

impl SimulationEventHandler for NoOpEventHandler {}
