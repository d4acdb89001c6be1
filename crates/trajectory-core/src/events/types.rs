//! Event payload types.

/// Payload for `on_simulation_started`.
#[derive(Debug, Clone)]
pub struct SimulationStartedEvent {
    pub iterations: u32,
    pub time_horizon: u32,
    pub total_batches: usize,
    pub seed: u64,
}

/// Payload for `on_batch_complete`.
#[derive(Debug, Clone)]
pub struct BatchCompleteEvent {
    pub batch_index: usize,
    pub total_batches: usize,
    pub completed_scenarios: usize,
    pub total_scenarios: usize,
}

/// Payload for `on_simulation_complete`.
#[derive(Debug, Clone)]
pub struct SimulationCompleteEvent {
    pub scenarios: usize,
    pub recommendations: usize,
    pub duration_ms: u64,
}

/// Payload for `on_simulation_cancelled`.
#[derive(Debug, Clone)]
pub struct SimulationCancelledEvent {
    pub completed_batches: usize,
    pub total_batches: usize,
}
