//! Batched, parallel execution of independent scenarios.
//!
//! Batches run one after another; scenarios inside a batch run on the
//! rayon pool. Batch boundaries only exist for cancellation checks and
//! progress events and never change the generated paths.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};
use trajectory_core::events::{BatchCompleteEvent, SimulationCancelledEvent, SimulationEventHandler};
use trajectory_core::tracing::metrics;
use trajectory_core::{AxisMap, Cancellable, ConfigError, SimulationConfig, SimulationError};

use crate::path::PathSimulator;
use crate::rng::RandomVariateSource;
use crate::types::Scenario;

/// Runs `config.iterations` scenarios from one base seed.
pub struct BatchRunner<'a> {
    config: &'a SimulationConfig,
    simulator: PathSimulator,
    seed: u64,
}

impl<'a> BatchRunner<'a> {
    /// Build a runner for a validated config.
    pub fn new(config: &'a SimulationConfig, seed: u64) -> Result<Self, ConfigError> {
        let correlation = config.correlation_matrix()?;
        let simulator = PathSimulator::new(
            config.drift,
            config.volatility,
            correlation.as_ref(),
            config.effective_constraints(),
        );
        Ok(Self {
            config,
            simulator,
            seed,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn simulator(&self) -> &PathSimulator {
        &self.simulator
    }

    pub fn total_batches(&self) -> usize {
        (self.config.iterations as usize).div_ceil(self.config.batch_size)
    }

    /// Generate every scenario, checking `cancel` before each batch.
    ///
    /// Returns scenarios in iteration order. A cancelled run returns
    /// `SimulationError::Cancelled` and discards everything generated so far.
    pub fn run(
        &self,
        initial: &AxisMap<f64>,
        cancel: &dyn Cancellable,
        events: &dyn SimulationEventHandler,
    ) -> Result<Vec<Scenario>, SimulationError> {
        let start = Instant::now();
        let total = self.config.iterations as usize;
        let total_batches = self.total_batches();
        let horizon = self.config.time_horizon;
        let mut scenarios = Vec::with_capacity(total);

        for batch_index in 0..total_batches {
            if cancel.is_cancelled() {
                info!(
                    completed_batches = batch_index,
                    total_batches, "simulation cancelled"
                );
                events.on_simulation_cancelled(&SimulationCancelledEvent {
                    completed_batches: batch_index,
                    total_batches,
                });
                return Err(SimulationError::Cancelled {
                    completed_batches: batch_index,
                    total_batches,
                });
            }

            let lo = batch_index * self.config.batch_size;
            let hi = (lo + self.config.batch_size).min(total);
            let batch: Vec<Scenario> = (lo..hi)
                .into_par_iter()
                .map(|i| {
                    let iteration = i as u32;
                    let mut rng = RandomVariateSource::for_iteration(self.seed, iteration);
                    self.simulator
                        .simulate_scenario(iteration, initial, horizon, &mut rng)
                })
                .collect();
            scenarios.extend(batch);

            debug!(batch = batch_index, completed = scenarios.len(), total, "batch complete");
            events.on_batch_complete(&BatchCompleteEvent {
                batch_index,
                total_batches,
                completed_scenarios: scenarios.len(),
                total_scenarios: total,
            });
        }

        let elapsed = start.elapsed();
        let per_second = total as f64 / elapsed.as_secs_f64().max(1e-9);
        info!(
            scenarios = total,
            batches = total_batches,
            { metrics::PATH_GENERATION_TIME } = elapsed.as_millis() as u64,
            { metrics::SCENARIOS_PER_SECOND } = per_second,
            "path generation complete"
        );
        Ok(scenarios)
    }
}
