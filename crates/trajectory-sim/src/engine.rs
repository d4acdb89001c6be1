//! Simulation facade: validate, generate, aggregate, classify, recommend.
//!
//! Engines are plain values. There is no shared instance; several engines
//! may run at once on the same rayon pool.

use std::time::Instant;

use tracing::{info, instrument};
use trajectory_core::events::{
    NoOpEventHandler, SimulationCompleteEvent, SimulationEventHandler, SimulationStartedEvent,
};
use trajectory_core::tracing::metrics;
use trajectory_core::{AxisMap, Cancellable, CancellationToken, ConfigError, SimulationConfig, SimulationError};

use crate::batch::BatchRunner;
use crate::classifier::ScenarioClassifier;
use crate::probability::ProbabilityAnalyzer;
use crate::recommendations::RecommendationSynthesizer;
use crate::risk::RiskAnalyzer;
use crate::rng::RandomVariateSource;
use crate::statistics::final_samples;
use crate::types::{DistributionStatistics, RunSummary, SimulationResult};

/// A validated configuration ready to run.
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    config: SimulationConfig,
}

impl SimulationEngine {
    /// Validate `config` and build an engine around it.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run to completion with no progress reporting.
    pub fn run(&self, initial: &AxisMap<f64>) -> Result<SimulationResult, SimulationError> {
        self.run_with(initial, &CancellationToken::new(), &NoOpEventHandler)
    }

    /// Run with cooperative cancellation and progress events.
    ///
    /// Uses `config.seed` when set, otherwise draws a fresh seed; the seed
    /// used is reported in [`RunSummary::seed`].
    #[instrument(skip_all, fields(iterations = self.config.iterations, horizon = self.config.time_horizon))]
    pub fn run_with(
        &self,
        initial: &AxisMap<f64>,
        cancel: &dyn Cancellable,
        events: &dyn SimulationEventHandler,
    ) -> Result<SimulationResult, SimulationError> {
        let start = Instant::now();
        let config = &self.config;
        let seed = config.seed.unwrap_or_else(RandomVariateSource::entropy_seed);

        let runner = BatchRunner::new(config, seed)?;
        let total_batches = runner.total_batches();
        info!(seed, total_batches, "simulation started");
        events.on_simulation_started(&SimulationStartedEvent {
            iterations: config.iterations,
            time_horizon: config.time_horizon,
            total_batches,
            seed,
        });

        let mut scenarios = runner.run(initial, cancel, events)?;

        let aggregation_start = Instant::now();
        let samples = final_samples(&scenarios);
        let statistics = DistributionStatistics::compute(&samples);
        let probabilities =
            ProbabilityAnalyzer::new(&config.target_thresholds, config.confidence_level).analyze(&samples);
        let risk = RiskAnalyzer::new(config.confidence_level, config.time_horizon)
            .analyze(initial, &samples, &scenarios);
        let category_counts = ScenarioClassifier.classify(&mut scenarios, &statistics);
        let recommendations = RecommendationSynthesizer::new(
            config.recommendation.clone(),
            config.confidence_level,
            config.time_horizon,
        )
        .synthesize(initial, &statistics, &probabilities, &risk);

        let duration_ms = start.elapsed().as_millis() as u64;
        info!(
            { metrics::AGGREGATION_TIME } = aggregation_start.elapsed().as_millis() as u64,
            { metrics::RECOMMENDATION_COUNT } = recommendations.len(),
            best = category_counts.best,
            worst = category_counts.worst,
            outlier = category_counts.outlier,
            duration_ms,
            "simulation complete"
        );
        events.on_simulation_complete(&SimulationCompleteEvent {
            scenarios: scenarios.len(),
            recommendations: recommendations.len(),
            duration_ms,
        });

        Ok(SimulationResult {
            scenarios,
            statistics,
            probabilities,
            risk,
            recommendations,
            summary: RunSummary {
                iterations: config.iterations,
                time_horizon: config.time_horizon,
                batches: total_batches,
                seed,
                duration_ms,
                category_counts,
            },
        })
    }
}

/// Validate `config` and run it once from `initial`.
pub fn run_simulation(
    initial: &AxisMap<f64>,
    config: &SimulationConfig,
) -> Result<SimulationResult, SimulationError> {
    SimulationEngine::new(config.clone())?.run(initial)
}

/// [`run_simulation`] with cancellation and progress events.
pub fn run_simulation_with(
    initial: &AxisMap<f64>,
    config: &SimulationConfig,
    cancel: &CancellationToken,
    events: &dyn SimulationEventHandler,
) -> Result<SimulationResult, SimulationError> {
    SimulationEngine::new(config.clone())?.run_with(initial, cancel, events)
}
