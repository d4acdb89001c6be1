//! # trajectory-sim
//!
//! Monte Carlo projection of the five score axes with risk analytics.
//!
//! Pipeline: correlated path generation per scenario (batched, parallel),
//! then distribution statistics, target probabilities, risk metrics,
//! classification, and recommendations over the final scores.

pub mod batch;
pub mod classifier;
pub mod constraints;
pub mod correlation;
pub mod engine;
pub mod path;
pub mod probability;
pub mod recommendations;
pub mod risk;
pub mod rng;
pub mod statistics;
pub mod types;

pub use engine::{run_simulation, run_simulation_with, SimulationEngine};
pub use types::{
    AxisRisk, AxisStatistics, CategoryCounts, DistributionStatistics, ImpactLevel, ProbabilityDistribution,
    Recommendation, RecommendationKind, RecommendationScope, RiskMetrics, RunSummary, Scenario,
    ScenarioCategory, SimulationResult, TimePoint,
};
