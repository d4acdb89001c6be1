//! Configuration for a simulation run.
//! TOML-deserializable, every field defaulted, validated before use.

pub mod constraint_config;
pub mod recommendation_config;
pub mod simulation_config;

pub use constraint_config::{Comparison, ConstraintSet, DependencyRule};
pub use recommendation_config::RecommendationThresholds;
pub use simulation_config::{CorrelationMatrix, SimulationConfig};
