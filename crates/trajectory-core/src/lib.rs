//! # trajectory-core
//!
//! Foundation crate for the Trajectory simulation engine.
//! Defines the axis model, errors, config, events, tracing, and constants.
//! The simulation crate depends on this.

pub mod axis;
pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use axis::{Axis, AxisMap};
pub use config::{
    Comparison, ConstraintSet, DependencyRule, RecommendationThresholds, SimulationConfig,
};
pub use errors::{ConfigError, ErrorCode, SimulationError};
pub use traits::{Cancellable, CancellationToken};
