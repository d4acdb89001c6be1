//! Structured field names used in simulation spans and events.
//!
//! Keeping them in one place keeps log queries stable across modules.

/// Batch runner: scenarios generated per second.
pub const SCENARIOS_PER_SECOND: &str = "scenarios_per_second";

/// Batch runner: wall time spent generating paths, in milliseconds.
pub const PATH_GENERATION_TIME: &str = "path_generation_time";

/// Aggregation: wall time spent in statistics, probability, and risk, in milliseconds.
pub const AGGREGATION_TIME: &str = "aggregation_time";

/// Correlation: number of clamped (non-positive) Cholesky radicands.
pub const CLAMPED_RADICANDS: &str = "clamped_radicands";

/// Recommendations: number of recommendations emitted.
pub const RECOMMENDATION_COUNT: &str = "recommendation_count";
