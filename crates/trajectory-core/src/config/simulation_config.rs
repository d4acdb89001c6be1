//! Top-level simulation configuration.

use serde::{Deserialize, Serialize};

use super::{ConstraintSet, RecommendationThresholds};
use crate::axis::{Axis, AxisMap};
use crate::constants::{
    DEFAULT_BATCH_SIZE, DEFAULT_CONFIDENCE_LEVEL, DEFAULT_CORRELATION, DEFAULT_DRIFT,
    DEFAULT_ITERATIONS, DEFAULT_TARGET_THRESHOLDS, DEFAULT_TIME_HORIZON_DAYS, DEFAULT_VOLATILITY,
};
use crate::errors::ConfigError;

/// A 5×5 correlation matrix in axis order.
pub type CorrelationMatrix = [[f64; Axis::COUNT]; Axis::COUNT];

/// Configuration for one simulation run.
///
/// Every field is optional in TOML; omitted fields take the named
/// defaults from [`crate::constants`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of Monte Carlo iterations. Must be at least 1.
    pub iterations: u32,
    /// Projection horizon in days.
    pub time_horizon: u32,
    /// Confidence level in (0, 1) for VaR and confidence intervals.
    pub confidence_level: f64,
    /// Correlation matrix rows in axis order. `None` means independent axes.
    pub correlation: Option<Vec<Vec<f64>>>,
    /// Annualized volatility per axis. Must be positive.
    pub volatility: AxisMap<f64>,
    /// Annualized drift per axis.
    pub drift: AxisMap<f64>,
    pub constraints: Option<ConstraintSet>,
    /// Scenarios per batch; cancellation and progress are checked per batch.
    pub batch_size: usize,
    /// Base seed. `None` draws one from OS entropy at run start.
    pub seed: Option<u64>,
    pub target_thresholds: Vec<f64>,
    pub recommendation: RecommendationThresholds,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            time_horizon: DEFAULT_TIME_HORIZON_DAYS,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            correlation: Some(DEFAULT_CORRELATION.iter().map(|row| row.to_vec()).collect()),
            volatility: AxisMap::new(DEFAULT_VOLATILITY),
            drift: AxisMap::new(DEFAULT_DRIFT),
            constraints: None,
            batch_size: DEFAULT_BATCH_SIZE,
            seed: None,
            target_thresholds: DEFAULT_TARGET_THRESHOLDS.to_vec(),
            recommendation: RecommendationThresholds::default(),
        }
    }
}

impl SimulationConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        tracing::debug!(
            iterations = config.iterations,
            time_horizon = config.time_horizon,
            seeded = config.seed.is_some(),
            "parsed simulation config"
        );
        Ok(config)
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_time_horizon(mut self, days: u32) -> Self {
        self.time_horizon = days;
        self
    }

    pub fn with_confidence_level(mut self, level: f64) -> Self {
        self.confidence_level = level;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_correlation(mut self, matrix: Option<CorrelationMatrix>) -> Self {
        self.correlation = matrix.map(|m| m.iter().map(|row| row.to_vec()).collect());
        self
    }

    pub fn with_constraints(mut self, constraints: ConstraintSet) -> Self {
        self.constraints = Some(constraints);
        self
    }

    /// The correlation matrix as a fixed 5×5 array, or `None` for independence.
    ///
    /// Fails if the supplied rows do not cover all five axes.
    pub fn correlation_matrix(&self) -> Result<Option<CorrelationMatrix>, ConfigError> {
        let Some(rows) = &self.correlation else {
            return Ok(None);
        };
        if rows.len() != Axis::COUNT {
            return Err(ConfigError::validation(
                "correlation",
                format!("expected {} rows, got {}", Axis::COUNT, rows.len()),
            ));
        }
        let mut matrix = [[0.0; Axis::COUNT]; Axis::COUNT];
        for (i, row) in rows.iter().enumerate() {
            if row.len() != Axis::COUNT {
                return Err(ConfigError::validation(
                    "correlation",
                    format!("row {} has {} columns, expected {}", i, row.len(), Axis::COUNT),
                ));
            }
            matrix[i].copy_from_slice(row);
        }
        Ok(Some(matrix))
    }

    /// Effective constraint set (defaults to [0, 100] bounds and no rules).
    pub fn effective_constraints(&self) -> ConstraintSet {
        self.constraints.clone().unwrap_or_default()
    }

    /// Reject shapes that make the computation meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::validation("iterations", "must be at least 1"));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(ConfigError::validation(
                "confidence_level",
                "must be strictly between 0.0 and 1.0",
            ));
        }
        if self.batch_size == 0 {
            return Err(ConfigError::validation("batch_size", "must be at least 1"));
        }
        for (axis, vol) in self.volatility.iter() {
            if !(vol.is_finite() && *vol > 0.0) {
                return Err(ConfigError::validation(
                    "volatility",
                    format!("{axis} must be a positive finite number, got {vol}"),
                ));
            }
        }
        if let Some(constraints) = &self.constraints {
            for axis in Axis::ALL {
                let (min, max) = constraints.bounds(axis);
                if !(min <= max) {
                    return Err(ConfigError::validation(
                        "constraints",
                        format!("{axis} min {min} exceeds max {max}"),
                    ));
                }
            }
        }
        if !(0.0..=1.0).contains(&self.recommendation.focus_probability) {
            return Err(ConfigError::validation(
                "recommendation.focus_probability",
                "must be between 0.0 and 1.0",
            ));
        }
        self.correlation_matrix()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let err = SimulationConfig::default().with_iterations(0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "iterations"));
    }

    #[test]
    fn test_short_correlation_matrix_rejected() {
        let mut config = SimulationConfig::default();
        config.correlation = Some(vec![vec![1.0; 5]; 4]);
        assert!(config.validate().is_err());
        config.correlation = Some(vec![vec![1.0; 4]; 5]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_no_correlation_is_valid() {
        let config = SimulationConfig::default().with_correlation(None);
        assert_eq!(config.correlation_matrix().unwrap(), None);
    }

    #[test]
    fn test_confidence_level_bounds() {
        assert!(SimulationConfig::default().with_confidence_level(1.0).validate().is_err());
        assert!(SimulationConfig::default().with_confidence_level(0.0).validate().is_err());
        assert!(SimulationConfig::default().with_confidence_level(0.99).validate().is_ok());
    }

    #[test]
    fn test_non_positive_volatility_rejected() {
        let mut config = SimulationConfig::default();
        config.volatility[Axis::Pt] = 0.0;
        assert!(config.validate().is_err());
    }
}
