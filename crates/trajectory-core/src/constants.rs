//! Shared constants and default tables for the Trajectory engine.
//!
//! Per-axis tables are in [`Axis::ALL`](crate::Axis::ALL) order: GO, EC, PT, PF, TO.

/// Trajectory version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lower bound of every axis score.
pub const SCORE_MIN: f64 = 0.0;

/// Upper bound of every axis score.
pub const SCORE_MAX: f64 = 100.0;

/// Days per year used to discretize annualized drift and volatility.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Default number of Monte Carlo iterations.
pub const DEFAULT_ITERATIONS: u32 = 1000;

/// Default projection horizon in days.
pub const DEFAULT_TIME_HORIZON_DAYS: u32 = 30;

/// Default confidence level for VaR and confidence intervals.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Default number of scenarios per batch.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Default annualized volatility per axis.
pub const DEFAULT_VOLATILITY: [f64; 5] = [0.15, 0.20, 0.15, 0.12, 0.25];

/// Default annualized drift per axis.
pub const DEFAULT_DRIFT: [f64; 5] = [0.05, 0.03, 0.04, 0.06, 0.02];

/// Default axis correlation matrix (positive definite).
pub const DEFAULT_CORRELATION: [[f64; 5]; 5] = [
    [1.00, 0.40, 0.30, 0.50, 0.20],
    [0.40, 1.00, 0.35, 0.30, 0.25],
    [0.30, 0.35, 1.00, 0.40, 0.30],
    [0.50, 0.30, 0.40, 1.00, 0.20],
    [0.20, 0.25, 0.30, 0.20, 1.00],
];

/// Default target thresholds for probability-of-target estimates.
pub const DEFAULT_TARGET_THRESHOLDS: [f64; 4] = [70.0, 80.0, 85.0, 90.0];

/// Target used by the focus recommendation.
pub const FOCUS_TARGET: f64 = 80.0;

/// Absolute tolerance for approximately-equal rule conditions.
pub const APPROX_EQUAL_TOLERANCE: f64 = 0.1;

/// Floor applied to Gaussian densities before taking a logarithm.
pub const DENSITY_FLOOR: f64 = 1e-10;

/// Distance from the mean, in standard deviations, beyond which a scenario is an outlier.
pub const OUTLIER_SIGMA: f64 = 2.0;

/// Default VaR (score points) above which a hedge is recommended.
pub const DEFAULT_VAR_THRESHOLD: f64 = 10.0;

/// Default P(score >= 80) below which focus is recommended.
pub const DEFAULT_FOCUS_PROBABILITY: f64 = 0.30;

/// Default realized annualized volatility above which monitoring is recommended.
pub const DEFAULT_VOLATILITY_THRESHOLD: f64 = 0.18;

/// Default correlation risk above which diversification is recommended.
pub const DEFAULT_CORRELATION_RISK_THRESHOLD: f64 = 0.5;

/// Default upside (p95 minus current, score points) that flags a growth opportunity.
pub const DEFAULT_GROWTH_UPSIDE: f64 = 10.0;
