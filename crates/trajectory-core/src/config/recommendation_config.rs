//! Trigger thresholds for the recommendation rules.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CORRELATION_RISK_THRESHOLD, DEFAULT_FOCUS_PROBABILITY, DEFAULT_GROWTH_UPSIDE,
    DEFAULT_VAR_THRESHOLD, DEFAULT_VOLATILITY_THRESHOLD,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationThresholds {
    /// VaR in score points above which a hedge is recommended. Default: 10.
    pub var_threshold: f64,
    /// Probability of reaching 80 below which focus is recommended. Default: 0.30.
    pub focus_probability: f64,
    /// Realized annualized volatility above which monitoring is recommended. Default: 0.18.
    pub volatility_threshold: f64,
    /// Mean absolute pairwise correlation above which diversification is recommended. Default: 0.5.
    pub correlation_risk_threshold: f64,
    /// Upside (p95 minus current) that flags a growth opportunity. Default: 10.
    pub growth_upside: f64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            var_threshold: DEFAULT_VAR_THRESHOLD,
            focus_probability: DEFAULT_FOCUS_PROBABILITY,
            volatility_threshold: DEFAULT_VOLATILITY_THRESHOLD,
            correlation_risk_threshold: DEFAULT_CORRELATION_RISK_THRESHOLD,
            growth_upside: DEFAULT_GROWTH_UPSIDE,
        }
    }
}
