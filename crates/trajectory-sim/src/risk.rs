//! Financial-style risk metrics per axis, measured against the initial score.
//!
//! VaR, CVaR and the sorted-sample drawdown read the ascending final-score
//! sample. `path_max_drawdown` is the only figure that walks timelines in
//! day order.

use trajectory_core::constants::DAYS_PER_YEAR;
use trajectory_core::{Axis, AxisMap};

use crate::statistics::{covariance, mean, pearson, sorted, variance};
use crate::types::{AxisRisk, RiskMetrics, Scenario};

#[derive(Debug, Clone, Copy)]
pub struct RiskAnalyzer {
    confidence_level: f64,
    horizon: u32,
}

impl RiskAnalyzer {
    pub fn new(confidence_level: f64, horizon: u32) -> Self {
        Self {
            confidence_level,
            horizon,
        }
    }

    pub fn analyze(
        &self,
        initial: &AxisMap<f64>,
        samples: &AxisMap<Vec<f64>>,
        scenarios: &[Scenario],
    ) -> RiskMetrics {
        let returns = samples.map(|axis, values| simple_returns(initial[axis], values));
        let market = average_returns(&returns);

        let axes = samples.map(|axis, values| {
            let sorted = sorted(values);
            let (value_at_risk, conditional_value_at_risk) =
                self.value_at_risk(initial[axis], &sorted);
            AxisRisk {
                value_at_risk,
                conditional_value_at_risk,
                max_drawdown: sorted_sample_drawdown(initial[axis], &sorted),
                path_max_drawdown: mean_path_drawdown(axis, scenarios),
                sharpe_ratio: self.sharpe_ratio(&returns[axis]),
                beta: beta(&returns[axis], &market),
            }
        });

        RiskMetrics {
            axes,
            correlation_risk: correlation_risk(samples),
            confidence_level: self.confidence_level,
        }
    }

    /// `(VaR, CVaR)` in score points for an ascending sample.
    pub fn value_at_risk(&self, initial: f64, sorted: &[f64]) -> (f64, f64) {
        if sorted.is_empty() {
            return (0.0, 0.0);
        }
        let idx = ((sorted.len() as f64 * (1.0 - self.confidence_level)).floor() as usize)
            .min(sorted.len() - 1);
        let var = initial - sorted[idx];
        let tail = &sorted[..idx];
        let cvar = if tail.is_empty() {
            initial - sorted[idx]
        } else {
            initial - mean(tail)
        };
        (var, cvar)
    }

    /// Annualized mean return over annualized return deviation; 0 without spread.
    pub fn sharpe_ratio(&self, returns: &[f64]) -> f64 {
        let std = variance(returns).sqrt();
        if !(std > 0.0) {
            return 0.0;
        }
        let periods = DAYS_PER_YEAR / f64::from(self.horizon.max(1));
        (mean(returns) * periods) / (std * periods.sqrt())
    }
}

/// `(final - initial) / initial`, with the denominator floored at 1.
fn simple_returns(initial: f64, finals: &[f64]) -> Vec<f64> {
    let base = initial.max(1.0);
    finals.iter().map(|f| (f - initial) / base).collect()
}

fn average_returns(returns: &AxisMap<Vec<f64>>) -> Vec<f64> {
    let n = returns[Axis::Go].len();
    (0..n)
        .map(|i| returns.values().map(|r| r[i]).sum::<f64>() / Axis::COUNT as f64)
        .collect()
}

/// Sensitivity to the cross-axis average return; 1 when the average is flat.
fn beta(returns: &[f64], market: &[f64]) -> f64 {
    let market_var = variance(market);
    if market_var > 0.0 {
        covariance(returns, market) / market_var
    } else {
        1.0
    }
}

/// Largest percentage drop walking the ascending sample with the peak seeded
/// at the initial score.
pub fn sorted_sample_drawdown(initial: f64, sorted: &[f64]) -> f64 {
    max_drawdown(initial, sorted.iter().copied())
}

/// Mean over scenarios of each timeline's chronological max drawdown.
pub fn mean_path_drawdown(axis: Axis, scenarios: &[Scenario]) -> f64 {
    let per_path: Vec<f64> = scenarios
        .iter()
        .map(|s| {
            let mut days = s.timeline.iter().map(|p| p.scores[axis]);
            let first = days.next().unwrap_or(0.0);
            max_drawdown(first, days)
        })
        .collect();
    mean(&per_path)
}

fn max_drawdown(start: f64, series: impl Iterator<Item = f64>) -> f64 {
    let mut peak = start;
    let mut worst = 0.0_f64;
    for v in series {
        peak = peak.max(v);
        if peak > 0.0 {
            worst = worst.max((peak - v) / peak * 100.0);
        }
    }
    worst
}

/// Mean absolute Pearson correlation over the ten axis pairs.
pub fn correlation_risk(samples: &AxisMap<Vec<f64>>) -> f64 {
    let (sum, count) = Axis::pairs().fold((0.0, 0usize), |(sum, count), (a, b)| {
        (sum + pearson(&samples[a], &samples[b]).abs(), count + 1)
    });
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
