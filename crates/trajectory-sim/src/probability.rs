//! Target, joint, and confidence-interval probabilities over final scores.

use trajectory_core::constants::FOCUS_TARGET;
use trajectory_core::{Axis, AxisMap};

use crate::statistics::sorted;
use crate::types::{ConfidenceInterval, JointProbabilities, ProbabilityDistribution, TargetProbability};

/// Computes a [`ProbabilityDistribution`] from per-axis final-score samples.
#[derive(Debug, Clone)]
pub struct ProbabilityAnalyzer {
    targets: Vec<f64>,
    confidence_level: f64,
}

impl ProbabilityAnalyzer {
    /// `targets` are evaluated in ascending order; the focus target is always included.
    pub fn new(targets: &[f64], confidence_level: f64) -> Self {
        let mut targets: Vec<f64> = targets.iter().copied().filter(|t| t.is_finite()).collect();
        targets.push(FOCUS_TARGET);
        targets.sort_by(f64::total_cmp);
        targets.dedup();
        Self {
            targets,
            confidence_level,
        }
    }

    pub fn targets(&self) -> &[f64] {
        &self.targets
    }

    pub fn analyze(&self, samples: &AxisMap<Vec<f64>>) -> ProbabilityDistribution {
        ProbabilityDistribution {
            targets: samples.map(|_, values| {
                self.targets
                    .iter()
                    .map(|&target| TargetProbability {
                        target,
                        probability: fraction(values.len(), values.iter().filter(|&&v| v >= target).count()),
                    })
                    .collect()
            }),
            joint: joint_probabilities(samples),
            confidence_intervals: samples.map(|_, values| self.confidence_interval(values)),
        }
    }

    /// Empirical interval from the sorted sample at the configured level.
    pub fn confidence_interval(&self, values: &[f64]) -> ConfidenceInterval {
        let level = self.confidence_level;
        if values.is_empty() {
            return ConfidenceInterval {
                level,
                lower: 0.0,
                upper: 0.0,
            };
        }
        let sorted = sorted(values);
        let n = sorted.len();
        let last = n - 1;
        let lower_idx = ((n as f64 * (1.0 - level) / 2.0).floor() as usize).min(last);
        let upper_idx = ((n as f64 * (1.0 + level) / 2.0).floor() as usize).min(last);
        ConfidenceInterval {
            level,
            lower: sorted[lower_idx],
            upper: sorted[upper_idx],
        }
    }
}

fn fraction(total: usize, hits: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}

/// Scenario-wise conditions across all five axes. Thresholds are strict.
fn joint_probabilities(samples: &AxisMap<Vec<f64>>) -> JointProbabilities {
    let n = samples[Axis::Go].len();
    let row = |i: usize| Axis::ALL.map(|axis| samples[axis][i]);
    let (mut above_70, mut above_80, mut below_60) = (0, 0, 0);
    for i in 0..n {
        let scores = row(i);
        if scores.iter().all(|&v| v > 70.0) {
            above_70 += 1;
        }
        if scores.iter().all(|&v| v > 80.0) {
            above_80 += 1;
        }
        if scores.iter().any(|&v| v < 60.0) {
            below_60 += 1;
        }
    }
    JointProbabilities {
        all_above_70: fraction(n, above_70),
        all_above_80: fraction(n, above_80),
        any_below_60: fraction(n, below_60),
    }
}
