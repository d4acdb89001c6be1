//! Rule-based recommendations from the aggregated run.
//!
//! Every rule is evaluated independently and emits at most one
//! recommendation per axis (or one overall). Thresholds come from
//! [`RecommendationThresholds`].

use trajectory_core::constants::{DAYS_PER_YEAR, FOCUS_TARGET};
use trajectory_core::{Axis, AxisMap, RecommendationThresholds};

use crate::types::{
    DistributionStatistics, ImpactLevel, ProbabilityDistribution, Recommendation, RecommendationKind,
    RecommendationScope, RiskMetrics,
};

#[derive(Debug, Clone)]
pub struct RecommendationSynthesizer {
    thresholds: RecommendationThresholds,
    confidence_level: f64,
    horizon: u32,
}

impl RecommendationSynthesizer {
    pub fn new(thresholds: RecommendationThresholds, confidence_level: f64, horizon: u32) -> Self {
        Self {
            thresholds,
            confidence_level,
            horizon,
        }
    }

    /// Evaluate every rule and return recommendations ordered by impact, then confidence.
    pub fn synthesize(
        &self,
        initial: &AxisMap<f64>,
        stats: &DistributionStatistics,
        probabilities: &ProbabilityDistribution,
        risk: &RiskMetrics,
    ) -> Vec<Recommendation> {
        let mut out = Vec::new();

        for axis in Axis::ALL {
            let current = initial[axis];
            out.extend(self.hedge(axis, risk.axes[axis].value_at_risk));
            out.extend(self.focus(axis, probabilities.probability_at(axis, FOCUS_TARGET)));
            out.extend(self.monitor(axis, current, stats.axes[axis].std_dev));
            out.extend(self.growth(
                axis,
                current,
                stats.axes[axis].percentiles.p95,
                probabilities.confidence_intervals[axis].lower,
            ));
        }
        out.extend(self.diversify(risk.correlation_risk));

        sort_recommendations(&mut out);
        out
    }

    fn hedge(&self, axis: Axis, var: f64) -> Option<Recommendation> {
        let threshold = self.thresholds.var_threshold;
        if !(var > threshold) {
            return None;
        }
        let impact = if var > 2.0 * threshold {
            ImpactLevel::High
        } else {
            ImpactLevel::Medium
        };
        Some(Recommendation {
            kind: RecommendationKind::Hedge,
            scope: RecommendationScope::Axis(axis),
            action: format!(
                "Hedge {axis} downside: value at risk of {var:.1} points exceeds {threshold:.1}"
            ),
            impact,
            confidence: self.confidence_level.clamp(0.0, 1.0),
        })
    }

    fn focus(&self, axis: Axis, p_target: Option<f64>) -> Option<Recommendation> {
        let p = p_target?;
        let threshold = self.thresholds.focus_probability;
        if !(p < threshold) {
            return None;
        }
        let impact = if p < threshold / 2.0 {
            ImpactLevel::High
        } else {
            ImpactLevel::Medium
        };
        Some(Recommendation {
            kind: RecommendationKind::Focus,
            scope: RecommendationScope::Axis(axis),
            action: format!(
                "Focus on {axis}: only {:.0}% of scenarios reach {FOCUS_TARGET:.0}",
                p * 100.0
            ),
            impact,
            confidence: (1.0 - p).clamp(0.0, 1.0),
        })
    }

    fn monitor(&self, axis: Axis, current: f64, std_dev: f64) -> Option<Recommendation> {
        let realized = realized_volatility(std_dev, current, self.horizon);
        let threshold = self.thresholds.volatility_threshold;
        if !(realized > threshold) {
            return None;
        }
        Some(Recommendation {
            kind: RecommendationKind::Monitor,
            scope: RecommendationScope::Axis(axis),
            action: format!(
                "Monitor {axis} closely: annualized volatility {:.0}% exceeds {:.0}%",
                realized * 100.0,
                threshold * 100.0
            ),
            impact: ImpactLevel::Medium,
            confidence: (0.5 + 0.5 * (1.0 - threshold / realized)).clamp(0.0, 1.0),
        })
    }

    fn growth(&self, axis: Axis, current: f64, p95: f64, ci_lower: f64) -> Option<Recommendation> {
        let upside = p95 - current;
        let threshold = self.thresholds.growth_upside;
        if !(upside > threshold && ci_lower >= current) {
            return None;
        }
        let impact = if upside > 2.0 * threshold {
            ImpactLevel::Medium
        } else {
            ImpactLevel::Low
        };
        Some(Recommendation {
            kind: RecommendationKind::Optimize,
            scope: RecommendationScope::Axis(axis),
            action: format!("Invest in {axis} growth: 95th percentile is {upside:.1} points above current"),
            impact,
            confidence: self.confidence_level.clamp(0.0, 1.0),
        })
    }

    fn diversify(&self, correlation_risk: f64) -> Option<Recommendation> {
        let threshold = self.thresholds.correlation_risk_threshold;
        if !(correlation_risk > threshold) {
            return None;
        }
        Some(Recommendation {
            kind: RecommendationKind::Optimize,
            scope: RecommendationScope::Overall,
            action: format!(
                "Diversify: axes move together (mean absolute correlation {correlation_risk:.2})"
            ),
            impact: ImpactLevel::Medium,
            confidence: correlation_risk.clamp(0.0, 1.0),
        })
    }
}

/// Annualized volatility of the final-score sample relative to the current score.
pub fn realized_volatility(std_dev: f64, current: f64, horizon: u32) -> f64 {
    std_dev / current.max(1.0) * (DAYS_PER_YEAR / f64::from(horizon.max(1))).sqrt()
}

/// Impact descending, then confidence descending.
pub fn sort_recommendations(recs: &mut [Recommendation]) {
    recs.sort_by(|a, b| {
        b.impact
            .cmp(&a.impact)
            .then_with(|| b.confidence.total_cmp(&a.confidence))
    });
}
