//! Scenario classification and likelihood weighting.
//!
//! Categories come from the distribution of overall scores (mean of the five
//! final scores): top 5% is `best`, bottom 5% is `worst`, beyond
//! [`OUTLIER_SIGMA`] standard deviations is `outlier`, everything else is
//! `likely`. Each scenario's `probability` is the geometric mean of its
//! per-axis Gaussian densities under the run's fitted mean and deviation.

use statrs::distribution::{Continuous, Normal};
use trajectory_core::constants::{DENSITY_FLOOR, OUTLIER_SIGMA};
use trajectory_core::{Axis, AxisMap};

use crate::statistics::{mean, percentile, sorted, variance};
use crate::types::{AxisStatistics, CategoryCounts, DistributionStatistics, Scenario, ScenarioCategory};

/// Overall-score boundaries for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverallBoundaries {
    pub p5: f64,
    pub p95: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl OverallBoundaries {
    pub fn from_scenarios(scenarios: &[Scenario]) -> Self {
        let overall: Vec<f64> = scenarios.iter().map(Scenario::overall_score).collect();
        let table = sorted(&overall);
        Self {
            p5: percentile(&table, 5.0),
            p95: percentile(&table, 95.0),
            mean: mean(&overall),
            std_dev: variance(&overall).sqrt(),
        }
    }

    /// Category for one overall score. Best and worst take precedence over outlier.
    pub fn categorize(&self, overall: f64) -> ScenarioCategory {
        if overall >= self.p95 {
            ScenarioCategory::Best
        } else if overall <= self.p5 {
            ScenarioCategory::Worst
        } else if self.std_dev > 0.0 && (overall - self.mean).abs() > OUTLIER_SIGMA * self.std_dev {
            ScenarioCategory::Outlier
        } else {
            ScenarioCategory::Likely
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioClassifier;

impl ScenarioClassifier {
    /// Assign a category and probability to every scenario in place.
    pub fn classify(&self, scenarios: &mut [Scenario], stats: &DistributionStatistics) -> CategoryCounts {
        let bounds = OverallBoundaries::from_scenarios(scenarios);
        let densities = stats.axes.map(|_, s| AxisDensity::fit(s));

        let mut counts = CategoryCounts::default();
        for scenario in scenarios.iter_mut() {
            scenario.category = bounds.categorize(scenario.overall_score());
            scenario.probability = joint_density(&densities, &scenario.final_scores);
            counts.record(scenario.category);
        }
        counts
    }
}

/// Gaussian fitted to one axis; `None` when the axis has no spread.
#[derive(Debug, Clone)]
struct AxisDensity(Option<Normal>);

impl AxisDensity {
    fn fit(stats: &AxisStatistics) -> Self {
        if !(stats.std_dev > 0.0) {
            return Self(None);
        }
        match Normal::new(stats.mean, stats.std_dev) {
            Ok(normal) => Self(Some(normal)),
            Err(_) => Self(None),
        }
    }

    fn pdf(&self, x: f64) -> f64 {
        match &self.0 {
            Some(normal) => normal.pdf(x),
            None => 1.0,
        }
    }
}

/// `exp(mean(ln(max(density, floor))))` across the five axes.
fn joint_density(densities: &AxisMap<AxisDensity>, finals: &AxisMap<f64>) -> f64 {
    let log_sum: f64 = Axis::ALL
        .iter()
        .map(|&axis| densities[axis].pdf(finals[axis]).max(DENSITY_FLOOR).ln())
        .sum();
    (log_sum / Axis::COUNT as f64).exp()
}
