//! Simulation output types: scenarios, statistics, risk, and recommendations.

use serde::{Deserialize, Serialize};
use trajectory_core::{Axis, AxisMap};

/// One simulated day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub day: u32,
    /// Scores after the day's step, clamp, and constraint rules.
    pub scores: AxisMap<f64>,
    /// `|Δ| / max(previous, 1)` per axis; zero on day 0.
    pub daily_volatility: AxisMap<f64>,
}

/// Category assigned to a completed scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioCategory {
    Best,
    Worst,
    Likely,
    Outlier,
}

impl ScenarioCategory {
    pub const ALL: [ScenarioCategory; 4] = [Self::Best, Self::Worst, Self::Likely, Self::Outlier];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Best => "best",
            Self::Worst => "worst",
            Self::Likely => "likely",
            Self::Outlier => "outlier",
        }
    }
}

impl std::fmt::Display for ScenarioCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One full Monte Carlo iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub iteration: u32,
    /// Day 0 (the unmodified initial state) through day = horizon.
    pub timeline: Vec<TimePoint>,
    pub final_scores: AxisMap<f64>,
    /// Geometric mean of per-axis densities, set by the classifier.
    pub probability: f64,
    /// Set by the classifier; `Likely` until then.
    pub category: ScenarioCategory,
}

impl Scenario {
    /// Mean of the five final axis scores.
    pub fn overall_score(&self) -> f64 {
        self.final_scores.values().sum::<f64>() / Axis::COUNT as f64
    }
}

/// Number of scenarios per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub best: usize,
    pub worst: usize,
    pub likely: usize,
    pub outlier: usize,
}

impl CategoryCounts {
    pub fn record(&mut self, category: ScenarioCategory) {
        match category {
            ScenarioCategory::Best => self.best += 1,
            ScenarioCategory::Worst => self.worst += 1,
            ScenarioCategory::Likely => self.likely += 1,
            ScenarioCategory::Outlier => self.outlier += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.best + self.worst + self.likely + self.outlier
    }
}

/// P5/P25/P50/P75/P95 by linear interpolation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Percentiles {
    pub p5: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p95: f64,
}

impl Percentiles {
    /// Validate the ordering invariant: p5 <= p25 <= p50 <= p75 <= p95.
    pub fn is_monotonic(&self) -> bool {
        self.p5 <= self.p25 && self.p25 <= self.p50 && self.p50 <= self.p75 && self.p75 <= self.p95
    }
}

/// Distribution of one axis's final scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisStatistics {
    pub mean: f64,
    pub median: f64,
    /// Most frequent nearest-integer bucket.
    pub mode: f64,
    /// Population variance.
    pub variance: f64,
    pub std_dev: f64,
    pub skewness: f64,
    /// Excess kurtosis.
    pub kurtosis: f64,
    pub min: f64,
    pub max: f64,
    pub percentiles: Percentiles,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionStatistics {
    pub axes: AxisMap<AxisStatistics>,
    pub sample_size: usize,
}

/// Fraction of final scores at or above `target`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetProbability {
    pub target: f64,
    pub probability: f64,
}

/// Empirical percentile interval at `level`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub level: f64,
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Probabilities of named cross-axis conditions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct JointProbabilities {
    pub all_above_70: f64,
    pub all_above_80: f64,
    pub any_below_60: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityDistribution {
    pub targets: AxisMap<Vec<TargetProbability>>,
    pub joint: JointProbabilities,
    pub confidence_intervals: AxisMap<ConfidenceInterval>,
}

impl ProbabilityDistribution {
    /// Probability of reaching `target` on `axis`, if that target was evaluated.
    pub fn probability_at(&self, axis: Axis, target: f64) -> Option<f64> {
        self.targets[axis]
            .iter()
            .find(|t| (t.target - target).abs() < f64::EPSILON)
            .map(|t| t.probability)
    }
}

/// Risk figures for one axis, relative to its initial score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisRisk {
    /// Loss in score points at the confidence-level tail.
    pub value_at_risk: f64,
    /// Mean loss beyond VaR, in score points.
    pub conditional_value_at_risk: f64,
    /// Percentage drop over the sorted final-score sample, peak seeded at the initial score.
    pub max_drawdown: f64,
    /// Mean chronological max drawdown along scenario timelines, in percent.
    pub path_max_drawdown: f64,
    pub sharpe_ratio: f64,
    pub beta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    pub axes: AxisMap<AxisRisk>,
    /// Mean absolute pairwise correlation of final scores.
    pub correlation_risk: f64,
    pub confidence_level: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Hedge,
    Focus,
    Monitor,
    Optimize,
}

/// Impact level; ordering is `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

/// Serializes as `"overall"` or `{"axis": "GO"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationScope {
    Axis(Axis),
    Overall,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub scope: RecommendationScope,
    pub action: String,
    pub impact: ImpactLevel,
    /// In [0.0, 1.0].
    pub confidence: f64,
}

/// Bookkeeping for a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub iterations: u32,
    pub time_horizon: u32,
    pub batches: usize,
    /// Base seed actually used; rerunning with it reproduces the result.
    pub seed: u64,
    pub duration_ms: u64,
    pub category_counts: CategoryCounts,
}

/// Complete simulation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub scenarios: Vec<Scenario>,
    pub statistics: DistributionStatistics,
    pub probabilities: ProbabilityDistribution,
    pub risk: RiskMetrics,
    pub recommendations: Vec<Recommendation>,
    pub summary: RunSummary,
}
