//! Per-axis bounds and conditional dependency rules.

use serde::{Deserialize, Serialize};

use crate::axis::{Axis, AxisMap};
use crate::constants::{APPROX_EQUAL_TOLERANCE, SCORE_MAX, SCORE_MIN};

/// Comparison applied to the condition axis of a [`DependencyRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    GreaterThan,
    LessThan,
    /// Within [`APPROX_EQUAL_TOLERANCE`] of the threshold.
    ApproxEqual,
}

impl Comparison {
    pub fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::GreaterThan => value > threshold,
            Self::LessThan => value < threshold,
            Self::ApproxEqual => (value - threshold).abs() <= APPROX_EQUAL_TOLERANCE,
        }
    }
}

/// "If `condition_axis` `comparison` `threshold`, add `delta` to `target_axis`."
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyRule {
    pub condition_axis: Axis,
    pub comparison: Comparison,
    pub threshold: f64,
    pub target_axis: Axis,
    pub delta: f64,
}

/// Bounds and dependency rules applied after every simulated day.
///
/// Rules run in declaration order; later rules observe earlier adjustments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintSet {
    pub min: AxisMap<f64>,
    pub max: AxisMap<f64>,
    pub rules: Vec<DependencyRule>,
}

impl ConstraintSet {
    /// `(min, max)` for one axis.
    pub fn bounds(&self, axis: Axis) -> (f64, f64) {
        (self.min[axis], self.max[axis])
    }

    pub fn with_bounds(mut self, axis: Axis, min: f64, max: f64) -> Self {
        self.min[axis] = min;
        self.max[axis] = max;
        self
    }

    pub fn with_rule(mut self, rule: DependencyRule) -> Self {
        self.rules.push(rule);
        self
    }
}

impl Default for ConstraintSet {
    fn default() -> Self {
        Self {
            min: AxisMap::new([SCORE_MIN; Axis::COUNT]),
            max: AxisMap::new([SCORE_MAX; Axis::COUNT]),
            rules: Vec::new(),
        }
    }
}
