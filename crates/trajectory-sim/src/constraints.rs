//! Per-axis bounds and conditional dependency rules, applied once per simulated day.

use trajectory_core::{AxisMap, ConstraintSet};

/// Clamp `value` into `[min, max]`, mapping NaN to `min`.
pub(crate) fn clamp_score(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Applies a [`ConstraintSet`] to a score vector.
#[derive(Debug, Clone, Default)]
pub struct ConstraintEnforcer {
    constraints: ConstraintSet,
}

impl ConstraintEnforcer {
    pub fn new(constraints: ConstraintSet) -> Self {
        Self { constraints }
    }

    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Clamp every axis to its bounds, then run the dependency rules in order.
    ///
    /// Each rule sees the adjustments made by the rules before it. A fired
    /// rule re-clamps only its target axis.
    pub fn apply(&self, scores: AxisMap<f64>) -> AxisMap<f64> {
        let mut out = scores.map(|axis, v| {
            let (min, max) = self.constraints.bounds(axis);
            clamp_score(*v, min, max)
        });

        for rule in &self.constraints.rules {
            if rule
                .comparison
                .holds(out[rule.condition_axis], rule.threshold)
            {
                let (min, max) = self.constraints.bounds(rule.target_axis);
                out[rule.target_axis] = clamp_score(out[rule.target_axis] + rule.delta, min, max);
            }
        }
        out
    }
}
