//! Day-by-day path generation for one scenario.
//!
//! Each day every axis takes a discretized geometric-Brownian-motion step:
//! `score *= 1 + drift/365 + vol * z * sqrt(1/365)`, with `z` drawn from
//! the correlated normal vector. Scores are clamped to the score range and
//! then passed through the constraint enforcer.

use trajectory_core::config::CorrelationMatrix;
use trajectory_core::constants::{DAYS_PER_YEAR, SCORE_MAX, SCORE_MIN};
use trajectory_core::{AxisMap, ConstraintSet};

use crate::constraints::{clamp_score, ConstraintEnforcer};
use crate::correlation::CorrelationTransform;
use crate::rng::RandomVariateSource;
use crate::types::{Scenario, ScenarioCategory, TimePoint};

/// Generates scenario timelines. Immutable once built; share it across threads.
#[derive(Debug, Clone)]
pub struct PathSimulator {
    drift: AxisMap<f64>,
    volatility: AxisMap<f64>,
    transform: CorrelationTransform,
    enforcer: ConstraintEnforcer,
}

impl PathSimulator {
    pub fn new(
        drift: AxisMap<f64>,
        volatility: AxisMap<f64>,
        correlation: Option<&CorrelationMatrix>,
        constraints: ConstraintSet,
    ) -> Self {
        Self {
            drift,
            volatility,
            transform: CorrelationTransform::new(correlation),
            enforcer: ConstraintEnforcer::new(constraints),
        }
    }

    pub fn transform(&self) -> &CorrelationTransform {
        &self.transform
    }

    /// Advance every axis by one day.
    pub fn step_day(&self, current: &AxisMap<f64>, rng: &mut RandomVariateSource) -> AxisMap<f64> {
        let z = self.transform.sample(rng);
        let dt_sqrt = (1.0 / DAYS_PER_YEAR).sqrt();
        let stepped = current.map(|axis, score| {
            let daily_return =
                self.drift[axis] / DAYS_PER_YEAR + self.volatility[axis] * z[axis.index()] * dt_sqrt;
            clamp_score(score * (1.0 + daily_return), SCORE_MIN, SCORE_MAX)
        });
        self.enforcer.apply(stepped)
    }

    /// Simulate `horizon` days from `initial`, recording day 0 unmodified.
    pub fn simulate_scenario(
        &self,
        iteration: u32,
        initial: &AxisMap<f64>,
        horizon: u32,
        rng: &mut RandomVariateSource,
    ) -> Scenario {
        let mut timeline = Vec::with_capacity(horizon as usize + 1);
        timeline.push(TimePoint {
            day: 0,
            scores: *initial,
            daily_volatility: AxisMap::default(),
        });

        let mut current = *initial;
        for day in 1..=horizon {
            let next = self.step_day(&current, rng);
            let daily_volatility =
                next.map(|axis, v| (v - current[axis]).abs() / current[axis].max(1.0));
            timeline.push(TimePoint {
                day,
                scores: next,
                daily_volatility,
            });
            current = next;
        }

        Scenario {
            id: format!("scenario-{iteration:06}"),
            iteration,
            timeline,
            final_scores: current,
            probability: 0.0,
            category: ScenarioCategory::Likely,
        }
    }
}
