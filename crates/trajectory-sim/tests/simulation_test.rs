//! End-to-end engine tests: invariants, degenerate inputs, reproducibility,
//! cancellation, and the serialized result shape.

use trajectory_core::events::{BatchCompleteEvent, SimulationEventHandler};
use trajectory_core::{
    Axis, AxisMap, Cancellable, CancellationToken, Comparison, ConstraintSet, DependencyRule,
    SimulationConfig, SimulationError,
};
use trajectory_sim::{run_simulation, run_simulation_with, RecommendationKind, SimulationEngine};

fn example_initial() -> AxisMap<f64> {
    AxisMap::new([75.0, 72.0, 78.0, 70.0, 73.0])
}

#[test]
fn test_example_run_shape_bounds_and_recommendations() {
    let config = SimulationConfig::default()
        .with_iterations(200)
        .with_time_horizon(10)
        .with_seed(42);
    let result = run_simulation(&example_initial(), &config).unwrap();

    assert_eq!(result.scenarios.len(), 200);
    for scenario in &result.scenarios {
        assert_eq!(scenario.timeline.len(), 11);
        for (_, v) in scenario.final_scores.iter() {
            assert!((0.0..=100.0).contains(v));
        }
    }
    // TO (0.25) and EC (0.20) default volatilities sit above the monitor threshold.
    assert!(result
        .recommendations
        .iter()
        .any(|r| matches!(r.kind, RecommendationKind::Monitor | RecommendationKind::Hedge)));
}

#[test]
fn test_bounds_hold_under_extreme_volatility_and_rules() {
    let constraints = ConstraintSet::default()
        .with_bounds(Axis::Pf, 20.0, 90.0)
        .with_rule(DependencyRule {
            condition_axis: Axis::Go,
            comparison: Comparison::GreaterThan,
            threshold: 60.0,
            target_axis: Axis::Pf,
            delta: 40.0,
        });
    let mut config = SimulationConfig::default()
        .with_iterations(100)
        .with_time_horizon(60)
        .with_seed(9)
        .with_constraints(constraints);
    config.volatility = AxisMap::new([3.0; 5]);
    let result = run_simulation(&AxisMap::new([95.0, 5.0, 50.0, 99.0, 1.0]), &config).unwrap();

    for scenario in &result.scenarios {
        for point in &scenario.timeline[1..] {
            for (axis, v) in point.scores.iter() {
                assert!((0.0..=100.0).contains(v), "{axis} out of range: {v}");
            }
            assert!((20.0..=90.0).contains(&point.scores[Axis::Pf]));
        }
    }
}

#[test]
fn test_percentiles_are_monotonic() {
    let config = SimulationConfig::default().with_iterations(300).with_seed(5);
    let result = run_simulation(&example_initial(), &config).unwrap();
    for (axis, stats) in result.statistics.axes.iter() {
        assert!(stats.percentiles.is_monotonic(), "{axis}: {:?}", stats.percentiles);
        assert!(stats.min <= stats.percentiles.p5);
        assert!(stats.percentiles.p95 <= stats.max);
    }
}

#[test]
fn test_single_iteration_is_degenerate_not_panicking() {
    let config = SimulationConfig::default().with_iterations(1).with_seed(1);
    let result = run_simulation(&example_initial(), &config).unwrap();
    assert_eq!(result.scenarios.len(), 1);
    for (_, stats) in result.statistics.axes.iter() {
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.std_dev, 0.0);
    }
    assert_eq!(result.summary.category_counts.total(), 1);
    assert_eq!(result.risk.correlation_risk, 0.0);
}

#[test]
fn test_zero_horizon_keeps_initial_scores() {
    let config = SimulationConfig::default()
        .with_iterations(20)
        .with_time_horizon(0)
        .with_seed(1);
    let result = run_simulation(&example_initial(), &config).unwrap();
    for scenario in &result.scenarios {
        assert_eq!(scenario.timeline.len(), 1);
        assert_eq!(scenario.final_scores, example_initial());
    }
}

#[test]
fn test_zero_horizon_fractional_scores_report_no_shape() {
    let initial = AxisMap::new([73.4, 72.3, 0.1, 70.7, 33.3]);
    let config = SimulationConfig::default()
        .with_iterations(200)
        .with_time_horizon(0)
        .with_seed(5);
    let result = run_simulation(&initial, &config).unwrap();
    for axis in Axis::ALL {
        let stats = &result.statistics.axes[axis];
        assert_eq!(stats.mean, initial[axis]);
        assert_eq!(stats.std_dev, 0.0, "{axis}");
        assert_eq!(stats.skewness, 0.0, "{axis}");
        assert_eq!(stats.kurtosis, 0.0, "{axis}");
        assert_eq!(result.risk.axes[axis].sharpe_ratio, 0.0);
    }
    assert_eq!(result.risk.correlation_risk, 0.0);
    assert!(result.scenarios.iter().all(|s| s.probability == 1.0));
}

#[test]
fn test_independent_axes_have_low_correlation_risk() {
    let config = SimulationConfig::default()
        .with_iterations(5000)
        .with_time_horizon(5)
        .with_correlation(None)
        .with_seed(77);
    let result = run_simulation(&example_initial(), &config).unwrap();
    assert!(
        result.risk.correlation_risk < 0.05,
        "correlation risk {}",
        result.risk.correlation_risk
    );
}

#[test]
fn test_every_scenario_classified_once() {
    let config = SimulationConfig::default().with_iterations(400).with_seed(8);
    let result = run_simulation(&example_initial(), &config).unwrap();
    let counts = result.summary.category_counts;
    assert_eq!(counts.total(), 400);
    assert!(counts.best > 0 && counts.worst > 0 && counts.likely > 0);
    for scenario in &result.scenarios {
        assert!(scenario.probability > 0.0 && scenario.probability.is_finite());
    }
}

#[test]
fn test_var_does_not_decrease_with_confidence() {
    let base = SimulationConfig::default().with_iterations(500).with_seed(21);
    let low = run_simulation(&example_initial(), &base.clone().with_confidence_level(0.90)).unwrap();
    let high = run_simulation(&example_initial(), &base.with_confidence_level(0.99)).unwrap();
    assert_eq!(low.scenarios, high.scenarios);
    for axis in Axis::ALL {
        assert!(
            high.risk.axes[axis].value_at_risk >= low.risk.axes[axis].value_at_risk,
            "{axis}"
        );
    }
}

#[test]
fn test_same_seed_reproduces_across_batch_sizes() {
    let a = SimulationConfig::default()
        .with_iterations(120)
        .with_batch_size(7)
        .with_seed(123);
    let b = a.clone().with_batch_size(120);
    let ra = run_simulation(&example_initial(), &a).unwrap();
    let rb = run_simulation(&example_initial(), &b).unwrap();
    assert_eq!(ra.scenarios, rb.scenarios);
    assert_eq!(ra.statistics, rb.statistics);
    assert_eq!(ra.risk, rb.risk);
    assert_eq!(ra.recommendations, rb.recommendations);
    assert_eq!(ra.summary.seed, 123);
}

#[test]
fn test_cancelled_token_returns_error() {
    let config = SimulationConfig::default().with_iterations(50).with_seed(1);
    let token = CancellationToken::new();
    token.cancel();
    let err = run_simulation_with(
        &example_initial(),
        &config,
        &token,
        &trajectory_core::events::NoOpEventHandler,
    )
    .unwrap_err();
    assert!(matches!(err, SimulationError::Cancelled { .. }));
}

struct CancelAfterFirstBatch(CancellationToken);

impl SimulationEventHandler for CancelAfterFirstBatch {
    fn on_batch_complete(&self, _event: &BatchCompleteEvent) {
        self.0.cancel();
    }
}

#[test]
fn test_cancel_between_batches() {
    let config = SimulationConfig::default()
        .with_iterations(100)
        .with_batch_size(10)
        .with_seed(1);
    let token = CancellationToken::new();
    let handler = CancelAfterFirstBatch(token.clone());
    let err = SimulationEngine::new(config)
        .unwrap()
        .run_with(&example_initial(), &token, &handler)
        .unwrap_err();
    match err {
        SimulationError::Cancelled {
            completed_batches,
            total_batches,
        } => {
            assert_eq!(completed_batches, 1);
            assert_eq!(total_batches, 10);
        }
        other => panic!("expected cancellation, got {other:?}"),
    }
}

#[test]
fn test_invalid_config_is_reported() {
    let config = SimulationConfig::default().with_confidence_level(1.0);
    let err = run_simulation(&example_initial(), &config).unwrap_err();
    assert!(matches!(err, SimulationError::Config(_)));
}

#[test]
fn test_result_serializes_to_json() {
    let config = SimulationConfig::default()
        .with_iterations(50)
        .with_time_horizon(3)
        .with_seed(4);
    let result = run_simulation(&example_initial(), &config).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["scenarios"].as_array().map(Vec::len), Some(50));
    assert!(json["scenarios"][0]["final_scores"]["GO"].is_number());
    assert!(json["statistics"]["axes"]["TO"]["percentiles"]["p95"].is_number());
    assert!(json["risk"]["correlation_risk"].is_number());
    for rec in json["recommendations"].as_array().into_iter().flatten() {
        assert!(rec["type"].is_string());
        assert!(rec["impact"].is_string());
    }
}
