use proptest::prelude::*;
use trajectory_core::{AxisMap, ConstraintSet, SimulationConfig};
use trajectory_sim::constraints::ConstraintEnforcer;
use trajectory_sim::correlation::CorrelationTransform;
use trajectory_sim::run_simulation;
use trajectory_sim::statistics::{percentile, sorted};
use trajectory_sim::types::AxisStatistics;

fn score() -> impl Strategy<Value = f64> {
    -50.0..150.0f64
}

fn scores() -> impl Strategy<Value = [f64; 5]> {
    [score(), score(), score(), score(), score()]
}

/// Random symmetric matrix built as `A * A^T`, normalized to a unit diagonal.
fn correlation_matrix() -> impl Strategy<Value = [[f64; 5]; 5]> {
    prop::array::uniform5(prop::array::uniform5(-1.0..1.0f64)).prop_map(|a| {
        let mut c = [[0.0; 5]; 5];
        for i in 0..5 {
            for j in 0..5 {
                c[i][j] = (0..5).map(|k| a[i][k] * a[j][k]).sum::<f64>() + if i == j { 0.5 } else { 0.0 };
            }
        }
        let d: Vec<f64> = (0..5).map(|i| c[i][i].sqrt()).collect();
        for i in 0..5 {
            for j in 0..5 {
                c[i][j] /= d[i] * d[j];
            }
        }
        c
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn final_scores_stay_in_range(initial in scores(), seed in any::<u64>(), vol in 0.01..4.0f64) {
        let mut config = SimulationConfig::default()
            .with_iterations(20)
            .with_time_horizon(15)
            .with_seed(seed);
        config.volatility = AxisMap::new([vol; 5]);
        let result = run_simulation(&AxisMap::new(initial), &config).unwrap();
        prop_assert_eq!(result.scenarios.len(), 20);
        for scenario in &result.scenarios {
            prop_assert_eq!(scenario.timeline.len(), 16);
            for (_, v) in scenario.final_scores.iter() {
                prop_assert!((0.0..=100.0).contains(v), "out of range: {}", v);
            }
        }
    }

    #[test]
    fn enforcer_output_within_bounds(input in scores()) {
        let out = ConstraintEnforcer::new(ConstraintSet::default()).apply(AxisMap::new(input));
        for (_, v) in out.iter() {
            prop_assert!((0.0..=100.0).contains(v));
        }
    }

    #[test]
    fn percentiles_are_monotonic(values in prop::collection::vec(0.0..100.0f64, 1..200)) {
        let stats = AxisStatistics::from_sample(&values);
        prop_assert!(stats.percentiles.is_monotonic(), "{:?}", stats.percentiles);
        prop_assert!(stats.min <= stats.median && stats.median <= stats.max);
    }

    #[test]
    fn percentile_is_within_sample_range(values in prop::collection::vec(-10.0..10.0f64, 1..100), p in 0.0..100.0f64) {
        let s = sorted(&values);
        let v = percentile(&s, p);
        prop_assert!(s[0] <= v && v <= s[s.len() - 1]);
    }

    #[test]
    fn cholesky_reconstructs_positive_definite(matrix in correlation_matrix()) {
        let t = CorrelationTransform::from_matrix(&matrix);
        prop_assert_eq!(t.clamped_radicands(), 0);
        let r = t.reconstruct();
        for i in 0..5 {
            for j in 0..5 {
                prop_assert!((r[i][j] - matrix[i][j]).abs() < 1e-9, "({}, {}): {} vs {}", i, j, r[i][j], matrix[i][j]);
            }
        }
    }
}
