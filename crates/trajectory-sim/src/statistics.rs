//! Distribution statistics over the final scores of a run.
//!
//! All moments are population moments. Degenerate samples (single value,
//! zero spread) report 0 for spread and shape rather than NaN.

use std::collections::HashMap;

use trajectory_core::{Axis, AxisMap};

use crate::types::{AxisStatistics, DistributionStatistics, Percentiles, Scenario};

/// Per-axis final scores in scenario order.
pub fn final_samples(scenarios: &[Scenario]) -> AxisMap<Vec<f64>> {
    AxisMap::from_fn(|axis| scenarios.iter().map(|s| s.final_scores[axis]).collect())
}

/// Ascending copy of `values`.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(f64::total_cmp);
    out
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance; exactly 0 for a constant sample.
pub fn variance(values: &[f64]) -> f64 {
    if is_constant(values) {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Empty, or every value identical. A repeated fraction such as 73.4 does not
/// average back to itself exactly.
fn is_constant(values: &[f64]) -> bool {
    match values.split_first() {
        Some((first, rest)) => rest.iter().all(|v| v == first),
        None => true,
    }
}

/// Population covariance of two equal-length samples.
pub fn covariance(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n == 0 {
        return 0.0;
    }
    let (ma, mb) = (mean(&a[..n]), mean(&b[..n]));
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - ma) * (y - mb))
        .sum::<f64>()
        / n as f64
}

/// Pearson correlation; 0 when either sample has no spread.
pub fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let denom = (variance(a) * variance(b)).sqrt();
    if denom > 0.0 && denom.is_finite() {
        (covariance(a, b) / denom).clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// `p`-th percentile (0-100) by linear interpolation on an ascending sample.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        n => {
            let pos = (p / 100.0).clamp(0.0, 1.0) * (n - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = pos.ceil() as usize;
            let frac = pos - lo as f64;
            sorted[lo] + (sorted[hi] - sorted[lo]) * frac
        }
    }
}

fn median(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    match n {
        0 => 0.0,
        _ if n % 2 == 0 => (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0,
        _ => sorted[n / 2],
    }
}

/// Most frequent nearest-integer bucket; ties go to the bucket seen first.
fn approximate_mode(values: &[f64]) -> f64 {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for v in values {
        *counts.entry(v.round() as i64).or_insert(0) += 1;
    }
    let mut best: Option<(i64, usize)> = None;
    for v in values {
        let bucket = v.round() as i64;
        let count = counts[&bucket];
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((bucket, count));
        }
    }
    best.map_or(0.0, |(bucket, _)| bucket as f64)
}

impl AxisStatistics {
    /// Summarize one sample (any order).
    pub fn from_sample(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let sorted = sorted(values);
        let mean = if is_constant(values) { sorted[0] } else { mean(values) };
        let variance = variance(values);
        let std_dev = variance.sqrt();

        let (skewness, kurtosis) = if std_dev > 0.0 {
            let n = values.len() as f64;
            let m3 = values.iter().map(|x| (x - mean).powi(3)).sum::<f64>() / n;
            let m4 = values.iter().map(|x| (x - mean).powi(4)).sum::<f64>() / n;
            (m3 / std_dev.powi(3), m4 / std_dev.powi(4) - 3.0)
        } else {
            (0.0, 0.0)
        };

        Self {
            mean,
            median: median(&sorted),
            mode: approximate_mode(values),
            variance,
            std_dev,
            skewness,
            kurtosis,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            percentiles: Percentiles {
                p5: percentile(&sorted, 5.0),
                p25: percentile(&sorted, 25.0),
                p50: percentile(&sorted, 50.0),
                p75: percentile(&sorted, 75.0),
                p95: percentile(&sorted, 95.0),
            },
        }
    }
}

impl DistributionStatistics {
    /// Statistics for every axis over per-axis final-score samples.
    pub fn compute(samples: &AxisMap<Vec<f64>>) -> Self {
        Self {
            axes: samples.map(|_, values| AxisStatistics::from_sample(values)),
            sample_size: samples[Axis::Go].len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile_linear_interpolation() {
        let s = [10.0, 20.0, 30.0, 40.0, 50.0];
        assert_eq!(percentile(&s, 0.0), 10.0);
        assert_eq!(percentile(&s, 50.0), 30.0);
        assert_eq!(percentile(&s, 100.0), 50.0);
        assert!((percentile(&s, 5.0) - 12.0).abs() < 1e-12);
        assert!((percentile(&s, 95.0) - 48.0).abs() < 1e-12);
    }

    #[test]
    fn test_median_even_and_odd() {
        let even = AxisStatistics::from_sample(&[4.0, 1.0, 3.0, 2.0]);
        assert_eq!(even.median, 2.5);
        let odd = AxisStatistics::from_sample(&[5.0, 1.0, 3.0]);
        assert_eq!(odd.median, 3.0);
    }

    #[test]
    fn test_mode_first_encountered_wins_ties() {
        // Buckets: 70 (x2), 72 (x2); 72 is encountered first.
        let stats = AxisStatistics::from_sample(&[71.6, 69.8, 72.2, 70.1, 50.0]);
        assert_eq!(stats.mode, 72.0);
    }

    #[test]
    fn test_mode_most_frequent_bucket() {
        let stats = AxisStatistics::from_sample(&[10.2, 55.0, 54.9, 55.3, 10.4]);
        assert_eq!(stats.mode, 55.0);
    }

    #[test]
    fn test_population_moments() {
        let stats = AxisStatistics::from_sample(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.variance, 4.0);
        assert_eq!(stats.std_dev, 2.0);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
    }

    #[test]
    fn test_skewness_sign() {
        let right = AxisStatistics::from_sample(&[1.0, 1.0, 1.0, 2.0, 10.0]);
        assert!(right.skewness > 0.0);
        let left = AxisStatistics::from_sample(&[10.0, 10.0, 10.0, 9.0, 1.0]);
        assert!(left.skewness < 0.0);
    }

    #[test]
    fn test_single_value_is_degenerate_not_nan() {
        let stats = AxisStatistics::from_sample(&[73.4]);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.skewness, 0.0);
        assert_eq!(stats.kurtosis, 0.0);
        assert_eq!(stats.median, 73.4);
        assert_eq!(stats.percentiles.p5, 73.4);
        assert_eq!(stats.percentiles.p95, 73.4);
    }

    #[test]
    fn test_repeated_fraction_has_no_spread_or_shape() {
        let stats = AxisStatistics::from_sample(&[73.4; 7]);
        assert_eq!(stats.mean, 73.4);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.skewness, 0.0);
        assert_eq!(stats.kurtosis, 0.0);
        assert_eq!(variance(&[0.1; 3]), 0.0);
    }

    #[test]
    fn test_empty_sample_is_zeroed() {
        assert_eq!(AxisStatistics::from_sample(&[]), AxisStatistics::default());
    }

    #[test]
    fn test_pearson_bounds_and_degenerate() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [2.0, 4.0, 6.0, 8.0];
        let c = [8.0, 6.0, 4.0, 2.0];
        assert!((pearson(&a, &b) - 1.0).abs() < 1e-12);
        assert!((pearson(&a, &c) + 1.0).abs() < 1e-12);
        assert_eq!(pearson(&a, &[5.0; 4]), 0.0);
    }
}
