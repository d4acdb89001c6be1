//! Cholesky-style factorization of the axis correlation matrix.
//!
//! Produces a lower-triangular `L` with `L * L^T ≈ C`. Negative radicands
//! clamp to zero and zero pivots divide as 1, so a matrix that is not
//! positive definite still yields a usable (approximate) transform.

use trajectory_core::config::CorrelationMatrix;
use trajectory_core::tracing::metrics;
use trajectory_core::Axis;

use crate::rng::RandomVariateSource;

const N: usize = Axis::COUNT;

/// Turns independent standard normals into correlated ones.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationTransform {
    lower: CorrelationMatrix,
    clamped_radicands: usize,
}

impl CorrelationTransform {
    /// Identity transform: axes move independently.
    pub fn identity() -> Self {
        let mut lower = [[0.0; N]; N];
        for (i, row) in lower.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self {
            lower,
            clamped_radicands: 0,
        }
    }

    /// Factor `matrix`, or fall back to the identity when `None`.
    pub fn new(matrix: Option<&CorrelationMatrix>) -> Self {
        match matrix {
            Some(m) => Self::from_matrix(m),
            None => Self::identity(),
        }
    }

    /// Row-by-row factorization of a correlation matrix.
    ///
    /// Non-finite entries are read as 0 off the diagonal and 1 on it.
    pub fn from_matrix(matrix: &CorrelationMatrix) -> Self {
        let entry = |i: usize, j: usize| {
            let v = matrix[i][j];
            match (v.is_finite(), i == j) {
                (true, _) => v,
                (false, true) => 1.0,
                (false, false) => 0.0,
            }
        };

        let mut lower = [[0.0; N]; N];
        let mut clamped_radicands = 0;
        for i in 0..N {
            for j in 0..=i {
                let sum: f64 = (0..j).map(|k| lower[i][k] * lower[j][k]).sum();
                if i == j {
                    let radicand = entry(i, i) - sum;
                    if radicand < 0.0 {
                        clamped_radicands += 1;
                    }
                    lower[i][i] = radicand.max(0.0).sqrt();
                } else {
                    let pivot = if lower[j][j] == 0.0 { 1.0 } else { lower[j][j] };
                    lower[i][j] = (entry(i, j) - sum) / pivot;
                }
            }
        }

        if clamped_radicands > 0 {
            tracing::warn!(
                { metrics::CLAMPED_RADICANDS } = clamped_radicands,
                "correlation matrix is not positive definite; using clamped factor"
            );
        }

        Self {
            lower,
            clamped_radicands,
        }
    }

    /// The lower-triangular factor.
    pub fn lower(&self) -> &CorrelationMatrix {
        &self.lower
    }

    /// Number of diagonal radicands that were negative and clamped to zero.
    pub fn clamped_radicands(&self) -> usize {
        self.clamped_radicands
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// `L * z`.
    pub fn apply(&self, z: &[f64; N]) -> [f64; N] {
        let mut out = [0.0; N];
        for (i, value) in out.iter_mut().enumerate() {
            *value = (0..=i).map(|k| self.lower[i][k] * z[k]).sum();
        }
        out
    }

    /// Draw one vector of correlated standard normals.
    pub fn sample(&self, rng: &mut RandomVariateSource) -> [f64; N] {
        let z: [f64; N] = std::array::from_fn(|_| rng.standard_normal());
        self.apply(&z)
    }

    /// `L * L^T`, the correlation matrix this factor actually reproduces.
    pub fn reconstruct(&self) -> CorrelationMatrix {
        let mut out = [[0.0; N]; N];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = (0..N).map(|k| self.lower[i][k] * self.lower[j][k]).sum();
            }
        }
        out
    }
}

impl Default for CorrelationTransform {
    fn default() -> Self {
        Self::identity()
    }
}
