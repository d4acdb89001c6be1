//! Seeded random variates: normal (Box-Muller), uniform, exponential.
//!
//! Each scenario owns its own source, derived from the run's base seed and
//! the iteration index, so results do not depend on which worker thread
//! generated which scenario.

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of independent random variates for one scenario.
#[derive(Debug, Clone)]
pub struct RandomVariateSource {
    rng: ChaCha8Rng,
}

impl RandomVariateSource {
    /// Create a source from an explicit seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Independent stream for one iteration of a run seeded with `base_seed`.
    pub fn for_iteration(base_seed: u64, iteration: u32) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(base_seed);
        rng.set_stream(u64::from(iteration));
        Self { rng }
    }

    /// Draw a fresh base seed from OS entropy.
    pub fn entropy_seed() -> u64 {
        rand::random()
    }

    /// Uniform in [0, 1).
    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Uniform in [min, max).
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.unit()
    }

    /// Normal variate via Box-Muller. Consumes two uniforms per call.
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        // 1 - U lies in (0, 1], so the logarithm is always finite.
        let u1 = 1.0 - self.unit();
        let u2 = self.unit();
        let z = (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos();
        mean + std_dev * z
    }

    pub fn standard_normal(&mut self) -> f64 {
        self.normal(0.0, 1.0)
    }

    /// Exponential variate with the given rate. Non-positive rates yield 0.
    pub fn exponential(&mut self, rate: f64) -> f64 {
        if !(rate > 0.0) {
            return 0.0;
        }
        -(1.0 - self.unit()).ln() / rate
    }
}
