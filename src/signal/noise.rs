//! Injectable noise sources
//!
//! The signal buffer never draws random numbers itself: callers hand it a
//! [`NoiseSource`], so a run is exactly as deterministic as the source they
//! supply. [`GaussianNoise`] is the stock implementation; tests can swap in
//! any stub.
//!
//! # Example
//!
//! ```
//! use spectral_edit::signal::{GaussianNoise, NoiseSource};
//!
//! let mut a = GaussianNoise::seeded(7);
//! let mut b = GaussianNoise::seeded(7);
//! assert_eq!(a.next_gaussian(0.0, 1.0), b.next_gaussian(0.0, 1.0));
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// A stochastic source of normally distributed values
pub trait NoiseSource {
    /// Draw one value from a normal distribution with mean `mu` and spread `sigma`
    fn next_gaussian(&mut self, mu: f64, sigma: f64) -> f64;
}

/// Gaussian noise backed by a seedable PRNG
#[derive(Debug, Clone)]
pub struct GaussianNoise {
    rng: StdRng,
}

impl GaussianNoise {
    /// Create a reproducible source from a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl NoiseSource for GaussianNoise {
    fn next_gaussian(&mut self, mu: f64, sigma: f64) -> f64 {
        // Scaling a standard normal keeps this infallible for any sigma
        let z: f64 = self.rng.sample(StandardNormal);
        mu + sigma * z
    }
}
