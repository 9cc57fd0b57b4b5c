//! Time-domain resynthesis from magnitude and phase
//!
//! The inverse of [`analyze`](super::spectrum::analyze) under its
//! normalization convention is a plain cosine series:
//!
//! ```text
//! y[n] = Σ_k magnitude[k]·cos(2π·k·n/N + phase[k])
//! ```
//!
//! The result is a fresh buffer; neither the spectrum nor the source signal
//! is touched.

use std::f64::consts::PI;
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;

use super::spectrum::Spectrum;
use crate::config::TransformConfig;
use crate::signal::{timebase, SignalBuffer};

/// Signal rebuilt from a spectrum
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconstructedBuffer {
    time: Vec<f64>,
    samples: Vec<f64>,
}

impl ReconstructedBuffer {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; a reconstruction holds at least one sample
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample instants in seconds, identical to the analysed signal's
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Reconstructed sample values
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Largest absolute difference from `signal`'s samples
    ///
    /// Only the overlapping prefix is compared if the lengths differ.
    pub fn max_abs_error(&self, signal: &SignalBuffer) -> f64 {
        self.samples
            .iter()
            .zip(signal.samples())
            .map(|(y, x)| (y - x).abs())
            .fold(0.0, f64::max)
    }
}

/// Rebuild `spectrum.sample_count()` samples from magnitude and phase
pub fn synthesize(spectrum: &Spectrum, config: &TransformConfig) -> ReconstructedBuffer {
    let start_time = Instant::now();
    let n_total = spectrum.sample_count();

    log::debug!(
        "Synthesizing {} samples from {} bins (parallel: {})",
        n_total,
        spectrum.bin_count(),
        config.use_parallel(n_total)
    );

    let samples: Vec<f64> = if config.use_parallel(n_total) {
        (0..n_total)
            .into_par_iter()
            .map(|n| sum_bins(spectrum, n))
            .collect()
    } else {
        (0..n_total).map(|n| sum_bins(spectrum, n)).collect()
    };

    log::debug!(
        "Synthesis finished in {:.2} ms",
        start_time.elapsed().as_secs_f64() * 1000.0
    );

    ReconstructedBuffer {
        time: timebase::generate(n_total, spectrum.duration()),
        samples,
    }
}

/// Cosine series value at sample index `n`
fn sum_bins(spectrum: &Spectrum, n: usize) -> f64 {
    let n_total = spectrum.sample_count();
    spectrum
        .magnitude()
        .iter()
        .zip(spectrum.phase())
        .enumerate()
        .map(|(k, (&mag, &phase))| {
            let angle = 2.0 * PI * ((k * n) % n_total) as f64 / n_total as f64;
            mag * (angle + phase).cos()
        })
        .sum()
}
