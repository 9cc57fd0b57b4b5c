//! One-sided discrete spectrum analysis
//!
//! Computes the spectrum of a [`SignalBuffer`] by direct summation:
//!
//! ```text
//! real[k] =  Σ_n x[n]·cos(2π·k·n/N)
//! imag[k] = -Σ_n x[n]·sin(2π·k·n/N)
//! ```
//!
//! for `k` in `[0, N/2]`. Raw sums are scaled by `2/N`; the DC bin (and the
//! Nyquist bin when `N` is even) has its real part halved again because the
//! one-sided spectrum would otherwise count that energy twice. Magnitude and
//! phase are taken from the normalized components, so a sinusoid of amplitude
//! `A` shows up as magnitude `A` in its bin.
//!
//! The transform is deliberately O(N·M); no FFT is involved.
//!
//! # Example
//!
//! ```
//! use spectral_edit::signal::SignalBuffer;
//! use spectral_edit::transform::spectrum::analyze;
//! use spectral_edit::TransformConfig;
//!
//! let mut signal = SignalBuffer::new(8, 1.0)?;
//! signal.add_sinusoid(1.0, 1.0, 0.0);
//!
//! let spectrum = analyze(&signal, &TransformConfig::default());
//! assert_eq!(spectrum.bin_count(), 5);
//! assert!((spectrum.magnitude()[1] - 1.0).abs() < 1e-9);
//! # Ok::<(), spectral_edit::SpectralError>(())
//! ```

use std::f64::consts::PI;
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;

use crate::config::TransformConfig;
use crate::signal::SignalBuffer;

/// Number of one-sided bins for `sample_count` samples (`N / 2 + 1`)
pub fn bin_count_for(sample_count: usize) -> usize {
    sample_count / 2 + 1
}

/// One-sided spectrum of a single signal snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spectrum {
    sample_count: usize,
    duration: f64,
    real: Vec<f64>,
    imag: Vec<f64>,
    real_norm: Vec<f64>,
    imag_norm: Vec<f64>,
    magnitude: Vec<f64>,
    phase: Vec<f64>,
}

impl Spectrum {
    /// Number of samples in the analysed signal
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Duration of the analysed signal in seconds
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Number of bins, `sample_count / 2 + 1`
    pub fn bin_count(&self) -> usize {
        self.magnitude.len()
    }

    /// Raw cosine correlation sums
    pub fn real(&self) -> &[f64] {
        &self.real
    }

    /// Raw negated sine correlation sums
    pub fn imag(&self) -> &[f64] {
        &self.imag
    }

    /// Normalized real components
    pub fn real_norm(&self) -> &[f64] {
        &self.real_norm
    }

    /// Normalized imaginary components
    pub fn imag_norm(&self) -> &[f64] {
        &self.imag_norm
    }

    /// Per-bin magnitude (reflects any band-stop edits)
    pub fn magnitude(&self) -> &[f64] {
        &self.magnitude
    }

    /// Per-bin phase in radians, in `[-π, π]`
    pub fn phase(&self) -> &[f64] {
        &self.phase
    }

    pub(crate) fn magnitude_mut(&mut self) -> &mut [f64] {
        &mut self.magnitude
    }

    /// Frequency in Hz represented by bin `k` (`k / duration`)
    pub fn bin_frequency(&self, k: usize) -> f64 {
        k as f64 / self.duration
    }

    /// Frequencies of every bin, in bin order
    pub fn frequencies(&self) -> Vec<f64> {
        (0..self.bin_count()).map(|k| self.bin_frequency(k)).collect()
    }

    /// Bin with the largest magnitude
    ///
    /// Ties resolve to the lowest bin.
    pub fn dominant_bin(&self) -> usize {
        let mut best = 0;
        for (k, &m) in self.magnitude.iter().enumerate() {
            if m > self.magnitude[best] {
                best = k;
            }
        }
        best
    }

    /// Sum of squared magnitudes over the inclusive bin range `[lower, upper]`
    ///
    /// The range is clamped to the spectrum; an empty range yields zero.
    pub fn band_energy(&self, lower: usize, upper: usize) -> f64 {
        let last = self.bin_count() - 1;
        let upper = upper.min(last);
        if lower > upper {
            return 0.0;
        }
        self.magnitude[lower..=upper].iter().map(|m| m * m).sum()
    }
}

/// Compute the one-sided spectrum of `signal`
///
/// Every bin is an independent summation over all samples, so with
/// `config.parallel` set the bins are distributed over the rayon pool with
/// identical results.
pub fn analyze(signal: &SignalBuffer, config: &TransformConfig) -> Spectrum {
    let start_time = Instant::now();
    let samples = signal.samples();
    let n_total = samples.len();
    let bin_count = bin_count_for(n_total);

    log::debug!(
        "Analyzing {} samples into {} bins (parallel: {})",
        n_total,
        bin_count,
        config.use_parallel(bin_count)
    );

    let sums: Vec<(f64, f64)> = if config.use_parallel(bin_count) {
        (0..bin_count)
            .into_par_iter()
            .map(|k| correlate_bin(samples, k))
            .collect()
    } else {
        (0..bin_count).map(|k| correlate_bin(samples, k)).collect()
    };

    let (real, imag): (Vec<f64>, Vec<f64>) = sums.into_iter().unzip();

    let scale = 2.0 / n_total as f64;
    let mut real_norm: Vec<f64> = real.iter().map(|re| re * scale).collect();
    let imag_norm: Vec<f64> = imag.iter().map(|im| im * scale).collect();

    // DC and Nyquist appear once in the one-sided spectrum
    real_norm[0] /= 2.0;
    if n_total % 2 == 0 && bin_count > 1 {
        real_norm[bin_count - 1] /= 2.0;
    }

    let magnitude = real_norm
        .iter()
        .zip(&imag_norm)
        .map(|(re, im)| re.hypot(*im))
        .collect();
    let phase = real_norm
        .iter()
        .zip(&imag_norm)
        .map(|(re, im)| im.atan2(*re))
        .collect();

    log::debug!(
        "Spectrum computed in {:.2} ms",
        start_time.elapsed().as_secs_f64() * 1000.0
    );

    Spectrum {
        sample_count: n_total,
        duration: signal.duration(),
        real,
        imag,
        real_norm,
        imag_norm,
        magnitude,
        phase,
    }
}

/// Cosine and negated sine correlation of `samples` against bin `k`
fn correlate_bin(samples: &[f64], k: usize) -> (f64, f64) {
    let n_total = samples.len();
    let mut re = 0.0;
    let mut im = 0.0;
    for (n, &x) in samples.iter().enumerate() {
        // Reduce k·n modulo N before scaling to keep the angle small
        let angle = 2.0 * PI * ((k * n) % n_total) as f64 / n_total as f64;
        re += x * angle.cos();
        im -= x * angle.sin();
    }
    (re, im)
}
