//! Time-domain sample accumulator
//!
//! A [`SignalBuffer`] holds a fixed timebase and a sample array that starts at
//! zero and only ever grows by addition: sinusoids, a constant shift, or
//! scaled noise drawn from an injected [`NoiseSource`].
//!
//! # Example
//!
//! ```
//! use spectral_edit::signal::SignalBuffer;
//!
//! let mut signal = SignalBuffer::new(8, 1.0)?;
//! signal.add_sinusoid(1.0, 1.0, 0.0);
//! signal.add_shift(0.5);
//! assert_eq!(signal.len(), 8);
//! assert!((signal.samples()[0] - 0.5).abs() < 1e-12);
//! # Ok::<(), spectral_edit::SpectralError>(())
//! ```

use std::f64::consts::PI;

use serde::Serialize;

use super::noise::NoiseSource;
use super::timebase;
use crate::error::SpectralError;

/// Owned time-domain signal with its sample instants
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalBuffer {
    duration: f64,
    time: Vec<f64>,
    samples: Vec<f64>,
}

impl SignalBuffer {
    /// Create a zeroed buffer of `sample_count` samples spanning `duration` seconds
    ///
    /// # Errors
    ///
    /// Returns `SpectralError::InvalidInput` if `sample_count` is zero or
    /// `duration` is not a positive finite number.
    pub fn new(sample_count: usize, duration: f64) -> Result<Self, SpectralError> {
        if sample_count == 0 {
            return Err(SpectralError::InvalidInput(
                "Sample count must be at least 1".to_string(),
            ));
        }

        if !duration.is_finite() || duration <= 0.0 {
            return Err(SpectralError::InvalidInput(format!(
                "Invalid duration: {}",
                duration
            )));
        }

        Ok(Self {
            duration,
            time: timebase::generate(sample_count, duration),
            samples: vec![0.0; sample_count],
        })
    }

    /// Wrap existing samples taken uniformly over `duration` seconds
    ///
    /// Useful for re-analysing a reconstruction.
    ///
    /// # Errors
    ///
    /// Returns `SpectralError::InvalidInput` for an empty sample vector or an
    /// invalid duration.
    pub fn from_samples(samples: Vec<f64>, duration: f64) -> Result<Self, SpectralError> {
        let mut signal = Self::new(samples.len(), duration)?;
        signal.samples = samples;
        Ok(signal)
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; a buffer holds at least one sample
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Signal duration in seconds
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Sample instants in seconds
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Accumulated sample values
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Add `amplitude * sin(2π·frequency·t + phase)` to every sample
    pub fn add_sinusoid(&mut self, amplitude: f64, frequency: f64, phase: f64) {
        for (sample, &t) in self.samples.iter_mut().zip(&self.time) {
            *sample += amplitude * (2.0 * PI * frequency * t + phase).sin();
        }
    }

    /// Add a constant offset to every sample
    pub fn add_shift(&mut self, offset: f64) {
        for sample in &mut self.samples {
            *sample += offset;
        }
    }

    /// Add `amplitude * N(mu, sigma)` to every sample, drawing from `source`
    ///
    /// One value is drawn per sample, in sample order.
    pub fn add_noise<N: NoiseSource + ?Sized>(
        &mut self,
        mu: f64,
        sigma: f64,
        amplitude: f64,
        source: &mut N,
    ) {
        for sample in &mut self.samples {
            *sample += amplitude * source.next_gaussian(mu, sigma);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns `mu + sigma * k` for an incrementing k
    struct CountingNoise {
        k: f64,
    }

    impl NoiseSource for CountingNoise {
        fn next_gaussian(&mut self, mu: f64, sigma: f64) -> f64 {
            let value = mu + sigma * self.k;
            self.k += 1.0;
            value
        }
    }

    #[test]
    fn test_new_is_zeroed() {
        let signal = SignalBuffer::new(16, 2.0).unwrap();
        assert_eq!(signal.len(), 16);
        assert_eq!(signal.time().len(), 16);
        assert!(signal.samples().iter().all(|&x| x == 0.0));
        assert_eq!(signal.duration(), 2.0);
    }

    #[test]
    fn test_new_rejects_invalid_parameters() {
        assert!(matches!(
            SignalBuffer::new(0, 1.0),
            Err(SpectralError::InvalidInput(_))
        ));
        assert!(SignalBuffer::new(8, 0.0).is_err());
        assert!(SignalBuffer::new(8, -1.0).is_err());
        assert!(SignalBuffer::new(8, f64::NAN).is_err());
        assert!(SignalBuffer::new(8, f64::INFINITY).is_err());
    }

    #[test]
    fn test_from_samples() {
        let signal = SignalBuffer::from_samples(vec![1.0, -1.0, 0.5], 3.0).unwrap();
        assert_eq!(signal.samples(), &[1.0, -1.0, 0.5]);
        assert_eq!(signal.time(), &[0.0, 1.0, 2.0]);
        assert!(SignalBuffer::from_samples(vec![], 1.0).is_err());
    }

    #[test]
    fn test_add_sinusoid_values() {
        let mut signal = SignalBuffer::new(4, 1.0).unwrap();
        signal.add_sinusoid(2.0, 1.0, 0.0);
        let expected = [0.0, 2.0, 0.0, -2.0];
        for (got, want) in signal.samples().iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "got {}, want {}", got, want);
        }
    }

    #[test]
    fn test_add_sinusoid_phase() {
        let mut signal = SignalBuffer::new(4, 1.0).unwrap();
        signal.add_sinusoid(1.0, 0.0, PI / 2.0);
        assert!(signal.samples().iter().all(|x| (x - 1.0).abs() < 1e-12));
    }

    #[test]
    fn test_shift_is_additive() {
        let mut split = SignalBuffer::new(10, 1.0).unwrap();
        split.add_shift(1.0);
        split.add_shift(2.0);

        let mut single = SignalBuffer::new(10, 1.0).unwrap();
        single.add_shift(3.0);

        assert_eq!(split, single);
    }

    #[test]
    fn test_zero_amplitude_is_noop() {
        let mut signal = SignalBuffer::new(10, 1.0).unwrap();
        signal.add_sinusoid(0.0, 5.0, 1.0);
        signal.add_noise(0.0, 1.0, 0.0, &mut CountingNoise { k: 0.0 });
        assert!(signal.samples().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_add_noise_uses_source_in_order() {
        let mut signal = SignalBuffer::new(4, 1.0).unwrap();
        let mut source = CountingNoise { k: 0.0 };
        signal.add_noise(1.0, 2.0, 0.5, &mut source);
        // 0.5 * (1 + 2k) for k = 0..4
        assert_eq!(signal.samples(), &[0.5, 1.5, 2.5, 3.5]);
        assert_eq!(source.k, 4.0);
    }
}
