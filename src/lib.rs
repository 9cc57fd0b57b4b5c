//! # Spectral Edit
//!
//! A small spectral-analysis kernel: build a sampled test signal, transform it
//! into a one-sided magnitude/phase spectrum, zero a band of frequency bins,
//! and resynthesize the time-domain signal to see what the edit did.
//!
//! ## Features
//!
//! - **Signal construction**: sinusoids, constant shift and injected Gaussian noise
//! - **Direct DFT**: one-sided spectrum with DC/Nyquist-aware normalization
//! - **Band-stop editing**: validated, all-or-nothing zeroing of bin ranges
//! - **Resynthesis**: cosine-series reconstruction from magnitude/phase
//! - **Optional parallelism**: bins and samples computed on the rayon pool
//!
//! ## Quick Start
//!
//! ```
//! use spectral_edit::{Session, GaussianNoise};
//!
//! let mut session = Session::new(1000, 1.0)?;
//! session.add_shift(1.0);
//! session.add_noise(0.0, 1.0, 0.5, &mut GaussianNoise::seeded(42));
//! session.add_sinusoid(1.0, 3.0, 0.0);
//! session.add_sinusoid(3.0, 8.0, 5.0);
//!
//! session.analyze();
//! session.band_stop(10, 500)?;
//! let rebuilt = session.synthesize()?;
//!
//! println!("first reconstructed sample: {:.3}", rebuilt.samples()[0]);
//! # Ok::<(), spectral_edit::SpectralError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Timebase → SignalBuffer → analyze → Spectrum → band_stop* → synthesize → ReconstructedBuffer
//! ```
//!
//! Each stage produces a new value; [`Session`] tracks which stage is current.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod session;
pub mod signal;
pub mod transform;

// Re-export main types
pub use config::TransformConfig;
pub use error::SpectralError;
pub use session::{Session, SessionState};
pub use signal::{GaussianNoise, NoiseSource, SignalBuffer};
pub use transform::{ReconstructedBuffer, Spectrum};

/// Analyze, band-stop and resynthesize a signal in one call
///
/// Runs the full pipeline on `signal` and returns the edited spectrum together
/// with the reconstruction built from it. The input signal is not modified.
///
/// # Arguments
///
/// * `signal` - Signal to analyze
/// * `lower` - First bin to zero (inclusive)
/// * `upper` - Last bin to zero (inclusive)
/// * `config` - Transform configuration
///
/// # Errors
///
/// Returns `SpectralError::InvalidRange` or `SpectralError::BinOutOfBounds`
/// if the bin range is rejected.
///
/// # Example
///
/// ```
/// use spectral_edit::{band_stop_resynthesis, SignalBuffer, TransformConfig};
///
/// let mut signal = SignalBuffer::new(256, 1.0)?;
/// signal.add_sinusoid(1.0, 4.0, 0.0);
/// signal.add_sinusoid(0.5, 60.0, 0.0);
///
/// let (spectrum, rebuilt) = band_stop_resynthesis(&signal, 50, 128, &TransformConfig::default())?;
/// assert_eq!(spectrum.magnitude()[60], 0.0);
/// assert_eq!(rebuilt.len(), 256);
/// # Ok::<(), spectral_edit::SpectralError>(())
/// ```
pub fn band_stop_resynthesis(
    signal: &SignalBuffer,
    lower: isize,
    upper: isize,
    config: &TransformConfig,
) -> Result<(Spectrum, ReconstructedBuffer), SpectralError> {
    use std::time::Instant;
    let start_time = Instant::now();

    log::debug!(
        "Band-stop resynthesis: {} samples over {:.3}s, bins [{}, {}]",
        signal.len(),
        signal.duration(),
        lower,
        upper
    );

    let mut spectrum = transform::analyze(signal, config);
    transform::band_stop(&mut spectrum, lower, upper)?;
    let reconstruction = transform::synthesize(&spectrum, config);

    log::debug!(
        "Band-stop resynthesis finished in {:.2} ms",
        start_time.elapsed().as_secs_f64() * 1000.0
    );

    Ok((spectrum, reconstruction))
}
