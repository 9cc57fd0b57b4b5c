//! Analysis session with an explicit lifecycle
//!
//! A [`Session`] bundles a signal with the spectrum derived from it and any
//! reconstruction built from that spectrum. Its lifecycle is:
//!
//! ```text
//! Empty → SignalReady → SpectrumReady → [SpectrumEdited]* → ReconstructionReady
//! ```
//!
//! Mutating the signal drops the spectrum and reconstruction; re-analysing
//! drops edits and the reconstruction. Out-of-order calls return
//! [`SpectralError::SpectrumNotComputed`] and leave the session unchanged.
//!
//! # Example
//!
//! ```
//! use spectral_edit::{Session, SessionState};
//!
//! let mut session = Session::new(1000, 1.0)?;
//! session.add_sinusoid(1.0, 3.0, 0.0);
//! session.add_sinusoid(3.0, 8.0, 5.0);
//!
//! session.analyze();
//! session.band_stop(10, 500)?;
//! let rebuilt = session.synthesize()?;
//! assert_eq!(rebuilt.len(), 1000);
//! assert_eq!(session.state(), SessionState::ReconstructionReady);
//! # Ok::<(), spectral_edit::SpectralError>(())
//! ```

use crate::config::TransformConfig;
use crate::error::SpectralError;
use crate::signal::{NoiseSource, SignalBuffer};
use crate::transform::{self, ReconstructedBuffer, Spectrum};

/// Lifecycle position of a [`Session`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No contribution added yet
    Empty,
    /// Signal holds contributions; no spectrum
    SignalReady,
    /// Spectrum matches the current signal
    SpectrumReady,
    /// Spectrum has had at least one band-stop applied
    SpectrumEdited,
    /// Reconstruction built from the current spectrum
    ReconstructionReady,
}

/// Derived data held by a session, one variant per lifecycle position
#[derive(Debug, Clone)]
enum Stage {
    Empty,
    SignalReady,
    SpectrumReady(Spectrum),
    SpectrumEdited(Spectrum),
    ReconstructionReady {
        spectrum: Spectrum,
        reconstruction: ReconstructedBuffer,
    },
}

/// Signal, spectrum and reconstruction owned by a single caller
#[derive(Debug, Clone)]
pub struct Session {
    config: TransformConfig,
    signal: SignalBuffer,
    stage: Stage,
}

impl Session {
    /// Create an empty session with the default transform configuration
    ///
    /// # Errors
    ///
    /// Returns `SpectralError::InvalidInput` if `sample_count` is zero or
    /// `duration` is not a positive finite number.
    pub fn new(sample_count: usize, duration: f64) -> Result<Self, SpectralError> {
        Self::with_config(sample_count, duration, TransformConfig::default())
    }

    /// Create an empty session with an explicit transform configuration
    pub fn with_config(
        sample_count: usize,
        duration: f64,
        config: TransformConfig,
    ) -> Result<Self, SpectralError> {
        Ok(Self {
            config,
            signal: SignalBuffer::new(sample_count, duration)?,
            stage: Stage::Empty,
        })
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        match self.stage {
            Stage::Empty => SessionState::Empty,
            Stage::SignalReady => SessionState::SignalReady,
            Stage::SpectrumReady(_) => SessionState::SpectrumReady,
            Stage::SpectrumEdited(_) => SessionState::SpectrumEdited,
            Stage::ReconstructionReady { .. } => SessionState::ReconstructionReady,
        }
    }

    /// Transform configuration used by this session
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// The time-domain signal
    pub fn signal(&self) -> &SignalBuffer {
        &self.signal
    }

    /// Sample instants in seconds
    pub fn time(&self) -> &[f64] {
        self.signal.time()
    }

    /// Current signal samples
    pub fn samples(&self) -> &[f64] {
        self.signal.samples()
    }

    /// Spectrum of the current signal, if analysed
    pub fn spectrum(&self) -> Option<&Spectrum> {
        match &self.stage {
            Stage::Empty | Stage::SignalReady => None,
            Stage::SpectrumReady(spectrum)
            | Stage::SpectrumEdited(spectrum)
            | Stage::ReconstructionReady { spectrum, .. } => Some(spectrum),
        }
    }

    /// Per-bin magnitude of the current spectrum
    pub fn magnitude(&self) -> Result<&[f64], SpectralError> {
        self.spectrum()
            .map(Spectrum::magnitude)
            .ok_or(SpectralError::SpectrumNotComputed)
    }

    /// Per-bin phase of the current spectrum
    pub fn phase(&self) -> Result<&[f64], SpectralError> {
        self.spectrum()
            .map(Spectrum::phase)
            .ok_or(SpectralError::SpectrumNotComputed)
    }

    /// Most recent reconstruction, if still current
    pub fn reconstruction(&self) -> Option<&ReconstructedBuffer> {
        match &self.stage {
            Stage::ReconstructionReady { reconstruction, .. } => Some(reconstruction),
            _ => None,
        }
    }

    /// Add a sinusoid to the signal, invalidating any spectrum
    pub fn add_sinusoid(&mut self, amplitude: f64, frequency: f64, phase: f64) {
        self.signal.add_sinusoid(amplitude, frequency, phase);
        self.signal_changed();
    }

    /// Add a constant offset to the signal, invalidating any spectrum
    pub fn add_shift(&mut self, offset: f64) {
        self.signal.add_shift(offset);
        self.signal_changed();
    }

    /// Add scaled Gaussian noise from `source`, invalidating any spectrum
    pub fn add_noise<N: NoiseSource + ?Sized>(
        &mut self,
        mu: f64,
        sigma: f64,
        amplitude: f64,
        source: &mut N,
    ) {
        self.signal.add_noise(mu, sigma, amplitude, source);
        self.signal_changed();
    }

    fn signal_changed(&mut self) {
        if self.spectrum().is_some() {
            log::debug!("Signal modified in state {:?}; spectrum discarded", self.state());
        }
        self.stage = Stage::SignalReady;
    }

    /// Compute the spectrum of the current signal
    ///
    /// Always allowed; discards earlier edits and reconstructions. Analysing
    /// an empty session yields an all-zero spectrum.
    pub fn analyze(&mut self) -> &Spectrum {
        let spectrum = transform::analyze(&self.signal, &self.config);
        self.stage = Stage::SpectrumReady(spectrum);
        match &self.stage {
            Stage::SpectrumReady(spectrum) => spectrum,
            _ => unreachable!("stage was just set to SpectrumReady"),
        }
    }

    /// Zero the magnitude of bins `[lower, upper]` in the current spectrum
    ///
    /// Any existing reconstruction is discarded on success.
    ///
    /// # Errors
    ///
    /// - `SpectralError::SpectrumNotComputed` before [`analyze`](Self::analyze)
    /// - `SpectralError::InvalidRange` / `SpectralError::BinOutOfBounds` as for
    ///   [`band_stop`](crate::transform::editor::band_stop)
    ///
    /// The session is unchanged on error.
    pub fn band_stop(&mut self, lower: isize, upper: isize) -> Result<(), SpectralError> {
        let state = self.state();
        let spectrum = match &mut self.stage {
            Stage::SpectrumReady(spectrum)
            | Stage::SpectrumEdited(spectrum)
            | Stage::ReconstructionReady { spectrum, .. } => spectrum,
            Stage::Empty | Stage::SignalReady => {
                log::warn!("Band-stop requested in state {:?}", state);
                return Err(SpectralError::SpectrumNotComputed);
            }
        };

        transform::band_stop(spectrum, lower, upper)?;

        self.stage = match std::mem::replace(&mut self.stage, Stage::Empty) {
            Stage::SpectrumReady(spectrum)
            | Stage::SpectrumEdited(spectrum)
            | Stage::ReconstructionReady { spectrum, .. } => Stage::SpectrumEdited(spectrum),
            other => other,
        };
        Ok(())
    }

    /// Rebuild the time-domain signal from the current spectrum
    ///
    /// # Errors
    ///
    /// Returns `SpectralError::SpectrumNotComputed` before [`analyze`](Self::analyze).
    pub fn synthesize(&mut self) -> Result<&ReconstructedBuffer, SpectralError> {
        let spectrum = match std::mem::replace(&mut self.stage, Stage::Empty) {
            Stage::SpectrumReady(spectrum)
            | Stage::SpectrumEdited(spectrum)
            | Stage::ReconstructionReady { spectrum, .. } => spectrum,
            other => {
                self.stage = other;
                log::warn!("Synthesis requested in state {:?}", self.state());
                return Err(SpectralError::SpectrumNotComputed);
            }
        };

        let reconstruction = transform::synthesize(&spectrum, &self.config);
        self.stage = Stage::ReconstructionReady {
            spectrum,
            reconstruction,
        };

        match &self.stage {
            Stage::ReconstructionReady { reconstruction, .. } => Ok(reconstruction),
            _ => unreachable!("stage was just set to ReconstructionReady"),
        }
    }
}
