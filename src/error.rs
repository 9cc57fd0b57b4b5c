//! Error types for the spectral engine

use std::fmt;

/// Errors reported by analysis, editing and synthesis
#[derive(Debug, Clone, PartialEq)]
pub enum SpectralError {
    /// Edit or synthesis requested before any spectrum was computed
    SpectrumNotComputed,

    /// Band-stop lower bound exceeds the upper bound
    InvalidRange {
        /// Requested lower bin
        lower: isize,
        /// Requested upper bin
        upper: isize,
    },

    /// Band-stop bound outside `[0, bin_count)`
    BinOutOfBounds {
        /// Requested lower bin
        lower: isize,
        /// Requested upper bin
        upper: isize,
        /// Number of bins in the spectrum
        bin_count: usize,
    },

    /// Invalid construction parameters
    InvalidInput(String),
}

impl fmt::Display for SpectralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpectralError::SpectrumNotComputed => write!(f, "Spectrum not computed"),
            SpectralError::InvalidRange { lower, upper } => {
                write!(f, "Invalid bin range: lower {} > upper {}", lower, upper)
            }
            SpectralError::BinOutOfBounds {
                lower,
                upper,
                bin_count,
            } => write!(
                f,
                "Bin range [{}, {}] out of bounds for {} bins",
                lower, upper, bin_count
            ),
            SpectralError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for SpectralError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SpectralError::SpectrumNotComputed.to_string(),
            "Spectrum not computed"
        );
        assert_eq!(
            SpectralError::InvalidRange { lower: 5, upper: 2 }.to_string(),
            "Invalid bin range: lower 5 > upper 2"
        );
        assert_eq!(
            SpectralError::BinOutOfBounds {
                lower: -1,
                upper: 3,
                bin_count: 5
            }
            .to_string(),
            "Bin range [-1, 3] out of bounds for 5 bins"
        );
    }
}
