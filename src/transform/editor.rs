//! Band-stop spectral editing

use super::spectrum::Spectrum;
use crate::error::SpectralError;

/// Zero the magnitude of every bin in the inclusive range `[lower, upper]`
///
/// Phases are left alone; they no longer contribute once the magnitude is
/// zero. Repeated calls compose, and a bin zeroed earlier stays zeroed.
///
/// # Errors
///
/// Checked in this order, with the spectrum left untouched on failure:
/// - `SpectralError::InvalidRange` if `lower > upper`
/// - `SpectralError::BinOutOfBounds` if either bound is outside `[0, bin_count)`
///
/// # Example
///
/// ```
/// use spectral_edit::signal::SignalBuffer;
/// use spectral_edit::transform::{editor::band_stop, spectrum::analyze};
/// use spectral_edit::TransformConfig;
///
/// let mut signal = SignalBuffer::new(32, 1.0)?;
/// signal.add_sinusoid(1.0, 6.0, 0.0);
/// let mut spectrum = analyze(&signal, &TransformConfig::default());
///
/// band_stop(&mut spectrum, 4, 8)?;
/// assert_eq!(spectrum.magnitude()[6], 0.0);
/// # Ok::<(), spectral_edit::SpectralError>(())
/// ```
pub fn band_stop(spectrum: &mut Spectrum, lower: isize, upper: isize) -> Result<(), SpectralError> {
    let bin_count = spectrum.bin_count();
    let (lower_bin, upper_bin) = validate_range(lower, upper, bin_count)?;

    log::debug!(
        "Band-stop: zeroing bins [{}, {}] of {}",
        lower_bin,
        upper_bin,
        bin_count
    );

    spectrum.magnitude_mut()[lower_bin..=upper_bin].fill(0.0);
    Ok(())
}

/// Check a requested bin range against a spectrum of `bin_count` bins
fn validate_range(
    lower: isize,
    upper: isize,
    bin_count: usize,
) -> Result<(usize, usize), SpectralError> {
    if lower > upper {
        log::warn!("Band-stop rejected: lower bin {} > upper bin {}", lower, upper);
        return Err(SpectralError::InvalidRange { lower, upper });
    }

    let in_bounds = |bin: isize| usize::try_from(bin).ok().filter(|&b| b < bin_count);
    match (in_bounds(lower), in_bounds(upper)) {
        (Some(lower_bin), Some(upper_bin)) => Ok((lower_bin, upper_bin)),
        _ => {
            log::warn!(
                "Band-stop rejected: bins [{}, {}] outside [0, {})",
                lower,
                upper,
                bin_count
            );
            Err(SpectralError::BinOutOfBounds {
                lower,
                upper,
                bin_count,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TransformConfig;
    use crate::signal::SignalBuffer;
    use crate::transform::spectrum::analyze;

    fn test_spectrum() -> Spectrum {
        let mut signal = SignalBuffer::new(64, 1.0).unwrap();
        signal.add_shift(0.5);
        for freq in [2.0, 7.0, 13.0, 30.0] {
            signal.add_sinusoid(1.0, freq, 0.3);
        }
        analyze(&signal, &TransformConfig::default())
    }

    #[test]
    fn test_band_stop_zeroes_range_only() {
        let mut spectrum = test_spectrum();
        let before = spectrum.clone();

        band_stop(&mut spectrum, 5, 14).unwrap();

        for k in 0..spectrum.bin_count() {
            if (5..=14).contains(&k) {
                assert_eq!(spectrum.magnitude()[k], 0.0);
            } else {
                assert_eq!(spectrum.magnitude()[k], before.magnitude()[k]);
            }
        }
        assert_eq!(spectrum.phase(), before.phase());
        assert_eq!(spectrum.real_norm(), before.real_norm());
    }

    #[test]
    fn test_band_stop_single_bin_and_edges() {
        let mut spectrum = test_spectrum();
        let last = spectrum.bin_count() as isize - 1;

        band_stop(&mut spectrum, 0, 0).unwrap();
        band_stop(&mut spectrum, last, last).unwrap();

        assert_eq!(spectrum.magnitude()[0], 0.0);
        assert_eq!(spectrum.magnitude()[last as usize], 0.0);
        assert!(spectrum.magnitude()[2] > 0.9);
    }

    #[test]
    fn test_band_stop_composes() {
        let mut spectrum = test_spectrum();
        band_stop(&mut spectrum, 1, 3).unwrap();
        band_stop(&mut spectrum, 10, 20).unwrap();
        band_stop(&mut spectrum, 2, 12).unwrap();

        for k in 1..=20 {
            assert_eq!(spectrum.magnitude()[k], 0.0, "bin {} should stay zeroed", k);
        }
        assert!(spectrum.magnitude()[30] > 0.9);
    }

    #[test]
    fn test_invalid_range() {
        let mut spectrum = test_spectrum();
        let before = spectrum.clone();

        let err = band_stop(&mut spectrum, 5, 2).unwrap_err();
        assert_eq!(err, SpectralError::InvalidRange { lower: 5, upper: 2 });
        assert_eq!(spectrum, before);
    }

    #[test]
    fn test_bin_out_of_bounds() {
        let mut spectrum = test_spectrum();
        let before = spectrum.clone();
        let bin_count = spectrum.bin_count();

        for (lower, upper) in [(-1, 3), (0, bin_count as isize), (-5, -2), (40, 100)] {
            let err = band_stop(&mut spectrum, lower, upper).unwrap_err();
            assert_eq!(
                err,
                SpectralError::BinOutOfBounds {
                    lower,
                    upper,
                    bin_count
                }
            );
            assert_eq!(spectrum, before);
        }
    }

    #[test]
    fn test_range_checked_before_bounds() {
        let mut spectrum = test_spectrum();
        let err = band_stop(&mut spectrum, 100, -1).unwrap_err();
        assert!(matches!(err, SpectralError::InvalidRange { .. }));
    }
}
