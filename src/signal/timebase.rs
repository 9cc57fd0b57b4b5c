//! Sample-time generation

/// Generate the sample instants for `sample_count` samples spread over `duration` seconds
///
/// `time[n] = n * duration / sample_count`, so the sequence starts at zero and
/// stops one sample period short of `duration`.
///
/// `sample_count` must be at least 1; callers validate this
/// (see [`SignalBuffer::new`](crate::signal::SignalBuffer::new)).
///
/// # Example
///
/// ```
/// use spectral_edit::signal::timebase::generate;
///
/// let time = generate(4, 1.0);
/// assert_eq!(time, vec![0.0, 0.25, 0.5, 0.75]);
/// ```
pub fn generate(sample_count: usize, duration: f64) -> Vec<f64> {
    let n_total = sample_count as f64;
    (0..sample_count)
        .map(|n| n as f64 * duration / n_total)
        .collect()
}
