//! Configuration parameters for the transform engines

/// Transform configuration parameters
#[derive(Debug, Clone)]
pub struct TransformConfig {
    /// Compute independent bins/samples on the rayon thread pool (default: false)
    ///
    /// Every output slot is produced by the same summation as the sequential
    /// path, so results are bit-identical either way.
    pub parallel: bool,

    /// Minimum number of output slots before the parallel path is taken (default: 256)
    /// Smaller transforms always run sequentially
    pub min_parallel_len: usize,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            min_parallel_len: 256,
        }
    }
}

impl TransformConfig {
    /// Configuration that parallelises every transform with at least `min_parallel_len` outputs
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            ..Default::default()
        }
    }

    /// Whether a transform producing `len` output values should run in parallel
    pub(crate) fn use_parallel(&self, len: usize) -> bool {
        self.parallel && len >= self.min_parallel_len
    }
}
