//! Forward transform, spectral editing and inverse transform
//!
//! - `spectrum`: one-sided direct DFT producing magnitude/phase per bin
//! - `editor`: band-stop edits on a computed spectrum
//! - `synthesis`: cosine-series reconstruction from magnitude/phase

pub mod editor;
pub mod spectrum;
pub mod synthesis;

pub use editor::band_stop;
pub use spectrum::{analyze, bin_count_for, Spectrum};
pub use synthesis::{synthesize, ReconstructedBuffer};
