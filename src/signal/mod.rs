//! Time-domain signal construction
//!
//! This module contains the building blocks for synthetic test signals:
//! - Timebase generation
//! - Sample accumulation (sinusoids, constant shift, noise)
//! - Injectable noise sources

pub mod buffer;
pub mod noise;
pub mod timebase;

pub use buffer::SignalBuffer;
pub use noise::{GaussianNoise, NoiseSource};
