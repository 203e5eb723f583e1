//! # Noise Source Module
//!
//! Deterministic 2D value noise used to drive the terrain height field.

use std::fmt;

use noise::{NoiseFn, Value};

/// A seeded, pure 2D value noise function.
///
/// Two sources built from the same seed return identical samples for identical
/// coordinates, on every run. Samples lie in `-1.0..=1.0`.
#[derive(Clone)]
pub struct NoiseSource {
    seed: u32,
    value: Value,
}

impl NoiseSource {
    /// Creates a noise source for the given seed.
    pub fn new(seed: u32) -> Self {
        NoiseSource {
            seed,
            value: Value::new(seed),
        }
    }

    /// The seed this source was built from.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Samples the noise at a continuous coordinate.
    pub fn noise_2d(&self, x: f64, z: f64) -> f64 {
        self.value.get([x, z]).clamp(-1.0, 1.0)
    }
}

impl fmt::Debug for NoiseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoiseSource").field("seed", &self.seed).finish()
    }
}

impl Default for NoiseSource {
    fn default() -> Self {
        NoiseSource::new(0)
    }
}
