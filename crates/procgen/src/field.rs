//! Deterministic noise field over the infinite starfield grid.

use noise::{NoiseFn, Simplex};

/// Derive a deterministic u32 noise seed from a world seed and an offset.
/// Same (seed, offset) always gives the same result so the field is
/// reproducible across runs and machines.
#[inline]
fn deterministic_noise_seed(seed: u64, offset: u64) -> u32 {
    ((seed.wrapping_add(offset))
        .wrapping_mul(0x9e3779b97f4a7c15_u64)
        .wrapping_add(offset.wrapping_mul(0x6c078965_u64))
        >> 32) as u32
}

/// Smooth pseudo-random scalar field over grid coordinates, plus a second
/// decorrelated field for hue assignment.
///
/// Both are pure functions of (seed, x, y): the same seed and coordinates
/// always yield the same sample, which is what makes seeds shareable.
#[derive(Debug, Clone)]
pub struct StarfieldNoise {
    placement: Simplex,
    hue: Simplex,
}

impl StarfieldNoise {
    pub fn new(seed: u64) -> Self {
        Self {
            placement: Simplex::new(deterministic_noise_seed(seed, 0)),
            hue: Simplex::new(deterministic_noise_seed(seed, 1)),
        }
    }

    /// Placement sample at a grid coordinate, normalized to [0, 1).
    /// Drives "is there a planet / wormhole in this cell".
    pub fn value_at(&self, x: f64, y: f64) -> f64 {
        normalize(self.placement.get([x, y]))
    }

    /// Hue sample in [0, 2π). Evaluated on an independently-seeded field at
    /// negated, 1/20-scaled coordinates so it is not correlated with the
    /// placement band in practice.
    pub fn hue_at(&self, x: f64, y: f64) -> f64 {
        normalize(self.hue.get([-x / 20.0, -y / 20.0])) * std::f64::consts::TAU
    }
}

/// Map a simplex sample from [-1, 1] to [0, 1).
#[inline]
fn normalize(sample: f64) -> f64 {
    ((sample + 1.0) * 0.5).clamp(0.0, 1.0 - f64::EPSILON)
}
