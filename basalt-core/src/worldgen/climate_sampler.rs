//! Climate samplers.
//!
//! A climate sampler maps a quart position (block position >> 2) to a quantized
//! [`TargetPoint`]. The noise-router-backed samplers are provided by the caller;
//! this module defines the seam and a synthetic sampler for debugging and benches.

use std::array;
use std::f64::consts::TAU;

use basalt_utils::climate::TargetPoint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces climate targets for biome lookup.
///
/// Implementations must be deterministic for a given seed and position, and
/// cheap to share between worker threads.
pub trait ClimateSampler: Send + Sync {
    /// Sample the climate at a quart position.
    fn sample(&self, quart_x: i32, quart_y: i32, quart_z: i32) -> TargetPoint;
}

impl<F> ClimateSampler for F
where
    F: Fn(i32, i32, i32) -> TargetPoint + Send + Sync,
{
    #[inline]
    fn sample(&self, quart_x: i32, quart_y: i32, quart_z: i32) -> TargetPoint {
        self(quart_x, quart_y, quart_z)
    }
}

/// One horizontal wave: `sin(x * fx + z * fz + phase)`.
#[derive(Debug, Clone, Copy)]
struct Wave {
    frequency_x: f64,
    frequency_z: f64,
    phase: f64,
}

impl Wave {
    fn random(rng: &mut StdRng, wavelength: f64) -> Self {
        let angle = rng.random_range(0.0..TAU);
        let frequency = TAU / wavelength;
        Self {
            frequency_x: angle.cos() * frequency,
            frequency_z: angle.sin() * frequency,
            phase: rng.random_range(0.0..TAU),
        }
    }

    #[inline]
    fn at(&self, x: f64, z: f64) -> f64 {
        (x * self.frequency_x + z * self.frequency_z + self.phase).sin()
    }
}

/// A seeded, smoothly varying climate field built from sine waves.
///
/// Not vanilla noise. It produces spatially coherent samples (neighbouring
/// columns get nearby targets) in `[-1, 1]` on every horizontal axis, which is
/// what the biome lookup's warm-start cache is tuned for. Depth is 0 at
/// `surface_y` and grows by 1.0 per 128 blocks downwards.
#[derive(Debug, Clone)]
pub struct WaveClimateSampler {
    /// Two waves per horizontal climate axis, in `TargetPoint` order minus depth.
    waves: [[Wave; 2]; 5],
    surface_y: i32,
}

impl WaveClimateSampler {
    /// Wavelengths in blocks for the two waves of each axis.
    const WAVELENGTHS: [f64; 2] = [1536.0, 384.0];

    /// Create a sampler for the given world seed.
    #[must_use]
    pub fn new(seed: i64, surface_y: i32) -> Self {
        let mut rng = StdRng::seed_from_u64(seed as u64);
        let waves = array::from_fn(|_| {
            Self::WAVELENGTHS.map(|wavelength| Wave::random(&mut rng, wavelength))
        });
        Self { waves, surface_y }
    }

    fn axis(&self, axis: usize, x: f64, z: f64) -> f64 {
        let [broad, detail] = &self.waves[axis];
        broad.at(x, z) * 0.75 + detail.at(x, z) * 0.25
    }
}

impl ClimateSampler for WaveClimateSampler {
    fn sample(&self, quart_x: i32, quart_y: i32, quart_z: i32) -> TargetPoint {
        let x = f64::from(quart_x << 2);
        let z = f64::from(quart_z << 2);
        let depth = f64::from(self.surface_y - (quart_y << 2)) / 128.0;

        TargetPoint::from_floats(
            self.axis(0, x, z),
            self.axis(1, x, z),
            self.axis(2, x, z),
            self.axis(3, x, z),
            depth.clamp(-1.0, 1.0),
            self.axis(4, x, z),
        )
    }
}
