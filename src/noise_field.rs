/*
 * Noise Field Module
 *
 * Coherent noise that drives the self-motion of every particle. Each particle
 * carries its own seed, so two particles read two unrelated slices of the
 * same Perlin field while time slides both slices forward smoothly.
 */

use nannou::prelude::*;
use ::noise::{NoiseFn, Perlin};

/// A deterministic, continuously evolving 2D vector generator.
#[derive(Clone)]
pub struct NoiseField {
    perlin: Perlin,
    seed: u32,
    // Noise units advanced per millisecond of simulated time
    time_scale: f64,
}

impl NoiseField {
    pub fn new(seed: u32, time_scale: f64) -> Self {
        Self {
            perlin: Perlin::new(seed),
            seed,
            time_scale,
        }
    }

    /// Sample the field for one particle at `time` (milliseconds on the frame clock).
    ///
    /// Each axis is an independent slice through the field: the seed component
    /// picks the slice and time moves along it. Both components lie in `[-1, 1]`.
    pub fn sample(&self, seed: Vec2, time: f64) -> Vec2 {
        let t = time * self.time_scale;
        let x = self.perlin.get([seed.x as f64, t]);
        let y = self.perlin.get([seed.y as f64, t]);

        vec2(x.clamp(-1.0, 1.0) as f32, y.clamp(-1.0, 1.0) as f32)
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField")
            .field("seed", &self.seed)
            .field("time_scale", &self.time_scale)
            .finish()
    }
}
