/*
 * Particle System Module
 *
 * Owns the swarm and advances it one tick at a time. The particle count is
 * fixed when the system is built. Within a tick every particle sees the same
 * obstacle snapshot and parameters, and no particle reads another particle's
 * state, so the order particles are visited in does not matter.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::boundary::Viewport;
use crate::noise_field::NoiseField;
use crate::params::SimulationParameters;
use crate::particle::{Particle, ParticleFactory};
use crate::repulsion::RepulsionField;

/// What the renderer needs to draw one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderItem {
    pub position: Vec2,
    pub size: f32,
    pub color_category: usize,
}

/// Everything a tick reads. Borrowing the obstacle slice for the whole tick
/// keeps the snapshot frozen until every particle has been updated.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    pub obstacles: &'a [Vec2],
    pub params: SimulationParameters,
    /// Frame clock in milliseconds, fed to the noise field
    pub time: f64,
    pub viewport: Viewport,
}

pub struct ParticleSystem {
    particles: Vec<Particle>,
    noise: NoiseField,
    repulsion: RepulsionField,
    ticks: u64,
}

impl ParticleSystem {
    pub fn new(particles: Vec<Particle>, noise: NoiseField, repulsion: RepulsionField) -> Self {
        Self {
            particles,
            noise,
            repulsion,
            ticks: 0,
        }
    }

    /// Create `count` particles from `factory`, spread over `viewport`.
    pub fn spawn<R: Rng + ?Sized>(
        factory: &ParticleFactory,
        rng: &mut R,
        viewport: Viewport,
        count: usize,
        noise: NoiseField,
        repulsion: RepulsionField,
    ) -> Self {
        let particles = factory.create_many(rng, viewport, count);
        tracing::info!(
            count,
            width = viewport.width,
            height = viewport.height,
            "Spawned particle swarm"
        );
        Self::new(particles, noise, repulsion)
    }

    /// Re-roll every particle in place. The count stays the same.
    pub fn respawn<R: Rng + ?Sized>(
        &mut self,
        factory: &ParticleFactory,
        rng: &mut R,
        viewport: Viewport,
    ) {
        for particle in &mut self.particles {
            *particle = factory.create(rng, viewport);
        }
        tracing::info!(count = self.particles.len(), "Respawned particle swarm");
    }

    /// Advance the whole swarm by one tick.
    pub fn step(&mut self, frame: &FrameInput<'_>) {
        for particle in &mut self.particles {
            particle.repel(&self.repulsion, frame.obstacles);
            particle.update(&frame.params, &self.noise, frame.time, frame.viewport);
        }

        self.ticks += 1;
        tracing::trace!(
            tick = self.ticks,
            obstacles = frame.obstacles.len(),
            time = frame.time,
            "Stepped swarm"
        );
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn noise(&self) -> &NoiseField {
        &self.noise
    }

    pub fn repulsion(&self) -> &RepulsionField {
        &self.repulsion
    }

    pub fn render_items(&self) -> impl Iterator<Item = RenderItem> + '_ {
        self.particles.iter().map(|particle| RenderItem {
            position: particle.position,
            size: particle.size(),
            color_category: particle.color_category(),
        })
    }
}
