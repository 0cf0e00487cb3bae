/*
 * Particle Module
 *
 * A single member of the swarm. Kinematic state changes every tick; the
 * identity fields (noise seed, drag, size and color category) are fixed when
 * the particle is created by a `ParticleFactory` and never change afterwards.
 */

use color_eyre::eyre::Result;
use nannou::prelude::*;
use rand::Rng;

use crate::boundary::Viewport;
use crate::config::SpawnConfig;
use crate::noise_field::NoiseField;
use crate::params::SimulationParameters;
use crate::repulsion::RepulsionField;
use crate::PALETTE_SIZE;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    // Recomputed every tick, never carried over
    pub noise_force: Vec2,
    pub repulsion_force: Vec2,

    noise_seed: Vec2,
    drag: f32,
    size: f32,
    color_category: usize,
}

impl Particle {
    /// Build a particle from explicit values.
    ///
    /// `drag` must lie in `(0, 1)` and `color_category` must index the palette;
    /// `ParticleFactory` upholds both, this constructor only checks them in debug builds.
    pub fn new(
        position: Vec2,
        velocity: Vec2,
        noise_seed: Vec2,
        drag: f32,
        size: f32,
        color_category: usize,
    ) -> Self {
        debug_assert!(drag > 0.0 && drag < 1.0, "drag {drag} outside (0, 1)");
        debug_assert!(color_category < PALETTE_SIZE);

        Self {
            position,
            velocity,
            noise_force: Vec2::ZERO,
            repulsion_force: Vec2::ZERO,
            noise_seed,
            drag,
            size,
            color_category,
        }
    }

    pub fn noise_seed(&self) -> Vec2 {
        self.noise_seed
    }

    pub fn drag(&self) -> f32 {
        self.drag
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn color_category(&self) -> usize {
        self.color_category
    }

    /// Recompute the obstacle force from this frame's points, discarding last frame's.
    pub fn repel(&mut self, field: &RepulsionField, obstacles: &[Vec2]) {
        self.repulsion_force = field.compute(self.position, obstacles);
    }

    /// Advance one tick. The order of the steps matters: drag is applied before
    /// any force is added, and the wrap is decided before the displacement.
    pub fn update(
        &mut self,
        params: &SimulationParameters,
        noise: &NoiseField,
        time: f64,
        viewport: Viewport,
    ) {
        self.noise_force = noise.sample(self.noise_seed, time);

        self.velocity *= self.drag;

        // The repulsion force points at the obstacles, so flipping its sign repels
        if params.repulsive {
            self.velocity -= self.repulsion_force;
        } else {
            self.velocity += self.repulsion_force;
        }

        self.velocity += self.noise_force * params.noise_amplitude;

        // The wrap looks at the unscaled step so a low speed multiplier can't sneak past an edge
        self.position = viewport.wrap(self.position, self.velocity);
        self.position += self.velocity * params.speed_multiplier;
    }
}

/// Creates fully initialised particles from a random source.
#[derive(Debug, Clone)]
pub struct ParticleFactory {
    spawn: SpawnConfig,
}

impl ParticleFactory {
    pub fn new(spawn: SpawnConfig) -> Result<Self> {
        spawn.validate()?;
        Ok(Self { spawn })
    }

    pub fn spawn_config(&self) -> &SpawnConfig {
        &self.spawn
    }

    /// A particle placed uniformly at random inside `viewport`.
    pub fn create<R: Rng + ?Sized>(&self, rng: &mut R, viewport: Viewport) -> Particle {
        let position = vec2(
            random_in(rng, 0.0, viewport.width),
            random_in(rng, 0.0, viewport.height),
        );

        let speed = self.spawn.max_initial_speed;
        let velocity = vec2(random_in(rng, -speed, speed), random_in(rng, -speed, speed));

        let extent = self.spawn.seed_extent;
        let noise_seed = vec2(random_in(rng, -extent, extent), random_in(rng, -extent, extent));

        let [min_drag, max_drag] = self.spawn.drag_range;
        let [min_size, max_size] = self.spawn.size_range;

        Particle::new(
            position,
            velocity,
            noise_seed,
            random_in(rng, min_drag, max_drag),
            random_in(rng, min_size, max_size),
            rng.gen_range(0..PALETTE_SIZE),
        )
    }

    pub fn create_many<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        viewport: Viewport,
        count: usize,
    ) -> Vec<Particle> {
        (0..count).map(|_| self.create(rng, viewport)).collect()
    }
}

// `gen_range` panics on an empty range, which a zero-sized viewport or a
// degenerate config range would produce
fn random_in<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32) -> f32 {
    if low < high {
        rng.gen_range(low..high)
    } else {
        low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const VIEWPORT: Viewport = Viewport {
        width: 640.0,
        height: 480.0,
    };

    fn still_params() -> SimulationParameters {
        SimulationParameters {
            speed_multiplier: 1.0,
            noise_amplitude: 0.0,
            repulsive: false,
        }
    }

    fn particle_at(position: Vec2, velocity: Vec2) -> Particle {
        Particle::new(position, velocity, vec2(1.5, -2.5), 0.98, 4.0, 0)
    }

    #[test]
    fn drag_is_applied_before_forces() {
        let noise = NoiseField::new(0, 0.001);
        let mut particle = particle_at(vec2(100.0, 100.0), vec2(2.0, 0.0));
        particle.repulsion_force = vec2(0.5, 0.0);

        particle.update(&still_params(), &noise, 0.0, VIEWPORT);

        let expected = 2.0 * 0.98 + 0.5;
        assert!((particle.velocity.x - expected).abs() < 1e-6);
        assert!((particle.position.x - (100.0 + expected)).abs() < 1e-4);
    }

    #[test]
    fn wraps_at_right_edge() {
        let noise = NoiseField::new(0, 0.001);
        let mut particle = particle_at(vec2(639.5, 200.0), vec2(1.0, 0.0));

        particle.update(&still_params(), &noise, 0.0, VIEWPORT);

        // -0.5 after the wrap, then moved by the dragged velocity 0.98
        assert!((particle.position.x - 0.48).abs() < 1e-4, "x = {}", particle.position.x);
        assert!(VIEWPORT.contains(particle.position));
        assert_eq!(particle.velocity, vec2(0.98, 0.0));
    }

    #[test]
    fn wrap_is_decided_on_unscaled_velocity() {
        let noise = NoiseField::new(0, 0.001);
        let mut particle = particle_at(vec2(639.5, 200.0), vec2(1.0, 0.0));
        let params = SimulationParameters {
            speed_multiplier: 0.0,
            ..still_params()
        };

        particle.update(&params, &noise, 0.0, VIEWPORT);

        // The particle did not move, but it was still carried across the edge
        assert_eq!(particle.position.x, -0.5);
    }

    #[test]
    fn repulsive_mode_negates_obstacle_delta() {
        let noise = NoiseField::new(0, 0.001);
        let force = vec2(0.003, -0.0015);

        let mut attracted = particle_at(vec2(300.0, 300.0), Vec2::ZERO);
        attracted.repulsion_force = force;
        attracted.update(&still_params(), &noise, 10.0, VIEWPORT);

        let mut repelled = particle_at(vec2(300.0, 300.0), Vec2::ZERO);
        repelled.repulsion_force = force;
        let params = SimulationParameters {
            repulsive: true,
            ..still_params()
        };
        repelled.update(&params, &noise, 10.0, VIEWPORT);

        assert_eq!(attracted.velocity, force);
        assert_eq!(repelled.velocity, -attracted.velocity);
    }

    #[test]
    fn noise_force_is_scaled_by_amplitude() {
        let noise = NoiseField::new(11, 0.001);
        let mut particle = particle_at(vec2(300.0, 300.0), Vec2::ZERO);
        let params = SimulationParameters {
            noise_amplitude: 2.0,
            ..still_params()
        };

        particle.update(&params, &noise, 1_234.0, VIEWPORT);

        let expected = noise.sample(particle.noise_seed(), 1_234.0);
        assert_eq!(particle.noise_force, expected);
        assert_eq!(particle.velocity, expected * 2.0);
    }

    #[test]
    fn repel_replaces_previous_force() {
        let field = RepulsionField::default();
        let mut particle = particle_at(vec2(100.0, 100.0), Vec2::ZERO);
        particle.repulsion_force = vec2(9.0, 9.0);

        particle.repel(&field, &[]);
        assert_eq!(particle.repulsion_force, Vec2::ZERO);
    }

    #[test]
    fn factory_respects_configured_ranges() {
        let spawn = SpawnConfig::default();
        let factory = ParticleFactory::new(spawn.clone()).expect("default spawn config is valid");
        let mut rng = StdRng::seed_from_u64(99);

        for particle in factory.create_many(&mut rng, VIEWPORT, 500) {
            assert!(VIEWPORT.contains(particle.position));
            assert!(particle.velocity.x.abs() <= spawn.max_initial_speed);
            assert!(particle.velocity.y.abs() <= spawn.max_initial_speed);
            assert!(particle.noise_seed().x.abs() <= spawn.seed_extent);
            assert!((spawn.drag_range[0]..=spawn.drag_range[1]).contains(&particle.drag()));
            assert!((spawn.size_range[0]..=spawn.size_range[1]).contains(&particle.size()));
            assert!(particle.color_category() < PALETTE_SIZE);
            assert_eq!(particle.repulsion_force, Vec2::ZERO);
        }
    }

    #[test]
    fn factory_is_reproducible_with_seeded_rng() {
        let factory = ParticleFactory::new(SpawnConfig::default()).expect("valid");

        let a = factory.create_many(&mut StdRng::seed_from_u64(5), VIEWPORT, 10);
        let b = factory.create_many(&mut StdRng::seed_from_u64(5), VIEWPORT, 10);
        assert_eq!(a, b);
    }

    #[test]
    fn factory_rejects_drag_outside_unit_interval() {
        let spawn = SpawnConfig {
            drag_range: [0.9, 1.0],
            ..SpawnConfig::default()
        };
        assert!(ParticleFactory::new(spawn).is_err());

        let spawn = SpawnConfig {
            drag_range: [0.0, 0.5],
            ..SpawnConfig::default()
        };
        assert!(ParticleFactory::new(spawn).is_err());

        let spawn = SpawnConfig {
            drag_range: [0.99, 0.97],
            ..SpawnConfig::default()
        };
        assert!(ParticleFactory::new(spawn).is_err());
    }
}
