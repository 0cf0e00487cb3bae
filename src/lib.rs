/*
 * Silhouette Swarm - Module Definitions
 *
 * A swarm of particles drifts on coherent noise and is pulled towards, or
 * pushed away from, the outline of whoever stands in front of the camera.
 *
 * The simulation core (noise field, particles, repulsion field, boundary and
 * particle system) does no I/O and knows nothing about windows. Everything
 * from `app` downwards is the nannou glue around it.
 */

// Re-export key components for easier access
pub use boundary::Viewport;
pub use config::Config;
pub use noise_field::NoiseField;
pub use params::{ControlPanel, SimulationParameters};
pub use particle::{Particle, ParticleFactory};
pub use repulsion::RepulsionField;
pub use system::{FrameInput, ParticleSystem, RenderItem};

// Simulation core
pub mod boundary;
pub mod noise_field;
pub mod particle;
pub mod repulsion;
pub mod system;

// Inputs and configuration
pub mod cli_args;
pub mod config;
pub mod logging;
pub mod obstacles;
pub mod params;

// Application
pub mod app;
pub mod camera;
pub mod debug;
pub mod input;
pub mod renderer;
pub mod timestep;
pub mod ui;

// Constants
pub const PALETTE_SIZE: usize = 4;
/// Upper bound on simulation ticks run for a single rendered frame
pub const MAX_TICKS_PER_FRAME: u32 = 4;
