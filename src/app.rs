/*
 * Application Module
 *
 * The nannou model and update loop. Each rendered frame:
 * 1. the control panel is drawn and turned into a parameter snapshot,
 * 2. the obstacle source fills this frame's point list,
 * 3. the swarm is stepped by however many fixed ticks are due,
 * all against the same frozen obstacle list and parameters.
 */

use color_eyre::eyre::{eyre, Result};
use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::OnceLock;
use std::time::Instant;

use crate::boundary::Viewport;
use crate::camera::viewport_of;
use crate::config::Config;
use crate::debug::DebugInfo;
use crate::input::{key_pressed, mouse_moved, mouse_pressed, mouse_released, raw_window_event};
use crate::noise_field::NoiseField;
use crate::obstacles::{CursorSilhouette, ObstacleSource as _};
use crate::params::{ControlChanges, ControlPanel};
use crate::particle::ParticleFactory;
use crate::renderer::view;
use crate::repulsion::RepulsionField;
use crate::system::{FrameInput, ParticleSystem};
use crate::timestep::FixedTimestep;
use crate::{ui, MAX_TICKS_PER_FRAME};

// Everything `model` needs that must be prepared before nannou takes over
struct Setup {
    config: Config,
    factory: ParticleFactory,
}

// nannou's model function is a plain `fn`, so it can't capture the config
static SETUP: OnceLock<Setup> = OnceLock::new();

// Main model for the application
pub struct Model {
    pub system: ParticleSystem,
    pub factory: ParticleFactory,
    pub controls: ControlPanel,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub silhouette: CursorSilhouette,
    // This frame's obstacle snapshot, reused between frames
    pub obstacles: Vec<Vec2>,
    pub clock: FixedTimestep,
    pub last_update_time: Instant,
    pub rng: StdRng,
}

/// Start the nannou app. Blocks until the window is closed.
pub fn run(config: Config) -> Result<()> {
    let factory = ParticleFactory::new(config.spawn.clone())?;

    SETUP
        .set(Setup { config, factory })
        .map_err(|_| eyre!("The app can only be started once"))?;

    nannou::app(model).update(update).run();
    Ok(())
}

// Initialize the model
fn model(app: &App) -> Model {
    let setup = SETUP
        .get()
        .expect("app::run stores the setup before nannou calls model");
    let config = &setup.config;

    // 80% of the primary monitor, like a windowed projector preview
    let (window_width, window_height) = match app.primary_monitor() {
        Some(monitor) => {
            let size = monitor.size();
            (size.width as f32 * 0.8, size.height as f32 * 0.8)
        }
        None => (1280.0, 720.0),
    };

    let window_id = app
        .new_window()
        .title("Silhouette Swarm")
        .size(window_width as u32, window_height as u32)
        .view(view)
        .mouse_moved(mouse_moved)
        .mouse_pressed(mouse_pressed)
        .mouse_released(mouse_released)
        .key_pressed(key_pressed)
        .raw_event(raw_window_event)
        .build()
        .expect("Failed to build window");

    let window = app.window(window_id).expect("Window was just built");
    let egui = Egui::from_window(&window);
    let viewport = viewport_of(window.rect());

    let mut rng = StdRng::from_entropy();
    let system = ParticleSystem::spawn(
        &setup.factory,
        &mut rng,
        viewport,
        config.particle_count,
        NoiseField::new(config.noise.seed, config.noise.time_scale),
        RepulsionField::new(config.repulsion.radius, config.repulsion.gain),
    );

    Model {
        system,
        factory: setup.factory.clone(),
        controls: ControlPanel::new(&config.controls, config.palette),
        egui,
        debug_info: DebugInfo {
            particle_count: config.particle_count,
            ..DebugInfo::default()
        },
        silhouette: CursorSilhouette::new(config.capture, config.silhouette),
        obstacles: Vec::new(),
        clock: FixedTimestep::new(config.frame_rate, MAX_TICKS_PER_FRAME),
        last_update_time: Instant::now(),
        rng,
    }
}

// Update the model
fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let actions = ui::update_ui(&mut model.egui, &mut model.controls, &model.debug_info);
    log_changes(&actions.changes);

    let viewport = viewport_of(app.window_rect());
    if actions.respawn {
        respawn_swarm(model, viewport);
    }

    let now = Instant::now();
    let elapsed = now.duration_since(model.last_update_time);
    model.last_update_time = now;

    if model.controls.paused {
        model.clock.reset_accumulator();
        model.debug_info.ticks_per_frame = 0;
        return;
    }

    let ticks = model.clock.advance(elapsed);
    if ticks > 0 {
        // One snapshot per frame, shared by every tick run for it
        model.silhouette.collect(viewport, &mut model.obstacles);
        let params = model.controls.snapshot();

        for _ in 0..ticks {
            let time = model.clock.tick();
            model.system.step(&FrameInput {
                obstacles: &model.obstacles,
                params,
                time,
                viewport,
            });
        }
    }

    model.debug_info.ticks_per_frame = ticks;
    model.debug_info.obstacle_count = model.obstacles.len();
    model.debug_info.particle_count = model.system.len();
    model.debug_info.simulated_time_ms = model.clock.simulated_ms();
}

/// Re-roll every particle over the current viewport.
pub fn respawn_swarm(model: &mut Model, viewport: Viewport) {
    model.system.respawn(&model.factory, &mut model.rng, viewport);
}

fn log_changes(changes: &ControlChanges) {
    if !changes.any() {
        return;
    }

    tracing::info!(
        speed = ?changes.speed,
        noise = ?changes.noise,
        trail = ?changes.trail,
        repulsive = ?changes.repulsive,
        paused = ?changes.paused,
        palette = changes.palette,
        "Controls changed"
    );
}
