/*
 * Configuration Module
 *
 * Everything that can be tuned without recompiling. The config is read from
 * an optional TOML file; any field the file leaves out keeps its default, so
 * an empty file is a valid config.
 */

use color_eyre::eyre::{ensure, Result, WrapErr as _};
use std::path::{Path, PathBuf};

use crate::PALETTE_SIZE;

/// A documented copy of the defaults, for users to start their own config from.
pub static DEFAULT_CONFIG: &str = include_str!("../default_config.toml");

/// RGB colors indexed by a particle's color category.
pub type Palette = [[u8; 3]; PALETTE_SIZE];

pub const DEFAULT_PALETTE: Palette = [[45, 237, 38], [219, 2, 60], [245, 96, 47], [187, 26, 219]];

/// The valid log levels. Based on the `tracing` crate.
#[derive(serde::Serialize, serde::Deserialize, clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    /// No logging
    Off,
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Number of particles created at startup
    pub particle_count: usize,
    /// Simulation ticks per second
    pub frame_rate: f32,
    pub log_level: LogLevel,
    /// Log to this file instead of stderr
    pub log_path: Option<PathBuf>,
    pub spawn: SpawnConfig,
    pub repulsion: RepulsionConfig,
    pub noise: NoiseConfig,
    pub controls: ControlsConfig,
    pub palette: Palette,
    pub capture: CaptureConfig,
    pub silhouette: SilhouetteConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            particle_count: 1000,
            frame_rate: 60.0,
            log_level: LogLevel::Info,
            log_path: None,
            spawn: SpawnConfig::default(),
            repulsion: RepulsionConfig::default(),
            noise: NoiseConfig::default(),
            controls: ControlsConfig::default(),
            palette: DEFAULT_PALETTE,
            capture: CaptureConfig::default(),
            silhouette: SilhouetteConfig::default(),
        }
    }
}

/// Ranges the particle factory draws from.
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnConfig {
    /// Initial velocity components are drawn from `[-max, max)`
    pub max_initial_speed: f32,
    /// Noise seed components are drawn from `[-extent, extent)`
    pub seed_extent: f32,
    pub size_range: [f32; 2],
    /// Must lie strictly inside `(0, 1)`
    pub drag_range: [f32; 2],
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            max_initial_speed: 4.0,
            seed_extent: 1000.0,
            size_range: [3.0, 5.0],
            drag_range: [0.97, 0.99],
        }
    }
}

#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct RepulsionConfig {
    pub radius: f32,
    pub gain: f32,
}

impl Default for RepulsionConfig {
    fn default() -> Self {
        Self {
            radius: crate::repulsion::DEFAULT_EFFECTIVE_RADIUS,
            gain: crate::repulsion::DEFAULT_GAIN,
        }
    }
}

#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct NoiseConfig {
    pub seed: u32,
    /// Noise units per millisecond of simulated time
    pub time_scale: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            time_scale: 0.001,
        }
    }
}

/// Initial positions of the UI controls.
#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ControlsConfig {
    pub speed: f32,
    pub noise: f32,
    /// Alpha of the fade rectangle drawn over the previous frame, 0 to 20 out of 255
    pub trail: f32,
    pub repulsive: bool,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            noise: 1.0,
            trail: 6.0,
            repulsive: false,
        }
    }
}

/// Resolution of the frames the obstacle points were extracted from.
#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct CaptureConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
        }
    }
}

/// Shape of the cursor driven stand-in silhouette, in capture pixels.
#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SilhouetteConfig {
    pub radius: f32,
    pub points: usize,
}

impl Default for SilhouetteConfig {
    fn default() -> Self {
        Self {
            radius: 60.0,
            points: 96,
        }
    }
}

impl Config {
    /// Load the config from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let contents = std::fs::read_to_string(path)
                    .wrap_err_with(|| format!("Couldn't read config file {}", path.display()))?;
                Self::from_toml(&contents)
                    .wrap_err_with(|| format!("Couldn't parse config file {}", path.display()))?
            }
            None => Self::default(),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.particle_count > 0, "particle_count must be at least 1");
        ensure!(
            self.frame_rate > 0.0,
            "frame_rate must be positive, got {}",
            self.frame_rate
        );
        ensure!(
            self.repulsion.radius > 0.0,
            "repulsion radius must be positive, got {}",
            self.repulsion.radius
        );
        ensure!(
            self.noise.time_scale >= 0.0,
            "noise time_scale must not be negative, got {}",
            self.noise.time_scale
        );
        ensure!(
            self.capture.width > 0.0 && self.capture.height > 0.0,
            "capture size must be positive, got {}x{}",
            self.capture.width,
            self.capture.height
        );
        ensure!(
            self.silhouette.radius >= 0.0,
            "silhouette radius must not be negative, got {}",
            self.silhouette.radius
        );
        self.spawn.validate()
    }
}

impl SpawnConfig {
    pub fn validate(&self) -> Result<()> {
        let [min_drag, max_drag] = self.drag_range;
        ensure!(
            min_drag > 0.0 && max_drag < 1.0,
            "drag range [{min_drag}, {max_drag}] must lie strictly inside (0, 1)"
        );
        ensure!(
            min_drag <= max_drag,
            "drag range [{min_drag}, {max_drag}] is inverted"
        );

        let [min_size, max_size] = self.size_range;
        ensure!(
            min_size >= 0.0 && min_size <= max_size,
            "size range [{min_size}, {max_size}] must be non-negative and ordered"
        );
        ensure!(
            self.max_initial_speed >= 0.0,
            "max initial speed {} must not be negative",
            self.max_initial_speed
        );
        ensure!(
            self.seed_extent >= 0.0,
            "noise seed extent {} must not be negative",
            self.seed_extent
        );

        Ok(())
    }
}
