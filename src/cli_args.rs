//! Command line arguments. Anything given here overrides the config file.

use std::path::PathBuf;

use crate::config::{Config, LogLevel};

#[derive(clap::Parser, Debug, Clone, Default)]
#[command(version, about = "A particle swarm that reacts to your silhouette")]
#[non_exhaustive]
pub struct CliArgs {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of particles in the swarm
    #[arg(short, long)]
    pub particles: Option<usize>,

    /// Maximum log level
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_path: Option<PathBuf>,

    /// Print the default config file and exit
    #[arg(long)]
    pub print_default_config: bool,
}

impl CliArgs {
    /// Apply the overrides to an already loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(particles) = self.particles {
            config.particle_count = particles;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(path) = &self.log_path {
            config.log_path = Some(path.clone());
        }
    }
}
