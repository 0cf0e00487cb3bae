/*
 * Silhouette Swarm
 *
 * A swarm of particles wanders on coherent noise and reacts to the silhouette
 * of a person: depending on the mode, particles are drawn towards the outline
 * or pushed away from it. Until a camera pipeline is attached, holding the
 * left mouse button projects a stand-in silhouette around the cursor.
 */

use clap::Parser as _;
use color_eyre::eyre::Result;

use silhouette_swarm::cli_args::CliArgs;
use silhouette_swarm::config::{Config, DEFAULT_CONFIG};
use silhouette_swarm::{app, logging};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = CliArgs::parse();
    if cli_args.print_default_config {
        print!("{DEFAULT_CONFIG}");
        return Ok(());
    }

    let mut config = Config::load(cli_args.config.as_deref())?;
    cli_args.apply(&mut config);
    config.validate()?;

    logging::setup_logging(&config)?;
    tracing::info!(
        particles = config.particle_count,
        frame_rate = config.frame_rate,
        config_file = ?cli_args.config,
        "Starting Silhouette Swarm"
    );
    tracing::debug!("Loaded config: {config:?}");

    app::run(config)
}
