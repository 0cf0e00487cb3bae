//! Logging setup. `SWARM_LOG` takes the usual `RUST_LOG` filter syntax and wins over the config.

use color_eyre::eyre::{Result, WrapErr as _};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, Layer as _};

use crate::config::{Config, LogLevel};

/// Environment variable for user defined log filters
pub const LOG_ENV_VAR: &str = "SWARM_LOG";

/// Install the global `tracing` subscriber.
pub fn setup_logging(config: &Config) -> Result<()> {
    let user_filters = std::env::var(LOG_ENV_VAR).ok();
    if config.log_level == LogLevel::Off && user_filters.is_none() {
        return Ok(());
    }

    let filters = build_filter(config.log_level, user_filters.as_deref())?;

    match &config.log_path {
        Some(path) => {
            if let Some(directory) = path.parent() {
                std::fs::create_dir_all(directory).wrap_err_with(|| {
                    format!("Couldn't create log directory {}", directory.display())
                })?;
            }
            let file = std::fs::File::create(path)
                .wrap_err_with(|| format!("Couldn't create log file {}", path.display()))?;

            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file)
                .with_filter(filters);
            tracing_subscriber::registry().with(layer).try_init()?;
        }
        None => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filters);
            tracing_subscriber::registry().with(layer).try_init()?;
        }
    }

    Ok(())
}

/// User filters replace the configured level entirely. Otherwise only this
/// crate logs, at the configured level; nannou and wgpu are noisy.
fn build_filter(level: LogLevel, user_filters: Option<&str>) -> Result<tracing_subscriber::EnvFilter> {
    let filter = match user_filters {
        Some(filters) => tracing_subscriber::EnvFilter::builder()
            .with_default_directive("error".parse()?)
            .parse_lossy(filters),
        None => {
            let level_as_string = format!("{level:?}").to_lowercase();
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive("off".parse()?)
                .parse_lossy("")
                .add_directive(format!("silhouette_swarm={level_as_string}").parse()?)
        }
    };

    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_targets_this_crate() {
        let filter = build_filter(LogLevel::Debug, None).expect("valid filter");
        let rendered = filter.to_string();
        assert!(rendered.contains("silhouette_swarm=debug"), "{rendered}");
    }

    #[test]
    fn user_filters_are_used_verbatim() {
        let filter = build_filter(LogLevel::Info, Some("wgpu=warn")).expect("valid filter");
        let rendered = filter.to_string();
        assert!(rendered.contains("wgpu=warn"), "{rendered}");
        assert!(!rendered.contains("silhouette_swarm"), "{rendered}");
    }
}
