//! Tracing set-up for the binary.
//!
//! The log filter and destination come from `parlor.toml`, so the config
//! file is read under a short-lived stderr subscriber and the global
//! subscriber is installed afterwards.

use crate::config::{ConfigError, ParlorConfig};
use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing::{Subscriber, info, instrument};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Filter used while the configuration is loaded, unless `RUST_LOG` is set.
pub const STARTUP_FILTER: &str = "warn";

/// `RUST_LOG` when it is set, otherwise `fallback`.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Plain-text subscriber for the start-up phase.
pub fn startup_subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .finish()
}

/// Loads the configuration with `subscriber` collecting the loader's events.
pub fn load_config<S>(subscriber: S, path: Option<&Path>) -> Result<ParlorConfig, ConfigError>
where
    S: Subscriber + Send + Sync + 'static,
{
    tracing::subscriber::with_default(subscriber, || ParlorConfig::load(path))
}

/// Installs the global subscriber.
///
/// Logs go to stderr, or to the configured file, never to stdout.
#[instrument(skip_all)]
pub fn init(config: &ParlorConfig) -> Result<()> {
    let filter = env_filter(config.log_filter());

    match config.log_file() {
        Some(path) => {
            let log_file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }

    info!("Tracing initialized");
    Ok(())
}
