//! Tracing subscriber setup for the command-line front end.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::config::LogSettings;

const LOG_FILE: &str = "amareh.log";

/// Build the level filter: `RUST_LOG` wins over the configured level.
pub fn filter(settings: &LogSettings) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&settings.level)
            .with_context(|| format!("Invalid log level '{}'", settings.level)),
    }
}

/// Install the global subscriber.
///
/// Logs go to stderr and, when a directory is configured, are appended to
/// `amareh.log` inside it.
pub fn init(settings: &LogSettings) -> Result<()> {
    let console = settings
        .console
        .then(|| fmt::layer().with_writer(std::io::stderr).with_target(false));

    let file = match &settings.directory {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let path = dir.join(LOG_FILE);
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter(settings)?)
        .with(console)
        .with(file)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
