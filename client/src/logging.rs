//! Tracing setup. Logs go to a file so they never draw over the table.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::filter::EnvFilter;

pub const LOG_FILE: &str = "air_hockey.log";

/// Install the global subscriber; `RUST_LOG` overrides the `info` default
pub fn init() -> anyhow::Result<PathBuf> {
    let path = std::env::temp_dir().join(LOG_FILE);
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(path)
}
