//! Tracing subscriber setup.

use color_eyre::Result;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// One-shot commands log to stderr.
    Stderr,
    /// The full-screen browser owns the terminal, so it logs to a file.
    File(PathBuf),
}

/// Install the global subscriber. `filter` uses `EnvFilter` syntax; an
/// invalid directive falls back to `warn`.
pub fn init_logging(filter: &str, target: LogTarget) -> Result<()> {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init()
                .map_err(|e| color_eyre::eyre::eyre!("failed to install logger: {}", e))?;
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|e| color_eyre::eyre::eyre!("failed to install logger: {}", e))?;
        }
    }

    tracing::debug!("Logging initialized");
    Ok(())
}
