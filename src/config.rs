//! Client configuration.
//!
//! Values come from defaults, then environment variables, then command-line
//! flags (applied by the binary with the `with_*` setters).

use std::path::PathBuf;
use std::time::Duration;

use crate::session::SESSION_DIR;

/// Default backend the web client was built against.
pub const DEFAULT_API_URL: &str = "https://reactbackend-production-9eb6.up.railway.app";

/// Overrides the API base URL.
pub const ENV_API_URL: &str = "BLOGDECK_API_URL";
/// Overrides the directory holding the session file and the log.
pub const ENV_HOME: &str = "BLOGDECK_HOME";
/// Request timeout in whole seconds. Unset means no timeout.
pub const ENV_TIMEOUT_SECS: &str = "BLOGDECK_TIMEOUT_SECS";
/// `tracing` filter directive, e.g. `blogdeck=debug`.
pub const ENV_LOG: &str = "BLOGDECK_LOG";

/// Log file name inside the data directory.
pub const LOG_FILE: &str = "blogdeck.log";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration for the API client and the binary.
///
/// # Example
///
/// ```ignore
/// use blogdeck::config::ClientConfig;
///
/// let config = ClientConfig::from_env()
///     .with_base_url("http://localhost:3000");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API base URL, without a trailing slash
    pub base_url: String,
    /// Directory for the session file and log (default: `~/.blogdeck`)
    pub data_dir: Option<PathBuf>,
    /// Per-request timeout (default: none)
    pub timeout: Option<Duration>,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            data_dir: None,
            timeout: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL. A trailing slash is dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(url.into());
        self
    }

    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the log filter.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Build a config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Empty values are
    /// treated as unset; an unparsable timeout is ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_API_URL) {
            config = config.with_base_url(url);
        }
        if let Some(dir) = get(ENV_HOME) {
            config = config.with_data_dir(dir);
        }
        if let Some(secs) = get(ENV_TIMEOUT_SECS).and_then(|v| v.trim().parse::<u64>().ok()) {
            if secs > 0 {
                config = config.with_timeout(Duration::from_secs(secs));
            }
        }
        if let Some(filter) = get(ENV_LOG) {
            config = config.with_log_filter(filter);
        }
        config
    }

    /// Directory holding the session file and the log.
    ///
    /// Returns `None` only when no directory was configured and the home
    /// directory cannot be determined.
    pub fn data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(SESSION_DIR)))
    }

    /// Path of the log file used by the interactive browser.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.data_dir().map(|dir| dir.join(LOG_FILE))
    }
}

fn normalize_base_url(url: String) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    trimmed.to_string()
}
