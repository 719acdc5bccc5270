//! Event-watch configuration.
//!
//! Settings come from hardcoded defaults, optionally overridden by a TOML file:
//!
//! ```toml
//! pump_timeout_ms = 5000
//! poll_timeout_ms = 1000
//! skip_own_process = true
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::{WINEVENT_OUTOFCONTEXT, WINEVENT_SKIPOWNPROCESS, WINEVENT_SKIPOWNTHREAD};
use crate::errors::AccError;

/// Upper bound for any pump timeout. Longer waits make interrupts feel ignored.
pub const MAX_TIMEOUT_MS: u64 = 60_000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config file: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("IO error reading config: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl AccError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigParseError { .. } | ConfigError::InvalidConfiguration { .. }
        )
    }
}

/// Settings for the event registry's hook installation and run loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Pump timeout used by [`crate::registry::Registry::run`] between interrupt checks.
    pub pump_timeout_ms: u64,
    /// Pump timeout for a single interactive `iter_loop` call.
    pub poll_timeout_ms: u64,
    /// Ignore events raised by this process.
    pub skip_own_process: bool,
    /// Ignore events raised by the thread that installed the hook.
    pub skip_own_thread: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            pump_timeout_ms: 5000,
            poll_timeout_ms: 1000,
            skip_own_process: false,
            skip_own_thread: false,
        }
    }
}

impl WatchConfig {
    pub fn pump_timeout(&self) -> Duration {
        Duration::from_millis(self.pump_timeout_ms)
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms)
    }

    /// `SetWinEventHook` flags for out-of-context hooks with the configured skips.
    pub fn hook_flags(&self) -> u32 {
        let mut flags = WINEVENT_OUTOFCONTEXT;
        if self.skip_own_process {
            flags |= WINEVENT_SKIPOWNPROCESS;
        }
        if self.skip_own_thread {
            flags |= WINEVENT_SKIPOWNTHREAD;
        }
        flags
    }
}

/// Load and validate a configuration file.
pub fn load_config_file(path: &Path) -> Result<WatchConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: WatchConfig = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })?;
    validate_config(&config)?;

    info!(
        event = "acctree.config.load_completed",
        path = %path.display(),
        pump_timeout_ms = config.pump_timeout_ms
    );
    Ok(config)
}

/// Load a configuration file, falling back to defaults when it does not exist.
///
/// Parse and validation errors are still returned.
pub fn load_or_default(path: &Path) -> Result<WatchConfig, ConfigError> {
    match load_config_file(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::IoError { source }) if source.kind() == std::io::ErrorKind::NotFound => {
            debug!(
                event = "acctree.config.file_missing",
                path = %path.display()
            );
            Ok(WatchConfig::default())
        }
        Err(e) => Err(e),
    }
}

pub fn validate_config(config: &WatchConfig) -> Result<(), ConfigError> {
    for (field, value) in [
        ("pump_timeout_ms", config.pump_timeout_ms),
        ("poll_timeout_ms", config.poll_timeout_ms),
    ] {
        if value == 0 {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("{} must be greater than 0", field),
            });
        }
        if value > MAX_TIMEOUT_MS {
            return Err(ConfigError::InvalidConfiguration {
                message: format!(
                    "{} must be at most {} (got {})",
                    field, MAX_TIMEOUT_MS, value
                ),
            });
        }
    }
    Ok(())
}
