//! Application configuration.
//!
//! Read from a TOML file (`aula.toml` unless `--config` says otherwise).
//! Every field has a default, so a missing or partial file is fine.

use crate::sound::SoundBackend;
use aula_lookup::Endpoints;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Config file looked for in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "aula.toml";

/// Environment variable overriding [`AppConfig::data_dir`].
pub const DATA_DIR_ENV: &str = "AULA_DATA_DIR";

/// Range the computer opponent "thinks" for before moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ThinkingDelay {
    /// Shortest delay in milliseconds.
    #[serde(default = "default_min_ms")]
    min_ms: u64,
    /// Longest delay in milliseconds.
    #[serde(default = "default_max_ms")]
    max_ms: u64,
}

fn default_min_ms() -> u64 {
    500
}

fn default_max_ms() -> u64 {
    1500
}

impl ThinkingDelay {
    /// Creates a delay range; the bounds are swapped if given backwards.
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self {
            min_ms: min_ms.min(max_ms),
            max_ms: min_ms.max(max_ms),
        }
    }

    /// No delay at all.
    pub fn instant() -> Self {
        Self::new(0, 0)
    }

    /// Draws a delay uniformly from the range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let (lo, hi) = (self.min_ms.min(self.max_ms), self.min_ms.max(self.max_ms));
        Duration::from_millis(rng.random_range(lo..=hi))
    }
}

impl Default for ThinkingDelay {
    fn default() -> Self {
        Self::new(default_min_ms(), default_max_ms())
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Setters)]
#[setters(into, prefix = "with_")]
pub struct AppConfig {
    /// Directory holding saved state and history.
    #[serde(default = "default_data_dir")]
    data_dir: PathBuf,
    /// File the terminal UI logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
    /// Opponent thinking delay.
    #[serde(default)]
    thinking: ThinkingDelay,
    /// How sound events are rendered.
    #[serde(default)]
    sound: SoundBackend,
    /// Catalogue endpoints.
    #[serde(default)]
    endpoints: Endpoints,
    /// Input sizes for `bench` when none are given.
    #[serde(default = "default_bench_sizes")]
    bench_sizes: Vec<usize>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("aula-data")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("aula.log")
}

fn default_bench_sizes() -> Vec<usize> {
    vec![100, 500, 1000, 2000]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_file: default_log_file(),
            thinking: ThinkingDelay::default(),
            sound: SoundBackend::default(),
            endpoints: Endpoints::default(),
            bench_sizes: default_bench_sizes(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(data_dir = %config.data_dir.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the configuration for this run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// used when present and defaults otherwise. [`DATA_DIR_ENV`] overrides
    /// the data directory in every case.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE)?,
            None => {
                debug!("No config file, using defaults");
                Self::default()
            }
        };

        if let Ok(dir) = std::env::var(DATA_DIR_ENV)
            && !dir.trim().is_empty()
        {
            debug!(%dir, "Data directory overridden from environment");
            config.data_dir = PathBuf::from(dir);
        }
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
