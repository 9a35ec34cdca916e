//! Configuration and logging setup for embedders of the signature mapper.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use varsig_core::MappingOptions;

/// Tracing target for configuration events.
pub const CONFIG_TARGET: &str = "varsig.config";

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VarsigConfig {
    #[serde(default)]
    pub mapping: MappingOptions,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse toml config: {0}")]
    Toml(String),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        // Keep the message without the source snippet.
        ConfigError::Toml(err.message().to_string())
    }
}

impl VarsigConfig {
    /// Load a config file from TOML.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::load_from_str(&text)
    }

    pub fn load_from_str(text: &str) -> Result<Self, ConfigError> {
        let config: VarsigConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mapping.max_type_depth == 0 {
            return Err(ConfigError::Invalid(
                "mapping.max_type_depth must be at least 1".to_owned(),
            ));
        }
        self.logging.config_filter()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// A level name (`warning` is accepted for `warn`) or `EnvFilter` directives such as
    /// `warn,varsig_core=trace`.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,

    /// One JSON object per event instead of plain text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_owned()
    }

    /// The `level` setting as filter directives.
    pub fn directives(&self) -> String {
        let level = self.level.trim();
        let lower = level.to_ascii_lowercase();
        match lower.as_str() {
            "" => Self::default_level(),
            "warning" => "warn".to_owned(),
            "off" | "error" | "warn" | "info" | "debug" | "trace" => lower,
            _ => level.to_owned(),
        }
    }

    fn config_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(self.directives())
            .map_err(|err| ConfigError::Invalid(format!("logging.level: {err}")))
    }

    /// The filter `init_tracing` installs. A valid `RUST_LOG` replaces the configured level.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => self.config_filter(),
        }
    }
}

/// Registry with `filter` and a fmt layer writing to `writer`, plain or JSON per `config`.
fn subscriber<W>(
    config: &LoggingConfig,
    filter: EnvFilter,
    writer: W,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Clone + Send + Sync + 'static,
{
    let json = config.json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_ansi(false)
            .with_writer(writer.clone())
    });
    let plain = (!config.json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer)
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(plain)
}

/// Installs the global subscriber, logging to stderr.
///
/// Returns `Ok(false)` when a global subscriber was already installed; that one is kept.
pub fn init_tracing(config: &LoggingConfig) -> Result<bool, ConfigError> {
    let filter = config.env_filter()?;
    let installed = subscriber(config, filter, std::io::stderr).try_init().is_ok();
    if !installed {
        tracing::debug!(
            target: CONFIG_TARGET,
            "global tracing subscriber already installed"
        );
    }
    Ok(installed)
}
