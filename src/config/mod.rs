//! Configuration management module.
//!
//! Process-wide settings are read from environment variables with the
//! `UGEN__<SECTION>__<KEY>` pattern. Command-line flags override them.
//! No configuration files are read.

mod defaults;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

pub use defaults::DefaultsConfig;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "UGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Generation defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or the result is
    /// invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Environment::with_prefix(ENV_PREFIX))
    }

    /// Load configuration from an environment source.
    ///
    /// `UGEN__DEFAULTS__LENGTH=16` -> `defaults.length = 16`
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or the result is
    /// invalid.
    pub fn load_from(environment: Environment) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(environment.separator("__").try_parsing(true))
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.defaults.count == 0 {
            return Err(ConfigError::Message(
                "defaults.count cannot be 0".to_string(),
            ));
        }

        if self.defaults.length == 0 {
            return Err(ConfigError::Message(
                "defaults.length cannot be 0".to_string(),
            ));
        }

        if !matches!(self.observability.log_format.as_str(), "text" | "json") {
            return Err(ConfigError::Message(format!(
                "observability.log_format must be \"text\" or \"json\", got {:?}",
                self.observability.log_format
            )));
        }

        Ok(())
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}
