use std::path::Path;

use anyhow::Result;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, Map, builder::DefaultState};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_LOG_LEVEL, DEFAULT_MAX_OCCURRENCES, ENV_PREFIX};
use crate::error::CoreError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub expansion: ExpansionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ExpansionConfig {
    /// Hard cap on occurrences generated from one event, whatever its interval.
    pub max_occurrences: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            max_occurrences: DEFAULT_MAX_OCCURRENCES,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, the environment and a TOML file.
    ///
    /// Environment variables use the `CADENCE_` prefix with `__` between
    /// sections (`CADENCE_EXPANSION__MAX_OCCURRENCES`). They override values
    /// from the file. When `config_file` is `None`, `cadence.toml` in the
    /// working directory is read if it exists.
    ///
    /// ## Errors
    /// Returns an error if a source cannot be read, deserialization fails, or
    /// the resulting settings are invalid.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        Self::load_with_env(config_file, None)
    }

    /// ## Summary
    /// Same layering as [`Settings::load`], reading variables from `env`
    /// instead of the process environment when it is `Some`.
    ///
    /// ## Errors
    /// Returns an error if a source cannot be read, deserialization fails, or
    /// the resulting settings are invalid.
    pub fn load_with_env(
        config_file: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(CONFIG_FILE_NAME).required(false),
        };

        let settings = with_defaults()?
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Builds settings from TOML text layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the text is not valid TOML, does not match the
    /// settings shape, or the resulting settings are invalid.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let settings = with_defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks invariants that deserialization alone cannot express.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if `expansion.max_occurrences`
    /// is zero or `logging.level` is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.expansion.max_occurrences == 0 {
            return Err(CoreError::InvalidConfiguration(
                "expansion.max_occurrences must be at least 1".to_string(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>> {
    Ok(Config::builder()
        .set_default(
            "expansion.max_occurrences",
            i64::from(DEFAULT_MAX_OCCURRENCES),
        )?
        .set_default("logging.level", DEFAULT_LOG_LEVEL)?)
}

/// ## Summary
/// Loads the `.env` file (if any) and then the layered configuration.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(config_file: Option<&Path>) -> Result<Settings> {
    if let Err(err) = dotenvy::dotenv() {
        tracing::trace!(error = %err, "No .env file loaded");
    }

    Settings::load(config_file)
}
