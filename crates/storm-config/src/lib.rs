//! # storm-config
//!
//! Layered configuration loading for stormdrain using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`STORMDRAIN_*` prefix, `__` as separator)
//! 2. Project-level `./stormdrain.toml`
//! 3. User-level `~/.config/stormdrain/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `STORMDRAIN_DECODER__MAX_PAYLOAD_BYTES` -> `decoder.max_payload_bytes`
//! and `STORMDRAIN_LOG__LEVEL` -> `log.level`.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use storm_config::StormConfig;
//! use storm_schema::PayloadRegistry;
//!
//! let config = StormConfig::load_with_dotenv().expect("config");
//! let registry = PayloadRegistry::with_limits(config.decoder.limits());
//! ```

mod decoder;
mod error;
mod log;

pub use decoder::DecoderConfig;
pub use error::ConfigError;
pub use log::LogConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_FILE: &str = "stormdrain.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StormConfig {
    #[serde(default)]
    pub decoder: DecoderConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl StormConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`StormConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be read or merged, or
    /// `ConfigError::InvalidValue` if the merged values are out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`StormConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// See [`StormConfig::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns the first section's `ConfigError::InvalidValue`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.decoder.validate()?;
        self.log.validate()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority).
        // `STORMDRAIN_LOG` is the tracing filter, not a config key.
        figment.merge(Env::prefixed("STORMDRAIN_").ignore(&["log"]).split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("stormdrain").join("config.toml"))
    }
}
