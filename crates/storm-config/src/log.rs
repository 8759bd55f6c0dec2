//! Log level configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

fn default_level() -> String {
    String::from("warn")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogConfig {
    /// Default tracing level when `STORMDRAIN_LOG` is unset and no
    /// `--quiet`/`--verbose` flag is given.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LogConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for anything but a tracing level name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if LEVELS.iter().any(|level| level.eq_ignore_ascii_case(&self.level)) {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "log.level".into(),
                reason: format!("expected one of {}, got '{}'", LEVELS.join(", "), self.level),
            })
        }
    }
}
