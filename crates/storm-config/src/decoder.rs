//! Decoder limits.

use serde::{Deserialize, Serialize};
use storm_schema::DecodeLimits;
use storm_schema::registry::DEFAULT_MAX_PAYLOAD_BYTES;

use crate::error::ConfigError;

const fn default_max_payload_bytes() -> usize {
    DEFAULT_MAX_PAYLOAD_BYTES
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DecoderConfig {
    /// Largest delivery body accepted, in bytes.
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: default_max_payload_bytes(),
        }
    }
}

impl DecoderConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when `max_payload_bytes` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_payload_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "decoder.max_payload_bytes".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn limits(&self) -> DecodeLimits {
        DecodeLimits {
            max_payload_bytes: self.max_payload_bytes,
        }
    }
}
