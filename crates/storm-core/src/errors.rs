//! Construction-time error types for stormdrain values.
//!
//! Decoding failures (malformed input, missing fields, unknown discriminators)
//! are reported by `storm-schema`. This module only covers the invariants that
//! entities enforce themselves once their fields have been read.

use thiserror::Error;

/// Errors raised while constructing an entity or event value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A cross-field invariant was violated (e.g. a comment location with a
    /// path but no line).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A field that must hold an absolute URL could not be parsed as one.
    #[error("Invalid URL in '{field}': {reason}")]
    InvalidUrl { field: &'static str, reason: String },

    /// A label colour was not a hexadecimal RGB value.
    #[error("Invalid label color '{0}': expected a hexadecimal value")]
    InvalidColor(String),
}

impl CoreError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
