//! Decode error types.

use serde_json::error::Category;
use storm_core::PayloadType;
use thiserror::Error;

/// Every way a delivery can fail to decode or to be wrapped in an envelope.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The discriminator tag is not part of the closed tag set.
    #[error("Unknown payload type: {0}")]
    UnknownDiscriminator(String),

    /// The body is not parseable JSON.
    #[error("Malformed payload: {message}")]
    Malformed {
        message: String,
        line: usize,
        column: usize,
    },

    /// A field the target schema requires was absent.
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// A value has the wrong type or is outside its closed set, even after
    /// case-insensitive matching.
    #[error("Illegal value: {0}")]
    IllegalValue(String),

    /// An entity rejected its fields (unpaired comment location, invitation
    /// without login or email, bad label colour, ...).
    #[error("Invalid payload: {0}")]
    Invalid(String),

    /// Reading the input source failed.
    #[error("I/O error reading payload: {0}")]
    Io(#[from] std::io::Error),

    #[error("Payload of {size} bytes exceeds the limit of {max} bytes")]
    PayloadTooLarge { size: usize, max: usize },

    /// An envelope was assembled from a tag and an event that disagree.
    #[error("Payload type '{payload_type}' expects {expected}, got {actual}")]
    SchemaMismatch {
        payload_type: PayloadType,
        expected: &'static str,
        actual: &'static str,
    },

    /// The tag is known but this registry carries no entry for it.
    #[error("Payload type not registered: {0}")]
    NotRegistered(PayloadType),

    /// JSON value did not pass schema validation.
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Individual error messages from the validator.
        errors: Vec<String>,
    },

    /// Schema compilation error.
    #[error("Schema generation error: {0}")]
    Generation(String),
}

/// Coarse category of a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    UnknownDiscriminator,
    Malformed,
    MissingField,
    IllegalValue,
    Invalid,
    Io,
    PayloadTooLarge,
    SchemaMismatch,
    NotRegistered,
    Schema,
}

impl DecodeError {
    #[must_use]
    pub const fn kind(&self) -> DecodeErrorKind {
        match self {
            Self::UnknownDiscriminator(_) => DecodeErrorKind::UnknownDiscriminator,
            Self::Malformed { .. } => DecodeErrorKind::Malformed,
            Self::MissingField(_) => DecodeErrorKind::MissingField,
            Self::IllegalValue(_) => DecodeErrorKind::IllegalValue,
            Self::Invalid(_) => DecodeErrorKind::Invalid,
            Self::Io(_) => DecodeErrorKind::Io,
            Self::PayloadTooLarge { .. } => DecodeErrorKind::PayloadTooLarge,
            Self::SchemaMismatch { .. } => DecodeErrorKind::SchemaMismatch,
            Self::NotRegistered(_) => DecodeErrorKind::NotRegistered,
            Self::ValidationFailed { .. } | Self::Generation(_) => DecodeErrorKind::Schema,
        }
    }

    /// Whether resending the same delivery could succeed.
    ///
    /// Only malformed bodies and read failures qualify, since both can be
    /// caused by a truncated transport read. Nothing in this crate retries.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Malformed { .. } | Self::Io(_))
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(error: serde_json::Error) -> Self {
        match error.classify() {
            Category::Io => Self::Io(error.into()),
            Category::Syntax | Category::Eof => Self::Malformed {
                line: error.line(),
                column: error.column(),
                message: error.to_string(),
            },
            Category::Data => {
                let message = error.to_string();
                if message.starts_with("missing field") {
                    Self::MissingField(message)
                } else if ["unknown variant", "invalid type", "invalid value", "invalid length"]
                    .iter()
                    .any(|prefix| message.starts_with(prefix))
                {
                    Self::IllegalValue(message)
                } else {
                    Self::Invalid(message)
                }
            }
        }
    }
}
