//! Normalization rules applied while constructing entities.
//!
//! Upstream payloads are loose about absence: optional strings arrive as `""`
//! or `"  "`, never-edited resources echo their creation time as the
//! modification time, ids arrive as numbers in one payload and strings in the
//! next. Every constructor funnels its fields through the functions below so
//! that a decoded value never exposes those artifacts.
//!
//! The [`de`] submodule wraps the same rules as `deserialize_with` helpers.

use chrono::{DateTime, Utc};
use url::Url;

use crate::errors::CoreError;

/// Collapse `None`, empty, and whitespace-only strings to `None`.
///
/// Non-blank input is returned unchanged (not trimmed).
#[must_use]
pub fn optional_string(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.trim().is_empty())
}

/// Collapse a modification timestamp that is absent or equal to the creation
/// timestamp to `None`.
#[must_use]
pub fn modification_timestamp<T: PartialEq>(creation: &T, modification: Option<T>) -> Option<T> {
    distinct_from(creation, modification)
}

/// Keep `candidate` only when it differs from `reference`.
///
/// Used where a payload repeats a value that is already recorded elsewhere,
/// e.g. a commit's committer echoing its author.
#[must_use]
pub fn distinct_from<T: PartialEq>(reference: &T, candidate: Option<T>) -> Option<T> {
    candidate.filter(|value| value != reference)
}

/// Parse an absolute URL, attributing failures to `field`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidUrl`] if `raw` is not an absolute URL.
pub fn url(field: &'static str, raw: &str) -> Result<Url, CoreError> {
    Url::parse(raw).map_err(|e| CoreError::InvalidUrl {
        field,
        reason: e.to_string(),
    })
}

/// Parse an optional URL after collapsing blank input to `None`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidUrl`] if a non-blank value is not an absolute URL.
pub fn optional_url(field: &'static str, raw: Option<String>) -> Result<Option<Url>, CoreError> {
    optional_string(raw).map(|value| url(field, &value)).transpose()
}

/// Browser URL of an account profile, for owners whose payload omits `html_url`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidUrl`] if `login` cannot form a URL path.
pub fn profile_url(login: &str) -> Result<Url, CoreError> {
    url("html_url", &format!("https://github.com/{login}"))
}

/// Convert integer epoch seconds into a UTC timestamp.
#[must_use]
pub fn epoch_seconds(seconds: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0)
}

/// `deserialize_with` helpers.
///
/// Optional variants must be paired with `#[serde(default)]` so that a
/// missing key also decodes as `None`.
pub mod de {
    use std::fmt;

    use chrono::{DateTime, Utc};
    use serde::de::{self, Deserializer, Unexpected, Visitor};
    use serde::Deserialize;
    use url::Url;

    /// Accept a JSON string or integer and store it as a string id.
    pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        deserializer.deserialize_any(IdVisitor)
    }

    /// Optional string, blank collapsed to `None`.
    pub fn optional_string<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Option::<String>::deserialize(deserializer).map(super::optional_string)
    }

    /// Optional URL, blank collapsed to `None`.
    pub fn optional_url<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Url>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        super::optional_url("url", raw).map_err(de::Error::custom)
    }

    /// RFC 3339 string or integer epoch seconds.
    pub fn timestamp<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }

    /// Optional RFC 3339 string or integer epoch seconds.
    pub fn optional_timestamp<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Option::<FlexibleTimestamp>::deserialize(deserializer).map(|t| t.map(|t| t.0))
    }

    struct FlexibleTimestamp(DateTime<Utc>);

    impl<'de> Deserialize<'de> for FlexibleTimestamp {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            timestamp(deserializer).map(Self)
        }
    }

    struct IdVisitor;

    impl Visitor<'_> for IdVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or integer identifier")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(v.to_owned())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(v.to_string())
        }
    }

    struct TimestampVisitor;

    impl Visitor<'_> for TimestampVisitor {
        type Value = DateTime<Utc>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an RFC 3339 timestamp or integer epoch seconds")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            DateTime::parse_from_rfc3339(v)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            super::epoch_seconds(v).ok_or_else(|| E::invalid_value(Unexpected::Signed(v), &self))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            let seconds =
                i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))?;
            self.visit_i64(seconds)
        }
    }
}
