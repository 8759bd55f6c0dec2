use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::normalize::{self, de};

/// Creation/modification pair shared by timestamped entities.
///
/// Embedded with `#[serde(flatten)]`, so it reads and writes the
/// `created_at`/`updated_at` keys of the enclosing object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct Timestamps {
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct RawTimestamps {
    #[serde(deserialize_with = "de::timestamp")]
    created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "de::optional_timestamp")]
    updated_at: Option<DateTime<Utc>>,
}

deserialize_via!(Timestamps, RawTimestamps);

impl Timestamps {
    /// Build a pair, dropping a modification time equal to the creation time.
    #[must_use]
    pub fn new(created_at: DateTime<Utc>, updated_at: Option<DateTime<Utc>>) -> Self {
        Self {
            created_at,
            updated_at: normalize::modification_timestamp(&created_at, updated_at),
        }
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    #[allow(clippy::unnecessary_wraps)]
    fn from_raw(raw: RawTimestamps) -> Result<Self, CoreError> {
        Ok(Self::new(raw.created_at, raw.updated_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echoed_creation_time_is_not_a_modification() {
        let ts: Timestamps = serde_json::from_str(
            r#"{"created_at": "2015-05-05T23:40:28Z", "updated_at": "2015-05-05T23:40:28Z"}"#,
        )
        .unwrap();
        assert_eq!(ts.created_at().timestamp(), 1_430_869_228);
        assert_eq!(ts.updated_at(), None);
    }

    #[test]
    fn mixed_wire_forms_compare_by_instant() {
        // Same instant, one as epoch seconds and one as an offset timestamp.
        let ts: Timestamps = serde_json::from_str(
            r#"{"created_at": 1430869212, "updated_at": "2015-05-05T19:40:12-04:00"}"#,
        )
        .unwrap();
        assert_eq!(ts.updated_at(), None);
    }

    #[test]
    fn later_modification_is_kept() {
        let created = DateTime::from_timestamp(1_430_869_213, 0).unwrap();
        let updated = DateTime::from_timestamp(1_430_869_217, 0).unwrap();
        let ts = Timestamps::new(created, Some(updated));
        assert_eq!(ts.updated_at(), Some(updated));
    }

    #[test]
    fn missing_creation_time_fails() {
        let result = serde_json::from_str::<Timestamps>(r#"{"updated_at": 1430869212}"#);
        assert!(result.unwrap_err().to_string().contains("missing field `created_at`"));
    }
}
