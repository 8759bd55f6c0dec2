use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Timestamps, User};
use crate::enums::PageBuildStatus;
use crate::errors::CoreError;
use crate::normalize::de;

/// Outcome of a GitHub Pages build.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct PageBuild {
    status: PageBuildStatus,
    error_message: Option<String>,
    /// Build duration in whole seconds.
    duration: Option<u64>,
    commit: String,
    pusher: User,
    #[serde(flatten)]
    timestamps: Timestamps,
}

#[derive(Deserialize)]
struct RawPageBuild {
    #[serde(default)]
    status: Option<PageBuildStatus>,
    #[serde(default)]
    error: Option<RawBuildError>,
    /// Already-lifted form, as written by [`PageBuild`]'s `Serialize`.
    #[serde(default, deserialize_with = "de::optional_string")]
    error_message: Option<String>,
    #[serde(default)]
    duration: Option<u64>,
    commit: String,
    pusher: User,
    #[serde(flatten)]
    timestamps: Timestamps,
}

#[derive(Deserialize)]
struct RawBuildError {
    #[serde(default, deserialize_with = "de::optional_string")]
    message: Option<String>,
}

deserialize_via!(PageBuild, RawPageBuild);
impl_timestamped!(PageBuild);

impl PageBuild {
    /// [`PageBuildStatus::None`] when the payload carries no status.
    #[must_use]
    pub const fn status(&self) -> PageBuildStatus {
        self.status
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration.map(Duration::from_secs)
    }

    /// Sha of the commit that was built.
    #[must_use]
    pub fn commit(&self) -> &str {
        &self.commit
    }

    #[must_use]
    pub const fn pusher(&self) -> &User {
        &self.pusher
    }

    #[allow(clippy::unnecessary_wraps)]
    fn from_raw(raw: RawPageBuild) -> Result<Self, CoreError> {
        Ok(Self {
            status: raw.status.unwrap_or(PageBuildStatus::None),
            error_message: raw.error.and_then(|error| error.message).or(raw.error_message),
            duration: raw.duration,
            commit: raw.commit,
            pusher: raw.pusher,
            timestamps: raw.timestamps,
        })
    }
}
