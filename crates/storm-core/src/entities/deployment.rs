use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

use super::{Timestamps, User};
use crate::enums::DeploymentState;
use crate::errors::CoreError;
use crate::normalize::de;

/// A request to deploy a ref to an environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct Deployment {
    id: String,
    environment: String,
    description: Option<String>,
    creator: User,
    #[serde(flatten)]
    timestamps: Timestamps,
}

#[derive(Deserialize)]
struct RawDeployment {
    #[serde(deserialize_with = "de::id")]
    id: String,
    environment: String,
    #[serde(default, deserialize_with = "de::optional_string")]
    description: Option<String>,
    creator: User,
    #[serde(flatten)]
    timestamps: Timestamps,
}

deserialize_via!(Deployment, RawDeployment);
impl_resource!(Deployment, DeploymentStatus);
impl_timestamped!(Deployment, DeploymentStatus);

impl Deployment {
    #[must_use]
    pub fn environment(&self) -> &str {
        &self.environment
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub const fn creator(&self) -> &User {
        &self.creator
    }

    #[allow(clippy::unnecessary_wraps)]
    fn from_raw(raw: RawDeployment) -> Result<Self, CoreError> {
        Ok(Self {
            id: raw.id,
            environment: raw.environment,
            description: raw.description,
            creator: raw.creator,
            timestamps: raw.timestamps,
        })
    }
}

/// A state change reported for a [`Deployment`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct DeploymentStatus {
    id: String,
    state: DeploymentState,
    description: Option<String>,
    target_url: Option<Url>,
    #[serde(flatten)]
    timestamps: Timestamps,
}

#[derive(Deserialize)]
struct RawDeploymentStatus {
    #[serde(deserialize_with = "de::id")]
    id: String,
    state: DeploymentState,
    #[serde(default, deserialize_with = "de::optional_string")]
    description: Option<String>,
    #[serde(default, deserialize_with = "de::optional_url")]
    target_url: Option<Url>,
    #[serde(flatten)]
    timestamps: Timestamps,
}

deserialize_via!(DeploymentStatus, RawDeploymentStatus);

impl DeploymentStatus {
    #[must_use]
    pub const fn state(&self) -> DeploymentState {
        self.state
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Where the deployment output can be seen.
    #[must_use]
    pub const fn target_url(&self) -> Option<&Url> {
        self.target_url.as_ref()
    }

    #[allow(clippy::unnecessary_wraps)]
    fn from_raw(raw: RawDeploymentStatus) -> Result<Self, CoreError> {
        Ok(Self {
            id: raw.id,
            state: raw.state,
            description: raw.description,
            target_url: raw.target_url,
            timestamps: raw.timestamps,
        })
    }
}
