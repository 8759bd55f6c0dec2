use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Deployment, DeploymentStatus, Repository, User};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct DeploymentEvent {
    deployment: Deployment,
    repository: Repository,
    sender: User,
}

impl DeploymentEvent {
    #[must_use]
    pub const fn deployment(&self) -> &Deployment {
        &self.deployment
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct DeploymentStatusEvent {
    deployment_status: DeploymentStatus,
    deployment: Deployment,
    repository: Repository,
    sender: User,
}

impl DeploymentStatusEvent {
    #[must_use]
    pub const fn deployment_status(&self) -> &DeploymentStatus {
        &self.deployment_status
    }

    /// The deployment the status belongs to.
    #[must_use]
    pub const fn deployment(&self) -> &Deployment {
        &self.deployment
    }
}

impl_user_triggered!(DeploymentEvent, DeploymentStatusEvent);
impl_repository_scoped!(DeploymentEvent, DeploymentStatusEvent);
