use std::ops::Deref;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

use super::{BrowserAccessible, Issue, Repository, Resource, Timestamped, User};
use crate::errors::CoreError;
use crate::normalize::de;

/// A pull request: an [`Issue`] with a head and base reference.
///
/// Issue fields sit at the top level of the payload, next to the pull request
/// specific ones; they are reachable through `Deref`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct PullRequest {
    #[serde(flatten)]
    issue: Issue,
    merge_commit_sha: Option<String>,
    head: Reference,
    base: Reference,
    diff_url: Url,
    patch_url: Url,
    merged_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct RawPullRequest {
    #[serde(flatten)]
    issue: Issue,
    #[serde(default, deserialize_with = "de::optional_string")]
    merge_commit_sha: Option<String>,
    head: Reference,
    base: Reference,
    diff_url: Url,
    patch_url: Url,
    #[serde(default, deserialize_with = "de::optional_timestamp")]
    merged_at: Option<DateTime<Utc>>,
}

deserialize_via!(PullRequest, RawPullRequest);

impl PullRequest {
    #[must_use]
    pub const fn issue(&self) -> &Issue {
        &self.issue
    }

    #[must_use]
    pub fn merge_commit_sha(&self) -> Option<&str> {
        self.merge_commit_sha.as_deref()
    }

    /// The branch the changes come from.
    #[must_use]
    pub const fn head(&self) -> &Reference {
        &self.head
    }

    /// The branch the changes would be merged into.
    #[must_use]
    pub const fn base(&self) -> &Reference {
        &self.base
    }

    #[must_use]
    pub const fn diff_url(&self) -> &Url {
        &self.diff_url
    }

    #[must_use]
    pub const fn patch_url(&self) -> &Url {
        &self.patch_url
    }

    #[must_use]
    pub const fn merged_at(&self) -> Option<DateTime<Utc>> {
        self.merged_at
    }

    #[must_use]
    pub const fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }

    #[allow(clippy::unnecessary_wraps)]
    fn from_raw(raw: RawPullRequest) -> Result<Self, CoreError> {
        Ok(Self {
            issue: raw.issue,
            merge_commit_sha: raw.merge_commit_sha,
            head: raw.head,
            base: raw.base,
            diff_url: raw.diff_url,
            patch_url: raw.patch_url,
            merged_at: raw.merged_at,
        })
    }
}

impl Deref for PullRequest {
    type Target = Issue;

    fn deref(&self) -> &Self::Target {
        &self.issue
    }
}

impl Resource for PullRequest {
    fn id(&self) -> &str {
        self.issue.id()
    }
}

impl Timestamped for PullRequest {
    fn created_at(&self) -> DateTime<Utc> {
        self.issue.created_at()
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.issue.updated_at()
    }
}

impl BrowserAccessible for PullRequest {
    fn html_url(&self) -> &Url {
        self.issue.html_url()
    }
}

// ---------------------------------------------------------------------------
// Reference
// ---------------------------------------------------------------------------

/// One side of a pull request: a branch at a commit in some repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Reference {
    /// `owner:branch`.
    label: String,
    #[serde(rename = "ref")]
    reference: String,
    sha: String,
    user: User,
    /// `None` once the head repository of a fork has been deleted.
    #[serde(alias = "repository")]
    repo: Option<Repository>,
}

impl Reference {
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Branch name, without the `refs/heads/` prefix.
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    #[must_use]
    pub fn sha(&self) -> &str {
        &self.sha
    }

    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    #[must_use]
    pub const fn repository(&self) -> Option<&Repository> {
        self.repo.as_ref()
    }
}
