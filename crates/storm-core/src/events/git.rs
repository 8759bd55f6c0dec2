use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::entities::{Commit, CommitAuthor, CommitComment, Repository, User};
use crate::enums::{CommitCommentAction, ReferenceType};
use crate::errors::CoreError;
use crate::normalize::de;

/// One or more commits pushed to a branch or tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct PushEvent {
    /// Full ref name, e.g. `refs/heads/main`.
    #[serde(rename = "ref")]
    reference: String,
    /// Sha the ref pointed to before the push.
    before: String,
    /// Sha the ref points to after the push.
    after: String,
    compare: Url,
    created: bool,
    deleted: bool,
    forced: bool,
    #[serde(default, deserialize_with = "de::optional_string")]
    base_ref: Option<String>,
    commits: Vec<Commit>,
    /// `None` when the push deleted the ref.
    #[serde(default)]
    head_commit: Option<Commit>,
    pusher: CommitAuthor,
    repository: Repository,
    sender: User,
}

impl PushEvent {
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    #[must_use]
    pub fn before(&self) -> &str {
        &self.before
    }

    #[must_use]
    pub fn after(&self) -> &str {
        &self.after
    }

    /// Page comparing `before` and `after`.
    #[must_use]
    pub const fn compare(&self) -> &Url {
        &self.compare
    }

    #[must_use]
    pub const fn is_created(&self) -> bool {
        self.created
    }

    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted
    }

    #[must_use]
    pub const fn is_forced(&self) -> bool {
        self.forced
    }

    #[must_use]
    pub fn base_ref(&self) -> Option<&str> {
        self.base_ref.as_deref()
    }

    /// Pushed commits, oldest first.
    #[must_use]
    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    #[must_use]
    pub const fn head_commit(&self) -> Option<&Commit> {
        self.head_commit.as_ref()
    }

    #[must_use]
    pub const fn pusher(&self) -> &CommitAuthor {
        &self.pusher
    }
}

/// A comment on a commit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct CommitCommentEvent {
    action: CommitCommentAction,
    comment: CommitComment,
    repository: Repository,
    sender: User,
}

impl CommitCommentEvent {
    #[must_use]
    pub const fn action(&self) -> CommitCommentAction {
        self.action
    }

    #[must_use]
    pub const fn comment(&self) -> &CommitComment {
        &self.comment
    }
}

/// A branch or tag was created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct CreateEvent {
    /// Short ref name, e.g. `main` or `v1.0.0`.
    #[serde(rename = "ref")]
    reference: String,
    ref_type: ReferenceType,
    master_branch: String,
    description: Option<String>,
    repository: Repository,
    sender: User,
}

#[derive(Deserialize)]
struct RawCreateEvent {
    #[serde(rename = "ref")]
    reference: String,
    ref_type: ReferenceType,
    master_branch: String,
    #[serde(default, deserialize_with = "de::optional_string")]
    description: Option<String>,
    repository: Repository,
    sender: User,
}

deserialize_via!(CreateEvent, RawCreateEvent);

impl CreateEvent {
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    #[must_use]
    pub const fn ref_type(&self) -> ReferenceType {
        self.ref_type
    }

    /// The repository's default branch at the time of the event.
    #[must_use]
    pub fn master_branch(&self) -> &str {
        &self.master_branch
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[allow(clippy::unnecessary_wraps)]
    fn from_raw(raw: RawCreateEvent) -> Result<Self, CoreError> {
        Ok(Self {
            reference: raw.reference,
            ref_type: raw.ref_type,
            master_branch: raw.master_branch,
            description: raw.description,
            repository: raw.repository,
            sender: raw.sender,
        })
    }
}

/// A branch or tag was deleted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct DeleteEvent {
    #[serde(rename = "ref")]
    reference: String,
    ref_type: ReferenceType,
    repository: Repository,
    sender: User,
}

impl DeleteEvent {
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    #[must_use]
    pub const fn ref_type(&self) -> ReferenceType {
        self.ref_type
    }
}

impl_user_triggered!(PushEvent, CommitCommentEvent, CreateEvent, DeleteEvent);
impl_repository_scoped!(PushEvent, CommitCommentEvent, CreateEvent, DeleteEvent);
