use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::CoreError;
use crate::normalize::{self, de};

/// A commit as listed in a push.
///
/// The committer is only recorded when it differs from the author; for the
/// common case of a self-committed change [`Commit::committer`] is `None`.
/// Callers that need "who committed" regardless should use
/// [`Commit::effective_committer`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct Commit {
    id: String,
    tree_id: String,
    distinct: bool,
    message: String,
    author: CommitAuthor,
    committer: Option<CommitAuthor>,
    /// Author timestamp, with the author's UTC offset.
    timestamp: DateTime<FixedOffset>,
    added: BTreeSet<String>,
    removed: BTreeSet<String>,
    modified: BTreeSet<String>,
    url: Url,
}

#[derive(Deserialize)]
struct RawCommit {
    id: String,
    tree_id: String,
    #[serde(default)]
    distinct: bool,
    message: String,
    author: CommitAuthor,
    /// Absent and `null` both mean the author committed.
    #[serde(default)]
    committer: Option<CommitAuthor>,
    timestamp: DateTime<FixedOffset>,
    #[serde(default)]
    added: Vec<String>,
    #[serde(default)]
    removed: Vec<String>,
    #[serde(default)]
    modified: Vec<String>,
    url: Url,
}

deserialize_via!(Commit, RawCommit);

impl crate::entities::Resource for Commit {
    fn id(&self) -> &str {
        &self.id
    }
}

impl crate::entities::BrowserAccessible for Commit {
    fn html_url(&self) -> &Url {
        &self.url
    }
}

impl Commit {
    /// Build a commit. The path collections are copied into owned sets, so
    /// later changes to the caller's collections are not observed.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        tree_id: impl Into<String>,
        distinct: bool,
        message: impl Into<String>,
        author: CommitAuthor,
        committer: Option<CommitAuthor>,
        timestamp: DateTime<FixedOffset>,
        added: impl IntoIterator<Item = String>,
        removed: impl IntoIterator<Item = String>,
        modified: impl IntoIterator<Item = String>,
        url: Url,
    ) -> Self {
        let committer = normalize::distinct_from(&author, committer);
        Self {
            id: id.into(),
            tree_id: tree_id.into(),
            distinct,
            message: message.into(),
            author,
            committer,
            timestamp,
            added: added.into_iter().collect(),
            removed: removed.into_iter().collect(),
            modified: modified.into_iter().collect(),
            url,
        }
    }

    #[must_use]
    pub fn tree_id(&self) -> &str {
        &self.tree_id
    }

    /// Whether this commit is new to the repository with this push.
    #[must_use]
    pub const fn is_distinct(&self) -> bool {
        self.distinct
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn author(&self) -> &CommitAuthor {
        &self.author
    }

    /// `None` when the committer is the author.
    #[must_use]
    pub const fn committer(&self) -> Option<&CommitAuthor> {
        self.committer.as_ref()
    }

    #[must_use]
    pub fn effective_committer(&self) -> &CommitAuthor {
        self.committer.as_ref().unwrap_or(&self.author)
    }

    #[must_use]
    pub const fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    #[must_use]
    pub const fn added(&self) -> &BTreeSet<String> {
        &self.added
    }

    #[must_use]
    pub const fn removed(&self) -> &BTreeSet<String> {
        &self.removed
    }

    #[must_use]
    pub const fn modified(&self) -> &BTreeSet<String> {
        &self.modified
    }

    #[allow(clippy::unnecessary_wraps)]
    fn from_raw(raw: RawCommit) -> Result<Self, CoreError> {
        Ok(Self::new(
            raw.id,
            raw.tree_id,
            raw.distinct,
            raw.message,
            raw.author,
            raw.committer,
            raw.timestamp,
            raw.added,
            raw.removed,
            raw.modified,
            raw.url,
        ))
    }
}

// ---------------------------------------------------------------------------
// CommitAuthor
// ---------------------------------------------------------------------------

/// Git identity of a commit author or committer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct CommitAuthor {
    name: String,
    email: String,
    /// GitHub login, when the email maps to an account.
    username: Option<String>,
}

#[derive(Deserialize)]
struct RawCommitAuthor {
    name: String,
    email: String,
    #[serde(default, deserialize_with = "de::optional_string")]
    username: Option<String>,
}

deserialize_via!(CommitAuthor, RawCommitAuthor);

impl CommitAuthor {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, username: Option<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            username: normalize::optional_string(username),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    #[allow(clippy::unnecessary_wraps)]
    fn from_raw(raw: RawCommitAuthor) -> Result<Self, CoreError> {
        Ok(Self::new(raw.name, raw.email, raw.username))
    }
}
