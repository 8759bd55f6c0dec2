use std::ops::Deref;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

use super::{Timestamps, User};
use crate::errors::CoreError;
use crate::normalize::{self, de};

/// A comment on an issue or pull request conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct Comment {
    id: String,
    body: Option<String>,
    user: User,
    html_url: Url,
    #[serde(flatten)]
    timestamps: Timestamps,
}

#[derive(Deserialize)]
struct RawComment {
    #[serde(deserialize_with = "de::id")]
    id: String,
    #[serde(default, deserialize_with = "de::optional_string")]
    body: Option<String>,
    user: User,
    html_url: Url,
    #[serde(flatten)]
    timestamps: Timestamps,
}

deserialize_via!(Comment, RawComment);
impl_resource!(Comment, CommitComment, ReviewComment);
impl_timestamped!(Comment, CommitComment, ReviewComment);
impl_browser_accessible!(Comment, CommitComment, ReviewComment);

impl Comment {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        body: Option<String>,
        user: User,
        html_url: Url,
        timestamps: Timestamps,
    ) -> Self {
        Self {
            id: id.into(),
            body: normalize::optional_string(body),
            user,
            html_url,
            timestamps,
        }
    }

    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The author.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    #[allow(clippy::unnecessary_wraps)]
    fn from_raw(raw: RawComment) -> Result<Self, CoreError> {
        Ok(Self::new(raw.id, raw.body, raw.user, raw.html_url, raw.timestamps))
    }
}

// ---------------------------------------------------------------------------
// CommitComment
// ---------------------------------------------------------------------------

/// A comment on a commit, either on the commit as a whole or on one line of
/// one file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct CommitComment {
    #[serde(flatten)]
    comment: Comment,
    commit_id: String,
    #[serde(flatten)]
    location: Option<CommentLocation>,
}

#[derive(Deserialize)]
struct RawCommitComment {
    #[serde(flatten)]
    comment: Comment,
    commit_id: String,
    #[serde(default, deserialize_with = "de::optional_string")]
    path: Option<String>,
    #[serde(default)]
    line: Option<u64>,
}

deserialize_via!(CommitComment, RawCommitComment);

impl CommitComment {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if exactly one of `path` and `line`
    /// is present.
    pub fn new(
        comment: Comment,
        commit_id: impl Into<String>,
        path: Option<String>,
        line: Option<u64>,
    ) -> Result<Self, CoreError> {
        let location = match (normalize::optional_string(path), line) {
            (Some(path), Some(line)) => Some(CommentLocation::new(path, line)),
            (None, None) => None,
            (Some(path), None) => {
                return Err(CoreError::validation(format!(
                    "comment on file '{path}' has no line"
                )));
            }
            (None, Some(line)) => {
                return Err(CoreError::validation(format!(
                    "comment on line {line} has no file path"
                )));
            }
        };
        Ok(Self {
            comment,
            commit_id: commit_id.into(),
            location,
        })
    }

    #[must_use]
    pub const fn comment(&self) -> &Comment {
        &self.comment
    }

    #[must_use]
    pub fn commit_id(&self) -> &str {
        &self.commit_id
    }

    /// `None` for comments on the commit as a whole.
    #[must_use]
    pub const fn location(&self) -> Option<&CommentLocation> {
        self.location.as_ref()
    }

    fn from_raw(raw: RawCommitComment) -> Result<Self, CoreError> {
        Self::new(raw.comment, raw.commit_id, raw.path, raw.line)
    }
}

impl Deref for CommitComment {
    type Target = Comment;

    fn deref(&self) -> &Self::Target {
        &self.comment
    }
}

/// File and line a commit comment is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct CommentLocation {
    path: String,
    line: u64,
}

impl CommentLocation {
    #[must_use]
    pub fn new(path: impl Into<String>, line: u64) -> Self {
        Self {
            path: path.into(),
            line,
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub const fn line(&self) -> u64 {
        self.line
    }
}

// ---------------------------------------------------------------------------
// ReviewComment
// ---------------------------------------------------------------------------

/// A comment on a pull request diff.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct ReviewComment {
    #[serde(flatten)]
    comment: Comment,
    path: String,
    diff_hunk: String,
    /// Line index into the current diff; `None` once the line is outdated.
    position: Option<u64>,
    original_position: Option<u64>,
    commit_id: String,
    original_commit_id: String,
}

#[derive(Deserialize)]
struct RawReviewComment {
    #[serde(flatten)]
    comment: Comment,
    path: String,
    diff_hunk: String,
    #[serde(default)]
    position: Option<u64>,
    #[serde(default)]
    original_position: Option<u64>,
    commit_id: String,
    original_commit_id: String,
}

deserialize_via!(ReviewComment, RawReviewComment);

impl ReviewComment {
    #[must_use]
    pub const fn comment(&self) -> &Comment {
        &self.comment
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn diff_hunk(&self) -> &str {
        &self.diff_hunk
    }

    #[must_use]
    pub const fn position(&self) -> Option<u64> {
        self.position
    }

    #[must_use]
    pub const fn original_position(&self) -> Option<u64> {
        self.original_position
    }

    #[must_use]
    pub fn commit_id(&self) -> &str {
        &self.commit_id
    }

    #[must_use]
    pub fn original_commit_id(&self) -> &str {
        &self.original_commit_id
    }

    #[allow(clippy::unnecessary_wraps)]
    fn from_raw(raw: RawReviewComment) -> Result<Self, CoreError> {
        Ok(Self {
            comment: raw.comment,
            path: raw.path,
            diff_hunk: raw.diff_hunk,
            position: raw.position,
            original_position: raw.original_position,
            commit_id: raw.commit_id,
            original_commit_id: raw.original_commit_id,
        })
    }
}

impl Deref for ReviewComment {
    type Target = Comment;

    fn deref(&self) -> &Self::Target {
        &self.comment
    }
}
