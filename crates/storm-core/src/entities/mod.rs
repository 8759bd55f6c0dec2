//! Entity value objects decoded from webhook payloads.
//!
//! Entities are immutable once constructed: fields are private and exposed
//! through accessors, collections are owned snapshots, and every optional
//! value has already been through [`crate::normalize`]. Equality and hashing
//! are structural over all fields.
//!
//! Specializations (`User`/`Organization` over [`ResourceOwner`],
//! [`PullRequest`] over [`Issue`], [`CommitComment`]/[`ReviewComment`] over
//! [`Comment`]) embed their base value and dereference to it.

mod comment;
mod commit;
mod deployment;
mod gollum;
mod invitation;
mod issue;
mod milestone;
mod owner;
mod page_build;
mod pull_request;
mod release;
mod repository;
mod review;
mod team;
mod timestamps;

use chrono::{DateTime, Utc};
use url::Url;

pub use comment::{Comment, CommentLocation, CommitComment, ReviewComment};
pub use commit::{Commit, CommitAuthor};
pub use deployment::{Deployment, DeploymentStatus};
pub use gollum::GollumPage;
pub use invitation::Invitation;
pub use issue::{Issue, Label};
pub use milestone::Milestone;
pub use owner::{Organization, ResourceOwner, User};
pub use page_build::PageBuild;
pub use pull_request::{PullRequest, Reference};
pub use release::{Release, ReleaseAsset};
pub use repository::Repository;
pub use review::Review;
pub use team::{Membership, Team};
pub use timestamps::Timestamps;

/// An entity with a stable upstream identifier.
pub trait Resource {
    /// Opaque identifier, never reused upstream.
    fn id(&self) -> &str;
}

/// An entity with a creation time and an optional modification time.
///
/// The modification time is `None` when the resource was never modified,
/// including when upstream echoes the creation time back as the update time.
pub trait Timestamped {
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> Option<DateTime<Utc>>;
}

/// An entity with a human-viewable page.
pub trait BrowserAccessible {
    fn html_url(&self) -> &Url;
}

/// Sample payload fragments shared by the entity and event tests.
#[cfg(test)]
pub(crate) mod fixtures {
    pub(crate) use super::comment::tests::{commit_comment_json, review_comment_json};
    pub(crate) use super::commit::tests::commit_json;
    pub(crate) use super::deployment::tests::{deployment_json, deployment_status_json};
    pub(crate) use super::gollum::tests::gollum_page_json;
    pub(crate) use super::issue::tests::{issue_json, user_json};
    pub(crate) use super::milestone::tests::milestone_json;
    pub(crate) use super::page_build::tests::page_build_json;
    pub(crate) use super::pull_request::tests::pull_request_json;
    pub(crate) use super::release::tests::release_json;
    pub(crate) use super::repository::tests::repository_json;
    pub(crate) use super::review::tests::review_json;
    pub(crate) use super::team::tests::team_json;
}
