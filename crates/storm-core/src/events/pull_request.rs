use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{PullRequest, Repository, Review, ReviewComment, User};
use crate::enums::{PullRequestAction, PullRequestReviewAction, PullRequestReviewCommentAction};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct PullRequestEvent {
    action: PullRequestAction,
    number: u64,
    pull_request: PullRequest,
    repository: Repository,
    sender: User,
}

impl PullRequestEvent {
    #[must_use]
    pub const fn action(&self) -> PullRequestAction {
        self.action
    }

    #[must_use]
    pub const fn number(&self) -> u64 {
        self.number
    }

    #[must_use]
    pub const fn pull_request(&self) -> &PullRequest {
        &self.pull_request
    }
}

/// A review was submitted, edited, or dismissed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct PullRequestReviewEvent {
    action: PullRequestReviewAction,
    review: Review,
    pull_request: PullRequest,
    repository: Repository,
    sender: User,
}

impl PullRequestReviewEvent {
    #[must_use]
    pub const fn action(&self) -> PullRequestReviewAction {
        self.action
    }

    #[must_use]
    pub const fn review(&self) -> &Review {
        &self.review
    }

    #[must_use]
    pub const fn pull_request(&self) -> &PullRequest {
        &self.pull_request
    }
}

/// A comment on a pull request diff.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct PullRequestReviewCommentEvent {
    action: PullRequestReviewCommentAction,
    comment: ReviewComment,
    pull_request: PullRequest,
    repository: Repository,
    sender: User,
}

impl PullRequestReviewCommentEvent {
    #[must_use]
    pub const fn action(&self) -> PullRequestReviewCommentAction {
        self.action
    }

    #[must_use]
    pub const fn comment(&self) -> &ReviewComment {
        &self.comment
    }

    #[must_use]
    pub const fn pull_request(&self) -> &PullRequest {
        &self.pull_request
    }
}

impl_user_triggered!(
    PullRequestEvent,
    PullRequestReviewEvent,
    PullRequestReviewCommentEvent
);
impl_repository_scoped!(
    PullRequestEvent,
    PullRequestReviewEvent,
    PullRequestReviewCommentEvent
);
