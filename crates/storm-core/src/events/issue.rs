use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Comment, Issue, Label, Milestone, Repository, User};
use crate::enums::{IssueCommentAction, IssuesAction, LabelAction, MilestoneAction};

/// An issue was opened, edited, closed, labelled, assigned, and so on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct IssuesEvent {
    action: IssuesAction,
    issue: Issue,
    /// Label added or removed, for `labeled`/`unlabeled`.
    #[serde(default)]
    label: Option<Label>,
    /// User added or removed, for `assigned`/`unassigned`.
    #[serde(default)]
    assignee: Option<User>,
    repository: Repository,
    sender: User,
}

impl IssuesEvent {
    #[must_use]
    pub const fn action(&self) -> IssuesAction {
        self.action
    }

    #[must_use]
    pub const fn issue(&self) -> &Issue {
        &self.issue
    }

    #[must_use]
    pub const fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    #[must_use]
    pub const fn assignee(&self) -> Option<&User> {
        self.assignee.as_ref()
    }
}

/// A comment on an issue or pull request conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct IssueCommentEvent {
    action: IssueCommentAction,
    issue: Issue,
    comment: Comment,
    repository: Repository,
    sender: User,
}

impl IssueCommentEvent {
    #[must_use]
    pub const fn action(&self) -> IssueCommentAction {
        self.action
    }

    #[must_use]
    pub const fn issue(&self) -> &Issue {
        &self.issue
    }

    #[must_use]
    pub const fn comment(&self) -> &Comment {
        &self.comment
    }
}

/// A repository label was created, edited, or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct LabelEvent {
    action: LabelAction,
    label: Label,
    repository: Repository,
    sender: User,
}

impl LabelEvent {
    #[must_use]
    pub const fn action(&self) -> LabelAction {
        self.action
    }

    #[must_use]
    pub const fn label(&self) -> &Label {
        &self.label
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct MilestoneEvent {
    action: MilestoneAction,
    milestone: Milestone,
    repository: Repository,
    sender: User,
}

impl MilestoneEvent {
    #[must_use]
    pub const fn action(&self) -> MilestoneAction {
        self.action
    }

    #[must_use]
    pub const fn milestone(&self) -> &Milestone {
        &self.milestone
    }
}

impl_user_triggered!(IssuesEvent, IssueCommentEvent, LabelEvent, MilestoneEvent);
impl_repository_scoped!(IssuesEvent, IssueCommentEvent, LabelEvent, MilestoneEvent);
