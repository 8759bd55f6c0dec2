//! Closed value sets used by entities and events.
//!
//! Every enum here is declared through `wire_enum!`: it serializes as its
//! lowercase wire name and decodes case-insensitively. A value outside the set
//! is a decode failure, never a silent fallback.

// ---------------------------------------------------------------------------
// Entity states and kinds
// ---------------------------------------------------------------------------

wire_enum! {
    /// Kind of account owning a resource.
    pub enum OwnerKind {
        User => "user",
        Organization => "organization",
        Bot => "bot",
    }
}

wire_enum! {
    /// State of an issue or pull request.
    pub enum IssueState {
        Open => "open",
        Closed => "closed",
    }
}

wire_enum! {
    /// State of a milestone.
    pub enum MilestoneState {
        Open => "open",
        Closed => "closed",
    }
}

wire_enum! {
    /// Outcome of a pull request review.
    pub enum ReviewState {
        Pending => "pending",
        ChangesRequested => "changes_requested",
        Approved => "approved",
        Dismissed => "dismissed",
        Commented => "commented",
    }
}

wire_enum! {
    /// State reported by a deployment status.
    pub enum DeploymentState {
        Error => "error",
        Failure => "failure",
        Inactive => "inactive",
        Pending => "pending",
        Success => "success",
    }
}

wire_enum! {
    /// Upload state of a release asset.
    pub enum ReleaseAssetState {
        New => "new",
        Uploaded => "uploaded",
    }
}

wire_enum! {
    /// Repository permission granted to a team.
    pub enum TeamPermission {
        Admin => "admin",
        Push => "push",
        Pull => "pull",
    }
}

wire_enum! {
    /// Role of a user within a team or an organization.
    pub enum MembershipRole {
        Member => "member",
        Maintainer => "maintainer",
        Admin => "admin",
    }
}

wire_enum! {
    /// Role an invited user will receive in an organization.
    pub enum InvitationRole {
        DirectMember => "direct_member",
        Admin => "admin",
        BillingManager => "billing_manager",
        HiringManager => "hiring_manager",
        Reinstate => "reinstate",
    }
}

wire_enum! {
    /// Progress of a pages build. Payloads without a status decode as `None`.
    pub enum PageBuildStatus {
        None => "none",
        Queued => "queued",
        Building => "building",
        Built => "built",
        Errored => "errored",
    }
}

wire_enum! {
    /// Change applied to a wiki page.
    pub enum GollumAction {
        Created => "created",
        Edited => "edited",
    }
}

wire_enum! {
    /// Kind of git reference named by create/delete events.
    pub enum ReferenceType {
        Repository => "repository",
        Branch => "branch",
        Tag => "tag",
    }
}

// ---------------------------------------------------------------------------
// Event actions
// ---------------------------------------------------------------------------

wire_enum! {
    pub enum CommitCommentAction {
        Created => "created",
    }
}

wire_enum! {
    pub enum IssueCommentAction {
        Created => "created",
        Edited => "edited",
        Deleted => "deleted",
    }
}

wire_enum! {
    pub enum IssuesAction {
        Assigned => "assigned",
        Unassigned => "unassigned",
        Labeled => "labeled",
        Unlabeled => "unlabeled",
        Opened => "opened",
        Edited => "edited",
        Milestoned => "milestoned",
        Demilestoned => "demilestoned",
        Closed => "closed",
        Reopened => "reopened",
    }
}

wire_enum! {
    pub enum LabelAction {
        Created => "created",
        Edited => "edited",
        Deleted => "deleted",
    }
}

wire_enum! {
    /// Collaborator change on a repository.
    pub enum MemberAction {
        Added => "added",
        Deleted => "deleted",
        Edited => "edited",
    }
}

wire_enum! {
    /// Team membership change.
    pub enum MembershipAction {
        Added => "added",
        Removed => "removed",
    }
}

wire_enum! {
    pub enum MilestoneAction {
        Created => "created",
        Closed => "closed",
        Opened => "opened",
        Edited => "edited",
        Deleted => "deleted",
    }
}

wire_enum! {
    pub enum OrganizationAction {
        MemberAdded => "member_added",
        MemberRemoved => "member_removed",
        MemberInvited => "member_invited",
    }
}

wire_enum! {
    pub enum OrganizationBlockAction {
        Blocked => "blocked",
        Unblocked => "unblocked",
    }
}

wire_enum! {
    pub enum PullRequestReviewCommentAction {
        Created => "created",
        Edited => "edited",
        Deleted => "deleted",
    }
}

wire_enum! {
    pub enum PullRequestReviewAction {
        Submitted => "submitted",
        Edited => "edited",
        Dismissed => "dismissed",
    }
}

wire_enum! {
    pub enum PullRequestAction {
        Assigned => "assigned",
        Unassigned => "unassigned",
        ReviewRequested => "review_requested",
        ReviewRequestRemoved => "review_request_removed",
        Labeled => "labeled",
        Unlabeled => "unlabeled",
        Opened => "opened",
        Edited => "edited",
        Closed => "closed",
        Reopened => "reopened",
        /// New commits were pushed to the head branch.
        Synchronize => "synchronize",
    }
}

wire_enum! {
    pub enum RepositoryAction {
        Created => "created",
        Deleted => "deleted",
        Archived => "archived",
        Unarchived => "unarchived",
        Publicized => "publicized",
        Privatized => "privatized",
    }
}

wire_enum! {
    pub enum ReleaseAction {
        Published => "published",
    }
}

wire_enum! {
    pub enum TeamAction {
        Created => "created",
        Deleted => "deleted",
        Edited => "edited",
        AddedToRepository => "added_to_repository",
        RemovedFromRepository => "removed_from_repository",
    }
}

wire_enum! {
    /// Only `started` exists: the event fires when a repository is starred.
    pub enum WatchAction {
        Started => "started",
    }
}
