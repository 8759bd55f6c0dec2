//! The closed set of event discriminators.

wire_enum! {
    /// Discriminator tag naming the shape of a delivery body.
    ///
    /// Transports carry the tag out of band, in the `X-GitHub-Event` header.
    pub enum PayloadType {
        CommitComment => "commit_comment",
        Create => "create",
        Delete => "delete",
        Deployment => "deployment",
        DeploymentStatus => "deployment_status",
        Fork => "fork",
        Gollum => "gollum",
        IssueComment => "issue_comment",
        Issues => "issues",
        Label => "label",
        Member => "member",
        Membership => "membership",
        Milestone => "milestone",
        Organization => "organization",
        OrganizationBlock => "org_block",
        PageBuild => "page_build",
        Public => "public",
        PullRequestReviewComment => "pull_request_review_comment",
        PullRequestReview => "pull_request_review",
        PullRequest => "pull_request",
        Push => "push",
        Repository => "repository",
        Release => "release",
        Team => "team",
        TeamAdd => "team_add",
        Watch => "watch",
    }
}

impl PayloadType {
    /// Header that carries the discriminator on a delivery.
    pub const HEADER: &'static str = "X-GitHub-Event";

    /// Header that carries the delivery identifier.
    pub const DELIVERY_HEADER: &'static str = "X-GitHub-Delivery";
}
