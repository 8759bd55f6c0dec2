//! Event payloads, one struct per discriminator, and the [`Event`] sum type.
//!
//! Events hold their entities by value. Every event names the user that
//! triggered it ([`UserTriggered`]); events that happen inside a repository
//! or an organization also implement [`RepositoryScoped`] or
//! [`OrganizationScoped`].

mod deployment;
mod git;
mod issue;
mod organization;
mod pull_request;
mod repository;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::entities::{Organization, Repository, User};
use crate::payload_type::PayloadType;

pub use deployment::{DeploymentEvent, DeploymentStatusEvent};
pub use git::{CommitCommentEvent, CreateEvent, DeleteEvent, PushEvent};
pub use issue::{IssueCommentEvent, IssuesEvent, LabelEvent, MilestoneEvent};
pub use organization::{
    MembershipEvent, OrganizationBlockEvent, OrganizationEvent, TeamAddEvent, TeamEvent,
};
pub use pull_request::{PullRequestEvent, PullRequestReviewCommentEvent, PullRequestReviewEvent};
pub use repository::{
    ForkEvent, GollumEvent, MemberEvent, PageBuildEvent, PublicEvent, ReleaseEvent,
    RepositoryEvent, WatchEvent,
};

/// An event caused by a user.
pub trait UserTriggered {
    fn sender(&self) -> &User;
}

/// An event that always happens inside a repository.
pub trait RepositoryScoped {
    fn repository(&self) -> &Repository;
}

/// An event that always happens inside an organization.
pub trait OrganizationScoped {
    fn organization(&self) -> &Organization;
}

/// Binds an event struct to its discriminator and to its [`Event`] variant.
pub trait TypedEvent:
    UserTriggered + Serialize + DeserializeOwned + JsonSchema + Into<Event> + Sized
{
    /// The discriminator this struct is decoded for.
    const PAYLOAD_TYPE: PayloadType;

    /// The repository the event happened in, when there is one.
    fn scoped_repository(&self) -> Option<&Repository>;

    /// Unwrap from the sum type, handing the event back on mismatch.
    ///
    /// # Errors
    ///
    /// Returns the original event if it holds a different variant.
    fn from_event(event: Event) -> Result<Self, Event>;

    fn from_event_ref(event: &Event) -> Option<&Self>;
}

macro_rules! scoped_repository {
    ($event:ident, required) => {
        Some(RepositoryScoped::repository($event))
    };
    ($event:ident, optional) => {
        $event.repository()
    };
    ($event:ident, none) => {
        None
    };
}

/// Declare the [`Event`] sum type and bind every variant to its payload
/// struct and discriminator.
macro_rules! events {
    ($( $variant:ident($ty:ty) => $payload_type:ident, repository: $scope:ident; )+) => {
        /// Any decoded event.
        ///
        /// Serializes as the wrapped payload, without a tag; the discriminator
        /// travels next to it (see `storm_schema::Envelope`).
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(untagged)]
        pub enum Event {
            $( $variant($ty), )+
        }

        impl Event {
            /// Discriminator of the wrapped payload.
            #[must_use]
            pub const fn payload_type(&self) -> PayloadType {
                match self {
                    $( Self::$variant(_) => PayloadType::$payload_type, )+
                }
            }

            /// Rust type name of the wrapped payload struct.
            #[must_use]
            pub fn type_name(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => ::std::any::type_name::<$ty>(), )+
                }
            }

            #[must_use]
            pub fn sender(&self) -> &User {
                match self {
                    $( Self::$variant(event) => UserTriggered::sender(event), )+
                }
            }

            #[must_use]
            pub fn repository(&self) -> Option<&Repository> {
                match self {
                    $( Self::$variant(event) => TypedEvent::scoped_repository(event), )+
                }
            }
        }

        $(
            impl From<$ty> for Event {
                fn from(event: $ty) -> Self {
                    Self::$variant(event)
                }
            }

            impl TypedEvent for $ty {
                const PAYLOAD_TYPE: PayloadType = PayloadType::$payload_type;

                fn scoped_repository(&self) -> Option<&Repository> {
                    scoped_repository!(self, $scope)
                }

                fn from_event(event: Event) -> Result<Self, Event> {
                    match event {
                        Event::$variant(inner) => Ok(inner),
                        other => Err(other),
                    }
                }

                fn from_event_ref(event: &Event) -> Option<&Self> {
                    match event {
                        Event::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )+
    };
}

events! {
    CommitComment(CommitCommentEvent) => CommitComment, repository: required;
    Create(CreateEvent) => Create, repository: required;
    Delete(DeleteEvent) => Delete, repository: required;
    Deployment(DeploymentEvent) => Deployment, repository: required;
    DeploymentStatus(DeploymentStatusEvent) => DeploymentStatus, repository: required;
    Fork(ForkEvent) => Fork, repository: required;
    Gollum(GollumEvent) => Gollum, repository: required;
    IssueComment(IssueCommentEvent) => IssueComment, repository: required;
    Issues(IssuesEvent) => Issues, repository: required;
    Label(LabelEvent) => Label, repository: required;
    Member(MemberEvent) => Member, repository: required;
    Membership(MembershipEvent) => Membership, repository: none;
    Milestone(MilestoneEvent) => Milestone, repository: required;
    Organization(OrganizationEvent) => Organization, repository: none;
    OrganizationBlock(OrganizationBlockEvent) => OrganizationBlock, repository: none;
    PageBuild(PageBuildEvent) => PageBuild, repository: required;
    Public(PublicEvent) => Public, repository: required;
    PullRequestReviewComment(PullRequestReviewCommentEvent) => PullRequestReviewComment, repository: required;
    PullRequestReview(PullRequestReviewEvent) => PullRequestReview, repository: required;
    PullRequest(PullRequestEvent) => PullRequest, repository: required;
    Push(PushEvent) => Push, repository: required;
    Repository(RepositoryEvent) => Repository, repository: required;
    Release(ReleaseEvent) => Release, repository: required;
    Team(TeamEvent) => Team, repository: optional;
    TeamAdd(TeamAddEvent) => TeamAdd, repository: required;
    Watch(WatchEvent) => Watch, repository: required;
}
