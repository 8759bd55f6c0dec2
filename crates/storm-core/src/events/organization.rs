use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Invitation, Membership, Organization, Repository, Team, User};
use crate::enums::{MembershipAction, OrganizationAction, OrganizationBlockAction, TeamAction};

/// A user was invited to, added to, or removed from an organization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct OrganizationEvent {
    action: OrganizationAction,
    invitation: Invitation,
    #[serde(default)]
    membership: Option<Membership>,
    organization: Organization,
    sender: User,
}

impl OrganizationEvent {
    #[must_use]
    pub const fn action(&self) -> OrganizationAction {
        self.action
    }

    #[must_use]
    pub const fn invitation(&self) -> &Invitation {
        &self.invitation
    }

    #[must_use]
    pub const fn membership(&self) -> Option<&Membership> {
        self.membership.as_ref()
    }
}

/// An organization blocked or unblocked a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct OrganizationBlockEvent {
    action: OrganizationBlockAction,
    blocked_user: User,
    organization: Organization,
    sender: User,
}

impl OrganizationBlockEvent {
    #[must_use]
    pub const fn action(&self) -> OrganizationBlockAction {
        self.action
    }

    #[must_use]
    pub const fn blocked_user(&self) -> &User {
        &self.blocked_user
    }
}

/// A user was added to or removed from a team.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct MembershipEvent {
    action: MembershipAction,
    team: Team,
    member: User,
    organization: Organization,
    sender: User,
}

impl MembershipEvent {
    #[must_use]
    pub const fn action(&self) -> MembershipAction {
        self.action
    }

    #[must_use]
    pub const fn team(&self) -> &Team {
        &self.team
    }

    #[must_use]
    pub const fn member(&self) -> &User {
        &self.member
    }
}

/// A team was changed, or its access to a repository was.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct TeamEvent {
    action: TeamAction,
    team: Team,
    /// Present for `added_to_repository`/`removed_from_repository`.
    #[serde(default)]
    repository: Option<Repository>,
    organization: Organization,
    sender: User,
}

impl TeamEvent {
    #[must_use]
    pub const fn action(&self) -> TeamAction {
        self.action
    }

    #[must_use]
    pub const fn team(&self) -> &Team {
        &self.team
    }

    #[must_use]
    pub const fn repository(&self) -> Option<&Repository> {
        self.repository.as_ref()
    }
}

/// A repository was added to a team.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct TeamAddEvent {
    team: Team,
    repository: Repository,
    #[serde(default)]
    organization: Option<Organization>,
    sender: User,
}

impl TeamAddEvent {
    #[must_use]
    pub const fn team(&self) -> &Team {
        &self.team
    }

    #[must_use]
    pub const fn organization(&self) -> Option<&Organization> {
        self.organization.as_ref()
    }
}

impl_user_triggered!(
    OrganizationEvent,
    OrganizationBlockEvent,
    MembershipEvent,
    TeamEvent,
    TeamAddEvent,
);
impl_organization_scoped!(OrganizationEvent, OrganizationBlockEvent, MembershipEvent, TeamEvent);
impl_repository_scoped!(TeamAddEvent);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::fixtures::{repository_json, team_json, user_json};
    use crate::enums::{InvitationRole, MembershipRole};
    use crate::events::tests::{organization_event, repository_event};
    use crate::events::OrganizationScoped;
    use serde_json::json;

    #[test]
    fn decodes_organization_invite() {
        let event: OrganizationEvent = serde_json::from_value(organization_event(json!({
            "action": "member_invited",
            "invitation": {
                "id": 3_294_302,
                "login": "baxterthehacker",
                "email": null,
                "role": "direct_member"
            }
        })))
        .unwrap();
        assert_eq!(event.action(), OrganizationAction::MemberInvited);
        assert_eq!(event.invitation().role(), InvitationRole::DirectMember);
        assert!(event.membership().is_none());
        assert_eq!(event.organization().login(), "baxterandthehackers");
    }

    #[test]
    fn organization_event_carries_membership() {
        let event: OrganizationEvent = serde_json::from_value(organization_event(json!({
            "action": "member_added",
            "invitation": {"id": 1, "login": "baxterthehacker", "role": "admin"},
            "membership": {"state": "active", "role": "member", "user": user_json()}
        })))
        .unwrap();
        assert_eq!(event.membership().map(Membership::role), Some(MembershipRole::Member));
    }

    #[test]
    fn invitation_without_identity_fails_the_event() {
        let result = serde_json::from_value::<OrganizationEvent>(organization_event(json!({
            "action": "member_invited",
            "invitation": {"id": 1, "login": null, "email": null, "role": "admin"}
        })));
        assert!(result.is_err());
    }

    #[test]
    fn decodes_membership_event() {
        let event: MembershipEvent = serde_json::from_value(organization_event(json!({
            "action": "removed",
            "scope": "team",
            "member": user_json(),
            "team": team_json()
        })))
        .unwrap();
        assert_eq!(event.action(), MembershipAction::Removed);
        assert_eq!(event.team().slug(), "github");
    }

    #[test]
    fn team_event_without_repository() {
        let event: TeamEvent = serde_json::from_value(organization_event(json!({
            "action": "created",
            "team": team_json()
        })))
        .unwrap();
        assert!(event.repository().is_none());
        assert_eq!(event.action(), TeamAction::Created);
    }

    #[test]
    fn team_event_with_repository() {
        let event: TeamEvent = serde_json::from_value(organization_event(json!({
            "action": "added_to_repository",
            "team": team_json(),
            "repository": repository_json()
        })))
        .unwrap();
        assert!(event.repository().is_some());
    }

    #[test]
    fn decodes_team_add() {
        let event: TeamAddEvent =
            serde_json::from_value(repository_event(json!({"team": team_json()}))).unwrap();
        assert_eq!(event.team().name(), "github");
        assert!(event.organization().is_none());
    }
}
