use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::User;
use crate::enums::{MembershipRole, TeamPermission};
use crate::errors::CoreError;
use crate::normalize::de;

/// A team within an organization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct Team {
    id: String,
    name: String,
    slug: String,
    /// Default permission on the team's repositories.
    permission: TeamPermission,
}

#[derive(Deserialize)]
struct RawTeam {
    #[serde(deserialize_with = "de::id")]
    id: String,
    name: String,
    slug: String,
    permission: TeamPermission,
}

deserialize_via!(Team, RawTeam);
impl_resource!(Team);

impl Team {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[must_use]
    pub const fn permission(&self) -> TeamPermission {
        self.permission
    }

    #[allow(clippy::unnecessary_wraps)]
    fn from_raw(raw: RawTeam) -> Result<Self, CoreError> {
        Ok(Self {
            id: raw.id,
            name: raw.name,
            slug: raw.slug,
            permission: raw.permission,
        })
    }
}

/// A user's role within a team or organization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Membership {
    role: MembershipRole,
    user: User,
}

impl Membership {
    #[must_use]
    pub const fn new(role: MembershipRole, user: User) -> Self {
        Self { role, user }
    }

    #[must_use]
    pub const fn role(&self) -> MembershipRole {
        self.role
    }

    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::entities::issue::tests::user_json;
    use crate::entities::Resource;
    use serde_json::json;

    pub(crate) fn team_json() -> serde_json::Value {
        json!({
            "name": "github",
            "id": 836_012,
            "slug": "github",
            "description": "",
            "permission": "pull",
            "url": "https://api.github.com/teams/836012",
            "members_url": "https://api.github.com/teams/836012/members{/member}",
            "repositories_url": "https://api.github.com/teams/836012/repos"
        })
    }

    #[test]
    fn decodes_team() {
        let team: Team = serde_json::from_value(team_json()).unwrap();
        assert_eq!(team.id(), "836012");
        assert_eq!(team.permission(), TeamPermission::Pull);
    }

    #[test]
    fn decodes_organization_membership() {
        let membership: Membership = serde_json::from_value(json!({
            "url": "https://api.github.com/orgs/baxterandthehackers/memberships/baxterandthehackers",
            "state": "active",
            "role": "admin",
            "organization_url": "https://api.github.com/orgs/baxterandthehackers",
            "user": user_json()
        }))
        .unwrap();
        assert_eq!(membership.role(), MembershipRole::Admin);
        assert_eq!(membership.user().login(), "baxterthehacker");
    }

    #[test]
    fn unknown_permission_fails() {
        let mut value = team_json();
        value["permission"] = json!("triage-ish");
        assert!(serde_json::from_value::<Team>(value).is_err());
    }
}
