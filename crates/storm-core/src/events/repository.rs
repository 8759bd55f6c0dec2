use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{GollumPage, Organization, PageBuild, Release, Repository, User};
use crate::enums::{MemberAction, ReleaseAction, RepositoryAction, WatchAction};

/// A repository was forked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct ForkEvent {
    /// The newly created fork.
    forkee: Repository,
    /// The repository that was forked.
    repository: Repository,
    sender: User,
}

impl ForkEvent {
    #[must_use]
    pub const fn forkee(&self) -> &Repository {
        &self.forkee
    }
}

/// One or more wiki pages were created or edited.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct GollumEvent {
    pages: Vec<GollumPage>,
    repository: Repository,
    sender: User,
}

impl GollumEvent {
    #[must_use]
    pub fn pages(&self) -> &[GollumPage] {
        &self.pages
    }
}

/// A collaborator was added to, removed from, or changed on a repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct MemberEvent {
    action: MemberAction,
    member: User,
    repository: Repository,
    sender: User,
}

impl MemberEvent {
    #[must_use]
    pub const fn action(&self) -> MemberAction {
        self.action
    }

    #[must_use]
    pub const fn member(&self) -> &User {
        &self.member
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct PageBuildEvent {
    build: PageBuild,
    repository: Repository,
    sender: User,
}

impl PageBuildEvent {
    #[must_use]
    pub const fn build(&self) -> &PageBuild {
        &self.build
    }
}

/// A private repository was made public.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct PublicEvent {
    repository: Repository,
    sender: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct ReleaseEvent {
    #[serde(default)]
    action: Option<ReleaseAction>,
    release: Release,
    repository: Repository,
    sender: User,
}

impl ReleaseEvent {
    #[must_use]
    pub const fn action(&self) -> Option<ReleaseAction> {
        self.action
    }

    #[must_use]
    pub const fn release(&self) -> &Release {
        &self.release
    }
}

/// A repository was created, deleted, archived, or had its visibility changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct RepositoryEvent {
    action: RepositoryAction,
    repository: Repository,
    /// Present when the repository belongs to an organization.
    #[serde(default)]
    organization: Option<Organization>,
    sender: User,
}

impl RepositoryEvent {
    #[must_use]
    pub const fn action(&self) -> RepositoryAction {
        self.action
    }

    #[must_use]
    pub const fn organization(&self) -> Option<&Organization> {
        self.organization.as_ref()
    }
}

/// A repository was starred.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct WatchEvent {
    action: WatchAction,
    repository: Repository,
    sender: User,
}

impl WatchEvent {
    #[must_use]
    pub const fn action(&self) -> WatchAction {
        self.action
    }
}

impl_user_triggered!(
    ForkEvent,
    GollumEvent,
    MemberEvent,
    PageBuildEvent,
    PublicEvent,
    ReleaseEvent,
    RepositoryEvent,
    WatchEvent,
);
impl_repository_scoped!(
    ForkEvent,
    GollumEvent,
    MemberEvent,
    PageBuildEvent,
    PublicEvent,
    ReleaseEvent,
    RepositoryEvent,
    WatchEvent,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::fixtures::{
        gollum_page_json, page_build_json, release_json, repository_json, user_json,
    };
    use crate::enums::{GollumAction, PageBuildStatus};
    use crate::events::tests::{organization_json, repository_event};
    use crate::events::RepositoryScoped;
    use serde_json::json;

    #[test]
    fn decodes_fork() {
        let mut forkee = repository_json();
        forkee["full_name"] = json!("baxterandthehackers/public-repo");
        forkee["fork"] = json!(true);
        let event: ForkEvent =
            serde_json::from_value(repository_event(json!({"forkee": forkee}))).unwrap();
        assert!(event.forkee().is_fork());
        assert!(!event.repository().is_fork());
    }

    #[test]
    fn decodes_gollum_pages() {
        let event: GollumEvent =
            serde_json::from_value(repository_event(json!({"pages": [gollum_page_json()]})))
                .unwrap();
        assert_eq!(event.pages().len(), 1);
        assert_eq!(event.pages()[0].action(), GollumAction::Created);
    }

    #[test]
    fn decodes_member_and_page_build() {
        let member: MemberEvent = serde_json::from_value(repository_event(json!({
            "action": "added",
            "member": user_json()
        })))
        .unwrap();
        assert_eq!(member.action(), MemberAction::Added);

        let build: PageBuildEvent = serde_json::from_value(repository_event(json!({
            "id": 15_995_382,
            "build": page_build_json()
        })))
        .unwrap();
        assert_eq!(build.build().status(), PageBuildStatus::Built);
    }

    #[test]
    fn release_action_is_optional() {
        let without: ReleaseEvent =
            serde_json::from_value(repository_event(json!({"release": release_json()}))).unwrap();
        assert_eq!(without.action(), None);

        let with: ReleaseEvent = serde_json::from_value(repository_event(json!({
            "action": "published",
            "release": release_json()
        })))
        .unwrap();
        assert_eq!(with.action(), Some(ReleaseAction::Published));
    }

    #[test]
    fn repository_event_organization_is_optional() {
        let personal: RepositoryEvent =
            serde_json::from_value(repository_event(json!({"action": "created"}))).unwrap();
        assert!(personal.organization().is_none());

        let owned: RepositoryEvent = serde_json::from_value(repository_event(json!({
            "action": "privatized",
            "organization": organization_json()
        })))
        .unwrap();
        assert_eq!(owned.action(), RepositoryAction::Privatized);
        assert_eq!(owned.organization().map(|o| o.login()), Some("baxterandthehackers"));
    }

    #[test]
    fn watch_rejects_other_actions() {
        let result =
            serde_json::from_value::<WatchEvent>(repository_event(json!({"action": "stopped"})));
        assert!(result.is_err());
    }
}
