//! Serde roundtrip and JsonSchema validation tests for entity and event types.
//!
//! Each value is decoded from a wire-shaped payload, serialized, decoded again,
//! and the serialized form is validated against the type's generated schema.

use pretty_assertions::assert_eq;
use schemars::schema_for;
use serde_json::json;
use storm_core::entities::*;
use storm_core::events::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $wire:expr) => {
        #[test]
        fn $name() {
            let val: $ty = serde_json::from_value($wire).unwrap();

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn user() -> serde_json::Value {
    json!({
        "login": "octocat",
        "id": 583_231,
        "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
        "gravatar_id": "",
        "html_url": "https://github.com/octocat",
        "type": "User",
        "site_admin": false
    })
}

fn organization() -> serde_json::Value {
    json!({
        "login": "github",
        "id": 9_919,
        "avatar_url": "https://avatars.githubusercontent.com/u/9919?v=4"
    })
}

fn repository() -> serde_json::Value {
    json!({
        "id": 1_296_269,
        "name": "Hello-World",
        "full_name": "octocat/Hello-World",
        "owner": user(),
        "private": false,
        "html_url": "https://github.com/octocat/Hello-World",
        "description": "My first repository",
        "fork": false,
        "created_at": 1_296_068_472,
        "updated_at": "2011-01-26T19:14:43Z",
        "pushed_at": 1_296_068_472,
        "git_url": "git://github.com/octocat/Hello-World.git",
        "ssh_url": "git@github.com:octocat/Hello-World.git",
        "clone_url": "https://github.com/octocat/Hello-World.git",
        "svn_url": "https://svn.github.com/octocat/Hello-World",
        "homepage": "https://github.com",
        "size": 108,
        "stargazers_count": 80,
        "watchers_count": 80,
        "language": "C",
        "has_issues": true,
        "has_downloads": true,
        "has_wiki": true,
        "has_pages": false,
        "forks_count": 9,
        "mirror_url": "",
        "open_issues_count": 0,
        "default_branch": "master"
    })
}

fn issue() -> serde_json::Value {
    json!({
        "id": 1,
        "number": 1347,
        "title": "Found a bug",
        "body": "I'm having a problem with this.",
        "user": user(),
        "state": "open",
        "locked": true,
        "comments": 0,
        "assignee": user(),
        "milestone": milestone(),
        "labels": [{"name": "bug", "color": "f29513"}],
        "html_url": "https://github.com/octocat/Hello-World/issues/1347",
        "created_at": "2011-04-22T13:33:48Z",
        "updated_at": "2011-04-22T13:33:48Z",
        "closed_at": null
    })
}

fn milestone() -> serde_json::Value {
    json!({
        "id": 1_002_604,
        "number": 1,
        "state": "open",
        "title": "v1.0",
        "description": "Tracking milestone for version 1.0",
        "creator": user(),
        "open_issues": 4,
        "closed_issues": 8,
        "html_url": "https://github.com/octocat/Hello-World/milestones/v1.0",
        "created_at": "2011-04-10T20:09:31Z",
        "updated_at": "2014-03-03T18:58:10Z",
        "closed_at": "2013-02-12T13:22:01Z",
        "due_on": "2012-10-09T23:39:01Z"
    })
}

fn pull_request() -> serde_json::Value {
    let mut value = issue();
    value["diff_url"] = json!("https://github.com/octocat/Hello-World/pull/1347.diff");
    value["patch_url"] = json!("https://github.com/octocat/Hello-World/pull/1347.patch");
    value["merge_commit_sha"] = json!("e5bd3914e2e596debea16f433f57875b5b90bcd6");
    value["merged_at"] = json!("2011-01-26T19:01:12Z");
    let reference = json!({
        "label": "octocat:new-topic",
        "ref": "new-topic",
        "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
        "user": user(),
        "repo": repository()
    });
    value["head"] = reference.clone();
    value["base"] = reference;
    value
}

fn commit() -> serde_json::Value {
    json!({
        "id": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
        "tree_id": "827efc6d56897b048c772eb4087f854f46256132",
        "distinct": true,
        "message": "Fix all the bugs",
        "timestamp": "2011-04-14T16:00:49+02:00",
        "url": "https://github.com/octocat/Hello-World/commit/6dcb09b5b57875f334f61aebed695e2e4193db5e",
        "author": {"name": "Monalisa Octocat", "email": "support@github.com", "username": "octocat"},
        "committer": {"name": "GitHub", "email": "noreply@github.com", "username": "web-flow"},
        "added": ["src/new.c"],
        "removed": [],
        "modified": ["README", "src/main.c"]
    })
}

fn comment_fields() -> serde_json::Value {
    json!({
        "id": 1,
        "body": "Great stuff",
        "user": user(),
        "html_url": "https://github.com/octocat/Hello-World/commit/6dcb09b#commitcomment-1",
        "created_at": "2011-04-14T16:00:49Z",
        "updated_at": "2011-04-14T16:00:55Z"
    })
}

fn with(mut base: serde_json::Value, fields: serde_json::Value) -> serde_json::Value {
    for (key, field) in fields.as_object().into_iter().flatten() {
        base[key] = field.clone();
    }
    base
}

// --- Entities ---

roundtrip_and_validate!(user_roundtrip, User, user());
roundtrip_and_validate!(organization_roundtrip, Organization, organization());
roundtrip_and_validate!(owner_roundtrip, ResourceOwner, with(user(), json!({"type": "Bot"})));
roundtrip_and_validate!(repository_roundtrip, Repository, repository());
roundtrip_and_validate!(issue_roundtrip, Issue, issue());
roundtrip_and_validate!(milestone_roundtrip, Milestone, milestone());
roundtrip_and_validate!(pull_request_roundtrip, PullRequest, pull_request());
roundtrip_and_validate!(commit_roundtrip, Commit, commit());

roundtrip_and_validate!(
    commit_comment_roundtrip,
    CommitComment,
    with(
        comment_fields(),
        json!({"commit_id": "6dcb09b", "path": "src/main.c", "line": 14})
    )
);

roundtrip_and_validate!(
    review_comment_roundtrip,
    ReviewComment,
    with(
        comment_fields(),
        json!({
            "path": "file1.txt",
            "diff_hunk": "@@ -16,33 +16,40 @@ public class Connection : IConnection...",
            "position": null,
            "original_position": 4,
            "commit_id": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
            "original_commit_id": "9c48853fa3dc5c1c3d6f1f1cd1f2743e72652840"
        })
    )
);

roundtrip_and_validate!(
    review_roundtrip,
    Review,
    json!({
        "id": 80,
        "state": "CHANGES_REQUESTED",
        "body": "Here is the body for the review.",
        "submitted_at": "2019-11-17T17:43:43Z",
        "html_url": "https://github.com/octocat/Hello-World/pull/12#pullrequestreview-80"
    })
);

roundtrip_and_validate!(
    deployment_status_roundtrip,
    DeploymentStatus,
    json!({
        "id": 1,
        "state": "inactive",
        "description": "Deployment finished successfully.",
        "target_url": "https://example.com/deployment/42/output",
        "created_at": "2012-07-20T01:19:13Z",
        "updated_at": "2012-07-20T01:19:13Z"
    })
);

roundtrip_and_validate!(
    release_roundtrip,
    Release,
    json!({
        "id": 1,
        "tag_name": "v1.0.0",
        "name": "v1.0.0",
        "body": "Description of the release",
        "draft": false,
        "prerelease": true,
        "author": user(),
        "tarball_url": "https://api.github.com/repos/octocat/Hello-World/tarball/v1.0.0",
        "zipball_url": "https://api.github.com/repos/octocat/Hello-World/zipball/v1.0.0",
        "html_url": "https://github.com/octocat/Hello-World/releases/v1.0.0",
        "created_at": "2013-02-27T19:35:32Z",
        "published_at": "2013-02-27T19:35:32Z",
        "assets": [{
            "id": 1,
            "state": "uploaded",
            "content_type": "application/zip",
            "name": "example.zip",
            "label": "short description",
            "uploader": user(),
            "size": 1024,
            "download_count": 42,
            "browser_download_url": "https://github.com/octocat/Hello-World/releases/download/v1.0.0/example.zip",
            "created_at": "2013-02-27T19:35:32Z",
            "updated_at": "2013-02-27T19:35:32Z"
        }]
    })
);

roundtrip_and_validate!(
    invitation_roundtrip,
    Invitation,
    json!({"id": 1, "login": null, "email": "octocat@github.com", "role": "billing_manager"})
);

roundtrip_and_validate!(
    page_build_roundtrip,
    PageBuild,
    json!({
        "status": "errored",
        "error": {"message": "Page build failed."},
        "duration": 2104,
        "commit": "351391cdcb88ffae71ec3028c91f375a8036a26b",
        "pusher": user(),
        "created_at": "2014-02-10T19:00:49Z",
        "updated_at": "2014-02-10T19:00:51Z"
    })
);

// --- Events ---

roundtrip_and_validate!(
    push_event_roundtrip,
    PushEvent,
    json!({
        "ref": "refs/heads/main",
        "before": "9c48853fa3dc5c1c3d6f1f1cd1f2743e72652840",
        "after": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
        "compare": "https://github.com/octocat/Hello-World/compare/9c48853fa3dc...6dcb09b5b578",
        "created": false,
        "deleted": false,
        "forced": true,
        "commits": [commit()],
        "head_commit": commit(),
        "pusher": {"name": "octocat", "email": "octocat@github.com"},
        "repository": repository(),
        "sender": user()
    })
);

roundtrip_and_validate!(
    team_event_roundtrip,
    TeamEvent,
    json!({
        "action": "edited",
        "team": {"id": 1, "name": "Justice League", "slug": "justice-league", "permission": "admin"},
        "organization": organization(),
        "sender": user()
    })
);

roundtrip_and_validate!(
    pull_request_event_roundtrip,
    PullRequestEvent,
    json!({
        "action": "closed",
        "number": 1347,
        "pull_request": pull_request(),
        "repository": repository(),
        "sender": user()
    })
);

#[test]
fn label_colour_survives_roundtrip_as_hex() {
    let label: Label = serde_json::from_value(json!({"name": "bug", "color": "#F29513"})).unwrap();
    let out = serde_json::to_value(&label).unwrap();
    assert_eq!(out, json!({"name": "bug", "color": "f29513"}));
}

#[test]
fn serialized_values_are_normalized() {
    let repo: Repository = serde_json::from_value(repository()).unwrap();
    let out = serde_json::to_value(&repo).unwrap();
    assert_eq!(out["id"], "1296269");
    assert_eq!(out["mirror_url"], serde_json::Value::Null);
    assert_eq!(out["created_at"], "2011-01-26T19:01:12Z");
}
