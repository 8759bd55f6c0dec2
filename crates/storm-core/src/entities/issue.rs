use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, Serializer};
use url::Url;

use super::{Milestone, Timestamps, User};
use crate::enums::IssueState;
use crate::errors::CoreError;
use crate::normalize::de;

/// An issue. Pull requests share this shape, see
/// [`PullRequest`](super::PullRequest).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct Issue {
    id: String,
    number: u64,
    title: String,
    body: Option<String>,
    user: User,
    state: IssueState,
    locked: bool,
    comments: u64,
    assignee: Option<User>,
    milestone: Option<Milestone>,
    labels: BTreeSet<Label>,
    html_url: Url,
    #[serde(flatten)]
    timestamps: Timestamps,
    closed_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct RawIssue {
    #[serde(deserialize_with = "de::id")]
    id: String,
    number: u64,
    title: String,
    #[serde(default, deserialize_with = "de::optional_string")]
    body: Option<String>,
    user: User,
    state: IssueState,
    #[serde(default)]
    locked: bool,
    #[serde(default)]
    comments: u64,
    #[serde(default)]
    assignee: Option<User>,
    #[serde(default)]
    milestone: Option<Milestone>,
    #[serde(default)]
    labels: Option<BTreeSet<Label>>,
    html_url: Url,
    #[serde(flatten)]
    timestamps: Timestamps,
    #[serde(default, deserialize_with = "de::optional_timestamp")]
    closed_at: Option<DateTime<Utc>>,
}

deserialize_via!(Issue, RawIssue);
impl_resource!(Issue);
impl_timestamped!(Issue);
impl_browser_accessible!(Issue);

impl Issue {
    /// Repository-local number shown in the UI.
    #[must_use]
    pub const fn number(&self) -> u64 {
        self.number
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The author.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    #[must_use]
    pub const fn state(&self) -> IssueState {
        self.state
    }

    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Number of comments.
    #[must_use]
    pub const fn comments(&self) -> u64 {
        self.comments
    }

    #[must_use]
    pub const fn assignee(&self) -> Option<&User> {
        self.assignee.as_ref()
    }

    #[must_use]
    pub const fn milestone(&self) -> Option<&Milestone> {
        self.milestone.as_ref()
    }

    #[must_use]
    pub const fn labels(&self) -> &BTreeSet<Label> {
        &self.labels
    }

    #[must_use]
    pub const fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.closed_at
    }

    #[allow(clippy::unnecessary_wraps)]
    fn from_raw(raw: RawIssue) -> Result<Self, CoreError> {
        Ok(Self {
            id: raw.id,
            number: raw.number,
            title: raw.title,
            body: raw.body,
            user: raw.user,
            state: raw.state,
            locked: raw.locked,
            comments: raw.comments,
            assignee: raw.assignee,
            milestone: raw.milestone,
            labels: raw.labels.unwrap_or_default(),
            html_url: raw.html_url,
            timestamps: raw.timestamps,
            closed_at: raw.closed_at,
        })
    }
}

// ---------------------------------------------------------------------------
// Label
// ---------------------------------------------------------------------------

/// A named, coloured tag attached to issues and pull requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, JsonSchema)]
pub struct Label {
    name: String,
    /// RGB colour, written as six hex digits.
    #[serde(serialize_with = "serialize_color")]
    #[schemars(with = "String")]
    color: u32,
}

#[derive(Deserialize)]
struct RawLabel {
    name: String,
    color: String,
}

deserialize_via!(Label, RawLabel);

impl Label {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidColor`] unless `color` is a hexadecimal RGB
    /// value, with or without a leading `#`.
    pub fn new(name: impl Into<String>, color: &str) -> Result<Self, CoreError> {
        let digits = color.strip_prefix('#').unwrap_or(color);
        if digits.is_empty() || digits.len() > 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CoreError::InvalidColor(color.to_owned()));
        }
        let color =
            u32::from_str_radix(digits, 16).map_err(|_| CoreError::InvalidColor(color.to_owned()))?;
        Ok(Self {
            name: name.into(),
            color,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// RGB colour as a 24-bit integer.
    #[must_use]
    pub const fn color(&self) -> u32 {
        self.color
    }

    /// RGB colour as six lowercase hex digits, without `#`.
    #[must_use]
    pub fn color_hex(&self) -> String {
        format!("{:06x}", self.color)
    }

    fn from_raw(raw: RawLabel) -> Result<Self, CoreError> {
        Self::new(raw.name, &raw.color)
    }
}

fn serialize_color<S: Serializer>(color: &u32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{color:06x}"))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::entities::Timestamped;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    pub(crate) fn user_json() -> serde_json::Value {
        json!({
            "login": "baxterthehacker",
            "id": 6_752_317,
            "avatar_url": "https://avatars.githubusercontent.com/u/6752317?v=3",
            "gravatar_id": "",
            "html_url": "https://github.com/baxterthehacker",
            "type": "User",
            "site_admin": false
        })
    }

    pub(crate) fn issue_json() -> serde_json::Value {
        json!({
            "url": "https://api.github.com/repos/baxterthehacker/public-repo/issues/2",
            "html_url": "https://github.com/baxterthehacker/public-repo/issues/2",
            "id": 73_464_126,
            "number": 2,
            "title": "Spelling error in the README file",
            "user": user_json(),
            "labels": [
                {
                    "url": "https://api.github.com/repos/baxterthehacker/public-repo/labels/bug",
                    "name": "bug",
                    "color": "fc2929"
                }
            ],
            "state": "open",
            "locked": false,
            "assignee": null,
            "milestone": null,
            "comments": 0,
            "created_at": "2015-05-05T23:40:28Z",
            "updated_at": "2015-05-05T23:40:28Z",
            "closed_at": null,
            "body": "It looks like you accidently spelled 'commit' with two 't's."
        })
    }

    #[test]
    fn decodes_sample_issue() {
        let issue: Issue = serde_json::from_value(issue_json()).unwrap();
        assert_eq!(issue.number(), 2);
        assert_eq!(issue.state(), IssueState::Open);
        assert_eq!(issue.user().login(), "baxterthehacker");
        assert_eq!(issue.labels().len(), 1);
        let label = issue.labels().iter().next().unwrap();
        assert_eq!(label.name(), "bug");
        assert_eq!(label.color(), 0x00fc_2929);
        assert_eq!(issue.updated_at(), None);
        assert_eq!(issue.closed_at(), None);
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!([]))]
    fn null_or_empty_labels_become_empty_set(#[case] labels: serde_json::Value) {
        let mut value = issue_json();
        value["labels"] = labels;
        let issue: Issue = serde_json::from_value(value).unwrap();
        assert!(issue.labels().is_empty());
    }

    #[test]
    fn missing_labels_become_empty_set() {
        let mut value = issue_json();
        value.as_object_mut().unwrap().remove("labels");
        let issue: Issue = serde_json::from_value(value).unwrap();
        assert!(issue.labels().is_empty());
    }

    #[test]
    fn blank_body_is_absent() {
        let mut value = issue_json();
        value["body"] = json!("   ");
        let issue: Issue = serde_json::from_value(value).unwrap();
        assert_eq!(issue.body(), None);
    }

    #[test]
    fn illegal_state_fails() {
        let mut value = issue_json();
        value["state"] = json!("merged");
        let err = serde_json::from_value::<Issue>(value).unwrap_err();
        assert!(err.to_string().contains("unknown variant `merged`"));
    }

    #[rstest]
    #[case("fc2929", 0x00fc_2929)]
    #[case("#FC2929", 0x00fc_2929)]
    #[case("000", 0)]
    fn label_color_parses_hex(#[case] raw: &str, #[case] expected: u32) {
        assert_eq!(Label::new("bug", raw).unwrap().color(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("red")]
    #[case("1234567")]
    fn label_color_rejects_non_hex(#[case] raw: &str) {
        assert!(matches!(Label::new("bug", raw), Err(CoreError::InvalidColor(_))));
    }

    #[test]
    fn label_serializes_color_as_hex() {
        let label = Label::new("enhancement", "84b6eb").unwrap();
        assert_eq!(
            serde_json::to_value(&label).unwrap(),
            json!({"name": "enhancement", "color": "84b6eb"})
        );
        assert_eq!(label.color_hex(), "84b6eb");
    }

    #[test]
    fn duplicate_labels_collapse() {
        let mut value = issue_json();
        value["labels"] = json!([
            {"name": "bug", "color": "fc2929"},
            {"name": "bug", "color": "FC2929"}
        ]);
        let issue: Issue = serde_json::from_value(value).unwrap();
        assert_eq!(issue.labels().len(), 1);
    }
}
