use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

use super::{Timestamps, User};
use crate::enums::MilestoneState;
use crate::errors::CoreError;
use crate::normalize::de;

/// A milestone grouping issues and pull requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct Milestone {
    id: String,
    number: u64,
    state: MilestoneState,
    title: String,
    description: Option<String>,
    creator: User,
    open_issues: u64,
    closed_issues: u64,
    html_url: Url,
    #[serde(flatten)]
    timestamps: Timestamps,
    closed_at: Option<DateTime<Utc>>,
    due_on: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct RawMilestone {
    #[serde(deserialize_with = "de::id")]
    id: String,
    number: u64,
    state: MilestoneState,
    title: String,
    #[serde(default, deserialize_with = "de::optional_string")]
    description: Option<String>,
    creator: User,
    #[serde(default)]
    open_issues: u64,
    #[serde(default)]
    closed_issues: u64,
    html_url: Url,
    #[serde(flatten)]
    timestamps: Timestamps,
    #[serde(default, deserialize_with = "de::optional_timestamp")]
    closed_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de::optional_timestamp")]
    due_on: Option<DateTime<Utc>>,
}

deserialize_via!(Milestone, RawMilestone);
impl_resource!(Milestone);
impl_timestamped!(Milestone);
impl_browser_accessible!(Milestone);

impl Milestone {
    #[must_use]
    pub const fn number(&self) -> u64 {
        self.number
    }

    #[must_use]
    pub const fn state(&self) -> MilestoneState {
        self.state
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub const fn creator(&self) -> &User {
        &self.creator
    }

    #[must_use]
    pub const fn open_issues(&self) -> u64 {
        self.open_issues
    }

    #[must_use]
    pub const fn closed_issues(&self) -> u64 {
        self.closed_issues
    }

    #[must_use]
    pub const fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.closed_at
    }

    #[must_use]
    pub const fn due_on(&self) -> Option<DateTime<Utc>> {
        self.due_on
    }

    #[allow(clippy::unnecessary_wraps)]
    fn from_raw(raw: RawMilestone) -> Result<Self, CoreError> {
        Ok(Self {
            id: raw.id,
            number: raw.number,
            state: raw.state,
            title: raw.title,
            description: raw.description,
            creator: raw.creator,
            open_issues: raw.open_issues,
            closed_issues: raw.closed_issues,
            html_url: raw.html_url,
            timestamps: raw.timestamps,
            closed_at: raw.closed_at,
            due_on: raw.due_on,
        })
    }
}
