use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

use super::{ResourceOwner, Timestamps};
use crate::errors::CoreError;
use crate::normalize::de;

/// A git repository hosted on GitHub.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct Repository {
    id: String,
    name: String,
    full_name: String,
    owner: ResourceOwner,
    description: Option<String>,
    private: bool,
    fork: bool,
    git_url: String,
    ssh_url: String,
    clone_url: String,
    svn_url: String,
    mirror_url: Option<String>,
    /// Free-form upstream value; not guaranteed to be a URL.
    homepage: Option<String>,
    default_branch: String,
    /// Size in kilobytes.
    size: u64,
    language: Option<String>,
    stargazers_count: u64,
    watchers_count: u64,
    forks_count: u64,
    open_issues_count: u64,
    has_issues: bool,
    has_downloads: bool,
    has_wiki: bool,
    has_pages: bool,
    html_url: Url,
    #[serde(flatten)]
    timestamps: Timestamps,
    pushed_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct RawRepository {
    #[serde(deserialize_with = "de::id")]
    id: String,
    name: String,
    full_name: String,
    owner: ResourceOwner,
    #[serde(default, deserialize_with = "de::optional_string")]
    description: Option<String>,
    #[serde(default, alias = "is_private")]
    private: bool,
    #[serde(default)]
    fork: bool,
    git_url: String,
    ssh_url: String,
    clone_url: String,
    svn_url: String,
    #[serde(default, deserialize_with = "de::optional_string")]
    mirror_url: Option<String>,
    #[serde(default, deserialize_with = "de::optional_string")]
    homepage: Option<String>,
    default_branch: String,
    size: u64,
    #[serde(default, deserialize_with = "de::optional_string")]
    language: Option<String>,
    stargazers_count: u64,
    watchers_count: u64,
    forks_count: u64,
    #[serde(default)]
    open_issues_count: u64,
    #[serde(default)]
    has_issues: bool,
    #[serde(default)]
    has_downloads: bool,
    #[serde(default)]
    has_wiki: bool,
    #[serde(default)]
    has_pages: bool,
    html_url: Url,
    #[serde(flatten)]
    timestamps: Timestamps,
    #[serde(default, deserialize_with = "de::optional_timestamp")]
    pushed_at: Option<DateTime<Utc>>,
}

deserialize_via!(Repository, RawRepository);
impl_resource!(Repository);
impl_timestamped!(Repository);
impl_browser_accessible!(Repository);

impl Repository {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `owner/name`.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[must_use]
    pub const fn owner(&self) -> &ResourceOwner {
        &self.owner
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub const fn is_private(&self) -> bool {
        self.private
    }

    #[must_use]
    pub const fn is_fork(&self) -> bool {
        self.fork
    }

    #[must_use]
    pub fn git_url(&self) -> &str {
        &self.git_url
    }

    #[must_use]
    pub fn ssh_url(&self) -> &str {
        &self.ssh_url
    }

    #[must_use]
    pub fn clone_url(&self) -> &str {
        &self.clone_url
    }

    #[must_use]
    pub fn svn_url(&self) -> &str {
        &self.svn_url
    }

    #[must_use]
    pub fn mirror_url(&self) -> Option<&str> {
        self.mirror_url.as_deref()
    }

    #[must_use]
    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref()
    }

    #[must_use]
    pub fn default_branch(&self) -> &str {
        &self.default_branch
    }

    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Primary language as detected upstream.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    #[must_use]
    pub const fn stargazers_count(&self) -> u64 {
        self.stargazers_count
    }

    #[must_use]
    pub const fn watchers_count(&self) -> u64 {
        self.watchers_count
    }

    #[must_use]
    pub const fn forks_count(&self) -> u64 {
        self.forks_count
    }

    #[must_use]
    pub const fn open_issues_count(&self) -> u64 {
        self.open_issues_count
    }

    #[must_use]
    pub const fn has_issues(&self) -> bool {
        self.has_issues
    }

    #[must_use]
    pub const fn has_downloads(&self) -> bool {
        self.has_downloads
    }

    #[must_use]
    pub const fn has_wiki(&self) -> bool {
        self.has_wiki
    }

    #[must_use]
    pub const fn has_pages(&self) -> bool {
        self.has_pages
    }

    #[must_use]
    pub const fn pushed_at(&self) -> Option<DateTime<Utc>> {
        self.pushed_at
    }

    #[allow(clippy::unnecessary_wraps)]
    fn from_raw(raw: RawRepository) -> Result<Self, CoreError> {
        Ok(Self {
            id: raw.id,
            name: raw.name,
            full_name: raw.full_name,
            owner: raw.owner,
            description: raw.description,
            private: raw.private,
            fork: raw.fork,
            git_url: raw.git_url,
            ssh_url: raw.ssh_url,
            clone_url: raw.clone_url,
            svn_url: raw.svn_url,
            mirror_url: raw.mirror_url,
            homepage: raw.homepage,
            default_branch: raw.default_branch,
            size: raw.size,
            language: raw.language,
            stargazers_count: raw.stargazers_count,
            watchers_count: raw.watchers_count,
            forks_count: raw.forks_count,
            open_issues_count: raw.open_issues_count,
            has_issues: raw.has_issues,
            has_downloads: raw.has_downloads,
            has_wiki: raw.has_wiki,
            has_pages: raw.has_pages,
            html_url: raw.html_url,
            timestamps: raw.timestamps,
            pushed_at: raw.pushed_at,
        })
    }
}
