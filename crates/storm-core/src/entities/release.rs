use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

use super::{Timestamps, User};
use crate::enums::ReleaseAssetState;
use crate::errors::CoreError;
use crate::normalize::de;

/// A published release and its uploaded assets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct Release {
    id: String,
    tag_name: String,
    name: Option<String>,
    body: Option<String>,
    draft: bool,
    prerelease: bool,
    author: User,
    tarball_url: Url,
    zipball_url: Url,
    html_url: Url,
    created_at: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
    assets: Vec<ReleaseAsset>,
}

#[derive(Deserialize)]
struct RawRelease {
    #[serde(deserialize_with = "de::id")]
    id: String,
    tag_name: String,
    #[serde(default, deserialize_with = "de::optional_string")]
    name: Option<String>,
    #[serde(default, deserialize_with = "de::optional_string")]
    body: Option<String>,
    #[serde(default)]
    draft: bool,
    #[serde(default)]
    prerelease: bool,
    author: User,
    tarball_url: Url,
    zipball_url: Url,
    html_url: Url,
    #[serde(deserialize_with = "de::timestamp")]
    created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "de::optional_timestamp")]
    published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    assets: Vec<ReleaseAsset>,
}

deserialize_via!(Release, RawRelease);
impl_resource!(Release, ReleaseAsset);
impl_browser_accessible!(Release);
impl_timestamped!(ReleaseAsset);

impl Release {
    #[must_use]
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    #[must_use]
    pub const fn is_draft(&self) -> bool {
        self.draft
    }

    #[must_use]
    pub const fn is_prerelease(&self) -> bool {
        self.prerelease
    }

    #[must_use]
    pub const fn author(&self) -> &User {
        &self.author
    }

    #[must_use]
    pub const fn tarball_url(&self) -> &Url {
        &self.tarball_url
    }

    #[must_use]
    pub const fn zipball_url(&self) -> &Url {
        &self.zipball_url
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// `None` while the release is a draft.
    #[must_use]
    pub const fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }

    #[must_use]
    pub fn assets(&self) -> &[ReleaseAsset] {
        &self.assets
    }

    #[allow(clippy::unnecessary_wraps)]
    fn from_raw(raw: RawRelease) -> Result<Self, CoreError> {
        Ok(Self {
            id: raw.id,
            tag_name: raw.tag_name,
            name: raw.name,
            body: raw.body,
            draft: raw.draft,
            prerelease: raw.prerelease,
            author: raw.author,
            tarball_url: raw.tarball_url,
            zipball_url: raw.zipball_url,
            html_url: raw.html_url,
            created_at: raw.created_at,
            published_at: raw.published_at,
            assets: raw.assets,
        })
    }
}

// ---------------------------------------------------------------------------
// ReleaseAsset
// ---------------------------------------------------------------------------

/// A file attached to a release.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct ReleaseAsset {
    id: String,
    state: ReleaseAssetState,
    content_type: String,
    name: String,
    label: Option<String>,
    uploader: User,
    /// Size in bytes.
    size: u64,
    download_count: u64,
    browser_download_url: Url,
    #[serde(flatten)]
    timestamps: Timestamps,
}

#[derive(Deserialize)]
struct RawReleaseAsset {
    #[serde(deserialize_with = "de::id")]
    id: String,
    state: ReleaseAssetState,
    content_type: String,
    name: String,
    #[serde(default, deserialize_with = "de::optional_string")]
    label: Option<String>,
    uploader: User,
    #[serde(default)]
    size: u64,
    #[serde(default)]
    download_count: u64,
    browser_download_url: Url,
    #[serde(flatten)]
    timestamps: Timestamps,
}

deserialize_via!(ReleaseAsset, RawReleaseAsset);

impl crate::entities::BrowserAccessible for ReleaseAsset {
    fn html_url(&self) -> &Url {
        &self.browser_download_url
    }
}

impl ReleaseAsset {
    #[must_use]
    pub const fn state(&self) -> ReleaseAssetState {
        self.state
    }

    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub const fn uploader(&self) -> &User {
        &self.uploader
    }

    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    #[must_use]
    pub const fn download_count(&self) -> u64 {
        self.download_count
    }

    #[allow(clippy::unnecessary_wraps)]
    fn from_raw(raw: RawReleaseAsset) -> Result<Self, CoreError> {
        Ok(Self {
            id: raw.id,
            state: raw.state,
            content_type: raw.content_type,
            name: raw.name,
            label: raw.label,
            uploader: raw.uploader,
            size: raw.size,
            download_count: raw.download_count,
            browser_download_url: raw.browser_download_url,
            timestamps: raw.timestamps,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::entities::issue::tests::user_json;
    use crate::entities::{BrowserAccessible, Resource, Timestamped};
    use serde_json::json;

    pub(crate) fn release_json() -> serde_json::Value {
        json!({
            "url": "https://api.github.com/repos/baxterthehacker/public-repo/releases/1261438",
            "html_url": "https://github.com/baxterthehacker/public-repo/releases/tag/0.0.1",
            "id": 1_261_438,
            "tag_name": "0.0.1",
            "target_commitish": "master",
            "name": null,
            "draft": false,
            "author": user_json(),
            "prerelease": false,
            "created_at": "2015-05-05T23:40:12Z",
            "published_at": "2015-05-05T23:40:38Z",
            "assets": [],
            "tarball_url": "https://api.github.com/repos/baxterthehacker/public-repo/tarball/0.0.1",
            "zipball_url": "https://api.github.com/repos/baxterthehacker/public-repo/zipball/0.0.1",
            "body": null
        })
    }

    #[test]
    fn decodes_release() {
        let release: Release = serde_json::from_value(release_json()).unwrap();
        assert_eq!(release.id(), "1261438");
        assert_eq!(release.tag_name(), "0.0.1");
        assert_eq!(release.name(), None);
        assert!(release.assets().is_empty());
        assert!(release.published_at().is_some());
    }

    #[test]
    fn decodes_assets() {
        let mut value = release_json();
        value["assets"] = json!([{
            "id": 1,
            "state": "uploaded",
            "content_type": "application/zip",
            "name": "build.zip",
            "label": "",
            "uploader": user_json(),
            "size": 1024,
            "download_count": 42,
            "browser_download_url": "https://github.com/baxterthehacker/public-repo/releases/download/0.0.1/build.zip",
            "created_at": "2015-05-05T23:40:20Z",
            "updated_at": "2015-05-05T23:40:30Z"
        }]);
        let release: Release = serde_json::from_value(value).unwrap();
        let asset = &release.assets()[0];
        assert_eq!(asset.state(), ReleaseAssetState::Uploaded);
        assert_eq!(asset.label(), None);
        assert_eq!(asset.download_count(), 42);
        assert!(asset.updated_at().is_some());
        assert!(asset.html_url().as_str().ends_with("build.zip"));
    }
}
