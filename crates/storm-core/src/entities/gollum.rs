use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::enums::GollumAction;
use crate::errors::CoreError;
use crate::normalize::de;

/// A wiki page touched by a gollum event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct GollumPage {
    page_name: String,
    title: String,
    summary: Option<String>,
    action: GollumAction,
    /// Wiki commit that carries the change.
    sha: String,
    html_url: Url,
}

#[derive(Deserialize)]
struct RawGollumPage {
    page_name: String,
    title: String,
    #[serde(default, deserialize_with = "de::optional_string")]
    summary: Option<String>,
    action: GollumAction,
    sha: String,
    html_url: Url,
}

deserialize_via!(GollumPage, RawGollumPage);
impl_browser_accessible!(GollumPage);

impl GollumPage {
    #[must_use]
    pub fn page_name(&self) -> &str {
        &self.page_name
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    #[must_use]
    pub const fn action(&self) -> GollumAction {
        self.action
    }

    #[must_use]
    pub fn sha(&self) -> &str {
        &self.sha
    }

    #[allow(clippy::unnecessary_wraps)]
    fn from_raw(raw: RawGollumPage) -> Result<Self, CoreError> {
        Ok(Self {
            page_name: raw.page_name,
            title: raw.title,
            summary: raw.summary,
            action: raw.action,
            sha: raw.sha,
            html_url: raw.html_url,
        })
    }
}
