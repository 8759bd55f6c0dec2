use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::enums::ReviewState;
use crate::errors::CoreError;
use crate::normalize::de;

/// A pull request review.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct Review {
    id: String,
    state: ReviewState,
    body: Option<String>,
    submitted_at: DateTime<Utc>,
    html_url: Url,
}

#[derive(Deserialize)]
struct RawReview {
    #[serde(deserialize_with = "de::id")]
    id: String,
    state: ReviewState,
    #[serde(default, deserialize_with = "de::optional_string")]
    body: Option<String>,
    #[serde(deserialize_with = "de::timestamp")]
    submitted_at: DateTime<Utc>,
    html_url: Url,
}

deserialize_via!(Review, RawReview);
impl_resource!(Review);
impl_browser_accessible!(Review);

impl Review {
    #[must_use]
    pub const fn state(&self) -> ReviewState {
        self.state
    }

    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    #[must_use]
    pub const fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    #[allow(clippy::unnecessary_wraps)]
    fn from_raw(raw: RawReview) -> Result<Self, CoreError> {
        Ok(Self {
            id: raw.id,
            state: raw.state,
            body: raw.body,
            submitted_at: raw.submitted_at,
            html_url: raw.html_url,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn review_json() -> serde_json::Value {
        json!({
            "id": 2_626_884,
            "user": crate::entities::issue::tests::user_json(),
            "body": "Looks great!",
            "submitted_at": "2016-10-03T23:39:09Z",
            "state": "APPROVED",
            "html_url": "https://github.com/baxterthehacker/public-repo/pull/8#pullrequestreview-2626884"
        })
    }

    #[test]
    fn upstream_uppercase_state_decodes() {
        let review: Review = serde_json::from_value(review_json()).unwrap();
        assert_eq!(review.state(), ReviewState::Approved);
        assert_eq!(review.body(), Some("Looks great!"));
    }

    #[test]
    fn missing_submission_time_fails() {
        let mut value = review_json();
        value.as_object_mut().unwrap().remove("submitted_at");
        assert!(serde_json::from_value::<Review>(value).is_err());
    }
}
