use std::ops::Deref;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::enums::OwnerKind;
use crate::errors::CoreError;
use crate::normalize::{self, de};

/// An account that can own repositories: a user, an organization, or a bot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct ResourceOwner {
    id: String,
    login: String,
    #[serde(rename = "type")]
    kind: OwnerKind,
    site_admin: bool,
    html_url: Url,
    gravatar_id: Option<String>,
    avatar_url: Url,
}

#[derive(Deserialize)]
struct RawResourceOwner {
    #[serde(deserialize_with = "de::id")]
    id: String,
    login: String,
    #[serde(rename = "type")]
    kind: OwnerKind,
    #[serde(default)]
    site_admin: bool,
    #[serde(default, deserialize_with = "de::optional_url")]
    html_url: Option<Url>,
    #[serde(default, alias = "gravatarId", deserialize_with = "de::optional_string")]
    gravatar_id: Option<String>,
    avatar_url: Url,
}

deserialize_via!(ResourceOwner, RawResourceOwner);
impl_resource!(ResourceOwner, User, Organization);
impl_browser_accessible!(ResourceOwner, User, Organization);

impl ResourceOwner {
    /// Build an owner, deriving the profile URL from `login` when `html_url`
    /// is absent.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidUrl`] if a profile URL has to be derived and
    /// `login` cannot form one.
    pub fn new(
        id: impl Into<String>,
        login: impl Into<String>,
        kind: OwnerKind,
        site_admin: bool,
        html_url: Option<Url>,
        gravatar_id: Option<String>,
        avatar_url: Url,
    ) -> Result<Self, CoreError> {
        let login = login.into();
        let html_url = match html_url {
            Some(url) => url,
            None => normalize::profile_url(&login)?,
        };
        Ok(Self {
            id: id.into(),
            login,
            kind,
            site_admin,
            html_url,
            gravatar_id: normalize::optional_string(gravatar_id),
            avatar_url,
        })
    }

    #[must_use]
    pub fn login(&self) -> &str {
        &self.login
    }

    #[must_use]
    pub const fn kind(&self) -> OwnerKind {
        self.kind
    }

    #[must_use]
    pub const fn is_site_admin(&self) -> bool {
        self.site_admin
    }

    #[must_use]
    pub fn gravatar_id(&self) -> Option<&str> {
        self.gravatar_id.as_deref()
    }

    #[must_use]
    pub const fn avatar_url(&self) -> &Url {
        &self.avatar_url
    }

    fn from_raw(raw: RawResourceOwner) -> Result<Self, CoreError> {
        Self::new(
            raw.id,
            raw.login,
            raw.kind,
            raw.site_admin,
            raw.html_url,
            raw.gravatar_id,
            raw.avatar_url,
        )
    }
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// An individual account acting on GitHub. Bots decode as users too.
///
/// Unlike the generic owner, a user payload always carries its `html_url`, and
/// may omit `type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct User(ResourceOwner);

#[derive(Deserialize)]
struct RawUser {
    #[serde(deserialize_with = "de::id")]
    id: String,
    login: String,
    #[serde(rename = "type", default)]
    kind: Option<OwnerKind>,
    #[serde(default)]
    site_admin: bool,
    html_url: Url,
    #[serde(default, alias = "gravatarId", deserialize_with = "de::optional_string")]
    gravatar_id: Option<String>,
    avatar_url: Url,
}

deserialize_via!(User, RawUser);

impl User {
    #[must_use]
    pub fn into_owner(self) -> ResourceOwner {
        self.0
    }

    fn from_raw(raw: RawUser) -> Result<Self, CoreError> {
        let owner = ResourceOwner::new(
            raw.id,
            raw.login,
            raw.kind.unwrap_or(OwnerKind::User),
            raw.site_admin,
            Some(raw.html_url),
            raw.gravatar_id,
            raw.avatar_url,
        )?;
        Self::try_from(owner)
    }
}

impl TryFrom<ResourceOwner> for User {
    type Error = CoreError;

    fn try_from(owner: ResourceOwner) -> Result<Self, Self::Error> {
        if owner.kind == OwnerKind::Organization {
            return Err(CoreError::validation(format!(
                "'{}' is an organization, not a user",
                owner.login
            )));
        }
        Ok(Self(owner))
    }
}

impl Deref for User {
    type Target = ResourceOwner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Organization
// ---------------------------------------------------------------------------

/// An organization account. Never a site admin; payloads omit `html_url` and
/// `type`, so both are derived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct Organization(ResourceOwner);

#[derive(Deserialize)]
struct RawOrganization {
    #[serde(deserialize_with = "de::id")]
    id: String,
    login: String,
    #[serde(default, deserialize_with = "de::optional_url")]
    html_url: Option<Url>,
    #[serde(default, alias = "gravatarId", deserialize_with = "de::optional_string")]
    gravatar_id: Option<String>,
    avatar_url: Url,
}

deserialize_via!(Organization, RawOrganization);

impl Organization {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidUrl`] if `login` cannot form a profile URL.
    pub fn new(
        id: impl Into<String>,
        login: impl Into<String>,
        gravatar_id: Option<String>,
        avatar_url: Url,
    ) -> Result<Self, CoreError> {
        ResourceOwner::new(
            id,
            login,
            OwnerKind::Organization,
            false,
            None,
            gravatar_id,
            avatar_url,
        )
        .map(Self)
    }

    #[must_use]
    pub fn into_owner(self) -> ResourceOwner {
        self.0
    }

    fn from_raw(raw: RawOrganization) -> Result<Self, CoreError> {
        ResourceOwner::new(
            raw.id,
            raw.login,
            OwnerKind::Organization,
            false,
            raw.html_url,
            raw.gravatar_id,
            raw.avatar_url,
        )
        .map(Self)
    }
}

impl TryFrom<ResourceOwner> for Organization {
    type Error = CoreError;

    fn try_from(owner: ResourceOwner) -> Result<Self, Self::Error> {
        if owner.kind != OwnerKind::Organization {
            return Err(CoreError::validation(format!(
                "'{}' is a {}, not an organization",
                owner.login, owner.kind
            )));
        }
        if owner.site_admin {
            return Err(CoreError::validation(format!(
                "organization '{}' cannot be a site admin",
                owner.login
            )));
        }
        Ok(Self(owner))
    }
}

impl Deref for Organization {
    type Target = ResourceOwner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
