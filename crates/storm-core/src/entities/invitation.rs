use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::InvitationRole;
use crate::errors::CoreError;
use crate::normalize::{self, de};

/// An invitation to join an organization, addressed to an account, an email
/// address, or both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct Invitation {
    id: String,
    login: Option<String>,
    email: Option<String>,
    role: InvitationRole,
}

#[derive(Deserialize)]
struct RawInvitation {
    #[serde(deserialize_with = "de::id")]
    id: String,
    #[serde(default)]
    login: Option<String>,
    #[serde(default)]
    email: Option<String>,
    role: InvitationRole,
}

deserialize_via!(Invitation, RawInvitation);
impl_resource!(Invitation);

impl Invitation {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if both `login` and `email` are
    /// absent or blank.
    pub fn new(
        id: impl Into<String>,
        login: Option<String>,
        email: Option<String>,
        role: InvitationRole,
    ) -> Result<Self, CoreError> {
        let id = id.into();
        let login = normalize::optional_string(login);
        let email = normalize::optional_string(email);
        if login.is_none() && email.is_none() {
            return Err(CoreError::validation(format!(
                "invitation {id} names neither a login nor an email"
            )));
        }
        Ok(Self {
            id,
            login,
            email,
            role,
        })
    }

    #[must_use]
    pub fn login(&self) -> Option<&str> {
        self.login.as_deref()
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub const fn role(&self) -> InvitationRole {
        self.role
    }

    fn from_raw(raw: RawInvitation) -> Result<Self, CoreError> {
        Self::new(raw.id, raw.login, raw.email, raw.role)
    }
}
