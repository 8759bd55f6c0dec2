//! Declarative helpers shared by the entity, event, and enum modules.

/// Declare a closed wire enum.
///
/// Serializes as the given wire string. Deserialization matches the wire
/// string ASCII-case-insensitively, so `"OPEN"`, `"Open"`, and `"open"` all
/// decode to the same variant; anything else is an `unknown variant` error.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::schemars::JsonSchema,
        )]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            const WIRE_NAMES: &'static [&'static str] = &[$($wire),+];

            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            /// Case-insensitive lookup by wire name.
            #[must_use]
            pub fn from_wire(raw: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str().eq_ignore_ascii_case(raw))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::errors::CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_wire(s).ok_or_else(|| {
                    $crate::errors::CoreError::Validation(format!(
                        "unknown {} value '{s}'",
                        stringify!($name)
                    ))
                })
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::from_wire(&raw)
                    .ok_or_else(|| ::serde::de::Error::unknown_variant(&raw, Self::WIRE_NAMES))
            }
        }
    };
}

/// Implement `Deserialize` for a validated type by decoding its private raw
/// form first and passing it through `Self::from_raw`.
///
/// Invariant violations surface as custom decode errors carrying the
/// [`CoreError`](crate::errors::CoreError) message.
macro_rules! deserialize_via {
    ($ty:ty, $raw:ty) => {
        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <$raw as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::from_raw(raw).map_err(::serde::de::Error::custom)
            }
        }
    };
}

/// Implement [`Resource`](crate::entities::Resource) over an `id: String` field.
macro_rules! impl_resource {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::entities::Resource for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )+
    };
}

/// Implement [`Timestamped`](crate::entities::Timestamped) over a
/// `timestamps: Timestamps` field.
macro_rules! impl_timestamped {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::entities::Timestamped for $ty {
                fn created_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                    self.timestamps.created_at()
                }

                fn updated_at(&self) -> Option<::chrono::DateTime<::chrono::Utc>> {
                    self.timestamps.updated_at()
                }
            }
        )+
    };
}

/// Implement [`BrowserAccessible`](crate::entities::BrowserAccessible) over an
/// `html_url: Url` field.
macro_rules! impl_browser_accessible {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::entities::BrowserAccessible for $ty {
                fn html_url(&self) -> &::url::Url {
                    &self.html_url
                }
            }
        )+
    };
}

/// Implement [`UserTriggered`](crate::events::UserTriggered) over a
/// `sender: User` field.
macro_rules! impl_user_triggered {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::events::UserTriggered for $ty {
                fn sender(&self) -> &$crate::entities::User {
                    &self.sender
                }
            }
        )+
    };
}

/// Implement [`RepositoryScoped`](crate::events::RepositoryScoped) over a
/// `repository: Repository` field.
macro_rules! impl_repository_scoped {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::events::RepositoryScoped for $ty {
                fn repository(&self) -> &$crate::entities::Repository {
                    &self.repository
                }
            }
        )+
    };
}

/// Implement [`OrganizationScoped`](crate::events::OrganizationScoped) over an
/// `organization: Organization` field.
macro_rules! impl_organization_scoped {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::events::OrganizationScoped for $ty {
                fn organization(&self) -> &$crate::entities::Organization {
                    &self.organization
                }
            }
        )+
    };
}
