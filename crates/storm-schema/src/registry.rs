//! Discriminator registry for every stormdrain event type.
//!
//! The `PayloadRegistry` binds each [`PayloadType`] to its event struct at
//! construction time: the struct's JSON Schema (via [`schemars::schema_for!`])
//! and a decoder that produces the matching [`Event`] variant. The binding is
//! never mutated afterwards, so a built registry can be shared freely between
//! threads.

use std::any::type_name;
use std::collections::HashMap;
use std::io::Read;
use std::sync::LazyLock;

use schemars::schema_for;
use storm_core::events::{
    CommitCommentEvent, CreateEvent, DeleteEvent, DeploymentEvent, DeploymentStatusEvent,
    ForkEvent, GollumEvent, IssueCommentEvent, IssuesEvent, LabelEvent, MemberEvent,
    MembershipEvent, MilestoneEvent, OrganizationBlockEvent, OrganizationEvent, PageBuildEvent,
    PublicEvent, PullRequestEvent, PullRequestReviewCommentEvent, PullRequestReviewEvent,
    PushEvent, ReleaseEvent, RepositoryEvent, TeamAddEvent, TeamEvent, WatchEvent,
};
use storm_core::{Event, PayloadType, TypedEvent};
use tracing::{debug, warn};

use crate::error::DecodeError;

/// Largest delivery body the upstream sender emits (25 MiB).
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 25 * 1024 * 1024;

static GLOBAL: LazyLock<PayloadRegistry> = LazyLock::new(PayloadRegistry::new);

/// Bounds applied to every input before it is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    pub max_payload_bytes: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
        }
    }
}

type DecodeFn = fn(&[u8]) -> serde_json::Result<Event>;

/// One tag's binding: the event type it names, that type's schema, and its
/// decoder.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    payload_type: PayloadType,
    type_name: &'static str,
    schema: serde_json::Value,
    decode: DecodeFn,
}

fn decode_into<E: TypedEvent>(input: &[u8]) -> serde_json::Result<Event> {
    serde_json::from_slice::<E>(input).map(Into::into)
}

impl RegistryEntry {
    fn of<E: TypedEvent>() -> Self {
        Self {
            payload_type: E::PAYLOAD_TYPE,
            type_name: type_name::<E>(),
            schema: schema_for!(E).to_value(),
            decode: decode_into::<E>,
        }
    }

    #[must_use]
    pub const fn payload_type(&self) -> PayloadType {
        self.payload_type
    }

    /// Rust type name of the bound event struct, comparable with
    /// [`Event::type_name`].
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[must_use]
    pub const fn schema(&self) -> &serde_json::Value {
        &self.schema
    }
}

/// Closed mapping from discriminator tag to event schema and decoder.
///
/// Unknown fields in a body are ignored, enum values match
/// case-insensitively, and a missing required field fails the decode.
#[derive(Debug, Clone)]
pub struct PayloadRegistry {
    entries: HashMap<PayloadType, RegistryEntry>,
    limits: DecodeLimits,
}

/// Bind each event type to the tag it declares.
macro_rules! register {
    ($map:expr, $($ty:ty),+ $(,)?) => {
        $( $map.insert(<$ty as TypedEvent>::PAYLOAD_TYPE, RegistryEntry::of::<$ty>()); )+
    };
}

impl PayloadRegistry {
    /// Build a registry over every event type with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(DecodeLimits::default())
    }

    #[must_use]
    pub fn with_limits(limits: DecodeLimits) -> Self {
        let mut entries = HashMap::with_capacity(PayloadType::ALL.len());

        register!(
            entries,
            CommitCommentEvent,
            CreateEvent,
            DeleteEvent,
            DeploymentEvent,
            DeploymentStatusEvent,
            ForkEvent,
            GollumEvent,
            IssueCommentEvent,
            IssuesEvent,
            LabelEvent,
            MemberEvent,
            MembershipEvent,
            MilestoneEvent,
            OrganizationEvent,
            OrganizationBlockEvent,
            PageBuildEvent,
            PublicEvent,
            PullRequestReviewCommentEvent,
            PullRequestReviewEvent,
            PullRequestEvent,
            PushEvent,
            RepositoryEvent,
            ReleaseEvent,
            TeamEvent,
            TeamAddEvent,
            WatchEvent,
        );

        Self { entries, limits }
    }

    /// Process-wide registry with default limits, built on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    #[must_use]
    pub const fn limits(&self) -> DecodeLimits {
        self.limits
    }

    #[must_use]
    pub fn entry(&self, payload_type: PayloadType) -> Option<&RegistryEntry> {
        self.entries.get(&payload_type)
    }

    /// Resolve a raw tag, as read from transport metadata.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::UnknownDiscriminator` if the tag is not in the
    /// tag set, or `DecodeError::NotRegistered` if this registry has no entry
    /// for it.
    pub fn lookup(&self, tag: &str) -> Result<&RegistryEntry, DecodeError> {
        let Some(payload_type) = PayloadType::from_wire(tag.trim()) else {
            warn!(tag, "unknown payload type");
            return Err(DecodeError::UnknownDiscriminator(tag.to_string()));
        };
        self.entry(payload_type)
            .ok_or(DecodeError::NotRegistered(payload_type))
    }

    /// Decode a text body against the schema bound to `tag`.
    ///
    /// # Errors
    ///
    /// Fails on an unknown tag, an oversized or malformed body, a missing
    /// required field, an illegal enum value, or an entity invariant
    /// violation. Nothing is returned partially filled.
    pub fn decode(&self, tag: &str, input: &str) -> Result<Event, DecodeError> {
        self.decode_slice(tag, input.as_bytes())
    }

    /// Decode a byte body against the schema bound to `tag`.
    ///
    /// # Errors
    ///
    /// See [`PayloadRegistry::decode`].
    pub fn decode_slice(&self, tag: &str, input: &[u8]) -> Result<Event, DecodeError> {
        let entry = self.lookup(tag)?;
        self.decode_entry(entry, input)
    }

    /// Read a body to its end, then decode it against the schema bound to `tag`.
    ///
    /// At most one byte past the limit is read; a larger body reports that
    /// many bytes in `DecodeError::PayloadTooLarge`.
    ///
    /// # Errors
    ///
    /// See [`PayloadRegistry::decode`]; read failures surface as
    /// `DecodeError::Io`.
    pub fn decode_reader<R: Read>(&self, tag: &str, reader: R) -> Result<Event, DecodeError> {
        let entry = self.lookup(tag)?;
        let cap = u64::try_from(self.limits.max_payload_bytes)
            .unwrap_or(u64::MAX)
            .saturating_add(1);
        let mut input = Vec::new();
        reader.take(cap).read_to_end(&mut input)?;
        self.decode_entry(entry, &input)
    }

    /// Decode straight into the event struct bound to `E::PAYLOAD_TYPE`.
    ///
    /// # Errors
    ///
    /// See [`PayloadRegistry::decode`].
    pub fn decode_as<E: TypedEvent>(&self, input: &[u8]) -> Result<E, DecodeError> {
        let entry = self
            .entry(E::PAYLOAD_TYPE)
            .ok_or(DecodeError::NotRegistered(E::PAYLOAD_TYPE))?;
        let event = self.decode_entry(entry, input)?;
        E::from_event(event).map_err(|other| DecodeError::SchemaMismatch {
            payload_type: E::PAYLOAD_TYPE,
            expected: type_name::<E>(),
            actual: other.type_name(),
        })
    }

    /// Check that `event` is the type registered for `payload_type`.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::SchemaMismatch` when it is not, or
    /// `DecodeError::NotRegistered` if the tag has no entry.
    pub fn ensure_matches(
        &self,
        payload_type: PayloadType,
        event: &Event,
    ) -> Result<(), DecodeError> {
        let entry = self
            .entry(payload_type)
            .ok_or(DecodeError::NotRegistered(payload_type))?;
        if entry.type_name == event.type_name() {
            Ok(())
        } else {
            Err(DecodeError::SchemaMismatch {
                payload_type,
                expected: entry.type_name,
                actual: event.type_name(),
            })
        }
    }

    /// JSON Schema of the event type bound to `tag`.
    ///
    /// # Errors
    ///
    /// See [`PayloadRegistry::lookup`].
    pub fn schema(&self, tag: &str) -> Result<&serde_json::Value, DecodeError> {
        self.lookup(tag).map(RegistryEntry::schema)
    }

    /// Validate a JSON value against the schema bound to `tag`.
    ///
    /// Schemas describe the normalized shape events serialize to, so this
    /// accepts re-serialized events rather than raw deliveries.
    ///
    /// # Errors
    ///
    /// Returns a lookup error for an unknown tag, or
    /// `DecodeError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, tag: &str, instance: &serde_json::Value) -> Result<(), DecodeError> {
        let schema = self.schema(tag)?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| DecodeError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DecodeError::ValidationFailed { errors })
        }
    }

    /// All registered tags, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> =
            self.entries.keys().map(|payload_type| payload_type.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Entries in tag declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        PayloadType::ALL
            .iter()
            .filter_map(|payload_type| self.entries.get(payload_type))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn decode_entry(&self, entry: &RegistryEntry, input: &[u8]) -> Result<Event, DecodeError> {
        let max = self.limits.max_payload_bytes;
        if input.len() > max {
            return Err(DecodeError::PayloadTooLarge {
                size: input.len(),
                max,
            });
        }

        debug!(payload_type = %entry.payload_type, bytes = input.len(), "decoding payload");
        (entry.decode)(input).map_err(|error| {
            let error = DecodeError::from(error);
            debug!(payload_type = %entry.payload_type, %error, "payload failed to decode");
            error
        })
    }
}

impl Default for PayloadRegistry {
    fn default() -> Self {
        Self::new()
    }
}
