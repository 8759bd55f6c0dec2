//! A decoded delivery: identifier, discriminator, and event.

use serde::Serialize;
use storm_core::{Event, PayloadType, TypedEvent};
use uuid::Uuid;

use crate::error::DecodeError;
use crate::registry::PayloadRegistry;

/// One delivery after decoding.
///
/// The discriminator always names the type of the wrapped event; every
/// constructor checks this against a registry before the envelope exists.
/// Two envelopes are equal when all three parts are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Envelope {
    delivery_id: Uuid,
    payload_type: PayloadType,
    event: Event,
}

impl Envelope {
    /// Wrap an event, checking it against the global registry.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::SchemaMismatch` if `event` is not the type
    /// registered for `payload_type`.
    pub fn new(
        delivery_id: Uuid,
        payload_type: PayloadType,
        event: Event,
    ) -> Result<Self, DecodeError> {
        Self::with_registry(PayloadRegistry::global(), delivery_id, payload_type, event)
    }

    /// Wrap an event, checking it against `registry`.
    ///
    /// # Errors
    ///
    /// See [`Envelope::new`].
    pub fn with_registry(
        registry: &PayloadRegistry,
        delivery_id: Uuid,
        payload_type: PayloadType,
        event: Event,
    ) -> Result<Self, DecodeError> {
        registry.ensure_matches(payload_type, &event)?;
        Ok(Self {
            delivery_id,
            payload_type,
            event,
        })
    }

    /// Decode a delivery body and wrap it in one step.
    ///
    /// # Errors
    ///
    /// Any error from [`PayloadRegistry::decode_slice`].
    pub fn decode(
        registry: &PayloadRegistry,
        delivery_id: Uuid,
        tag: &str,
        input: &[u8],
    ) -> Result<Self, DecodeError> {
        let event = registry.decode_slice(tag, input)?;
        Ok(Self {
            delivery_id,
            payload_type: event.payload_type(),
            event,
        })
    }

    #[must_use]
    pub const fn delivery_id(&self) -> Uuid {
        self.delivery_id
    }

    #[must_use]
    pub const fn payload_type(&self) -> PayloadType {
        self.payload_type
    }

    #[must_use]
    pub const fn event(&self) -> &Event {
        &self.event
    }

    /// The event as its concrete struct, when it is one.
    #[must_use]
    pub fn event_as<E: TypedEvent>(&self) -> Option<&E> {
        E::from_event_ref(&self.event)
    }

    #[must_use]
    pub fn into_event(self) -> Event {
        self.event
    }
}
