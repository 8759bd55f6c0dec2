//! # storm-schema
//!
//! Discriminator registry, JSON Schema export, and delivery envelopes for stormdrain.
//!
//! This crate provides:
//! - `PayloadRegistry`: the closed mapping from a discriminator tag to the
//!   event type it names, its JSON Schema, and its decoder
//! - `DecodeError`: every way a delivery can fail to decode, with a coarse
//!   [`DecodeErrorKind`] for callers that branch on the category
//! - `Envelope`: delivery identifier + discriminator + decoded event, checked
//!   for consistency on construction
//!
//! ## Architecture
//!
//! Event types are defined in `storm-core` with `#[derive(JsonSchema)]`.
//! This crate binds each of them to its tag once, at registry construction,
//! and never mutates the binding afterwards. Consumers (the `stormdrain`
//! binary, webhook receivers) decode through the registry.

pub mod envelope;
pub mod error;
pub mod registry;

pub use envelope::Envelope;
pub use error::{DecodeError, DecodeErrorKind};
pub use registry::{DecodeLimits, PayloadRegistry, RegistryEntry};
