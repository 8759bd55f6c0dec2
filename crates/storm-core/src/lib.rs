//! # storm-core
//!
//! Typed GitHub webhook payloads for stormdrain.
//!
//! This crate provides the value types every other stormdrain crate works with:
//! - Normalization rules applied while decoding (blank strings, echoed
//!   timestamps, number-or-string ids)
//! - Closed wire enums for states and event actions
//! - Entity structs (owners, repositories, issues, commits, comments, ...)
//! - One event struct per discriminator and the [`Event`](events::Event) sum type
//! - The [`PayloadType`](payload_type::PayloadType) discriminator set
//!
//! Every value is immutable after decoding and compares structurally.

#[macro_use]
mod macros;

pub mod entities;
pub mod enums;
pub mod errors;
pub mod events;
pub mod normalize;
pub mod payload_type;

pub use errors::CoreError;
pub use events::{Event, TypedEvent};
pub use payload_type::PayloadType;
