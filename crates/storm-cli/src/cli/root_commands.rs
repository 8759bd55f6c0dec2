use std::path::PathBuf;

use clap::{Args, Subcommand};
use uuid::Uuid;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Decode one delivery body and print its envelope.
    Decode(DecodeArgs),
    /// Print the JSON Schema of an event type.
    Schema(SchemaArgs),
    /// List every payload type and the event it decodes to.
    List,
}

#[derive(Clone, Debug, Args)]
pub struct DecodeArgs {
    /// Payload type, as sent in the `X-GitHub-Event` header.
    #[arg(short, long)]
    pub event: String,

    /// Delivery identifier, as sent in the `X-GitHub-Delivery` header
    /// (random when omitted).
    #[arg(short, long)]
    pub delivery: Option<Uuid>,

    /// File holding the delivery body (stdin when omitted).
    pub file: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Payload type whose event schema to print.
    pub payload_type: String,
}
