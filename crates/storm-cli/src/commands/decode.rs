use std::fs::File;
use std::io::{self, BufReader, Read};

use anyhow::Context;
use storm_schema::{Envelope, PayloadRegistry};
use uuid::Uuid;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DecodeArgs;
use crate::output::output;

/// Handle `stormdrain decode`.
pub fn handle(
    args: &DecodeArgs,
    registry: &PayloadRegistry,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let envelope = match &args.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open '{}'", path.display()))?;
            decode_envelope(registry, args, BufReader::new(file))
        }
        None => decode_envelope(registry, args, io::stdin().lock()),
    }
    .with_context(|| format!("failed to decode '{}' delivery", args.event))?;

    output(&envelope, flags.format)
}

fn decode_envelope<R: Read>(
    registry: &PayloadRegistry,
    args: &DecodeArgs,
    reader: R,
) -> Result<Envelope, storm_schema::DecodeError> {
    let delivery_id = args.delivery.unwrap_or_else(Uuid::new_v4);
    let event = registry.decode_reader(&args.event, reader)?;
    tracing::debug!(%delivery_id, payload_type = %event.payload_type(), "decoded delivery");
    Envelope::with_registry(registry, delivery_id, event.payload_type(), event)
}
