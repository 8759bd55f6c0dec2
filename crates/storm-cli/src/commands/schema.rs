use storm_schema::PayloadRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `stormdrain schema`.
pub fn handle(
    args: &SchemaArgs,
    registry: &PayloadRegistry,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let schema = registry.schema(&args.payload_type)?;
    output(schema, flags.format)
}
