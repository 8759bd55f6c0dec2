use serde::Serialize;
use storm_schema::PayloadRegistry;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ListedPayloadType {
    payload_type: &'static str,
    event: &'static str,
}

/// Handle `stormdrain list`.
pub fn handle(registry: &PayloadRegistry, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&listing(registry), flags.format)
}

fn listing(registry: &PayloadRegistry) -> Vec<ListedPayloadType> {
    let mut listed: Vec<ListedPayloadType> = registry
        .entries()
        .map(|entry| ListedPayloadType {
            payload_type: entry.payload_type().as_str(),
            event: short_type_name(entry.type_name()),
        })
        .collect();
    listed.sort_unstable_by_key(|item| item.payload_type);
    listed
}

fn short_type_name(type_name: &'static str) -> &'static str {
    type_name.rsplit("::").next().unwrap_or(type_name)
}
