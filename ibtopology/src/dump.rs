//! JSON dump of the parsed topology

use ibfabric::Topology;

use crate::error::Result;

/// Pretty JSON keyed by switch GUID, in discovery order
pub fn to_json(topology: &Topology) -> Result<String> {
    Ok(serde_json::to_string_pretty(topology)?)
}
