//! Slurm topology rendering
//!
//! Each switch becomes one line:
//!
//! ```text
//! SwitchName=Switch1 Nodes=node[001-003] Switches=Switch3 # Free ports: 2,	blocking-factor: 3:1
//! ```
//!
//! Comments are aligned to a common column computed over all lines.

use tracing::warn;

use crate::metrics::FabricMetrics;
use crate::topology::{Switch, Topology};

pub const DEFAULT_PREFIX: &str = "Switch";

/// Options for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix of generated switch names (default: Switch)
    pub prefix: String,
    /// Leave out `Switches=`
    pub nodes_only: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            nodes_only: false,
        }
    }
}

/// Everything rendered for one switch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchRecord {
    pub name: String,
    /// Compressed host names
    pub nodes: String,
    /// Compressed neighbour switch names, unless nodes-only
    pub switches: Option<String>,
    pub metrics: FabricMetrics,
}

impl SwitchRecord {
    /// `SwitchName=... Nodes=... [Switches=...]`
    pub fn fields(&self) -> String {
        let mut out = format!("SwitchName={} Nodes={}", self.name, self.nodes);
        if let Some(switches) = &self.switches {
            out.push_str(" Switches=");
            out.push_str(switches);
        }
        out
    }

    pub fn comment(&self) -> String {
        format!(
            "# Free ports: {},\tblocking-factor: {}",
            self.metrics.free_ports, self.metrics.blocking_factor
        )
    }
}

/// Builds one record per switch, in discovery order.
///
/// Switches are named `<prefix><n>` with `n` the 1-based discovery position.
pub fn records(topology: &Topology, options: &RenderOptions) -> Vec<SwitchRecord> {
    topology
        .iter()
        .enumerate()
        .map(|(i, switch)| SwitchRecord {
            name: switch_name(&options.prefix, i + 1),
            nodes: hostlist::collect(switch.hosts().values().map(|h| h.name.as_str())),
            switches: (!options.nodes_only).then(|| neighbours(topology, switch, &options.prefix)),
            metrics: FabricMetrics::of(switch),
        })
        .collect()
}

/// Renders the topology as aligned lines, one per switch
pub fn render(topology: &Topology, options: &RenderOptions) -> Vec<String> {
    let records = records(topology, options);
    let fields: Vec<String> = records.iter().map(SwitchRecord::fields).collect();
    let width = fields.iter().map(|f| f.chars().count()).max().unwrap_or(0);

    fields
        .iter()
        .zip(&records)
        .map(|(fields, record)| format!("{:<width$} {}", fields, record.comment()))
        .collect()
}

fn switch_name(prefix: &str, index: usize) -> String {
    format!("{prefix}{index}")
}

fn neighbours(topology: &Topology, switch: &Switch, prefix: &str) -> String {
    let names: Vec<String> = switch
        .switches()
        .keys()
        .filter_map(|guid| match topology.index_of(guid) {
            Some(index) => Some(switch_name(prefix, index)),
            None => {
                warn!(
                    switch = switch.guid(),
                    peer = %guid,
                    "linked switch has no header in the report, leaving it out"
                );
                None
            }
        })
        .collect();
    hostlist::collect(names)
}
