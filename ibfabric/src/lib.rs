//! InfiniBand fabric topology library
//!
//! Turns the text report of `ibnetdiscover` into a typed switch topology and
//! renders it as a Slurm `topology.conf` description with free-port and
//! blocking-factor diagnostics.
//!
//! # Pipeline
//!
//! - [`LineKind`]: classifies report lines
//! - [`ReportParser`]: walks classified lines and builds a [`Topology`]
//! - [`FabricMetrics`]: free ports and blocking factor per [`Switch`]
//! - [`render`]: one aligned `SwitchName=...` line per switch
//!
//! # Example
//!
//! ```
//! use ibfabric::{parse_str, render, RenderOptions};
//!
//! let report = "\
//! Switch\t4 \"S-01\"\t\t# \"leaf\" enhanced port 0 lid 1 lmc 0
//! [1]\t\"H-0a\"[1](0b) \t\t# \"node1 HCA-1\" lid 5 4xFDR
//! ";
//! let topology = parse_str(report)?;
//! let lines = render(&topology, &RenderOptions::default());
//! assert!(lines[0].starts_with("SwitchName=Switch1 Nodes=node1 Switches="));
//! # Ok::<(), ibfabric::FabricError>(())
//! ```

mod error;
mod grammar;
mod line;
mod metrics;
mod parser;
mod render;
mod topology;

pub use error::{FabricError, FieldError, Result};
pub use grammar::{Peer, PortEntry, SwitchHeader};
pub use line::LineKind;
pub use metrics::{BlockingFactor, FabricMetrics};
pub use parser::{parse_report, parse_str, ReportParser};
pub use render::{records, render, RenderOptions, SwitchRecord};
pub use topology::{HostLink, Switch, SwitchLink, Topology};
