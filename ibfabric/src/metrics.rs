//! Free ports and blocking factor of a switch

use std::fmt;

use num::rational::Ratio;

use crate::topology::Switch;

/// Host-facing capacity per uplink, `(ports - uplinks) : uplinks`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockingFactor {
    /// Reduced to lowest terms
    Ratio(Ratio<i64>),
    /// The switch has no inter-switch links
    NoUplinks,
}

impl BlockingFactor {
    pub fn new(ports: u32, uplinks: u32) -> Self {
        if uplinks == 0 {
            return BlockingFactor::NoUplinks;
        }
        let uplinks = i64::from(uplinks);
        BlockingFactor::Ratio(Ratio::new(i64::from(ports) - uplinks, uplinks))
    }
}

impl fmt::Display for BlockingFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockingFactor::Ratio(r) => write!(f, "{}:{}", r.numer(), r.denom()),
            BlockingFactor::NoUplinks => write!(f, "n/a (no uplinks)"),
        }
    }
}

/// Port usage of one switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FabricMetrics {
    pub host_link_total: u32,
    pub switch_link_total: u32,
    /// Negative when the report shows more links than the switch has ports
    pub free_ports: i64,
    pub blocking_factor: BlockingFactor,
}

impl FabricMetrics {
    pub fn of(switch: &Switch) -> Self {
        let host_link_total = switch.host_link_total();
        let switch_link_total = switch.switch_link_total();
        let free_ports =
            i64::from(switch.ports) - i64::from(host_link_total) - i64::from(switch_link_total);

        Self {
            host_link_total,
            switch_link_total,
            free_ports,
            blocking_factor: BlockingFactor::new(switch.ports, switch_link_total),
        }
    }
}
