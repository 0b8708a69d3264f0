//! Switch topology built from a discovery report

use indexmap::IndexMap;
use serde::Serialize;

/// All cables between one switch and one host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostLink {
    links: u32,
    pub lid: u16,
    pub name: String,
    pub hca: Option<String>,
}

impl HostLink {
    /// Number of physical ports seen connecting the switch to this host
    pub fn links(&self) -> u32 {
        self.links
    }
}

/// All cables between two switches, as seen from one end
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitchLink {
    links: u32,
}

impl SwitchLink {
    pub fn links(&self) -> u32 {
        self.links
    }
}

/// A switch and everything plugged into it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Switch {
    #[serde(skip)]
    guid: String,
    pub name: String,
    pub lid: u16,
    pub ports: u32,
    hosts: IndexMap<String, HostLink>,
    switches: IndexMap<String, SwitchLink>,
}

impl Switch {
    pub fn new(guid: &str, name: &str, lid: u16, ports: u32) -> Self {
        Switch {
            guid: guid.to_string(),
            name: name.to_string(),
            lid,
            ports,
            hosts: IndexMap::new(),
            switches: IndexMap::new(),
        }
    }

    pub fn guid(&self) -> &str {
        &self.guid
    }

    /// Host links keyed by host GUID
    pub fn hosts(&self) -> &IndexMap<String, HostLink> {
        &self.hosts
    }

    /// Inter-switch links keyed by neighbour switch GUID
    pub fn switches(&self) -> &IndexMap<String, SwitchLink> {
        &self.switches
    }

    /// Records one cable to a host. Returns the link count afterwards.
    ///
    /// The name, adapter and LID of the first observation are kept.
    pub fn add_host_link(&mut self, guid: &str, name: &str, hca: Option<&str>, lid: u16) -> u32 {
        let link = self
            .hosts
            .entry(guid.to_string())
            .and_modify(|link| link.links += 1)
            .or_insert_with(|| HostLink {
                links: 1,
                lid,
                name: name.to_string(),
                hca: hca.map(str::to_string),
            });
        link.links
    }

    /// Records one cable to another switch. Returns the link count afterwards.
    pub fn add_switch_link(&mut self, guid: &str) -> u32 {
        let link = self
            .switches
            .entry(guid.to_string())
            .and_modify(|link| link.links += 1)
            .or_insert(SwitchLink { links: 1 });
        link.links
    }

    /// Sum of link counts over all attached hosts
    pub fn host_link_total(&self) -> u32 {
        self.hosts.values().map(HostLink::links).sum()
    }

    /// Sum of link counts over all neighbour switches
    pub fn switch_link_total(&self) -> u32 {
        self.switches.values().map(SwitchLink::links).sum()
    }
}

/// Switches keyed by GUID, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Topology {
    switches: IndexMap<String, Switch>,
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a switch unless its GUID is already known.
    ///
    /// An existing record is returned untouched, links included.
    pub fn register_switch(&mut self, guid: &str, name: &str, lid: u16, ports: u32) -> &mut Switch {
        self.switches
            .entry(guid.to_string())
            .or_insert_with(|| Switch::new(guid, name, lid, ports))
    }

    pub fn get(&self, guid: &str) -> Option<&Switch> {
        self.switches.get(guid)
    }

    pub fn get_mut(&mut self, guid: &str) -> Option<&mut Switch> {
        self.switches.get_mut(guid)
    }

    /// 1-based discovery position of a switch
    pub fn index_of(&self, guid: &str) -> Option<usize> {
        self.switches.get_index_of(guid).map(|i| i + 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Switch> {
        self.switches.values()
    }

    pub fn len(&self) -> usize {
        self.switches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.switches.is_empty()
    }
}
