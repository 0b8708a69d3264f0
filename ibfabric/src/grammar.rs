//! Field grammar of header and port lines
//!
//! Both line shapes carry four double quotes that cut the line into five
//! segments:
//!
//! ```text
//! Switch  36 "S-0002c902004a2f90"       # "MF0;leaf1:SX6036/U1" enhanced port 0 lid 3 lmc 0
//! [1]        "H-0002c903000a0b0c"[1](..) # "node001 HCA-1" lid 11 4xFDR
//! ^ lead      ^ guid              ^ label   ^ display       ^ trail
//! ```

use crate::error::FieldError;

const HOST_PREFIX: &str = "H-";
const SWITCH_PREFIX: &str = "S-";

/// The five quote-delimited segments of a header or port line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segments<'a> {
    lead: &'a str,
    guid: &'a str,
    display: &'a str,
    trail: &'a str,
}

impl<'a> Segments<'a> {
    fn split(line: &'a str) -> Result<Self, FieldError> {
        let parts: Vec<&str> = line.splitn(5, '"').collect();
        match parts.as_slice() {
            &[lead, guid, _label, display, trail] => Ok(Self {
                lead,
                guid,
                display,
                trail,
            }),
            _ => Err(FieldError::MissingQuotedFields(parts.len() - 1)),
        }
    }

    /// The token following `lid` in the trailing segment
    fn lid(&self) -> Result<u16, FieldError> {
        let mut tokens = self.trail.split_whitespace();
        tokens
            .by_ref()
            .find(|t| *t == "lid")
            .ok_or(FieldError::MissingLid)?;
        let raw = tokens.next().ok_or(FieldError::MissingLid)?;
        raw.parse()
            .map_err(|_| FieldError::InvalidLid(raw.to_string()))
    }
}

/// A decoded `Switch` header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchHeader<'a> {
    pub guid: &'a str,
    pub name: &'a str,
    pub ports: u32,
    pub lid: u16,
}

impl<'a> SwitchHeader<'a> {
    pub fn parse(line: &'a str) -> Result<Self, FieldError> {
        let segments = Segments::split(line)?;
        let raw_ports = segments
            .lead
            .split_whitespace()
            .nth(1)
            .ok_or(FieldError::MissingPortCount)?;
        let ports = raw_ports
            .parse()
            .map_err(|_| FieldError::InvalidPortCount(raw_ports.to_string()))?;

        Ok(Self {
            guid: segments.guid,
            name: segments.display,
            ports,
            lid: segments.lid()?,
        })
    }
}

/// The far end of a port entry, told apart by its GUID prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Peer<'a> {
    /// `H-` GUID. The description reads `<host> <adapter>`.
    Host {
        name: &'a str,
        hca: Option<&'a str>,
    },
    /// `S-` GUID
    Switch,
    /// Any other prefix
    Unknown,
}

/// A decoded port line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortEntry<'a> {
    /// Local port number from the leading `[n]`, when it parses
    pub local_port: Option<u32>,
    pub guid: &'a str,
    pub peer: Peer<'a>,
    pub lid: u16,
}

impl<'a> PortEntry<'a> {
    pub fn parse(line: &'a str) -> Result<Self, FieldError> {
        let segments = Segments::split(line)?;
        let lid = segments.lid()?;

        let peer = if segments.guid.starts_with(HOST_PREFIX) {
            let mut tokens = segments.display.split_whitespace();
            let name = tokens.next().ok_or(FieldError::EmptyHostName)?;
            Peer::Host {
                name,
                hca: tokens.next(),
            }
        } else if segments.guid.starts_with(SWITCH_PREFIX) {
            Peer::Switch
        } else {
            Peer::Unknown
        };

        Ok(Self {
            local_port: local_port(segments.lead),
            guid: segments.guid,
            peer,
            lid,
        })
    }
}

fn local_port(lead: &str) -> Option<u32> {
    let (port, _) = lead.trim().strip_prefix('[')?.split_once(']')?;
    port.parse().ok()
}
